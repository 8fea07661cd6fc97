use algovista_lib::activity::DailyActivity;
use algovista_lib::error::{ValidationError, VistaError};

#[test]
fn test_error_creation() {
    let error = VistaError::new("Test error", "test_stage");
    assert_eq!(error.message, "Test error");
    assert_eq!(error.stage, "test_stage");
}

#[test]
fn test_error_with_context() {
    let error = VistaError::new("Test error", "test_stage").with_context("Additional context");
    assert!(error.context.is_some());
    assert_eq!(error.context.unwrap(), "Additional context");
}

#[test]
fn test_error_with_platform() {
    let error = VistaError::new("Test error", "sync").with_platform("leetcode");
    assert!(error.platform.is_some());
    assert_eq!(error.platform.unwrap(), "leetcode");
}

#[test]
fn test_error_display() {
    let error = VistaError::new("Test error", "test_stage")
        .with_context("context")
        .with_platform("codeforces");
    let display = format!("{}", error);
    assert!(display.contains("test_stage"));
    assert!(display.contains("Test error"));
    assert!(display.contains("codeforces"));
}

#[test]
fn test_malformed_date_is_rejected() {
    let result = DailyActivity::from_raw("07/03/2025", 1);
    assert!(matches!(result, Err(ValidationError::MalformedDate(_))));

    let result = DailyActivity::from_raw("not-a-date", 1);
    assert!(matches!(result, Err(ValidationError::MalformedDate(_))));
}

#[test]
fn test_negative_count_is_rejected() {
    let result = DailyActivity::from_raw("2025-07-03", -2);
    assert!(matches!(result, Err(ValidationError::NegativeCount(-2))));
}

#[test]
fn test_well_formed_input_passes() {
    let entry = DailyActivity::from_raw("2025-07-03", 3).unwrap();
    assert_eq!(entry.solved, 3);
    assert_eq!(entry.date.to_string(), "2025-07-03");
}

#[test]
fn test_validation_error_converts_to_vista_error() {
    let error: VistaError = ValidationError::MalformedDate("garbage".to_string()).into();
    assert_eq!(error.stage, "validation");
    assert!(error.message.contains("garbage"));
}
