use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error type for the AlgoVista codebase.
/// Library functions return Result<T, VistaError>; the command layer maps it
/// to a plain string for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VistaError {
    pub message: String,
    pub stage: String,
    pub platform: Option<String>,
    pub context: Option<String>,
    pub source: Option<String>,
}

impl VistaError {
    /// Create a new error with stage and message
    pub fn new<S: Into<String>>(message: S, stage: &'static str) -> Self {
        VistaError {
            message: message.into(),
            stage: stage.to_string(),
            platform: None,
            context: None,
            source: None,
        }
    }

    /// Tag the error with the external platform involved
    pub fn with_platform<S: Into<String>>(mut self, platform: S) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Add additional context information
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add source error information
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for VistaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)?;
        if let Some(ref platform) = self.platform {
            write!(f, " (platform: {})", platform)?;
        }
        if let Some(ref context) = self.context {
            write!(f, " (context: {})", context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for VistaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<anyhow::Error> for VistaError {
    fn from(err: anyhow::Error) -> Self {
        VistaError::new(err.to_string(), "unknown").with_source("anyhow")
    }
}

impl From<std::io::Error> for VistaError {
    fn from(err: std::io::Error) -> Self {
        VistaError::new(format!("I/O error: {}", err), "io").with_source("std::io")
    }
}

impl From<serde_json::Error> for VistaError {
    fn from(err: serde_json::Error) -> Self {
        VistaError::new(format!("JSON error: {}", err), "json_parse").with_source("serde_json")
    }
}

impl From<reqwest::Error> for VistaError {
    fn from(err: reqwest::Error) -> Self {
        VistaError::new(format!("HTTP error: {}", err), "http").with_source("reqwest")
    }
}

impl From<chrono::ParseError> for VistaError {
    fn from(err: chrono::ParseError) -> Self {
        VistaError::new(format!("Date parse error: {}", err), "date_parse").with_source("chrono")
    }
}

/// Rejection of malformed caller input before it reaches the pure
/// aggregation functions. The streak calculator is total over well-formed
/// input; these are raised at the ingestion boundary instead.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),
    #[error("negative solved count {0}")]
    NegativeCount(i64),
}

impl From<ValidationError> for VistaError {
    fn from(err: ValidationError) -> Self {
        VistaError::new(err.to_string(), "validation").with_source("input")
    }
}
