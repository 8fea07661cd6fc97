use algovista_lib::recommend::prompt::recommend_from_prompt;

#[test]
fn test_graph_prompt() {
    let suggestions = recommend_from_prompt("graph traversal");
    assert_eq!(
        suggestions,
        vec![
            "Codeforces 510C – Fox And Names",
            "LeetCode 133 – Clone Graph",
        ]
    );
}

#[test]
fn test_dp_prompt() {
    let suggestions = recommend_from_prompt("help me with dp");
    assert_eq!(
        suggestions,
        vec![
            "LeetCode 1143 – Longest Common Subsequence",
            "AtCoder Educational DP Contest – Frog Jump",
        ]
    );
}

#[test]
fn test_tree_prompt() {
    let suggestions = recommend_from_prompt("binary tree problems");
    assert_eq!(suggestions, vec!["LeetCode 105 – Construct Binary Tree"]);
}

#[test]
fn test_unmatched_prompt_gets_default() {
    let suggestions = recommend_from_prompt("hello world");
    assert_eq!(suggestions, vec!["LeetCode 1 – Two Sum"]);
}

#[test]
fn test_all_branches_fire_independently() {
    let suggestions = recommend_from_prompt("graph dp tree");
    assert_eq!(suggestions.len(), 5);
    // No default entry when any branch matched
    assert!(!suggestions.iter().any(|s| s.contains("Two Sum")));
}

#[test]
fn test_matching_is_case_sensitive() {
    // Uppercase does not match, so the default fires
    let suggestions = recommend_from_prompt("GRAPH");
    assert_eq!(suggestions, vec!["LeetCode 1 – Two Sum"]);
}

#[test]
fn test_output_never_empty() {
    for prompt in ["", "x", "graph", "qwerty"] {
        assert!(!recommend_from_prompt(prompt).is_empty());
    }
}
