/// Canned references served when the user asks the coach in free text and
/// no tracked problem data is involved. Every matching rule fires; the
/// default applies only when nothing matched.
const GRAPH_REFS: [&str; 2] = [
    "Codeforces 510C – Fox And Names",
    "LeetCode 133 – Clone Graph",
];
const DP_REFS: [&str; 2] = [
    "LeetCode 1143 – Longest Common Subsequence",
    "AtCoder Educational DP Contest – Frog Jump",
];
const TREE_REFS: [&str; 1] = ["LeetCode 105 – Construct Binary Tree"];
const DEFAULT_REF: &str = "LeetCode 1 – Two Sum";

/// Map a free-text prompt to a list of problem references. Substring
/// matching is case-sensitive. Always returns at least one item.
pub fn recommend_from_prompt(prompt: &str) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    if prompt.contains("graph") {
        suggestions.extend(GRAPH_REFS.iter().map(|s| s.to_string()));
    }
    if prompt.contains("dp") {
        suggestions.extend(DP_REFS.iter().map(|s| s.to_string()));
    }
    if prompt.contains("tree") {
        suggestions.extend(TREE_REFS.iter().map(|s| s.to_string()));
    }

    if suggestions.is_empty() {
        suggestions.push(DEFAULT_REF.to_string());
    }

    suggestions
}

/// Canned references for a known weak topic, used when assembling the
/// coach plan. Falls back to the default reference for topics without a
/// curated list.
pub fn refs_for_topic(topic: &str) -> Vec<String> {
    match topic {
        "graphs" => GRAPH_REFS.iter().map(|s| s.to_string()).collect(),
        "dp" => DP_REFS.iter().map(|s| s.to_string()).collect(),
        "trees" => TREE_REFS.iter().map(|s| s.to_string()).collect(),
        _ => vec![DEFAULT_REF.to_string()],
    }
}
