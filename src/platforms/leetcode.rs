use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::settings::get_config;
use crate::logging::log_platform_call;
use crate::platforms::get_http_client;

const USER_PROFILE_QUERY: &str = r#"
query getUserProfile($username: String!) {
  matchedUser(username: $username) {
    username
    submitStats: submitStatsGlobal {
      acSubmissionNum {
        difficulty
        count
      }
    }
  }
}
"#;

/// Accepted-submission counts per difficulty for one LeetCode user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeetCodeStats {
    pub total_solved: u32,
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Serialize)]
struct Variables<'a> {
    username: &'a str,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "matchedUser")]
    matched_user: Option<MatchedUser>,
}

#[derive(Deserialize)]
struct MatchedUser {
    #[serde(rename = "submitStats")]
    submit_stats: SubmitStats,
}

#[derive(Deserialize)]
struct SubmitStats {
    #[serde(rename = "acSubmissionNum")]
    ac_submission_num: Vec<AcCount>,
}

#[derive(Deserialize)]
struct AcCount {
    difficulty: String,
    count: u32,
}

/// Fetch accepted-solve counts for a LeetCode username via the public
/// GraphQL endpoint. Returns None when the username does not exist.
pub async fn fetch_leetcode_stats(username: &str) -> Result<Option<LeetCodeStats>> {
    let url = &get_config().leetcode_api_url;
    let start = std::time::Instant::now();

    let result = async {
        let response = get_http_client()
            .post(url)
            .header("Content-Type", "application/json")
            .header("Referer", format!("https://leetcode.com/{}/", username))
            .json(&GraphQlRequest {
                query: USER_PROFILE_QUERY,
                variables: Variables { username },
            })
            .send()
            .await
            .with_context(|| format!("Failed to reach LeetCode GraphQL for '{}'", username))?;

        let body: GraphQlResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse LeetCode response for '{}'", username))?;

        let user = match body.data.and_then(|d| d.matched_user) {
            Some(user) => user,
            None => return Ok(None),
        };

        let ac = user.submit_stats.ac_submission_num;
        let count_for = |difficulty: &str| {
            ac.iter()
                .find(|c| c.difficulty == difficulty)
                .map(|c| c.count)
                .unwrap_or(0)
        };

        Ok(Some(LeetCodeStats {
            // "All" is one of the buckets, so sum the named ones instead
            total_solved: count_for("Easy") + count_for("Medium") + count_for("Hard"),
            easy: count_for("Easy"),
            medium: count_for("Medium"),
            hard: count_for("Hard"),
        }))
    }
    .await;

    let latency_ms = start.elapsed().as_millis() as u64;
    log_platform_call("leetcode", "graphql", result.is_ok(), latency_ms);
    result
}
