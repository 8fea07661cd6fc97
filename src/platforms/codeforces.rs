use std::collections::HashSet;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::settings::get_config;
use crate::logging::log_platform_call;
use crate::platforms::get_http_client;

/// Submissions page size for user.status; matches what the site hands out
const SUBMISSION_FETCH_COUNT: u32 = 10000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeforcesProfile {
    pub rating: Option<i64>,
    pub max_rating: Option<i64>,
    pub rank: Option<String>,
    pub solved_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfProblemRef {
    #[serde(rename = "contestId")]
    pub contest_id: Option<i64>,
    pub index: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfSubmission {
    pub verdict: Option<String>,
    pub problem: Option<CfProblemRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeforcesStats {
    pub profile: CodeforcesProfile,
    pub submissions: Vec<CfSubmission>,
}

/// Codeforces wraps every payload in a status envelope
#[derive(Deserialize)]
struct CfEnvelope<T> {
    status: String,
    comment: Option<String>,
    result: Option<T>,
}

#[derive(Deserialize)]
struct CfUser {
    rating: Option<i64>,
    #[serde(rename = "maxRating")]
    max_rating: Option<i64>,
    rank: Option<String>,
}

/// Count distinct solved problems: verdict OK, unique contestId-index pair.
/// Submissions without a problem reference are skipped.
pub fn distinct_solved(submissions: &[CfSubmission]) -> u32 {
    let mut seen: HashSet<String> = HashSet::new();
    for sub in submissions {
        if sub.verdict.as_deref() != Some("OK") {
            continue;
        }
        if let Some(problem) = &sub.problem {
            let contest = problem.contest_id.map(|c| c.to_string()).unwrap_or_default();
            let index = problem.index.clone().unwrap_or_default();
            seen.insert(format!("{}-{}", contest, index));
        }
    }
    seen.len() as u32
}

/// Fetch rating info and the submission history for a Codeforces handle.
/// A failed user.info lookup degrades to an unrated profile as long as the
/// submission fetch worked.
pub async fn fetch_codeforces_stats(handle: &str) -> Result<CodeforcesStats> {
    let base = &get_config().codeforces_api_url;
    let start = std::time::Instant::now();

    let result = async {
        let info_url = format!("{}/user.info?handles={}", base, handle);
        let status_url = format!(
            "{}/user.status?handle={}&from=1&count={}",
            base, handle, SUBMISSION_FETCH_COUNT
        );

        let client = get_http_client();
        let (info_res, status_res) = tokio::join!(
            async {
                client
                    .get(&info_url)
                    .send()
                    .await
                    .with_context(|| format!("Failed to reach Codeforces user.info for '{}'", handle))?
                    .json::<CfEnvelope<Vec<CfUser>>>()
                    .await
                    .with_context(|| format!("Failed to parse user.info for '{}'", handle))
            },
            async {
                client
                    .get(&status_url)
                    .send()
                    .await
                    .with_context(|| format!("Failed to reach Codeforces user.status for '{}'", handle))?
                    .json::<CfEnvelope<Vec<CfSubmission>>>()
                    .await
                    .with_context(|| format!("Failed to parse user.status for '{}'", handle))
            }
        );

        let status_env = status_res?;
        let submissions = if status_env.status == "OK" {
            status_env.result.unwrap_or_default()
        } else {
            anyhow::bail!(
                "Codeforces user.status rejected handle '{}': {}",
                handle,
                status_env.comment.unwrap_or_else(|| "unknown reason".to_string())
            );
        };

        let user = match info_res {
            Ok(env) if env.status == "OK" => env.result.unwrap_or_default().into_iter().next(),
            Ok(env) => {
                tracing::warn!(
                    handle = handle,
                    comment = env.comment.as_deref().unwrap_or("unknown reason"),
                    "Codeforces user.info failed, continuing without profile"
                );
                None
            }
            Err(e) => {
                tracing::warn!(
                    handle = handle,
                    error = %e,
                    "Codeforces user.info unreachable, continuing without profile"
                );
                None
            }
        };

        let profile = CodeforcesProfile {
            rating: user.as_ref().and_then(|u| u.rating),
            max_rating: user.as_ref().and_then(|u| u.max_rating),
            rank: user.as_ref().and_then(|u| u.rank.clone()),
            solved_count: distinct_solved(&submissions),
        };

        Ok(CodeforcesStats {
            profile,
            submissions,
        })
    }
    .await;

    let latency_ms = start.elapsed().as_millis() as u64;
    log_platform_call("codeforces", "user.status", result.is_ok(), latency_ms);
    result
}
