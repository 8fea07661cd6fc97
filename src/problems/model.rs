use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Unsolved,
    Solved,
    Bookmark,
}

/// A tracked practice problem. Owned by the single local user; status is
/// the only field that changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub link: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub status: Status,
    pub created_at: i64,
}

impl Problem {
    pub fn new(
        title: String,
        link: String,
        topic: String,
        difficulty: Difficulty,
        status: Status,
    ) -> Self {
        let id = problem_id(&title, &link);
        Problem {
            id,
            title,
            link,
            topic,
            difficulty,
            status,
            created_at: Utc::now().timestamp(),
        }
    }
}

/// Stable id for a locally added problem, derived from title and link so
/// re-adding the same problem collides instead of duplicating.
pub fn problem_id(title: &str, link: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(b"\n");
    hasher.update(link.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("prob_{}", &digest[..12])
}
