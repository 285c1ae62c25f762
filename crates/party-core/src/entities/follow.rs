//! Follow edge in the social graph

use chrono::{DateTime, Utc};

/// `follower_id` follows `following_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFollow {
    pub follower_id: String,
    pub following_id: String,
    pub created_at: DateTime<Utc>,
}

impl UserFollow {
    pub fn new(follower_id: impl Into<String>, following_id: impl Into<String>) -> Self {
        Self {
            follower_id: follower_id.into(),
            following_id: following_id.into(),
            created_at: Utc::now(),
        }
    }

    /// Document id used by the backend: `{follower}_{following}`
    pub fn document_id(&self) -> String {
        format!("{}_{}", self.follower_id, self.following_id)
    }
}
