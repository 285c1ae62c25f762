//! Follow edge document

use serde::{Deserialize, Serialize};

/// Document stored in the `follows` collection, keyed `{follower}_{following}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFollowDto {
    pub follower_id: String,
    pub following_id: String,
    pub created_at: i64,
}

impl UserFollowDto {
    pub fn document_id(&self) -> String {
        follow_document_id(&self.follower_id, &self.following_id)
    }
}

/// Document key for a follow edge
pub fn follow_document_id(follower_id: &str, following_id: &str) -> String {
    format!("{follower_id}_{following_id}")
}
