//! Reaction entity - an emoji reaction on a chat message

use chrono::{DateTime, Utc};

/// Reaction stored flat on the message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReaction {
    pub emoji: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl MessageReaction {
    /// Create a new reaction
    pub fn new(emoji: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            user_id: user_id.into(),
            created_at: Utc::now(),
        }
    }

    /// Check if reaction uses a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }
}

/// Aggregated reaction count for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionCount {
    pub emoji: String,
    pub count: i32,
    pub me: bool,
}

impl ReactionCount {
    /// Create a new ReactionCount
    pub fn new(emoji: String, count: i32, me: bool) -> Self {
        Self { emoji, count, me }
    }
}
