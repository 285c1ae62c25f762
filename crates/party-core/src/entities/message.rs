//! Chat message entity with reactions and read receipts

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::reaction::{MessageReaction, ReactionCount};

/// Message payload kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageType {
    #[default]
    Text,
    Image,
    Video,
    Audio,
    System,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::Audio => "AUDIO",
            Self::System => "SYSTEM",
        }
    }

    /// Message carries a media attachment
    #[inline]
    pub fn is_media(&self) -> bool {
        matches!(self, Self::Image | Self::Video | Self::Audio)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TEXT" => Ok(Self::Text),
            "IMAGE" => Ok(Self::Image),
            "VIDEO" => Ok(Self::Video),
            "AUDIO" => Ok(Self::Audio),
            "SYSTEM" => Ok(Self::System),
            _ => Err(format!("Invalid message type: {s}")),
        }
    }
}

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub room_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub content: String,
    pub message_type: MessageType,
    pub media_url: Option<String>,
    pub reply_to_id: Option<String>,
    pub reactions: Vec<MessageReaction>,
    pub read_by_user_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

impl ChatMessage {
    /// Create a new text message; the id is assigned by the backend when empty
    pub fn text(
        room_id: impl Into<String>,
        sender_id: impl Into<String>,
        sender_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let sender_id = sender_id.into();
        Self {
            id: String::new(),
            room_id: room_id.into(),
            read_by_user_ids: vec![sender_id.clone()],
            sender_id,
            sender_name: sender_name.into(),
            content: content.into(),
            message_type: MessageType::Text,
            media_url: None,
            reply_to_id: None,
            reactions: Vec::new(),
            created_at: Utc::now(),
            edited_at: None,
            is_deleted: false,
        }
    }

    #[inline]
    pub fn is_edited(&self) -> bool {
        self.edited_at.is_some()
    }

    #[inline]
    pub fn is_reply(&self) -> bool {
        self.reply_to_id.is_some()
    }

    pub fn is_read_by(&self, user_id: &str) -> bool {
        self.read_by_user_ids.iter().any(|id| id == user_id)
    }

    /// Reactions grouped by emoji, in order of first appearance
    pub fn reaction_counts(&self, viewer_id: &str) -> Vec<ReactionCount> {
        let mut counts: Vec<ReactionCount> = Vec::new();
        for reaction in &self.reactions {
            let me = reaction.user_id == viewer_id;
            match counts.iter_mut().find(|c| c.emoji == reaction.emoji) {
                Some(count) => {
                    count.count += 1;
                    count.me |= me;
                }
                None => counts.push(ReactionCount::new(reaction.emoji.clone(), 1, me)),
            }
        }
        counts
    }

    /// Truncated content for notifications and room previews
    pub fn preview(&self, max_chars: usize) -> String {
        if self.is_deleted {
            return String::new();
        }
        match self.content.char_indices().nth(max_chars) {
            Some((end, _)) => self.content[..end].to_string(),
            None => self.content.clone(),
        }
    }
}
