//! Chat room and message documents

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReactionDto {
    pub emoji: String,
    pub user_id: String,
    pub created_at: i64,
}

/// Message document, stored under its room
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatMessageDto {
    pub id: String,
    pub room_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub content: String,
    /// `TEXT`, `IMAGE`, `VIDEO`, `AUDIO` or `SYSTEM`
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
    pub reactions: Vec<ReactionDto>,
    pub read_by: Vec<String>,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<i64>,
    pub is_deleted: bool,
}

/// Last-message snapshot embedded in a room document.
///
/// Carries no message id or sender id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatMessagePreviewDto {
    pub content: String,
    pub sender_name: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub timestamp: i64,
}

/// Document stored in the `chatRooms` collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatRoomDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `DIRECT`, `GROUP` or `PARTY`
    #[serde(rename = "type")]
    pub room_type: String,
    pub participant_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<ChatMessagePreviewDto>,
    pub created_at: i64,
    pub updated_at: i64,
}
