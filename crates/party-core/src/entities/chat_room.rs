//! Chat room entity - direct, group or party-linked conversation

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::message::ChatMessage;

/// Kind of chat room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChatRoomType {
    Direct,
    #[default]
    Group,
    Party,
}

impl ChatRoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "DIRECT",
            Self::Group => "GROUP",
            Self::Party => "PARTY",
        }
    }
}

impl fmt::Display for ChatRoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatRoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DIRECT" => Ok(Self::Direct),
            "GROUP" => Ok(Self::Group),
            "PARTY" => Ok(Self::Party),
            _ => Err(format!("Invalid chat room type: {s}")),
        }
    }
}

/// Chat room entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRoom {
    pub id: String,
    pub name: Option<String>,
    pub room_type: ChatRoomType,
    pub participant_ids: Vec<String>,
    pub party_id: Option<String>,
    /// Rebuilt from a preview document, so `id` and `sender_id` are empty
    pub last_message: Option<ChatMessage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChatRoom {
    /// Create a room; the id is assigned by the backend when empty
    pub fn new(room_type: ChatRoomType, participant_ids: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            name: None,
            room_type,
            participant_ids,
            party_id: None,
            last_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create the chat room attached to a party
    pub fn for_party(party_id: impl Into<String>, name: impl Into<String>, participant_ids: Vec<String>) -> Self {
        let mut room = Self::new(ChatRoomType::Party, participant_ids);
        room.party_id = Some(party_id.into());
        room.name = Some(name.into());
        room
    }

    #[inline]
    pub fn is_party_chat(&self) -> bool {
        self.party_id.is_some()
    }

    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participant_ids.iter().any(|id| id == user_id)
    }

    /// Title shown to `viewer_id`: the room name, else the other participants
    pub fn title_for(&self, viewer_id: &str) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }
        self.participant_ids
            .iter()
            .filter(|id| id.as_str() != viewer_id)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}
