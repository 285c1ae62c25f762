//! Chat room and message mappers

use party_core::{ChatMessage, ChatRoom, MessageReaction, MessageType};

use super::{from_millis, parse_or_default, to_millis};
use crate::models::{ChatMessageDto, ChatMessagePreviewDto, ChatRoomDto, ReactionDto};

impl From<ChatMessageDto> for ChatMessage {
    fn from(dto: ChatMessageDto) -> Self {
        ChatMessage {
            message_type: parse_or_default(&dto.message_type, "message.type"),
            id: dto.id,
            room_id: dto.room_id,
            sender_id: dto.sender_id,
            sender_name: dto.sender_name,
            content: dto.content,
            media_url: dto.media_url,
            reply_to_id: dto.reply_to_id,
            reactions: dto.reactions.into_iter().map(Into::into).collect(),
            read_by_user_ids: dto.read_by,
            created_at: from_millis(dto.created_at),
            edited_at: dto.edited_at.map(from_millis),
            is_deleted: dto.is_deleted,
        }
    }
}

impl From<&ChatMessage> for ChatMessageDto {
    fn from(message: &ChatMessage) -> Self {
        ChatMessageDto {
            id: message.id.clone(),
            room_id: message.room_id.clone(),
            sender_id: message.sender_id.clone(),
            sender_name: message.sender_name.clone(),
            content: message.content.clone(),
            message_type: message.message_type.as_str().to_string(),
            media_url: message.media_url.clone(),
            reply_to_id: message.reply_to_id.clone(),
            reactions: message.reactions.iter().map(Into::into).collect(),
            read_by: message.read_by_user_ids.clone(),
            created_at: to_millis(message.created_at),
            edited_at: message.edited_at.map(to_millis),
            is_deleted: message.is_deleted,
        }
    }
}

impl From<ReactionDto> for MessageReaction {
    fn from(dto: ReactionDto) -> Self {
        MessageReaction {
            emoji: dto.emoji,
            user_id: dto.user_id,
            created_at: from_millis(dto.created_at),
        }
    }
}

impl From<&MessageReaction> for ReactionDto {
    fn from(reaction: &MessageReaction) -> Self {
        ReactionDto {
            emoji: reaction.emoji.clone(),
            user_id: reaction.user_id.clone(),
            created_at: to_millis(reaction.created_at),
        }
    }
}

impl From<&ChatMessage> for ChatMessagePreviewDto {
    fn from(message: &ChatMessage) -> Self {
        ChatMessagePreviewDto {
            content: message.content.clone(),
            sender_name: message.sender_name.clone(),
            message_type: message.message_type.as_str().to_string(),
            timestamp: to_millis(message.created_at),
        }
    }
}

impl From<&ChatMessageDto> for ChatMessagePreviewDto {
    fn from(message: &ChatMessageDto) -> Self {
        ChatMessagePreviewDto {
            content: message.content.clone(),
            sender_name: message.sender_name.clone(),
            message_type: message.message_type.clone(),
            timestamp: message.created_at,
        }
    }
}

/// Rebuild a message from a room preview; id and sender id stay empty
pub fn message_from_preview(room_id: &str, preview: ChatMessagePreviewDto) -> ChatMessage {
    let message_type: MessageType = parse_or_default(&preview.message_type, "lastMessage.type");
    ChatMessage {
        id: String::new(),
        room_id: room_id.to_string(),
        sender_id: String::new(),
        sender_name: preview.sender_name,
        content: preview.content,
        message_type,
        media_url: None,
        reply_to_id: None,
        reactions: Vec::new(),
        read_by_user_ids: Vec::new(),
        created_at: from_millis(preview.timestamp),
        edited_at: None,
        is_deleted: false,
    }
}

impl From<ChatRoomDto> for ChatRoom {
    fn from(dto: ChatRoomDto) -> Self {
        let last_message = dto
            .last_message
            .map(|preview| message_from_preview(&dto.id, preview));
        ChatRoom {
            room_type: parse_or_default(&dto.room_type, "room.type"),
            id: dto.id,
            name: dto.name,
            participant_ids: dto.participant_ids,
            party_id: dto.party_id,
            last_message,
            created_at: from_millis(dto.created_at),
            updated_at: from_millis(dto.updated_at),
        }
    }
}

impl From<&ChatRoom> for ChatRoomDto {
    fn from(room: &ChatRoom) -> Self {
        ChatRoomDto {
            id: room.id.clone(),
            name: room.name.clone(),
            room_type: room.room_type.as_str().to_string(),
            participant_ids: room.participant_ids.clone(),
            party_id: room.party_id.clone(),
            last_message: room.last_message.as_ref().map(Into::into),
            created_at: to_millis(room.created_at),
            updated_at: to_millis(room.updated_at),
        }
    }
}
