//! ChatRepository on top of a ChatDataSource

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use tracing::{debug, info, instrument};

use party_core::traits::{ChatRepository, RepoResult, Subscription};
use party_core::{ChatMessage, ChatRoom, DomainError, MessageReaction, MessageType};

use super::error::{chat_room_not_found, source_error};
use crate::mappers::to_millis;
use crate::models::{ChatMessageDto, ChatRoomDto, ReactionDto};
use crate::sources::ChatDataSource;
use crate::stream::watch_stream;

/// Reject messages that carry nothing to show
fn check_sendable(message: &ChatMessage) -> RepoResult<()> {
    if message.message_type.is_media() {
        if message.media_url.as_deref().is_none_or(str::is_empty) {
            return Err(DomainError::ValidationError(format!(
                "{} message requires a media url",
                message.message_type.as_str()
            )));
        }
    } else if message.content.trim().is_empty() {
        return Err(DomainError::ValidationError(
            "Message content cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[derive(Clone)]
pub struct ChatRepositoryImpl {
    source: Arc<dyn ChatDataSource>,
}

impl ChatRepositoryImpl {
    pub fn new(source: Arc<dyn ChatDataSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl ChatRepository for ChatRepositoryImpl {
    #[instrument(skip(self))]
    async fn get_chat_room(&self, room_id: &str) -> RepoResult<ChatRoom> {
        self.source
            .get_room(room_id)
            .await
            .map_err(source_error("get_chat_room"))?
            .map(ChatRoom::from)
            .ok_or_else(|| chat_room_not_found(room_id))
    }

    #[instrument(skip(self))]
    async fn get_chat_rooms(&self, user_id: &str) -> RepoResult<Vec<ChatRoom>> {
        let rooms = self
            .source
            .list_rooms_for_user(user_id)
            .await
            .map_err(source_error("get_chat_rooms"))?;

        Ok(rooms.into_iter().map(ChatRoom::from).collect())
    }

    #[instrument(skip(self, room), fields(room_type = %room.room_type))]
    async fn create_chat_room(&self, room: &ChatRoom) -> RepoResult<ChatRoom> {
        let created = self
            .source
            .create_room(&ChatRoomDto::from(room))
            .await
            .map_err(source_error("create_chat_room"))?;

        info!(room_id = %created.id, participants = created.participant_ids.len(), "Chat room created");
        Ok(ChatRoom::from(created))
    }

    #[instrument(skip(self))]
    async fn get_messages(
        &self,
        room_id: &str,
        limit: usize,
        before: Option<DateTime<Utc>>,
    ) -> RepoResult<Vec<ChatMessage>> {
        let messages = self
            .source
            .list_messages(room_id, limit, before.map(to_millis))
            .await
            .map_err(source_error("get_messages"))?;

        Ok(messages.into_iter().map(ChatMessage::from).collect())
    }

    #[instrument(skip(self, message), fields(room_id = %message.room_id, sender_id = %message.sender_id))]
    async fn send_message(&self, message: &ChatMessage) -> RepoResult<ChatMessage> {
        check_sendable(message)?;

        let sent = self
            .source
            .send_message(&ChatMessageDto::from(message))
            .await
            .map_err(source_error("send_message"))?;

        debug!(message_id = %sent.id, "Message sent");
        Ok(ChatMessage::from(sent))
    }

    #[instrument(skip(self, content))]
    async fn edit_message(
        &self,
        room_id: &str,
        message_id: &str,
        content: &str,
    ) -> RepoResult<ChatMessage> {
        if content.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Message content cannot be empty".to_string(),
            ));
        }

        let edited = self
            .source
            .edit_message(room_id, message_id, content)
            .await
            .map_err(source_error("edit_message"))?;

        Ok(ChatMessage::from(edited))
    }

    #[instrument(skip(self))]
    async fn delete_message(&self, room_id: &str, message_id: &str) -> RepoResult<()> {
        self.source
            .delete_message(room_id, message_id)
            .await
            .map_err(source_error("delete_message"))?;

        info!(room_id = %room_id, message_id = %message_id, "Message deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_reaction(
        &self,
        room_id: &str,
        message_id: &str,
        emoji: &str,
        user_id: &str,
    ) -> RepoResult<ChatMessage> {
        let reaction = MessageReaction::new(emoji, user_id);
        let updated = self
            .source
            .add_reaction(room_id, message_id, &ReactionDto::from(&reaction))
            .await
            .map_err(source_error("add_reaction"))?;

        Ok(ChatMessage::from(updated))
    }

    #[instrument(skip(self))]
    async fn remove_reaction(
        &self,
        room_id: &str,
        message_id: &str,
        emoji: &str,
        user_id: &str,
    ) -> RepoResult<ChatMessage> {
        let updated = self
            .source
            .remove_reaction(room_id, message_id, emoji, user_id)
            .await
            .map_err(source_error("remove_reaction"))?;

        Ok(ChatMessage::from(updated))
    }

    #[instrument(skip(self))]
    async fn mark_as_read(&self, room_id: &str, user_id: &str) -> RepoResult<usize> {
        self.source
            .mark_read(room_id, user_id)
            .await
            .map_err(source_error("mark_as_read"))
    }

    #[instrument(skip(self))]
    async fn leave_chat_room(&self, room_id: &str, user_id: &str) -> RepoResult<()> {
        self.source
            .leave_room(room_id, user_id)
            .await
            .map_err(source_error("leave_chat_room"))?;

        info!(room_id = %room_id, user_id = %user_id, "Left chat room");
        Ok(())
    }

    fn observe_messages(&self, room_id: &str) -> Subscription<Vec<ChatMessage>> {
        watch_stream(self.source.watch_messages(room_id))
            .map(|messages| messages.into_iter().map(ChatMessage::from).collect())
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use crate::repositories::test_support::FailingSource;
    use party_core::{ChatRoomType, DataSourceError};

    async fn repo_with_room() -> (ChatRepositoryImpl, ChatRoom) {
        let repo = ChatRepositoryImpl::new(Arc::new(MemoryBackend::new()));
        let room = repo
            .create_chat_room(&ChatRoom::new(
                ChatRoomType::Group,
                vec!["a".to_string(), "b".to_string()],
            ))
            .await
            .unwrap();
        (repo, room)
    }

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChatRepositoryImpl>();
    }

    #[tokio::test]
    async fn test_get_missing_room() {
        let repo = ChatRepositoryImpl::new(Arc::new(MemoryBackend::new()));
        let err = repo.get_chat_room("nope").await.unwrap_err();
        assert!(matches!(err, DomainError::ChatRoomNotFound(ref id) if id == "nope"));
    }

    #[tokio::test]
    async fn test_failure_wraps_source_error() {
        let repo = ChatRepositoryImpl::new(Arc::new(FailingSource::denied()));
        let err = repo.mark_as_read("r1", "a").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::DataSource {
                operation: "mark_as_read",
                source: DataSourceError::PermissionDenied(_),
            }
        ));
    }

    #[tokio::test]
    async fn test_empty_text_rejected_before_source() {
        let repo = ChatRepositoryImpl::new(Arc::new(FailingSource::denied()));
        let err = repo
            .send_message(&ChatMessage::text("r1", "a", "Ana", "   "))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_media_message_needs_url() {
        let (repo, room) = repo_with_room().await;
        let mut message = ChatMessage::text(&room.id, "a", "Ana", "");
        message.message_type = MessageType::Image;
        assert!(repo.send_message(&message).await.unwrap_err().is_validation());

        message.media_url = Some("memory://media/p1/m1".to_string());
        let sent = repo.send_message(&message).await.unwrap();
        assert_eq!(sent.message_type, MessageType::Image);
    }

    #[tokio::test]
    async fn test_send_updates_room_preview() {
        let (repo, room) = repo_with_room().await;
        let sent = repo
            .send_message(&ChatMessage::text(&room.id, "a", "Ana", "hello"))
            .await
            .unwrap();
        assert!(!sent.id.is_empty());
        assert!(sent.is_read_by("a"));

        let room = repo.get_chat_room(&room.id).await.unwrap();
        let preview = room.last_message.unwrap();
        assert_eq!(preview.content, "hello");
        assert_eq!(preview.sender_name, "Ana");
        assert!(preview.id.is_empty());
    }

    #[tokio::test]
    async fn test_edit_delete_and_reactions() {
        let (repo, room) = repo_with_room().await;
        let sent = repo
            .send_message(&ChatMessage::text(&room.id, "a", "Ana", "helo"))
            .await
            .unwrap();

        let edited = repo.edit_message(&room.id, &sent.id, "hello").await.unwrap();
        assert_eq!(edited.content, "hello");
        assert!(edited.is_edited());

        let reacted = repo.add_reaction(&room.id, &sent.id, "🔥", "b").await.unwrap();
        let reacted = repo.add_reaction(&room.id, &reacted.id, "🔥", "b").await.unwrap();
        assert_eq!(reacted.reactions.len(), 1);

        let cleared = repo.remove_reaction(&room.id, &sent.id, "🔥", "b").await.unwrap();
        assert!(cleared.reactions.is_empty());

        repo.delete_message(&room.id, &sent.id).await.unwrap();
        let messages = repo.get_messages(&room.id, 10, None).await.unwrap();
        assert!(messages[0].is_deleted);
        assert!(messages[0].content.is_empty());
    }

    #[tokio::test]
    async fn test_mark_as_read_counts_changes() {
        let (repo, room) = repo_with_room().await;
        for text in ["one", "two"] {
            repo.send_message(&ChatMessage::text(&room.id, "a", "Ana", text))
                .await
                .unwrap();
        }

        assert_eq!(repo.mark_as_read(&room.id, "b").await.unwrap(), 2);
        assert_eq!(repo.mark_as_read(&room.id, "b").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_leave_room() {
        let (repo, room) = repo_with_room().await;
        repo.leave_chat_room(&room.id, "b").await.unwrap();

        assert!(repo.get_chat_rooms("b").await.unwrap().is_empty());
        assert_eq!(repo.get_chat_rooms("a").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_observe_messages() {
        let (repo, room) = repo_with_room().await;
        let mut messages = repo.observe_messages(&room.id);
        assert!(messages.next().await.unwrap().is_empty());

        repo.send_message(&ChatMessage::text(&room.id, "b", "Ben", "yo"))
            .await
            .unwrap();
        let snapshot = messages.next().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].content, "yo");
    }
}
