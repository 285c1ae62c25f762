use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, instrument};

use party_core::DataSourceError;

use super::{id_or_new, now_millis, MemoryBackend, MESSAGES, ROOMS};
use crate::models::{ChatMessageDto, ChatMessagePreviewDto, ChatRoomDto, ReactionDto};
use crate::sources::{ChatDataSource, SourceResult};

impl MemoryBackend {
    fn room_messages(&self, room_id: &str) -> Vec<ChatMessageDto> {
        self.messages
            .get(room_id)
            .map(|m| m.value().clone())
            .unwrap_or_default()
    }

    /// Push the room's message list to subscribers and refresh its preview
    ///
    /// Messages are re-read under the watch lock, so the last publish for a
    /// room always carries its newest list.
    fn publish_messages(&self, room_id: &str) {
        let refresh = |snapshot: &mut Vec<ChatMessageDto>| {
            *snapshot = self.room_messages(room_id);
            let preview = snapshot.last().map(ChatMessagePreviewDto::from);
            if let Some(mut room) = self.rooms.get_mut(room_id) {
                room.last_message = preview;
            }
        };
        match self.message_watchers.get(room_id) {
            Some(tx) => tx.send_modify(refresh),
            None => refresh(&mut Vec::new()),
        }
    }

    fn ensure_room(&self, room_id: &str) -> SourceResult<()> {
        if self.rooms.contains_key(room_id) {
            Ok(())
        } else {
            Err(DataSourceError::not_found(ROOMS, room_id))
        }
    }

    /// Apply `update` to one message, then publish the room
    fn update_message<F>(&self, room_id: &str, message_id: &str, update: F)
        -> SourceResult<ChatMessageDto>
    where
        F: FnOnce(&mut ChatMessageDto),
    {
        self.ensure_room(room_id)?;
        let updated = {
            let mut messages = self
                .messages
                .get_mut(room_id)
                .ok_or_else(|| DataSourceError::not_found(MESSAGES, message_id))?;
            let message = messages
                .iter_mut()
                .find(|m| m.id == message_id)
                .ok_or_else(|| DataSourceError::not_found(MESSAGES, message_id))?;
            update(message);
            message.clone()
        };
        self.publish_messages(room_id);
        Ok(updated)
    }
}

#[async_trait]
impl ChatDataSource for MemoryBackend {
    #[instrument(skip(self))]
    async fn get_room(&self, id: &str) -> SourceResult<Option<ChatRoomDto>> {
        self.ensure_available()?;
        Ok(self.rooms.get(id).map(|r| r.value().clone()))
    }

    #[instrument(skip(self))]
    async fn list_rooms_for_user(&self, user_id: &str) -> SourceResult<Vec<ChatRoomDto>> {
        self.ensure_available()?;
        let mut rooms: Vec<ChatRoomDto> = self
            .rooms
            .iter()
            .filter(|r| r.participant_ids.iter().any(|p| p == user_id))
            .map(|r| r.value().clone())
            .collect();
        rooms.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(rooms)
    }

    #[instrument(skip(self, room), fields(room_type = %room.room_type))]
    async fn create_room(&self, room: &ChatRoomDto) -> SourceResult<ChatRoomDto> {
        self.ensure_available()?;
        let mut doc = room.clone();
        doc.id = id_or_new(&room.id);
        if self.rooms.contains_key(&doc.id) {
            return Err(DataSourceError::already_exists(ROOMS, doc.id));
        }
        self.rooms.insert(doc.id.clone(), doc.clone());
        self.messages.entry(doc.id.clone()).or_default();
        debug!(room_id = %doc.id, "Chat room created");
        Ok(doc)
    }

    #[instrument(skip(self))]
    async fn list_messages(
        &self,
        room_id: &str,
        limit: usize,
        before: Option<i64>,
    ) -> SourceResult<Vec<ChatMessageDto>> {
        self.ensure_available()?;
        self.ensure_room(room_id)?;
        let mut messages: Vec<ChatMessageDto> = self
            .room_messages(room_id)
            .into_iter()
            .filter(|m| before.is_none_or(|b| m.created_at < b))
            .collect();
        let skip = messages.len().saturating_sub(limit);
        messages.drain(..skip);
        Ok(messages)
    }

    #[instrument(skip(self, message), fields(room_id = %message.room_id, sender_id = %message.sender_id))]
    async fn send_message(&self, message: &ChatMessageDto) -> SourceResult<ChatMessageDto> {
        self.ensure_available()?;
        self.ensure_room(&message.room_id)?;

        let mut doc = message.clone();
        doc.id = id_or_new(&message.id);
        if doc.created_at == 0 {
            doc.created_at = now_millis();
        }
        if !doc.read_by.contains(&doc.sender_id) {
            doc.read_by.push(doc.sender_id.clone());
        }

        self.messages
            .entry(doc.room_id.clone())
            .or_default()
            .push(doc.clone());
        if let Some(mut room) = self.rooms.get_mut(&doc.room_id) {
            room.updated_at = doc.created_at;
        }
        self.publish_messages(&doc.room_id);
        Ok(doc)
    }

    #[instrument(skip(self, content))]
    async fn edit_message(
        &self,
        room_id: &str,
        message_id: &str,
        content: &str,
    ) -> SourceResult<ChatMessageDto> {
        self.ensure_available()?;
        self.update_message(room_id, message_id, |message| {
            message.content = content.to_string();
            message.edited_at = Some(now_millis());
        })
    }

    #[instrument(skip(self))]
    async fn delete_message(&self, room_id: &str, message_id: &str) -> SourceResult<()> {
        self.ensure_available()?;
        self.update_message(room_id, message_id, |message| {
            message.is_deleted = true;
            message.content.clear();
            message.media_url = None;
        })
        .map(|_| ())
    }

    #[instrument(skip(self, reaction), fields(emoji = %reaction.emoji, user_id = %reaction.user_id))]
    async fn add_reaction(
        &self,
        room_id: &str,
        message_id: &str,
        reaction: &ReactionDto,
    ) -> SourceResult<ChatMessageDto> {
        self.ensure_available()?;
        self.update_message(room_id, message_id, |message| {
            let present = message
                .reactions
                .iter()
                .any(|r| r.emoji == reaction.emoji && r.user_id == reaction.user_id);
            if !present {
                message.reactions.push(reaction.clone());
            }
        })
    }

    #[instrument(skip(self))]
    async fn remove_reaction(
        &self,
        room_id: &str,
        message_id: &str,
        emoji: &str,
        user_id: &str,
    ) -> SourceResult<ChatMessageDto> {
        self.ensure_available()?;
        self.update_message(room_id, message_id, |message| {
            message
                .reactions
                .retain(|r| !(r.emoji == emoji && r.user_id == user_id));
        })
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, room_id: &str, user_id: &str) -> SourceResult<usize> {
        self.ensure_available()?;
        self.ensure_room(room_id)?;
        let changed = match self.messages.get_mut(room_id) {
            Some(mut messages) => {
                let mut changed = 0;
                for message in messages.iter_mut() {
                    if !message.read_by.iter().any(|id| id == user_id) {
                        message.read_by.push(user_id.to_string());
                        changed += 1;
                    }
                }
                changed
            }
            None => 0,
        };
        if changed > 0 {
            self.publish_messages(room_id);
        }
        Ok(changed)
    }

    #[instrument(skip(self))]
    async fn leave_room(&self, room_id: &str, user_id: &str) -> SourceResult<()> {
        self.ensure_available()?;
        let mut room = self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| DataSourceError::not_found(ROOMS, room_id))?;
        room.participant_ids.retain(|p| p != user_id);
        room.updated_at = now_millis();
        Ok(())
    }

    fn watch_messages(&self, room_id: &str) -> watch::Receiver<Vec<ChatMessageDto>> {
        let snapshot = self.room_messages(room_id);
        self.message_watchers
            .entry(room_id.to_string())
            .or_insert_with(|| watch::Sender::new(snapshot))
            .subscribe()
    }
}
