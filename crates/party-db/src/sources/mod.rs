//! Data source traits - the remote backend as seen by the repositories
//!
//! Sources speak documents (DTOs) and report failures as `DataSourceError`.
//! A missing document on a point read is `Ok(None)`; writes that target a
//! missing document fail with `DataSourceError::NotFound`.

use async_trait::async_trait;
use tokio::sync::watch;

use party_core::DataSourceError;

use crate::models::{
    ChatMessageDto, ChatRoomDto, MediaContentDto, PartyAttendeeDto, PartyEventDto, ReactionDto,
    UserDto, UserFollowDto,
};

/// Result type for data source calls
pub type SourceResult<T> = Result<T, DataSourceError>;

/// Filter for party listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyQuery {
    /// Exact status string, e.g. `LIVE`
    pub status: Option<String>,
    pub host_id: Option<String>,
    /// Only parties whose start time is after this epoch millis value
    pub starts_after: Option<i64>,
    /// Order by start time descending instead of ascending
    pub newest_first: bool,
    pub limit: Option<usize>,
}

impl PartyQuery {
    /// Planned parties starting after `now_millis`, soonest first
    pub fn upcoming(now_millis: i64, limit: usize) -> Self {
        Self {
            status: Some("PLANNED".to_string()),
            starts_after: Some(now_millis),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn live() -> Self {
        Self {
            status: Some("LIVE".to_string()),
            ..Self::default()
        }
    }

    /// Every party hosted by `host_id`, latest start first
    pub fn hosted_by(host_id: impl Into<String>) -> Self {
        Self {
            host_id: Some(host_id.into()),
            newest_first: true,
            ..Self::default()
        }
    }

    pub fn matches(&self, party: &PartyEventDto) -> bool {
        self.status.as_deref().is_none_or(|s| party.status == s)
            && self.host_id.as_deref().is_none_or(|h| party.host.id == h)
            && self.starts_after.is_none_or(|t| party.start_time > t)
    }
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
pub trait UserDataSource: Send + Sync {
    async fn get_user(&self, id: &str) -> SourceResult<Option<UserDto>>;

    async fn get_user_by_username(&self, username: &str) -> SourceResult<Option<UserDto>>;

    async fn get_user_by_firebase_id(&self, firebase_id: &str) -> SourceResult<Option<UserDto>>;

    /// Insert a user document; an empty id is replaced with a generated one
    async fn create_user(&self, user: &UserDto) -> SourceResult<UserDto>;

    async fn update_user(&self, user: &UserDto) -> SourceResult<UserDto>;

    /// Remove a user document; deleting a missing document succeeds
    async fn delete_user(&self, id: &str) -> SourceResult<()>;

    /// Case-insensitive username prefix search, ordered by username
    async fn search_users(&self, query: &str, limit: usize) -> SourceResult<Vec<UserDto>>;

    async fn username_exists(&self, username: &str) -> SourceResult<bool>;
}

// ============================================================================
// Parties
// ============================================================================

#[async_trait]
pub trait PartyDataSource: Send + Sync {
    async fn get_party(&self, id: &str) -> SourceResult<Option<PartyEventDto>>;

    async fn list_parties(&self, query: &PartyQuery) -> SourceResult<Vec<PartyEventDto>>;

    async fn create_party(&self, party: &PartyEventDto) -> SourceResult<PartyEventDto>;

    async fn update_party(&self, party: &PartyEventDto) -> SourceResult<PartyEventDto>;

    /// Overwrite only the status field
    async fn update_party_status(&self, id: &str, status: &str) -> SourceResult<()>;

    async fn delete_party(&self, id: &str) -> SourceResult<()>;

    /// Insert or replace the RSVP of one user
    async fn upsert_attendee(&self, attendee: &PartyAttendeeDto) -> SourceResult<PartyAttendeeDto>;

    async fn list_attendees(&self, party_id: &str) -> SourceResult<Vec<PartyAttendeeDto>>;

    /// Live parties, replaced on every party write
    fn watch_live_parties(&self) -> watch::Receiver<Vec<PartyEventDto>>;
}

// ============================================================================
// Media
// ============================================================================

#[async_trait]
pub trait MediaDataSource: Send + Sync {
    async fn get_media(&self, id: &str) -> SourceResult<Option<MediaContentDto>>;

    /// Newest first
    async fn list_party_media(&self, party_id: &str, limit: usize)
        -> SourceResult<Vec<MediaContentDto>>;

    /// Newest first
    async fn list_user_media(&self, user_id: &str) -> SourceResult<Vec<MediaContentDto>>;

    /// Store the bytes and the document; the backend fills in id, url and size
    async fn upload_media(&self, media: &MediaContentDto, data: Vec<u8>)
        -> SourceResult<MediaContentDto>;

    async fn delete_media(&self, id: &str) -> SourceResult<()>;

    /// Add `delta` to the like counter and return the new value
    async fn adjust_likes(&self, id: &str, delta: i64) -> SourceResult<i64>;

    async fn increment_views(&self, id: &str) -> SourceResult<i64>;

    /// One media document, `None` while it does not exist
    fn watch_media(&self, id: &str) -> watch::Receiver<Option<MediaContentDto>>;
}

// ============================================================================
// Chat
// ============================================================================

#[async_trait]
pub trait ChatDataSource: Send + Sync {
    async fn get_room(&self, id: &str) -> SourceResult<Option<ChatRoomDto>>;

    /// Rooms containing `user_id`, most recently updated first
    async fn list_rooms_for_user(&self, user_id: &str) -> SourceResult<Vec<ChatRoomDto>>;

    async fn create_room(&self, room: &ChatRoomDto) -> SourceResult<ChatRoomDto>;

    /// The latest `limit` messages created before `before`, oldest first
    async fn list_messages(
        &self,
        room_id: &str,
        limit: usize,
        before: Option<i64>,
    ) -> SourceResult<Vec<ChatMessageDto>>;

    /// Append a message and refresh the room's last-message preview
    async fn send_message(&self, message: &ChatMessageDto) -> SourceResult<ChatMessageDto>;

    async fn edit_message(&self, room_id: &str, message_id: &str, content: &str)
        -> SourceResult<ChatMessageDto>;

    /// Soft delete: the document stays with `is_deleted` set and no content
    async fn delete_message(&self, room_id: &str, message_id: &str) -> SourceResult<()>;

    async fn add_reaction(&self, room_id: &str, message_id: &str, reaction: &ReactionDto)
        -> SourceResult<ChatMessageDto>;

    async fn remove_reaction(
        &self,
        room_id: &str,
        message_id: &str,
        emoji: &str,
        user_id: &str,
    ) -> SourceResult<ChatMessageDto>;

    /// Add `user_id` to each message's read list, returning how many changed
    async fn mark_read(&self, room_id: &str, user_id: &str) -> SourceResult<usize>;

    async fn leave_room(&self, room_id: &str, user_id: &str) -> SourceResult<()>;

    /// All messages of one room, oldest first
    fn watch_messages(&self, room_id: &str) -> watch::Receiver<Vec<ChatMessageDto>>;
}

// ============================================================================
// Follows
// ============================================================================

#[async_trait]
pub trait FollowDataSource: Send + Sync {
    /// Fails with `AlreadyExists` when the edge is present
    async fn create_follow(&self, follow: &UserFollowDto) -> SourceResult<UserFollowDto>;

    /// Removing a missing edge succeeds
    async fn delete_follow(&self, follower_id: &str, following_id: &str) -> SourceResult<()>;

    async fn follow_exists(&self, follower_id: &str, following_id: &str) -> SourceResult<bool>;

    /// Edges pointing at `user_id`, newest first
    async fn list_followers(&self, user_id: &str, limit: usize) -> SourceResult<Vec<UserFollowDto>>;

    /// Edges starting at `user_id`, newest first
    async fn list_following(&self, user_id: &str, limit: usize) -> SourceResult<Vec<UserFollowDto>>;

    async fn count_followers(&self, user_id: &str) -> SourceResult<i64>;

    async fn count_following(&self, user_id: &str) -> SourceResult<i64>;
}

// ============================================================================
// Authentication
// ============================================================================

#[async_trait]
pub trait AuthDataSource: Send + Sync {
    /// Register an account and sign it in, returning its uid
    async fn create_account(&self, email: &str, password: &str) -> SourceResult<String>;

    /// Returns the uid of the signed-in account
    async fn sign_in(&self, email: &str, password: &str) -> SourceResult<String>;

    async fn sign_out(&self) -> SourceResult<()>;

    /// Uid of the signed-in account
    fn current_uid(&self) -> Option<String>;

    async fn send_password_reset(&self, email: &str) -> SourceResult<()>;

    /// Delete the signed-in account
    async fn delete_account(&self) -> SourceResult<()>;
}
