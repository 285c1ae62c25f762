//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the data layer provides the
//! implementation on top of remote data sources.
//!
//! Every operation reports failure as a value: backend errors come back as
//! `DomainError::DataSource` wrapping the original `DataSourceError`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;

use crate::entities::{
    ChatMessage, ChatRoom, MediaContent, PartyAttendee, PartyEvent, RsvpStatus, User, UserFollow,
};
use crate::error::DomainError;
use crate::value_objects::UsernameValidation;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Push subscription: the current snapshot first, then one item per change
pub type Subscription<T> = BoxStream<'static, T>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: &str) -> RepoResult<User>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by authentication provider id
    async fn find_by_firebase_id(&self, firebase_id: &str) -> RepoResult<Option<User>>;

    /// Create a new user document
    async fn create_user(&self, user: &User) -> RepoResult<User>;

    /// Update an existing user; refreshes the session cache for the same id
    async fn update_user(&self, user: &User) -> RepoResult<User>;

    /// Delete a user; clears the session cache for the same id
    async fn delete_user(&self, id: &str) -> RepoResult<()>;

    /// Username prefix search
    async fn search_users(&self, query: &str, limit: usize) -> RepoResult<Vec<User>>;

    /// Run the username checks, returning the first failing reason
    async fn validate_username(&self, username: &str) -> RepoResult<UsernameValidation>;

    /// Check only whether no user holds this username
    async fn is_username_available(&self, username: &str) -> RepoResult<bool>;

    /// Cached signed-in user
    fn current_user(&self) -> Option<User>;

    /// Subscribe to the cached signed-in user
    fn observe_current_user(&self) -> Subscription<Option<User>>;
}

// ============================================================================
// Party Repository
// ============================================================================

#[async_trait]
pub trait PartyRepository: Send + Sync {
    /// Get party by ID
    async fn get_party(&self, id: &str) -> RepoResult<PartyEvent>;

    /// Planned parties starting in the future, soonest first
    async fn get_upcoming_parties(&self, limit: usize) -> RepoResult<Vec<PartyEvent>>;

    /// Parties currently live
    async fn get_live_parties(&self) -> RepoResult<Vec<PartyEvent>>;

    /// Parties hosted by a user
    async fn get_parties_by_host(&self, host_id: &str) -> RepoResult<Vec<PartyEvent>>;

    /// Create a new party
    async fn create_party(&self, party: &PartyEvent) -> RepoResult<PartyEvent>;

    /// Update an existing party
    async fn update_party(&self, party: &PartyEvent) -> RepoResult<PartyEvent>;

    /// Delete a party
    async fn delete_party(&self, id: &str) -> RepoResult<()>;

    /// Mark the party live, then re-fetch it
    async fn start_party(&self, id: &str) -> RepoResult<PartyEvent>;

    /// Mark the party ended, then re-fetch it
    async fn end_party(&self, id: &str) -> RepoResult<PartyEvent>;

    /// Mark the party cancelled, then re-fetch it
    async fn cancel_party(&self, id: &str) -> RepoResult<PartyEvent>;

    /// Record a user's RSVP
    async fn rsvp(&self, party_id: &str, user_id: &str, status: RsvpStatus)
        -> RepoResult<PartyAttendee>;

    /// List RSVPs for a party
    async fn get_attendees(&self, party_id: &str) -> RepoResult<Vec<PartyAttendee>>;

    /// Subscribe to the live party list
    fn observe_live_parties(&self) -> Subscription<Vec<PartyEvent>>;
}

// ============================================================================
// Media Repository
// ============================================================================

#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Get media by ID
    async fn get_media(&self, id: &str) -> RepoResult<MediaContent>;

    /// Media uploaded to a party, newest first
    async fn get_party_media(&self, party_id: &str, limit: usize) -> RepoResult<Vec<MediaContent>>;

    /// Media uploaded by a user, newest first
    async fn get_user_media(&self, user_id: &str) -> RepoResult<Vec<MediaContent>>;

    /// Upload an asset; the backend assigns id, url and size
    async fn upload_media(&self, media: &MediaContent, data: Vec<u8>) -> RepoResult<MediaContent>;

    /// Delete media
    async fn delete_media(&self, id: &str) -> RepoResult<()>;

    /// Increment the like counter, returning the new count
    async fn like_media(&self, id: &str, user_id: &str) -> RepoResult<i64>;

    /// Decrement the like counter, returning the new count
    async fn unlike_media(&self, id: &str, user_id: &str) -> RepoResult<i64>;

    /// Increment the view counter, returning the new count
    async fn record_view(&self, id: &str) -> RepoResult<i64>;

    /// Subscribe to the like count of one media item
    fn observe_likes(&self, id: &str) -> Subscription<i64>;
}

// ============================================================================
// Chat Repository
// ============================================================================

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Get chat room by ID
    async fn get_chat_room(&self, room_id: &str) -> RepoResult<ChatRoom>;

    /// Rooms a user participates in, most recently active first
    async fn get_chat_rooms(&self, user_id: &str) -> RepoResult<Vec<ChatRoom>>;

    /// Create a new room
    async fn create_chat_room(&self, room: &ChatRoom) -> RepoResult<ChatRoom>;

    /// Messages in a room, oldest first, optionally before a timestamp
    async fn get_messages(
        &self,
        room_id: &str,
        limit: usize,
        before: Option<DateTime<Utc>>,
    ) -> RepoResult<Vec<ChatMessage>>;

    /// Send a message; the backend assigns the id and updates the room preview
    async fn send_message(&self, message: &ChatMessage) -> RepoResult<ChatMessage>;

    /// Replace message content
    async fn edit_message(&self, room_id: &str, message_id: &str, content: &str)
        -> RepoResult<ChatMessage>;

    /// Soft delete a message
    async fn delete_message(&self, room_id: &str, message_id: &str) -> RepoResult<()>;

    /// Add a reaction
    async fn add_reaction(
        &self,
        room_id: &str,
        message_id: &str,
        emoji: &str,
        user_id: &str,
    ) -> RepoResult<ChatMessage>;

    /// Remove a reaction
    async fn remove_reaction(
        &self,
        room_id: &str,
        message_id: &str,
        emoji: &str,
        user_id: &str,
    ) -> RepoResult<ChatMessage>;

    /// Add `user_id` to every message's read receipts, returning how many changed
    async fn mark_as_read(&self, room_id: &str, user_id: &str) -> RepoResult<usize>;

    /// Remove a participant from a room
    async fn leave_chat_room(&self, room_id: &str, user_id: &str) -> RepoResult<()>;

    /// Subscribe to the message list of one room
    fn observe_messages(&self, room_id: &str) -> Subscription<Vec<ChatMessage>>;
}

// ============================================================================
// User Follow Repository
// ============================================================================

#[async_trait]
pub trait UserFollowRepository: Send + Sync {
    /// Follow a user
    async fn follow_user(&self, follower_id: &str, following_id: &str) -> RepoResult<UserFollow>;

    /// Unfollow a user
    async fn unfollow_user(&self, follower_id: &str, following_id: &str) -> RepoResult<()>;

    /// Check if a follow edge exists
    async fn is_following(&self, follower_id: &str, following_id: &str) -> RepoResult<bool>;

    /// Users following `user_id`, newest first
    async fn get_followers(&self, user_id: &str, limit: usize) -> RepoResult<Vec<UserFollow>>;

    /// Users `user_id` follows, newest first
    async fn get_following(&self, user_id: &str, limit: usize) -> RepoResult<Vec<UserFollow>>;

    async fn get_follower_count(&self, user_id: &str) -> RepoResult<i64>;

    async fn get_following_count(&self, user_id: &str) -> RepoResult<i64>;
}

// ============================================================================
// Auth Repository
// ============================================================================

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Create an account and its user profile, then sign in
    async fn sign_up(&self, email: &str, password: &str, username: &str) -> RepoResult<User>;

    /// Sign in with email and password
    async fn sign_in(&self, email: &str, password: &str) -> RepoResult<User>;

    /// Sign out and clear the session
    async fn sign_out(&self) -> RepoResult<()>;

    /// Request a password reset email
    async fn send_password_reset(&self, email: &str) -> RepoResult<()>;

    /// Delete the signed-in account and clear the session
    async fn delete_account(&self) -> RepoResult<()>;

    /// Signed-in user from the session
    fn current_user(&self) -> Option<User>;

    fn is_signed_in(&self) -> bool {
        self.current_user().is_some()
    }
}
