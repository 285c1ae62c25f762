//! # party-core
//!
//! Domain layer containing entities, value objects, username rules, errors and
//! repository traits. This crate has zero dependencies on infrastructure
//! (document store, session storage, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ChatMessage, ChatRoom, ChatRoomType, MediaContent, MediaMetadata, MediaMetrics, MediaType,
    MessageReaction, MessageType, PartyAttendee, PartyEvent, PartyPrivacy, PartyStatus,
    ReactionCount, RsvpStatus, User, UserFollow,
};
pub use error::{DataSourceError, DomainError, ErrorKind};
pub use traits::{
    AuthRepository, ChatRepository, MediaRepository, PartyRepository, RepoResult, Subscription,
    UserFollowRepository, UserRepository,
};
pub use value_objects::{SocialLinks, UserSummary, UsernamePolicy, UsernameValidation, Venue};
