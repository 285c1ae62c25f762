//! Domain entities - core business objects

mod chat_room;
mod follow;
mod media;
mod message;
mod party;
mod reaction;
mod user;

pub use chat_room::{ChatRoom, ChatRoomType};
pub use follow::UserFollow;
pub use media::{MediaContent, MediaMetadata, MediaMetrics, MediaType};
pub use message::{ChatMessage, MessageType};
pub use party::{PartyAttendee, PartyEvent, PartyPrivacy, PartyStatus, RsvpStatus};
pub use reaction::{MessageReaction, ReactionCount};
pub use user::User;
