//! Document models - serde structs mirroring backend documents
//!
//! Field names are camelCase, timestamps are epoch milliseconds and enums are
//! plain strings. Missing fields deserialize to defaults.

mod chat;
mod follow;
mod media;
mod party;
mod user;

pub use chat::{ChatMessageDto, ChatMessagePreviewDto, ChatRoomDto, ReactionDto};
pub use follow::{follow_document_id, UserFollowDto};
pub use media::{MediaContentDto, MediaMetadataDto, MediaMetricsDto};
pub use party::{PartyAttendeeDto, PartyEventDto, VenueDto};
pub use user::{SocialLinksDto, UserDto, UserSummaryDto};
