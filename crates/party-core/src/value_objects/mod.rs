//! Value objects - immutable types without an independent lifecycle

mod social_links;
mod user_summary;
mod username;
mod venue;

pub use social_links::SocialLinks;
pub use user_summary::UserSummary;
pub use username::{UsernamePolicy, UsernameValidation, DEFAULT_RESERVED_USERNAMES};
pub use venue::Venue;
