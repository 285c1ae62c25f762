//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Duration, Utc};
use party_core::{MediaContent, MediaType, PartyEvent, User, Venue};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Sign-up input
#[derive(Debug, Clone)]
pub struct SignUp {
    pub email: String,
    pub password: String,
    pub username: String,
}

impl SignUp {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("guest{suffix}@example.com"),
            password: "TestPass123".to_string(),
            username: format!("guest_{suffix}"),
        }
    }
}

/// A planned party hosted by `host`, starting `starts_in` from now
pub fn planned_party(host: &User, title: &str, starts_in: Duration) -> PartyEvent {
    PartyEvent::new(
        host.summary(),
        title,
        Venue::new("Test Venue"),
        Utc::now() + starts_in,
    )
}

/// A photo of `party_id` uploaded by `uploader`
pub fn party_photo(party_id: &str, uploader: &User) -> MediaContent {
    let mut media = MediaContent::new(party_id, uploader.summary(), MediaType::Photo);
    media.caption = Some("test shot".to_string());
    media
}
