//! Entity <-> document mappers
//!
//! - `From<Dto> for Entity`: decode backend documents into domain objects
//! - `From<&Entity> for Dto`: encode domain objects for writes
//!
//! Decoding never fails. Unknown enum strings and out-of-range timestamps are
//! logged and replaced with a fixed default.

mod chat;
mod follow;
mod media;
mod party;
mod user;

pub use chat::message_from_preview;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::warn;

/// Convert a timestamp to epoch milliseconds
#[inline]
pub fn to_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

/// Convert epoch milliseconds to a timestamp, falling back to the Unix epoch
pub fn from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_else(|| {
        warn!(millis, "Timestamp out of range, using epoch");
        DateTime::<Utc>::UNIX_EPOCH
    })
}

/// Birth dates are stored as UTC midnight
pub fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

pub fn date_from_millis(millis: i64) -> NaiveDate {
    from_millis(millis).date_naive()
}

/// Parse a stored enum string, substituting the type's default when unknown
pub fn parse_or_default<T>(raw: &str, field: &'static str) -> T
where
    T: FromStr + Default + fmt::Display,
{
    raw.parse().unwrap_or_else(|_| {
        let fallback = T::default();
        warn!(field, raw, %fallback, "Unknown enum value in document, using default");
        fallback
    })
}
