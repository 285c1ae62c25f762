//! Party documents

use serde::{Deserialize, Serialize};

use super::user::UserSummaryDto;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VenueDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Document stored in the `parties` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyEventDto {
    pub id: String,
    pub host: UserSummaryDto,
    pub co_hosts: Vec<UserSummaryDto>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    pub venue: VenueDto,
    pub start_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    /// `PLANNED`, `LIVE`, `ENDED` or `CANCELLED`
    pub status: String,
    /// `PUBLIC`, `FRIENDS_ONLY` or `PRIVATE`
    pub privacy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    pub attendees_count: i64,
    pub media_count: i64,
    pub music_genres: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// RSVP document, one per (party, user)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyAttendeeDto {
    pub party_id: String,
    pub user_id: String,
    pub status: String,
    pub responded_at: i64,
}
