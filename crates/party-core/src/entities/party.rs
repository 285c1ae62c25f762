//! Party event entity and RSVP records

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::{UserSummary, Venue};

/// Lifecycle status of a party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartyStatus {
    #[default]
    Planned,
    Live,
    Ended,
    Cancelled,
}

impl PartyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "PLANNED",
            Self::Live => "LIVE",
            Self::Ended => "ENDED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for PartyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PLANNED" => Ok(Self::Planned),
            "LIVE" => Ok(Self::Live),
            "ENDED" => Ok(Self::Ended),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid party status: {s}")),
        }
    }
}

/// Who can see and join a party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartyPrivacy {
    #[default]
    Public,
    FriendsOnly,
    Private,
}

impl PartyPrivacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::FriendsOnly => "FRIENDS_ONLY",
            Self::Private => "PRIVATE",
        }
    }
}

impl fmt::Display for PartyPrivacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartyPrivacy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUBLIC" => Ok(Self::Public),
            "FRIENDS_ONLY" => Ok(Self::FriendsOnly),
            "PRIVATE" => Ok(Self::Private),
            _ => Err(format!("Invalid party privacy: {s}")),
        }
    }
}

/// Party event entity
#[derive(Debug, Clone, PartialEq)]
pub struct PartyEvent {
    pub id: String,
    pub host: UserSummary,
    pub co_hosts: Vec<UserSummary>,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub venue: Venue,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: PartyStatus,
    pub privacy: PartyPrivacy,
    pub max_attendees: Option<u32>,
    pub attendees_count: i64,
    pub media_count: i64,
    pub music_genres: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PartyEvent {
    /// Create a new planned party; the id is assigned by the backend when empty
    pub fn new(
        host: UserSummary,
        title: impl Into<String>,
        venue: Venue,
        start_time: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            host,
            co_hosts: Vec::new(),
            title: title.into(),
            description: None,
            cover_image_url: None,
            venue,
            start_time,
            end_time: None,
            status: PartyStatus::Planned,
            privacy: PartyPrivacy::Public,
            max_attendees: None,
            attendees_count: 0,
            media_count: 0,
            music_genres: Vec::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.status == PartyStatus::Live
    }

    #[inline]
    pub fn has_ended(&self) -> bool {
        self.status == PartyStatus::Ended
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.status == PartyStatus::Cancelled
    }

    /// Planned and starting after `now`
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.status == PartyStatus::Planned && self.start_time > now
    }

    /// Attendee cap reached
    pub fn is_full(&self) -> bool {
        self.max_attendees
            .is_some_and(|max| self.attendees_count >= i64::from(max))
    }

    /// Scheduled length, when an end time is known
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }

    /// User is the host or one of the co-hosts
    pub fn is_hosted_by(&self, user_id: &str) -> bool {
        self.host.id == user_id || self.co_hosts.iter().any(|c| c.id == user_id)
    }
}

/// A user's attendance response to a party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RsvpStatus {
    Going,
    #[default]
    Interested,
    NotGoing,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Going => "GOING",
            Self::Interested => "INTERESTED",
            Self::NotGoing => "NOT_GOING",
        }
    }

    /// Counts towards `attendees_count`
    #[inline]
    pub fn is_attending(&self) -> bool {
        matches!(self, Self::Going)
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RsvpStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GOING" => Ok(Self::Going),
            "INTERESTED" => Ok(Self::Interested),
            "NOT_GOING" => Ok(Self::NotGoing),
            _ => Err(format!("Invalid RSVP status: {s}")),
        }
    }
}

/// RSVP record linking a user to a party
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyAttendee {
    pub party_id: String,
    pub user_id: String,
    pub status: RsvpStatus,
    pub responded_at: DateTime<Utc>,
}

impl PartyAttendee {
    pub fn new(party_id: impl Into<String>, user_id: impl Into<String>, status: RsvpStatus) -> Self {
        Self {
            party_id: party_id.into(),
            user_id: user_id.into(),
            status,
            responded_at: Utc::now(),
        }
    }
}
