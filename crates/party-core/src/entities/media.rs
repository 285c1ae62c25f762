//! Media content entity - photos, videos and audio uploaded to a party

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::UserSummary;

/// Kind of uploaded asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaType {
    #[default]
    Photo,
    Video,
    Audio,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "PHOTO",
            Self::Video => "VIDEO",
            Self::Audio => "AUDIO",
        }
    }

    /// Guess the media type from a MIME type
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(Self::Photo)
        } else if mime.starts_with("video/") {
            Some(Self::Video)
        } else if mime.starts_with("audio/") {
            Some(Self::Audio)
        } else {
            None
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PHOTO" => Ok(Self::Photo),
            "VIDEO" => Ok(Self::Video),
            "AUDIO" => Ok(Self::Audio),
            _ => Err(format!("Invalid media type: {s}")),
        }
    }
}

/// Technical metadata of an asset
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaMetadata {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration_ms: Option<i64>,
    pub size_bytes: i64,
    pub mime_type: Option<String>,
}

/// Social counters; plain values with no dedup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MediaMetrics {
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub views: i64,
}

impl MediaMetrics {
    /// Likes, comments and shares combined
    pub fn engagement(&self) -> i64 {
        self.likes + self.comments + self.shares
    }
}

/// Media content entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaContent {
    pub id: String,
    pub party_id: String,
    pub uploader: UserSummary,
    pub media_type: MediaType,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub metadata: MediaMetadata,
    pub metrics: MediaMetrics,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl MediaContent {
    /// Create a pending upload; id and url are filled in by the backend
    pub fn new(party_id: impl Into<String>, uploader: UserSummary, media_type: MediaType) -> Self {
        Self {
            id: String::new(),
            party_id: party_id.into(),
            uploader,
            media_type,
            url: String::new(),
            thumbnail_url: None,
            caption: None,
            metadata: MediaMetadata::default(),
            metrics: MediaMetrics::default(),
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_photo(&self) -> bool {
        self.media_type == MediaType::Photo
    }

    #[inline]
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    #[inline]
    pub fn is_audio(&self) -> bool {
        self.media_type == MediaType::Audio
    }

    /// Width over height, when both are known and non-zero
    pub fn aspect_ratio(&self) -> Option<f64> {
        match (self.metadata.width, self.metadata.height) {
            (Some(w), Some(h)) if h > 0 => Some(f64::from(w) / f64::from(h)),
            _ => None,
        }
    }
}
