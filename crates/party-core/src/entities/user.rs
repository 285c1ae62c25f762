//! User entity - an authenticated Party Gallery account

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::value_objects::{SocialLinks, UserSummary};

/// User entity representing a profile owned by the signed-in session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub firebase_id: String,
    pub email: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub cover_photo_url: Option<String>,
    pub social_links: SocialLinks,
    pub tags: Vec<String>,
    pub followers_count: i64,
    pub following_count: i64,
    pub is_verified: bool,
    pub is_profile_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(
        id: impl Into<String>,
        firebase_id: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            firebase_id: firebase_id.into(),
            email: email.into(),
            username: username.into(),
            first_name: None,
            last_name: None,
            bio: None,
            birth_date: None,
            avatar_url: None,
            cover_photo_url: None,
            social_links: SocialLinks::default(),
            tags: Vec::new(),
            followers_count: 0,
            following_count: 0,
            is_verified: false,
            is_profile_complete: false,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// First and last name joined, if any part is set
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Name shown in the UI: full name, falling back to the username
    pub fn display_name(&self) -> String {
        self.full_name().unwrap_or_else(|| self.username.clone())
    }

    /// Denormalized reference used by parties and media
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            username: self.username.clone(),
            display_name: self.display_name(),
            avatar_url: self.avatar_url.clone(),
            is_verified: self.is_verified,
        }
    }

    /// Age in whole years on the given date
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        let birth = self.birth_date?;
        let mut age = date.year() - birth.year();
        if (date.month(), date.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }

    /// Profile has the fields required before joining parties
    pub fn has_required_profile_fields(&self) -> bool {
        self.first_name.is_some() && self.birth_date.is_some() && self.avatar_url.is_some()
    }

    /// Record a successful sign-in
    pub fn touch_login(&mut self, at: DateTime<Utc>) {
        self.last_login_at = Some(at);
    }
}
