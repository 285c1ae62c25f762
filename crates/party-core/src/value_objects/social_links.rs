//! Social profile links attached to a user

/// Optional links to a user's external profiles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SocialLinks {
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
}

impl SocialLinks {
    /// True when no link is set
    pub fn is_empty(&self) -> bool {
        self.instagram.is_none()
            && self.tiktok.is_none()
            && self.twitter.is_none()
            && self.website.is_none()
    }

    /// Number of links that are set
    pub fn count(&self) -> usize {
        [&self.instagram, &self.tiktok, &self.twitter, &self.website]
            .iter()
            .filter(|link| link.is_some())
            .count()
    }
}
