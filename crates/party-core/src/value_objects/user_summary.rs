//! Denormalized user reference embedded in parties and media

/// Lightweight user reference (host, co-host, uploader)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
}

impl UserSummary {
    /// Create a summary with only the identity fields set
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id: id.into(),
            display_name: username.clone(),
            username,
            avatar_url: None,
            is_verified: false,
        }
    }

    /// Handle shown in the UI: `@username`
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}
