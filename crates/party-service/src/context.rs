//! Application context - dependency container for the data layer
//!
//! Holds the backend, the session and one repository per entity.

use std::sync::Arc;

use party_common::{AppConfig, PasswordService};
use party_core::traits::{
    AuthRepository, ChatRepository, MediaRepository, PartyRepository, UserFollowRepository,
    UserRepository,
};
use party_core::UsernamePolicy;
use party_db::{
    AuthRepositoryImpl, ChatRepositoryImpl, MediaRepositoryImpl, MemoryBackend,
    PartyRepositoryImpl, SessionState, UserFollowRepositoryImpl, UserRepositoryImpl,
};

const DEFAULT_PAGE_SIZE: usize = 20;
const DEFAULT_CHAT_HISTORY_LIMIT: usize = 50;

/// Application context containing all repositories
///
/// Repositories share one backend and one session, so a sign-in through the
/// auth repository is visible through `user_repo().current_user()`.
#[derive(Clone)]
pub struct AppContext {
    backend: Arc<MemoryBackend>,
    session: SessionState,

    user_repo: Arc<dyn UserRepository>,
    party_repo: Arc<dyn PartyRepository>,
    media_repo: Arc<dyn MediaRepository>,
    chat_repo: Arc<dyn ChatRepository>,
    follow_repo: Arc<dyn UserFollowRepository>,
    auth_repo: Arc<dyn AuthRepository>,

    page_size: usize,
    chat_history_limit: usize,
}

impl AppContext {
    /// Build a context from loaded configuration
    pub fn from_config(config: &AppConfig) -> Self {
        AppContextBuilder::new()
            .username_policy(config.username.policy())
            .page_size(config.data.default_page_size)
            .chat_history_limit(config.data.chat_history_limit)
            .build()
    }

    /// Context over a fresh backend with default settings
    pub fn in_memory() -> Self {
        AppContextBuilder::new().build()
    }

    // === Backend ===

    pub fn backend(&self) -> &Arc<MemoryBackend> {
        &self.backend
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn party_repo(&self) -> &dyn PartyRepository {
        self.party_repo.as_ref()
    }

    pub fn media_repo(&self) -> &dyn MediaRepository {
        self.media_repo.as_ref()
    }

    pub fn chat_repo(&self) -> &dyn ChatRepository {
        self.chat_repo.as_ref()
    }

    pub fn follow_repo(&self) -> &dyn UserFollowRepository {
        self.follow_repo.as_ref()
    }

    pub fn auth_repo(&self) -> &dyn AuthRepository {
        self.auth_repo.as_ref()
    }

    // === Settings ===

    /// Default listing size
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Messages loaded when a chat room opens
    pub fn chat_history_limit(&self) -> usize {
        self.chat_history_limit
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("backend", &self.backend.stats())
            .field("signed_in", &self.session.current_id())
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating an AppContext with custom settings
#[derive(Default)]
pub struct AppContextBuilder {
    backend: Option<Arc<MemoryBackend>>,
    session: Option<SessionState>,
    policy: Option<UsernamePolicy>,
    passwords: Option<PasswordService>,
    page_size: Option<usize>,
    chat_history_limit: Option<usize>,
}

impl AppContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an existing backend
    pub fn backend(mut self, backend: Arc<MemoryBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn session(mut self, session: SessionState) -> Self {
        self.session = Some(session);
        self
    }

    pub fn username_policy(mut self, policy: UsernamePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn password_service(mut self, passwords: PasswordService) -> Self {
        self.passwords = Some(passwords);
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn chat_history_limit(mut self, limit: usize) -> Self {
        self.chat_history_limit = Some(limit);
        self
    }

    /// Build the AppContext, filling unset parts with defaults
    pub fn build(self) -> AppContext {
        let passwords = self.passwords.unwrap_or_default();
        let backend = self.backend.unwrap_or_else(|| {
            Arc::new(MemoryBackend::with_password_service(passwords.clone()))
        });
        let session = self.session.unwrap_or_default();
        let policy = self.policy.unwrap_or_default();

        let user_repo = UserRepositoryImpl::new(backend.clone(), session.clone())
            .with_policy(policy.clone());
        let auth_repo = AuthRepositoryImpl::new(backend.clone(), backend.clone(), session.clone())
            .with_policy(policy)
            .with_password_service(passwords);

        AppContext {
            user_repo: Arc::new(user_repo),
            party_repo: Arc::new(PartyRepositoryImpl::new(backend.clone())),
            media_repo: Arc::new(MediaRepositoryImpl::new(backend.clone())),
            chat_repo: Arc::new(ChatRepositoryImpl::new(backend.clone())),
            follow_repo: Arc::new(UserFollowRepositoryImpl::new(backend.clone())),
            auth_repo: Arc::new(auth_repo),
            backend,
            session,
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            chat_history_limit: self.chat_history_limit.unwrap_or(DEFAULT_CHAT_HISTORY_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppContext>();
    }

    #[test]
    fn test_from_config_applies_settings() {
        let config = AppConfig::from_lookup(|key| match key {
            "DEFAULT_PAGE_SIZE" => Some("5".to_string()),
            "CHAT_HISTORY_LIMIT" => Some("12".to_string()),
            _ => None,
        })
        .unwrap();

        let ctx = AppContext::from_config(&config);
        assert_eq!(ctx.page_size(), 5);
        assert_eq!(ctx.chat_history_limit(), 12);
    }

    #[tokio::test]
    async fn test_repositories_share_session() {
        let ctx = AppContext::in_memory();
        let user = ctx
            .auth_repo()
            .sign_up("ana@example.com", "party2024", "dj_ana")
            .await
            .unwrap();

        assert_eq!(ctx.user_repo().current_user().map(|u| u.id), Some(user.id));
        assert!(ctx.auth_repo().is_signed_in());
    }

    #[tokio::test]
    async fn test_policy_flows_into_user_repo() {
        let ctx = AppContextBuilder::new()
            .username_policy(UsernamePolicy::default().with_reserved(["partyhost"]))
            .build();

        let check = ctx.user_repo().validate_username("PartyHost").await.unwrap();
        assert_eq!(check, party_core::UsernameValidation::Reserved);
        let check = ctx.user_repo().validate_username("admin").await.unwrap();
        assert!(check.is_valid());
    }
}
