//! UserRepository on top of a UserDataSource

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use party_core::traits::{RepoResult, Subscription, UserRepository};
use party_core::{DomainError, User, UsernamePolicy, UsernameValidation};

use super::error::{source_error, user_not_found};
use crate::models::UserDto;
use crate::session::SessionState;
use crate::sources::UserDataSource;

/// Run the username checks in order: format rules, then remote availability.
///
/// A failed availability lookup is returned as an error unless the policy
/// allows failing open.
pub(crate) async fn check_username(
    policy: &UsernamePolicy,
    source: &dyn UserDataSource,
    username: &str,
) -> RepoResult<UsernameValidation> {
    if let Some(failure) = policy.check_format(username) {
        return Ok(failure);
    }

    match source.username_exists(username).await {
        Ok(true) => Ok(UsernameValidation::AlreadyTaken),
        Ok(false) => Ok(UsernameValidation::Valid),
        Err(e) if policy.fail_open_on_lookup_error => {
            warn!(username, error = %e, "Username lookup failed, accepting username");
            Ok(UsernameValidation::Valid)
        }
        Err(e) => Err(source_error("validate_username")(e)),
    }
}

/// UserRepository backed by a remote user collection
#[derive(Clone)]
pub struct UserRepositoryImpl {
    source: Arc<dyn UserDataSource>,
    session: SessionState,
    policy: UsernamePolicy,
}

impl UserRepositoryImpl {
    pub fn new(source: Arc<dyn UserDataSource>, session: SessionState) -> Self {
        Self {
            source,
            session,
            policy: UsernamePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: UsernamePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &UsernamePolicy {
        &self.policy
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    #[instrument(skip(self))]
    async fn get_user(&self, id: &str) -> RepoResult<User> {
        self.source
            .get_user(id)
            .await
            .map_err(source_error("get_user"))?
            .map(User::from)
            .ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = self
            .source
            .get_user_by_username(username)
            .await
            .map_err(source_error("find_by_username"))?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_firebase_id(&self, firebase_id: &str) -> RepoResult<Option<User>> {
        let result = self
            .source
            .get_user_by_firebase_id(firebase_id)
            .await
            .map_err(source_error("find_by_firebase_id"))?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create_user(&self, user: &User) -> RepoResult<User> {
        let created = self
            .source
            .create_user(&UserDto::from(user))
            .await
            .map_err(source_error("create_user"))?;

        info!(user_id = %created.id, "User created");
        Ok(User::from(created))
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update_user(&self, user: &User) -> RepoResult<User> {
        let updated = self
            .source
            .update_user(&UserDto::from(user))
            .await
            .map_err(source_error("update_user"))?;

        let updated = User::from(updated);
        if self.session.refresh_if_current(&updated) {
            info!(user_id = %updated.id, "Session user refreshed");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: &str) -> RepoResult<()> {
        self.source
            .delete_user(id)
            .await
            .map_err(source_error("delete_user"))?;

        if self.session.clear_if_current(id) {
            info!(user_id = %id, "Deleted user was signed in, session cleared");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn search_users(&self, query: &str, limit: usize) -> RepoResult<Vec<User>> {
        if query.trim().is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let found = self
            .source
            .search_users(query, limit)
            .await
            .map_err(source_error("search_users"))?;

        Ok(found.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn validate_username(&self, username: &str) -> RepoResult<UsernameValidation> {
        check_username(&self.policy, self.source.as_ref(), username).await
    }

    #[instrument(skip(self))]
    async fn is_username_available(&self, username: &str) -> RepoResult<bool> {
        let exists = self
            .source
            .username_exists(username)
            .await
            .map_err(source_error("is_username_available"))?;

        Ok(!exists)
    }

    fn current_user(&self) -> Option<User> {
        self.session.current()
    }

    fn observe_current_user(&self) -> Subscription<Option<User>> {
        self.session.observe()
    }
}

/// Reject a username whose validation is not `Valid`
pub(crate) fn require_valid(validation: UsernameValidation) -> RepoResult<()> {
    if validation.is_valid() {
        Ok(())
    } else {
        Err(DomainError::InvalidUsername(validation))
    }
}
