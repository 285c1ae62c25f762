//! AuthRepository on top of an AuthDataSource and the user collection

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument};
use validator::Validate;

use party_common::PasswordService;
use party_core::traits::{AuthRepository, RepoResult};
use party_core::{DomainError, User, UsernamePolicy};

use super::error::{source_error, user_not_found};
use super::user::{check_username, require_valid};
use crate::models::UserDto;
use crate::session::SessionState;
use crate::sources::{AuthDataSource, UserDataSource};

#[derive(Debug, Validate)]
struct EmailInput {
    #[validate(email(message = "Invalid email format"))]
    email: String,
}

fn check_email(email: &str) -> RepoResult<()> {
    EmailInput {
        email: email.trim().to_string(),
    }
    .validate()
    .map_err(|_| DomainError::InvalidEmail)
}

/// AuthRepository that keeps the session in step with the account state
#[derive(Clone)]
pub struct AuthRepositoryImpl {
    auth: Arc<dyn AuthDataSource>,
    users: Arc<dyn UserDataSource>,
    session: SessionState,
    passwords: PasswordService,
    policy: UsernamePolicy,
}

impl AuthRepositoryImpl {
    pub fn new(
        auth: Arc<dyn AuthDataSource>,
        users: Arc<dyn UserDataSource>,
        session: SessionState,
    ) -> Self {
        Self {
            auth,
            users,
            session,
            passwords: PasswordService::new(),
            policy: UsernamePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: UsernamePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_password_service(mut self, passwords: PasswordService) -> Self {
        self.passwords = passwords;
        self
    }
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    #[instrument(skip(self, password))]
    async fn sign_up(&self, email: &str, password: &str, username: &str) -> RepoResult<User> {
        check_email(email)?;
        if let Some(reason) = self.passwords.rules().violation(password) {
            return Err(DomainError::WeakPassword(reason));
        }
        require_valid(check_username(&self.policy, self.users.as_ref(), username).await?)?;

        let uid = self
            .auth
            .create_account(email.trim(), password)
            .await
            .map_err(source_error("sign_up"))?;

        let mut user = User::new(uid.clone(), uid, email.trim(), username);
        user.touch_login(Utc::now());
        let created = self
            .users
            .create_user(&UserDto::from(&user))
            .await
            .map_err(source_error("sign_up"))?;

        let user = User::from(created);
        self.session.set(user.clone());
        info!(user_id = %user.id, username = %user.username, "User signed up");
        Ok(user)
    }

    #[instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> RepoResult<User> {
        let uid = self
            .auth
            .sign_in(email.trim(), password)
            .await
            .map_err(source_error("sign_in"))?;

        let mut user = self
            .users
            .get_user_by_firebase_id(&uid)
            .await
            .map_err(source_error("sign_in"))?
            .map(User::from)
            .ok_or_else(|| user_not_found(&uid))?;

        user.touch_login(Utc::now());
        let updated = self
            .users
            .update_user(&UserDto::from(&user))
            .await
            .map_err(source_error("sign_in"))?;

        let user = User::from(updated);
        self.session.set(user.clone());
        info!(user_id = %user.id, "User signed in");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn sign_out(&self) -> RepoResult<()> {
        self.auth
            .sign_out()
            .await
            .map_err(source_error("sign_out"))?;

        self.session.clear();
        info!("User signed out");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn send_password_reset(&self, email: &str) -> RepoResult<()> {
        check_email(email)?;
        self.auth
            .send_password_reset(email.trim())
            .await
            .map_err(source_error("send_password_reset"))
    }

    #[instrument(skip(self))]
    async fn delete_account(&self) -> RepoResult<()> {
        let uid = self.auth.current_uid().ok_or(DomainError::NotAuthenticated)?;

        self.auth
            .delete_account()
            .await
            .map_err(source_error("delete_account"))?;
        // The account is gone; a failed profile delete must not leave it signed in.
        self.session.clear();

        self.users
            .delete_user(&uid)
            .await
            .map_err(source_error("delete_account"))?;
        info!(uid = %uid, "Account deleted");
        Ok(())
    }

    fn current_user(&self) -> Option<User> {
        self.session.current()
    }
}
