//! Test helpers for integration tests
//!
//! Provides a fresh application per test and utilities for reading
//! subscriptions without hanging.

use std::time::Duration;

use anyhow::{anyhow, Result};
use futures::{Stream, StreamExt};
use party_core::User;
use party_service::AppContext;

use crate::fixtures::SignUp;

/// How long a subscription may stay silent before a test fails
pub const STREAM_TIMEOUT: Duration = Duration::from_secs(2);

/// Test application over its own in-memory backend
pub struct TestApp {
    pub ctx: AppContext,
}

impl TestApp {
    pub fn start() -> Self {
        Self {
            ctx: AppContext::in_memory(),
        }
    }

    /// Sign up a fresh account; it stays signed in
    pub async fn sign_up(&self) -> Result<(SignUp, User)> {
        let input = SignUp::unique();
        let user = self
            .ctx
            .auth_repo()
            .sign_up(&input.email, &input.password, &input.username)
            .await?;
        Ok((input, user))
    }

    /// Sign up a fresh account, then sign out
    pub async fn create_user(&self) -> Result<User> {
        let (_, user) = self.sign_up().await?;
        self.ctx.auth_repo().sign_out().await?;
        Ok(user)
    }
}

/// Next item of a subscription, failing after `STREAM_TIMEOUT`
pub async fn next_item<S>(stream: &mut S) -> Result<S::Item>
where
    S: Stream + Unpin,
{
    tokio::time::timeout(STREAM_TIMEOUT, stream.next())
        .await
        .map_err(|_| anyhow!("subscription timed out"))?
        .ok_or_else(|| anyhow!("subscription ended"))
}
