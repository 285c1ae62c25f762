//! UserFollowRepository on top of a FollowDataSource

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use party_core::traits::{RepoResult, UserFollowRepository};
use party_core::{DomainError, UserFollow};

use super::error::source_error;
use crate::models::UserFollowDto;
use crate::sources::FollowDataSource;

#[derive(Clone)]
pub struct UserFollowRepositoryImpl {
    source: Arc<dyn FollowDataSource>,
}

impl UserFollowRepositoryImpl {
    pub fn new(source: Arc<dyn FollowDataSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl UserFollowRepository for UserFollowRepositoryImpl {
    #[instrument(skip(self))]
    async fn follow_user(&self, follower_id: &str, following_id: &str) -> RepoResult<UserFollow> {
        if follower_id == following_id {
            return Err(DomainError::CannotFollowSelf);
        }

        let follow = UserFollow::new(follower_id, following_id);
        let created = self
            .source
            .create_follow(&UserFollowDto::from(&follow))
            .await
            .map_err(source_error("follow_user"))?;

        info!(follower_id = %follower_id, following_id = %following_id, "User followed");
        Ok(UserFollow::from(created))
    }

    #[instrument(skip(self))]
    async fn unfollow_user(&self, follower_id: &str, following_id: &str) -> RepoResult<()> {
        self.source
            .delete_follow(follower_id, following_id)
            .await
            .map_err(source_error("unfollow_user"))?;

        info!(follower_id = %follower_id, following_id = %following_id, "User unfollowed");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_following(&self, follower_id: &str, following_id: &str) -> RepoResult<bool> {
        self.source
            .follow_exists(follower_id, following_id)
            .await
            .map_err(source_error("is_following"))
    }

    #[instrument(skip(self))]
    async fn get_followers(&self, user_id: &str, limit: usize) -> RepoResult<Vec<UserFollow>> {
        let edges = self
            .source
            .list_followers(user_id, limit)
            .await
            .map_err(source_error("get_followers"))?;

        Ok(edges.into_iter().map(UserFollow::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_following(&self, user_id: &str, limit: usize) -> RepoResult<Vec<UserFollow>> {
        let edges = self
            .source
            .list_following(user_id, limit)
            .await
            .map_err(source_error("get_following"))?;

        Ok(edges.into_iter().map(UserFollow::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_follower_count(&self, user_id: &str) -> RepoResult<i64> {
        self.source
            .count_followers(user_id)
            .await
            .map_err(source_error("get_follower_count"))
    }

    #[instrument(skip(self))]
    async fn get_following_count(&self, user_id: &str) -> RepoResult<i64> {
        self.source
            .count_following(user_id)
            .await
            .map_err(source_error("get_following_count"))
    }
}
