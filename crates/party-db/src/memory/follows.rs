use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use tracing::instrument;

use party_core::DataSourceError;

use super::{now_millis, MemoryBackend, FOLLOWS};
use crate::models::{follow_document_id, UserFollowDto};
use crate::sources::{FollowDataSource, SourceResult};

impl MemoryBackend {
    /// Keep the denormalized counters on both user documents in step
    fn bump_follow_counts(&self, follower_id: &str, following_id: &str, delta: i64) {
        if let Some(mut follower) = self.users.get_mut(follower_id) {
            follower.following_count = (follower.following_count + delta).max(0);
        }
        if let Some(mut followed) = self.users.get_mut(following_id) {
            followed.followers_count = (followed.followers_count + delta).max(0);
        }
    }

    fn follow_edges<P>(&self, predicate: P, limit: usize) -> Vec<UserFollowDto>
    where
        P: Fn(&UserFollowDto) -> bool,
    {
        let mut edges: Vec<UserFollowDto> = self
            .follows
            .iter()
            .filter(|f| predicate(f.value()))
            .map(|f| f.value().clone())
            .collect();
        edges.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        edges.truncate(limit);
        edges
    }
}

#[async_trait]
impl FollowDataSource for MemoryBackend {
    #[instrument(skip(self, follow), fields(follower_id = %follow.follower_id, following_id = %follow.following_id))]
    async fn create_follow(&self, follow: &UserFollowDto) -> SourceResult<UserFollowDto> {
        self.ensure_available()?;
        let mut doc = follow.clone();
        if doc.created_at == 0 {
            doc.created_at = now_millis();
        }

        let key = doc.document_id();
        match self.follows.entry(key.clone()) {
            Entry::Occupied(_) => return Err(DataSourceError::already_exists(FOLLOWS, key)),
            Entry::Vacant(slot) => {
                slot.insert(doc.clone());
            }
        }
        self.bump_follow_counts(&doc.follower_id, &doc.following_id, 1);
        Ok(doc)
    }

    #[instrument(skip(self))]
    async fn delete_follow(&self, follower_id: &str, following_id: &str) -> SourceResult<()> {
        self.ensure_available()?;
        if self
            .follows
            .remove(&follow_document_id(follower_id, following_id))
            .is_some()
        {
            self.bump_follow_counts(follower_id, following_id, -1);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn follow_exists(&self, follower_id: &str, following_id: &str) -> SourceResult<bool> {
        self.ensure_available()?;
        Ok(self
            .follows
            .contains_key(&follow_document_id(follower_id, following_id)))
    }

    #[instrument(skip(self))]
    async fn list_followers(&self, user_id: &str, limit: usize) -> SourceResult<Vec<UserFollowDto>> {
        self.ensure_available()?;
        Ok(self.follow_edges(|f| f.following_id == user_id, limit))
    }

    #[instrument(skip(self))]
    async fn list_following(&self, user_id: &str, limit: usize) -> SourceResult<Vec<UserFollowDto>> {
        self.ensure_available()?;
        Ok(self.follow_edges(|f| f.follower_id == user_id, limit))
    }

    #[instrument(skip(self))]
    async fn count_followers(&self, user_id: &str) -> SourceResult<i64> {
        self.ensure_available()?;
        Ok(self.follows.iter().filter(|f| f.following_id == user_id).count() as i64)
    }

    #[instrument(skip(self))]
    async fn count_following(&self, user_id: &str) -> SourceResult<i64> {
        self.ensure_available()?;
        Ok(self.follows.iter().filter(|f| f.follower_id == user_id).count() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserDto;
    use crate::sources::UserDataSource;

    fn edge(follower: &str, following: &str, created_at: i64) -> UserFollowDto {
        UserFollowDto {
            follower_id: follower.to_string(),
            following_id: following.to_string(),
            created_at,
        }
    }

    #[tokio::test]
    async fn test_follow_updates_counters() {
        let backend = MemoryBackend::new();
        for id in ["a", "b"] {
            let user = UserDto {
                id: id.to_string(),
                username: id.to_string(),
                ..Default::default()
            };
            backend.create_user(&user).await.unwrap();
        }

        backend.create_follow(&edge("a", "b", 1)).await.unwrap();
        assert_eq!(backend.get_user("a").await.unwrap().unwrap().following_count, 1);
        assert_eq!(backend.get_user("b").await.unwrap().unwrap().followers_count, 1);

        backend.delete_follow("a", "b").await.unwrap();
        backend.delete_follow("a", "b").await.unwrap();
        assert_eq!(backend.get_user("b").await.unwrap().unwrap().followers_count, 0);
    }

    #[tokio::test]
    async fn test_duplicate_follow() {
        let backend = MemoryBackend::new();
        backend.create_follow(&edge("a", "b", 1)).await.unwrap();
        let err = backend.create_follow(&edge("a", "b", 2)).await.unwrap_err();
        assert_eq!(err, DataSourceError::already_exists(FOLLOWS, "a_b"));
    }

    #[tokio::test]
    async fn test_listing_newest_first() {
        let backend = MemoryBackend::new();
        backend.create_follow(&edge("a", "c", 1)).await.unwrap();
        backend.create_follow(&edge("b", "c", 2)).await.unwrap();
        backend.create_follow(&edge("c", "a", 3)).await.unwrap();

        let followers = backend.list_followers("c", 10).await.unwrap();
        assert_eq!(followers[0].follower_id, "b");
        assert_eq!(followers[1].follower_id, "a");
        assert_eq!(backend.count_followers("c").await.unwrap(), 2);
        assert_eq!(backend.count_following("c").await.unwrap(), 1);
        assert_eq!(backend.list_following("c", 10).await.unwrap().len(), 1);
    }
}
