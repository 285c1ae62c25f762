//! MediaRepository on top of a MediaDataSource

use std::sync::Arc;

use async_trait::async_trait;
use futures::{future, StreamExt};
use tracing::{debug, info, instrument};

use party_core::traits::{MediaRepository, RepoResult, Subscription};
use party_core::MediaContent;

use super::error::{media_not_found, source_error};
use crate::models::MediaContentDto;
use crate::sources::MediaDataSource;
use crate::stream::watch_stream;

#[derive(Clone)]
pub struct MediaRepositoryImpl {
    source: Arc<dyn MediaDataSource>,
}

impl MediaRepositoryImpl {
    pub fn new(source: Arc<dyn MediaDataSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl MediaRepository for MediaRepositoryImpl {
    #[instrument(skip(self))]
    async fn get_media(&self, id: &str) -> RepoResult<MediaContent> {
        self.source
            .get_media(id)
            .await
            .map_err(source_error("get_media"))?
            .map(MediaContent::from)
            .ok_or_else(|| media_not_found(id))
    }

    #[instrument(skip(self))]
    async fn get_party_media(&self, party_id: &str, limit: usize) -> RepoResult<Vec<MediaContent>> {
        let media = self
            .source
            .list_party_media(party_id, limit)
            .await
            .map_err(source_error("get_party_media"))?;

        Ok(media.into_iter().map(MediaContent::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_user_media(&self, user_id: &str) -> RepoResult<Vec<MediaContent>> {
        let media = self
            .source
            .list_user_media(user_id)
            .await
            .map_err(source_error("get_user_media"))?;

        Ok(media.into_iter().map(MediaContent::from).collect())
    }

    #[instrument(skip(self, media, data), fields(party_id = %media.party_id, bytes = data.len()))]
    async fn upload_media(&self, media: &MediaContent, data: Vec<u8>) -> RepoResult<MediaContent> {
        let stored = self
            .source
            .upload_media(&MediaContentDto::from(media), data)
            .await
            .map_err(source_error("upload_media"))?;

        info!(media_id = %stored.id, media_type = %stored.media_type, "Media uploaded");
        Ok(MediaContent::from(stored))
    }

    #[instrument(skip(self))]
    async fn delete_media(&self, id: &str) -> RepoResult<()> {
        self.source
            .delete_media(id)
            .await
            .map_err(source_error("delete_media"))?;

        info!(media_id = %id, "Media deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn like_media(&self, id: &str, user_id: &str) -> RepoResult<i64> {
        let likes = self
            .source
            .adjust_likes(id, 1)
            .await
            .map_err(source_error("like_media"))?;

        debug!(likes, "Media liked");
        Ok(likes)
    }

    #[instrument(skip(self))]
    async fn unlike_media(&self, id: &str, user_id: &str) -> RepoResult<i64> {
        let likes = self
            .source
            .adjust_likes(id, -1)
            .await
            .map_err(source_error("unlike_media"))?;

        debug!(likes, "Media unliked");
        Ok(likes)
    }

    #[instrument(skip(self))]
    async fn record_view(&self, id: &str) -> RepoResult<i64> {
        self.source
            .increment_views(id)
            .await
            .map_err(source_error("record_view"))
    }

    /// Skips snapshots where the media does not exist
    fn observe_likes(&self, id: &str) -> Subscription<i64> {
        watch_stream(self.source.watch_media(id))
            .filter_map(|media| future::ready(media.map(|m| m.metrics.likes)))
            .boxed()
    }
}
