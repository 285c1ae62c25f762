use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, instrument};

use party_core::DataSourceError;

use super::{id_or_new, now_millis, MemoryBackend, MEDIA};
use crate::models::MediaContentDto;
use crate::sources::{MediaDataSource, SourceResult};

impl MemoryBackend {
    /// Push the document's current state to subscribers. The state is read
    /// under the watch lock so the last publish always carries the newest copy.
    fn publish_media(&self, id: &str) {
        if let Some(tx) = self.media_watchers.get(id) {
            tx.send_modify(|snapshot| {
                *snapshot = self.media.get(id).map(|m| m.value().clone());
            });
        }
    }

    fn bump_media_count(&self, party_id: &str, delta: i64) {
        if let Some(mut party) = self.parties.get_mut(party_id) {
            party.media_count = (party.media_count + delta).max(0);
        }
    }

    /// Apply `update` to one media document and return the resulting counter
    fn update_metric<F>(&self, id: &str, update: F) -> SourceResult<i64>
    where
        F: FnOnce(&mut MediaContentDto) -> i64,
    {
        let value = {
            let mut media = self
                .media
                .get_mut(id)
                .ok_or_else(|| DataSourceError::not_found(MEDIA, id))?;
            update(&mut media)
        };
        self.publish_media(id);
        Ok(value)
    }
}

#[async_trait]
impl MediaDataSource for MemoryBackend {
    #[instrument(skip(self))]
    async fn get_media(&self, id: &str) -> SourceResult<Option<MediaContentDto>> {
        self.ensure_available()?;
        Ok(self.media.get(id).map(|m| m.value().clone()))
    }

    #[instrument(skip(self))]
    async fn list_party_media(
        &self,
        party_id: &str,
        limit: usize,
    ) -> SourceResult<Vec<MediaContentDto>> {
        self.ensure_available()?;
        let mut found: Vec<MediaContentDto> = self
            .media
            .iter()
            .filter(|m| m.party_id == party_id)
            .map(|m| m.value().clone())
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found.truncate(limit);
        Ok(found)
    }

    #[instrument(skip(self))]
    async fn list_user_media(&self, user_id: &str) -> SourceResult<Vec<MediaContentDto>> {
        self.ensure_available()?;
        let mut found: Vec<MediaContentDto> = self
            .media
            .iter()
            .filter(|m| m.uploader.id == user_id)
            .map(|m| m.value().clone())
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    #[instrument(skip(self, media, data), fields(party_id = %media.party_id, bytes = data.len()))]
    async fn upload_media(
        &self,
        media: &MediaContentDto,
        data: Vec<u8>,
    ) -> SourceResult<MediaContentDto> {
        self.ensure_available()?;
        let mut doc = media.clone();
        doc.id = id_or_new(&media.id);
        if self.media.contains_key(&doc.id) {
            return Err(DataSourceError::already_exists(MEDIA, doc.id));
        }
        doc.url = format!("memory://media/{}/{}", doc.party_id, doc.id);
        doc.metadata.size_bytes = data.len() as i64;
        if doc.created_at == 0 {
            doc.created_at = now_millis();
        }

        self.blobs.insert(doc.id.clone(), data);
        self.media.insert(doc.id.clone(), doc.clone());
        self.bump_media_count(&doc.party_id, 1);
        self.publish_media(&doc.id);
        debug!(media_id = %doc.id, url = %doc.url, "Media stored");
        Ok(doc)
    }

    #[instrument(skip(self))]
    async fn delete_media(&self, id: &str) -> SourceResult<()> {
        self.ensure_available()?;
        self.blobs.remove(id);
        if let Some((_, removed)) = self.media.remove(id) {
            self.bump_media_count(&removed.party_id, -1);
            self.publish_media(id);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn adjust_likes(&self, id: &str, delta: i64) -> SourceResult<i64> {
        self.ensure_available()?;
        self.update_metric(id, |media| {
            media.metrics.likes += delta;
            media.metrics.likes
        })
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: &str) -> SourceResult<i64> {
        self.ensure_available()?;
        self.update_metric(id, |media| {
            media.metrics.views += 1;
            media.metrics.views
        })
    }

    fn watch_media(&self, id: &str) -> watch::Receiver<Option<MediaContentDto>> {
        let snapshot = self.media.get(id).map(|m| m.value().clone());
        self.media_watchers
            .entry(id.to_string())
            .or_insert_with(|| watch::Sender::new(snapshot))
            .subscribe()
    }
}
