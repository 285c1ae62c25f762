//! Media entity <-> document mapper

use party_core::{MediaContent, MediaMetadata, MediaMetrics};

use super::{from_millis, parse_or_default, to_millis};
use crate::models::{MediaContentDto, MediaMetadataDto, MediaMetricsDto};

impl From<MediaContentDto> for MediaContent {
    fn from(dto: MediaContentDto) -> Self {
        MediaContent {
            media_type: parse_or_default(&dto.media_type, "media.type"),
            id: dto.id,
            party_id: dto.party_id,
            uploader: dto.uploader.into(),
            url: dto.url,
            thumbnail_url: dto.thumbnail_url,
            caption: dto.caption,
            metadata: dto.metadata.into(),
            metrics: dto.metrics.into(),
            tags: dto.tags,
            created_at: from_millis(dto.created_at),
        }
    }
}

impl From<&MediaContent> for MediaContentDto {
    fn from(media: &MediaContent) -> Self {
        MediaContentDto {
            id: media.id.clone(),
            party_id: media.party_id.clone(),
            uploader: (&media.uploader).into(),
            media_type: media.media_type.as_str().to_string(),
            url: media.url.clone(),
            thumbnail_url: media.thumbnail_url.clone(),
            caption: media.caption.clone(),
            metadata: (&media.metadata).into(),
            metrics: media.metrics.into(),
            tags: media.tags.clone(),
            created_at: to_millis(media.created_at),
        }
    }
}

impl From<MediaMetadataDto> for MediaMetadata {
    fn from(dto: MediaMetadataDto) -> Self {
        MediaMetadata {
            width: dto.width,
            height: dto.height,
            duration_ms: dto.duration_ms,
            size_bytes: dto.size_bytes,
            mime_type: dto.mime_type,
        }
    }
}

impl From<&MediaMetadata> for MediaMetadataDto {
    fn from(metadata: &MediaMetadata) -> Self {
        MediaMetadataDto {
            width: metadata.width,
            height: metadata.height,
            duration_ms: metadata.duration_ms,
            size_bytes: metadata.size_bytes,
            mime_type: metadata.mime_type.clone(),
        }
    }
}

impl From<MediaMetricsDto> for MediaMetrics {
    fn from(dto: MediaMetricsDto) -> Self {
        MediaMetrics {
            likes: dto.likes,
            comments: dto.comments,
            shares: dto.shares,
            views: dto.views,
        }
    }
}

impl From<MediaMetrics> for MediaMetricsDto {
    fn from(metrics: MediaMetrics) -> Self {
        MediaMetricsDto {
            likes: metrics.likes,
            comments: metrics.comments,
            shares: metrics.shares,
            views: metrics.views,
        }
    }
}
