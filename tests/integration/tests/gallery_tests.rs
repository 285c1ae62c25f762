//! Media uploads, counters and like subscriptions
//!
//! Run with: cargo test -p integration-tests --test gallery_tests

use chrono::Duration;
use integration_tests::{next_item, party_photo, planned_party, TestApp};

#[tokio::test]
async fn test_upload_updates_party_count() {
    let app = TestApp::start();
    let host = app.create_user().await.unwrap();
    let party = app
        .ctx
        .party_repo()
        .create_party(&planned_party(&host, "Gallery", Duration::hours(1)))
        .await
        .unwrap();

    let media = app.ctx.media_repo();
    let first = media
        .upload_media(&party_photo(&party.id, &host), vec![7; 64])
        .await
        .unwrap();
    media
        .upload_media(&party_photo(&party.id, &host), vec![7; 32])
        .await
        .unwrap();

    assert_eq!(first.metadata.size_bytes, 64);
    assert!(first.url.contains(&first.id));
    assert_eq!(app.ctx.backend().blob(&first.id).map(|b| b.len()), Some(64));
    assert_eq!(media.get_party_media(&party.id, 10).await.unwrap().len(), 2);
    assert_eq!(media.get_party_media(&party.id, 1).await.unwrap().len(), 1);
    assert_eq!(app.ctx.party_repo().get_party(&party.id).await.unwrap().media_count, 2);

    media.delete_media(&first.id).await.unwrap();
    assert_eq!(media.get_user_media(&host.id).await.unwrap().len(), 1);
    assert_eq!(app.ctx.party_repo().get_party(&party.id).await.unwrap().media_count, 1);
}

#[tokio::test]
async fn test_likes_and_views() {
    let app = TestApp::start();
    let host = app.create_user().await.unwrap();
    let media = app.ctx.media_repo();
    let stored = media
        .upload_media(&party_photo("p1", &host), Vec::new())
        .await
        .unwrap();

    // plain counters: no per-user deduplication
    assert_eq!(media.like_media(&stored.id, &host.id).await.unwrap(), 1);
    assert_eq!(media.like_media(&stored.id, &host.id).await.unwrap(), 2);
    assert_eq!(media.unlike_media(&stored.id, &host.id).await.unwrap(), 1);
    assert_eq!(media.record_view(&stored.id).await.unwrap(), 1);
    assert_eq!(media.record_view(&stored.id).await.unwrap(), 2);

    let fetched = media.get_media(&stored.id).await.unwrap();
    assert_eq!(fetched.metrics.likes, 1);
    assert_eq!(fetched.metrics.views, 2);
}

#[tokio::test]
async fn test_observe_likes() {
    let app = TestApp::start();
    let host = app.create_user().await.unwrap();
    let media = app.ctx.media_repo();
    let stored = media
        .upload_media(&party_photo("p1", &host), Vec::new())
        .await
        .unwrap();

    let mut likes = media.observe_likes(&stored.id);
    assert_eq!(next_item(&mut likes).await.unwrap(), 0);

    media.like_media(&stored.id, "fan").await.unwrap();
    assert_eq!(next_item(&mut likes).await.unwrap(), 1);

    media.unlike_media(&stored.id, "fan").await.unwrap();
    assert_eq!(next_item(&mut likes).await.unwrap(), 0);
}
