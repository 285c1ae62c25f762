//! Documents written straight to the backend, read through repositories
//!
//! Run with: cargo test -p integration-tests --test document_tests

use integration_tests::TestApp;
use party_core::{MediaType, PartyPrivacy, PartyStatus};
use party_db::models::{MediaContentDto, PartyEventDto};
use party_db::{MediaDataSource, PartyDataSource};

#[tokio::test]
async fn test_unknown_enum_values_fall_back() {
    let app = TestApp::start();
    let backend = app.ctx.backend();

    let doc = PartyEventDto {
        id: "legacy".to_string(),
        title: "Imported".to_string(),
        status: "PAUSED".to_string(),
        privacy: "SECRET".to_string(),
        start_time: 1_700_000_000_000,
        ..Default::default()
    };
    backend.create_party(&doc).await.unwrap();

    let party = app.ctx.party_repo().get_party("legacy").await.unwrap();
    assert_eq!(party.status, PartyStatus::Planned);
    assert_eq!(party.privacy, PartyPrivacy::Public);
    assert_eq!(party.start_time.timestamp_millis(), 1_700_000_000_000);
}

#[tokio::test]
async fn test_repository_writes_wire_values() {
    let app = TestApp::start();
    let host = app.create_user().await.unwrap();

    let mut clip = party_core::MediaContent::new("p1", host.summary(), MediaType::Video);
    clip.metadata.duration_ms = Some(12_000);
    let stored = app.ctx.media_repo().upload_media(&clip, vec![0; 10]).await.unwrap();

    let doc: MediaContentDto = app
        .ctx
        .backend()
        .get_media(&stored.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(doc.media_type, "VIDEO");
    assert_eq!(doc.metadata.duration_ms, Some(12_000));
    assert_eq!(doc.uploader.id, host.id);
    assert!(doc.created_at > 0);
}
