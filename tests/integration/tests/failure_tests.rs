//! Backend failures surface as values wrapping the original error
//!
//! Run with: cargo test -p integration-tests --test failure_tests

use chrono::Duration;
use integration_tests::{party_photo, planned_party, TestApp};
use party_core::{ChatRoom, ChatRoomType, DataSourceError, DomainError, ErrorKind, RsvpStatus};

fn offline() -> DataSourceError {
    DataSourceError::Unavailable("memory backend is offline".to_string())
}

fn assert_wraps_offline(err: &DomainError, operation: &str) {
    match err {
        DomainError::DataSource {
            operation: op,
            source,
        } => {
            assert_eq!(*op, operation);
            assert_eq!(source, &offline());
        }
        other => panic!("expected DataSource error for {operation}, got {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::Unavailable);
}

#[tokio::test]
async fn test_every_repository_wraps_source_error() {
    let app = TestApp::start();
    let host = app.create_user().await.unwrap();
    let party = app
        .ctx
        .party_repo()
        .create_party(&planned_party(&host, "Offline", Duration::hours(1)))
        .await
        .unwrap();

    app.ctx.backend().set_unavailable(true);
    let ctx = &app.ctx;

    assert_wraps_offline(&ctx.user_repo().get_user(&host.id).await.unwrap_err(), "get_user");
    assert_wraps_offline(
        &ctx.user_repo().search_users("gu", 5).await.unwrap_err(),
        "search_users",
    );
    assert_wraps_offline(
        &ctx.party_repo().start_party(&party.id).await.unwrap_err(),
        "start_party",
    );
    assert_wraps_offline(
        &ctx.party_repo()
            .rsvp(&party.id, &host.id, RsvpStatus::Going)
            .await
            .unwrap_err(),
        "rsvp",
    );
    assert_wraps_offline(
        &ctx.media_repo()
            .upload_media(&party_photo(&party.id, &host), vec![1])
            .await
            .unwrap_err(),
        "upload_media",
    );
    assert_wraps_offline(
        &ctx.chat_repo()
            .create_chat_room(&ChatRoom::new(ChatRoomType::Direct, vec![host.id.clone()]))
            .await
            .unwrap_err(),
        "create_chat_room",
    );
    assert_wraps_offline(
        &ctx.follow_repo().follow_user(&host.id, "other").await.unwrap_err(),
        "follow_user",
    );
    assert_wraps_offline(
        &ctx.auth_repo().sign_in("a@example.com", "whatever1").await.unwrap_err(),
        "sign_in",
    );
}

#[tokio::test]
async fn test_recovers_after_outage() {
    let app = TestApp::start();
    let host = app.create_user().await.unwrap();

    app.ctx.backend().set_unavailable(true);
    assert!(app.ctx.user_repo().get_user(&host.id).await.is_err());

    app.ctx.backend().set_unavailable(false);
    assert_eq!(app.ctx.user_repo().get_user(&host.id).await.unwrap().id, host.id);
}

#[tokio::test]
async fn test_missing_documents() {
    let app = TestApp::start();
    let ctx = &app.ctx;

    assert!(ctx.user_repo().get_user("nobody").await.unwrap_err().is_not_found());
    assert!(ctx.party_repo().get_party("nothing").await.unwrap_err().is_not_found());
    assert!(ctx.media_repo().get_media("nothing").await.unwrap_err().is_not_found());
    assert!(ctx.chat_repo().get_chat_room("nowhere").await.unwrap_err().is_not_found());
    assert!(ctx.user_repo().find_by_username("nobody").await.unwrap().is_none());

    // writes to a missing document keep the backend's error
    let err = ctx.media_repo().like_media("nothing", "u1").await.unwrap_err();
    assert!(matches!(
        err.data_source_error(),
        Some(DataSourceError::NotFound { collection: "media", .. })
    ));
}
