//! Signed-in user cache shared by the auth and user repositories
//!
//! Run with: cargo test -p integration-tests --test session_tests

use std::time::Duration;

use futures::StreamExt;
use integration_tests::{next_item, TestApp};

#[tokio::test]
async fn test_update_refreshes_only_same_id() {
    let app = TestApp::start();
    let mut other = app.create_user().await.unwrap();
    let (_, me) = app.sign_up().await.unwrap();

    other.bio = Some("someone else".to_string());
    app.ctx.user_repo().update_user(&other).await.unwrap();
    let cached = app.ctx.user_repo().current_user().unwrap();
    assert_eq!(cached.id, me.id);
    assert_eq!(cached.bio, None);

    let mut changed = me.clone();
    changed.bio = Some("night owl".to_string());
    app.ctx.user_repo().update_user(&changed).await.unwrap();
    assert_eq!(
        app.ctx.auth_repo().current_user().and_then(|u| u.bio),
        Some("night owl".to_string())
    );
}

#[tokio::test]
async fn test_delete_clears_only_same_id() {
    let app = TestApp::start();
    let other = app.create_user().await.unwrap();
    let (_, me) = app.sign_up().await.unwrap();

    app.ctx.user_repo().delete_user(&other.id).await.unwrap();
    assert_eq!(app.ctx.session().current_id(), Some(me.id.clone()));

    app.ctx.user_repo().delete_user(&me.id).await.unwrap();
    assert!(app.ctx.session().current().is_none());
    assert!(!app.ctx.auth_repo().is_signed_in());
}

#[tokio::test]
async fn test_observe_current_user() {
    let app = TestApp::start();
    let mut current = app.ctx.user_repo().observe_current_user();
    assert_eq!(next_item(&mut current).await.unwrap(), None);

    let (_, me) = app.sign_up().await.unwrap();
    let seen = next_item(&mut current).await.unwrap();
    assert_eq!(seen.map(|u| u.id), Some(me.id));

    app.ctx.auth_repo().sign_out().await.unwrap();
    assert_eq!(next_item(&mut current).await.unwrap(), None);
}

#[tokio::test]
async fn test_observe_current_user_follows_own_updates() {
    let app = TestApp::start();
    let mut other = app.create_user().await.unwrap();
    let (_, me) = app.sign_up().await.unwrap();

    let mut current = app.ctx.user_repo().observe_current_user();
    let seen = next_item(&mut current).await.unwrap();
    assert_eq!(seen.map(|u| u.id), Some(me.id.clone()));

    other.bio = Some("someone else".to_string());
    app.ctx.user_repo().update_user(&other).await.unwrap();
    let silent = tokio::time::timeout(Duration::from_millis(100), current.next()).await;
    assert!(silent.is_err(), "update of another user reached the session stream");

    let mut changed = me.clone();
    changed.bio = Some("night owl".to_string());
    app.ctx.user_repo().update_user(&changed).await.unwrap();
    let seen = next_item(&mut current).await.unwrap().unwrap();
    assert_eq!(seen.id, me.id);
    assert_eq!(seen.bio, Some("night owl".to_string()));
}

#[tokio::test]
async fn test_failed_sign_in_keeps_previous_session() {
    let app = TestApp::start();
    let (_, me) = app.sign_up().await.unwrap();

    let err = app
        .ctx
        .auth_repo()
        .sign_in("nobody@example.com", "TestPass123")
        .await
        .unwrap_err();
    assert!(err.data_source_error().is_some());
    assert_eq!(app.ctx.session().current_id(), Some(me.id));
}
