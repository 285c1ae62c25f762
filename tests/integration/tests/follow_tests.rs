//! Follow graph and denormalized counters
//!
//! Run with: cargo test -p integration-tests --test follow_tests

use integration_tests::TestApp;
use party_core::DomainError;

#[tokio::test]
async fn test_follow_updates_profile_counters() {
    let app = TestApp::start();
    let ana = app.create_user().await.unwrap();
    let ben = app.create_user().await.unwrap();
    let follows = app.ctx.follow_repo();

    follows.follow_user(&ana.id, &ben.id).await.unwrap();
    assert!(follows.is_following(&ana.id, &ben.id).await.unwrap());
    assert_eq!(follows.get_follower_count(&ben.id).await.unwrap(), 1);
    assert_eq!(follows.get_following_count(&ana.id).await.unwrap(), 1);

    let users = app.ctx.user_repo();
    assert_eq!(users.get_user(&ben.id).await.unwrap().followers_count, 1);
    assert_eq!(users.get_user(&ana.id).await.unwrap().following_count, 1);

    follows.unfollow_user(&ana.id, &ben.id).await.unwrap();
    assert_eq!(users.get_user(&ben.id).await.unwrap().followers_count, 0);
}

#[tokio::test]
async fn test_follow_lists() {
    let app = TestApp::start();
    let star = app.create_user().await.unwrap();
    let follows = app.ctx.follow_repo();

    for _ in 0..3 {
        let fan = app.create_user().await.unwrap();
        follows.follow_user(&fan.id, &star.id).await.unwrap();
    }

    assert_eq!(follows.get_followers(&star.id, 10).await.unwrap().len(), 3);
    assert_eq!(follows.get_followers(&star.id, 2).await.unwrap().len(), 2);
    assert!(follows.get_following(&star.id, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_self_follow_rejected() {
    let app = TestApp::start();
    let ana = app.create_user().await.unwrap();

    let err = app
        .ctx
        .follow_repo()
        .follow_user(&ana.id, &ana.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::CannotFollowSelf));
    assert!(err.is_validation());
}
