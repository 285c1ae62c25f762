//! Account flows
//!
//! Run with: cargo test -p integration-tests --test auth_tests

use integration_tests::{SignUp, TestApp};
use party_core::{DataSourceError, DomainError, ErrorKind, UsernameValidation};

#[tokio::test]
async fn test_sign_up_creates_profile() {
    let app = TestApp::start();
    let (input, user) = app.sign_up().await.unwrap();

    assert_eq!(user.email, input.email);
    assert_eq!(user.firebase_id, user.id);

    let stored = app.ctx.user_repo().get_user(&user.id).await.unwrap();
    assert_eq!(stored.username, input.username);
    let by_name = app
        .ctx
        .user_repo()
        .find_by_username(&input.username)
        .await
        .unwrap();
    assert_eq!(by_name.map(|u| u.id), Some(user.id));
}

#[tokio::test]
async fn test_sign_up_validation() {
    let app = TestApp::start();
    let auth = app.ctx.auth_repo();
    let input = SignUp::unique();

    let err = auth
        .sign_up("not an email", &input.password, &input.username)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidEmail));

    let err = auth
        .sign_up(&input.email, "password", &input.username)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::WeakPassword(_)));

    let err = auth
        .sign_up(&input.email, &input.password, "bad name!")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidUsername(UsernameValidation::InvalidCharacters)
    ));

    // nothing was created by the rejected attempts
    assert_eq!(app.ctx.backend().stats().users, 0);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = TestApp::start();
    let (first, _) = app.sign_up().await.unwrap();
    let second = SignUp::unique();

    let err = app
        .ctx
        .auth_repo()
        .sign_up(&first.email.to_uppercase(), &second.password, &second.username)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn test_sign_in_records_login() {
    let app = TestApp::start();
    let (input, user) = app.sign_up().await.unwrap();
    app.ctx.auth_repo().sign_out().await.unwrap();

    let signed_in = app
        .ctx
        .auth_repo()
        .sign_in(&input.email, &input.password)
        .await
        .unwrap();
    assert_eq!(signed_in.id, user.id);
    assert!(signed_in.last_login_at >= user.last_login_at);

    let err = app
        .ctx
        .auth_repo()
        .sign_in(&input.email, "WrongPass123")
        .await
        .unwrap_err();
    assert_eq!(err.data_source_error(), Some(&DataSourceError::InvalidCredentials));
    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
}

#[tokio::test]
async fn test_delete_account_removes_profile() {
    let app = TestApp::start();
    let (input, user) = app.sign_up().await.unwrap();

    app.ctx.auth_repo().delete_account().await.unwrap();
    assert!(!app.ctx.auth_repo().is_signed_in());
    assert!(app.ctx.user_repo().get_user(&user.id).await.unwrap_err().is_not_found());

    let err = app
        .ctx
        .auth_repo()
        .sign_in(&input.email, &input.password)
        .await
        .unwrap_err();
    assert_eq!(err.data_source_error(), Some(&DataSourceError::InvalidCredentials));
}

#[tokio::test]
async fn test_delete_account_requires_sign_in() {
    let app = TestApp::start();
    app.create_user().await.unwrap();

    let err = app.ctx.auth_repo().delete_account().await.unwrap_err();
    assert!(matches!(err, DomainError::NotAuthenticated));
}

#[tokio::test]
async fn test_password_reset_for_unknown_email() {
    let app = TestApp::start();
    let err = app
        .ctx
        .auth_repo()
        .send_password_reset("ghost@example.com")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
