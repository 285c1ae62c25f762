//! Username validation through the user repository
//!
//! Run with: cargo test -p integration-tests --test username_tests

use integration_tests::TestApp;
use party_common::AppConfig;
use party_core::{DomainError, UsernameValidation};
use party_service::AppContext;

#[tokio::test]
async fn test_username_literals() {
    let app = TestApp::start();
    let (input, _) = app.sign_up().await.unwrap();
    let repo = app.ctx.user_repo();

    let too_long = "x".repeat(31);
    let cases = [
        ("ab", UsernameValidation::TooShort),
        (too_long.as_str(), UsernameValidation::TooLong),
        ("bad name!", UsernameValidation::InvalidCharacters),
        ("admin", UsernameValidation::Reserved),
        (input.username.as_str(), UsernameValidation::AlreadyTaken),
        ("valid_user1", UsernameValidation::Valid),
    ];
    for (username, expected) in cases {
        assert_eq!(
            repo.validate_username(username).await.unwrap(),
            expected,
            "username {username:?}"
        );
    }
}

#[tokio::test]
async fn test_length_counts_characters() {
    let app = TestApp::start();
    let repo = app.ctx.user_repo();

    assert_eq!(
        repo.validate_username("abc").await.unwrap(),
        UsernameValidation::Valid
    );
    assert_eq!(
        repo.validate_username(&"a".repeat(30)).await.unwrap(),
        UsernameValidation::Valid
    );
    // three characters, but not all word characters
    assert_eq!(
        repo.validate_username("née").await.unwrap(),
        UsernameValidation::InvalidCharacters
    );
}

#[tokio::test]
async fn test_lookup_failure_fails_closed() {
    let app = TestApp::start();
    app.ctx.backend().set_unavailable(true);

    let err = app
        .ctx
        .user_repo()
        .validate_username("valid_user1")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::DataSource { .. }));

    // format failures never reach the backend
    assert_eq!(
        app.ctx.user_repo().validate_username("ab").await.unwrap(),
        UsernameValidation::TooShort
    );
}

#[tokio::test]
async fn test_fail_open_from_config() {
    let config = AppConfig::from_lookup(|key| match key {
        "USERNAME_FAIL_OPEN" => Some("true".to_string()),
        "USERNAME_RESERVED" => Some("host, bouncer".to_string()),
        _ => None,
    })
    .unwrap();
    let ctx = AppContext::from_config(&config);
    ctx.backend().set_unavailable(true);

    let repo = ctx.user_repo();
    assert_eq!(
        repo.validate_username("valid_user1").await.unwrap(),
        UsernameValidation::Valid
    );
    assert_eq!(
        repo.validate_username("Bouncer").await.unwrap(),
        UsernameValidation::Reserved
    );
}

#[tokio::test]
async fn test_availability_is_independent_of_format() {
    let app = TestApp::start();
    let (input, _) = app.sign_up().await.unwrap();

    let repo = app.ctx.user_repo();
    assert!(!repo.is_username_available(&input.username).await.unwrap());
    assert!(repo.is_username_available("ab").await.unwrap());
}

#[tokio::test]
async fn test_taken_username_ignores_case() {
    let app = TestApp::start();
    let (input, _) = app.sign_up().await.unwrap();

    let repo = app.ctx.user_repo();
    let shouted = input.username.to_uppercase();
    assert_eq!(
        repo.validate_username(&shouted).await.unwrap(),
        UsernameValidation::AlreadyTaken
    );
    assert!(!repo.is_username_available(&shouted).await.unwrap());
}
