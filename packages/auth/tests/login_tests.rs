// ABOUTME: Integration tests for the login flow against a mocked user directory
// ABOUTME: Tests successful sign-in, credential rejection, and transport failures

use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coursemgr_auth::login::{INVALID_CREDENTIALS, LOGIN_FAILED, LOGIN_SUCCESS};
use coursemgr_auth::{AuthContext, AuthError, LoginForm, LoginPage, MemorySessionStore};
use coursemgr_client::ApiClient;
use coursemgr_core::test_utils::RecordingPrompter;
use coursemgr_core::Severity;

struct Harness {
    page: LoginPage,
    prompter: Arc<RecordingPrompter>,
    store: Arc<MemorySessionStore>,
    ctx: AuthContext,
}

fn harness(base_url: &str) -> Harness {
    let prompter = Arc::new(RecordingPrompter::new());
    let store = Arc::new(MemorySessionStore::new());
    let page = LoginPage::new(ApiClient::new(base_url).unwrap(), prompter.clone());
    let ctx = AuthContext::new(store.clone());
    Harness {
        page,
        prompter,
        store,
        ctx,
    }
}

async fn mount_user(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/users/email/anna@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "firstname": "Anna",
            "surname": "Nowak",
            "age": 28,
            "email": "anna@example.com",
            "password": "correct horse",
            "isOrganizer": false,
            "active": true
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_matching_credentials_sign_in() {
    let server = MockServer::start().await;
    mount_user(&server).await;
    let mut h = harness(&server.uri());

    let user = h
        .page
        .submit(&mut h.ctx, &LoginForm::new("anna@example.com", "correct horse"))
        .await
        .unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(h.ctx.user().map(|u| u.id), Some(7));
    assert_eq!(h.store.stored().map(|u| u.email), Some("anna@example.com".to_string()));
    assert_eq!(
        h.prompter.severity_alerts(),
        vec![(Severity::Success, LOGIN_SUCCESS.to_string())]
    );
}

#[tokio::test]
async fn test_password_mismatch_does_not_sign_in() {
    let server = MockServer::start().await;
    mount_user(&server).await;
    let mut h = harness(&server.uri());

    let err = h
        .page
        .submit(&mut h.ctx, &LoginForm::new("anna@example.com", "wrong password"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(
        h.prompter.severity_alerts(),
        vec![(Severity::Error, INVALID_CREDENTIALS.to_string())]
    );
    assert!(!h.ctx.is_signed_in());
    assert!(h.store.stored().is_none());
}

#[tokio::test]
async fn test_unknown_email_is_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/email/ghost@example.com"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    let mut h = harness(&server.uri());

    let err = h
        .page
        .submit(&mut h.ctx, &LoginForm::new("ghost@example.com", "whatever1"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(h.prompter.alerts(), vec![INVALID_CREDENTIALS.to_string()]);
}

#[tokio::test]
async fn test_server_error_is_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let mut h = harness(&server.uri());

    let err = h
        .page
        .submit(&mut h.ctx, &LoginForm::new("anna@example.com", "correct horse"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(!h.ctx.is_signed_in());
}

#[tokio::test]
async fn test_unreachable_backend_reports_generic_failure() {
    let mut h = harness("http://127.0.0.1:9");

    let err = h
        .page
        .submit(&mut h.ctx, &LoginForm::new("anna@example.com", "correct horse"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Request(_)));
    assert_eq!(h.prompter.alerts(), vec![LOGIN_FAILED.to_string()]);
}

#[tokio::test]
async fn test_invalid_form_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let mut h = harness(&server.uri());

    let err = h
        .page
        .submit(&mut h.ctx, &LoginForm::new("", "short"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Validation(ref errors) if errors.len() == 2));
    assert_eq!(h.prompter.alerts().len(), 1);
}
