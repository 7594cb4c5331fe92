//! Integration tests for the Portal HTTP clients

use portal_http::client::{CREATE_WORKSPACE_PATH, LOGIN_PATH, REGISTER_PATH};
use portal_http::{
    AuthenticatedPortalClient, ClientError, LoginRequest, PublicPortalClient, TokenPair,
    TypedClientBuilder, UserCreate, WorkspaceCreate,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Route client logs through the test harness so failures show request lines
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("portal_http=debug")
        .with_test_writer()
        .try_init();
}

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "ada@example.com".to_string(),
        password: "hunter2".to_string(),
    }
}

#[tokio::test]
async fn test_builder_requires_base_url() {
    let result = TypedClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_builder_strips_trailing_slash() {
    let client = TypedClientBuilder::new()
        .base_url("http://localhost:8080/")
        .build_public()
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_login_posts_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"email": "ada@example.com", "password": "hunter2"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "A", "refresh_token": "B"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PublicPortalClient::new(mock_server.uri()).unwrap();
    let response = client.login(&credentials()).await.unwrap();

    assert_eq!(response.into_pair(), Some(TokenPair::new("A", "B")));
}

#[tokio::test]
async fn test_register_posts_all_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(REGISTER_PATH))
        .and(body_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "hunter2"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"access_token": "A", "refresh_token": "B"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PublicPortalClient::new(mock_server.uri()).unwrap();
    let request = UserCreate {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    let response = client.register(&request).await.unwrap();

    assert_eq!(response.access_token.as_deref(), Some("A"));
    assert_eq!(response.refresh_token.as_deref(), Some("B"));
}

#[tokio::test]
async fn test_login_error_carries_detail() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .mount(&mock_server)
        .await;

    let client = PublicPortalClient::new(mock_server.uri()).unwrap();
    let error = client.login(&credentials()).await.unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert_eq!(error.detail(), Some("Invalid credentials"));
}

#[tokio::test]
async fn test_error_without_json_body() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = PublicPortalClient::new(mock_server.uri()).unwrap();
    let error = client.login(&credentials()).await.unwrap_err();

    assert_eq!(error.status(), Some(500));
    assert_eq!(error.detail(), None);
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("welcome"))
        .mount(&mock_server)
        .await;

    let client = PublicPortalClient::new(mock_server.uri()).unwrap();
    let error = client.login(&credentials()).await.unwrap_err();

    assert!(matches!(error, ClientError::Serialization(_)));
}

#[tokio::test]
async fn test_create_workspace_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CREATE_WORKSPACE_PATH))
        .and(header("authorization", "Bearer access-123"))
        .and(body_json(json!({"name": "Research", "description": "Lab notes"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "name": "Research"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AuthenticatedPortalClient::new(mock_server.uri(), "access-123").unwrap();
    let request = WorkspaceCreate {
        name: "Research".to_string(),
        description: "Lab notes".to_string(),
    };
    let record = client.create_workspace(&request).await.unwrap();

    assert_eq!(record["id"], 7);
}

#[tokio::test]
async fn test_authenticate_shares_base_url() {
    let public = PublicPortalClient::new("http://localhost:9000/").unwrap();
    let authenticated = public.authenticate("secret-token");

    assert_eq!(authenticated.base_url(), "http://localhost:9000");

    let debug = format!("{authenticated:?}");
    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains("secret-token"));
}

#[tokio::test]
async fn test_unreachable_host_is_request_error() {
    // Port 9 (discard) on localhost is closed on test machines
    let client = PublicPortalClient::new("http://127.0.0.1:9").unwrap();
    let error = client.login(&credentials()).await.unwrap_err();

    assert!(matches!(error, ClientError::Request(_)));
}
