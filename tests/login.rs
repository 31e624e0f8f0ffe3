use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use pythia::{
    server::{router, AppState, ResponsePolicy, MASKED_FAILURE},
    store::{hash_password, MemoryStore, StoredUser},
    PasswordStrategy, StrategyOptions,
};
use secrecy::SecretString;
use std::sync::Arc;
use tower::ServiceExt;

fn app(options: StrategyOptions, mask_failures: bool) -> Result<Router> {
    let hash = hash_password(&SecretString::from("right".to_string()))?;
    let mut store = MemoryStore::new();
    store.insert(StoredUser::new("alice", hash))?;

    let strategy = PasswordStrategy::with_options(options, store);
    let state = Arc::new(AppState::new(
        Arc::new(strategy),
        ResponsePolicy::new(mask_failures),
    ));
    Ok(router(state))
}

fn json_login(uri: &str, body: &str) -> Result<Request<Body>> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .context("failed to build request")
}

async fn send(app: Router, request: Request<Body>) -> Result<(StatusCode, String)> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

#[tokio::test]
async fn login_success_returns_username() -> Result<()> {
    let app = app(StrategyOptions::default(), false)?;
    let request = json_login("/login", r#"{"username":"alice","password":"right"}"#)?;

    let (status, body) = send(app, request).await?;

    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(body["username"], "alice");
    Ok(())
}

#[tokio::test]
async fn login_missing_credentials_is_bad_request() -> Result<()> {
    let app = app(StrategyOptions::default(), false)?;
    let request = json_login("/login", "{}")?;

    let (status, body) = send(app, request).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Missing credentials");
    Ok(())
}

#[tokio::test]
async fn login_unknown_user_is_unauthorized() -> Result<()> {
    let app = app(StrategyOptions::default(), false)?;
    let request = json_login("/login", r#"{"username":"bob","password":"x"}"#)?;

    let (status, body) = send(app, request).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Incorrect username.");
    Ok(())
}

#[tokio::test]
async fn login_wrong_password_is_unauthorized() -> Result<()> {
    let app = app(StrategyOptions::default(), false)?;
    let request = json_login("/login", r#"{"username":"alice","password":"wrong"}"#)?;

    let (status, body) = send(app, request).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Incorrect password.");
    Ok(())
}

#[tokio::test]
async fn masked_failures_share_one_message() -> Result<()> {
    let unknown = send(
        app(StrategyOptions::default(), true)?,
        json_login("/login", r#"{"username":"bob","password":"x"}"#)?,
    )
    .await?;
    let wrong = send(
        app(StrategyOptions::default(), true)?,
        json_login("/login", r#"{"username":"alice","password":"wrong"}"#)?,
    )
    .await?;

    assert_eq!(unknown, (StatusCode::UNAUTHORIZED, MASKED_FAILURE.to_string()));
    assert_eq!(unknown, wrong);
    Ok(())
}

#[tokio::test]
async fn form_body_and_query_string() -> Result<()> {
    let app = app(StrategyOptions::default(), false)?;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/login?password=right")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("username=alice"))?;

    let (status, _) = send(app, request).await?;

    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn custom_nested_fields() -> Result<()> {
    let app = app(StrategyOptions::new("user[name]", "user[pass]"), false)?;
    let request = json_login(
        "/login",
        r#"{"user":{"name":"alice","pass":"right"}}"#,
    )?;

    let (status, _) = send(app, request).await?;

    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn request_id_is_propagated() -> Result<()> {
    let app = app(StrategyOptions::default(), false)?;
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "01HZXK5W7Q8V3N2M1P0R9S8T7U")
        .body(Body::empty())?;

    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok()),
        Some("01HZXK5W7Q8V3N2M1P0R9S8T7U")
    );
    Ok(())
}

#[tokio::test]
async fn request_id_is_generated() -> Result<()> {
    let app = app(StrategyOptions::default(), false)?;
    let request = Request::builder().uri("/health").body(Body::empty())?;

    let response = app.oneshot(request).await?;

    assert!(response.headers().contains_key("x-request-id"));
    Ok(())
}
