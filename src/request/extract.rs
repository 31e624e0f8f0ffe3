//! axum extractor for [`AuthRequest`].

use super::AuthRequest;
use axum::{
    async_trait,
    extract::{FromRequest, Query, Request},
    http::{header::CONTENT_TYPE, HeaderMap, Method},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde_json::{Map, Value};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
}

fn body_kind(headers: &HeaderMap) -> Option<BodyKind> {
    let content_type = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let mime = content_type
        .split(';')
        .next()
        .map(str::trim)
        .unwrap_or_default()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        Some(BodyKind::Json)
    } else if mime == "application/x-www-form-urlencoded" {
        Some(BodyKind::Form)
    } else {
        None
    }
}

#[async_trait]
impl<S> FromRequest<S> for AuthRequest
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = match Query::<Map<String, Value>>::try_from_uri(req.uri()) {
            Ok(Query(map)) => Some(Value::Object(map)),
            Err(err) => {
                // A garbled query string is treated as an empty source.
                debug!("ignoring query string: {err}");
                None
            }
        };

        let has_body = !matches!(*req.method(), Method::GET | Method::HEAD);
        let body = match body_kind(req.headers()) {
            Some(BodyKind::Json) if has_body => {
                let Json(value) = Json::<Value>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Some(value)
            }
            Some(BodyKind::Form) if has_body => {
                let Form(map) = Form::<Map<String, Value>>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Some(Value::Object(map))
            }
            _ => None,
        };

        Ok(Self { body, query })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::CredentialSource;
    use axum::{
        body::Body,
        http::{self, StatusCode},
    };
    use serde_json::json;

    async fn extract(request: Request) -> Result<AuthRequest, Response> {
        AuthRequest::from_request(request, &()).await
    }

    #[tokio::test]
    async fn extracts_json_body_and_query() {
        let request = http::Request::builder()
            .method(Method::POST)
            .uri("/login?username=bob")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"username":"alice","password":"right"}"#))
            .expect("request");

        let auth = extract(request).await.expect("extracted");
        assert_eq!(
            auth.body(),
            Some(&json!({"username": "alice", "password": "right"}))
        );
        assert_eq!(auth.query(), Some(&json!({"username": "bob"})));
    }

    #[tokio::test]
    async fn extracts_form_body() {
        let request = http::Request::builder()
            .method(Method::POST)
            .uri("/login")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded; charset=utf-8")
            .body(Body::from("username=alice&password=p%40ss"))
            .expect("request");

        let auth = extract(request).await.expect("extracted");
        assert_eq!(
            auth.body(),
            Some(&json!({"username": "alice", "password": "p@ss"}))
        );
    }

    #[tokio::test]
    async fn unknown_content_type_has_no_body() {
        let request = http::Request::builder()
            .method(Method::POST)
            .uri("/login")
            .header(CONTENT_TYPE, "text/plain")
            .body(Body::from("username=alice"))
            .expect("request");

        let auth = extract(request).await.expect("extracted");
        assert!(auth.body().is_none());
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let request = http::Request::builder()
            .method(Method::POST)
            .uri("/login")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .expect("request");

        let rejection = extract(request).await.err().map(|r| r.status());
        assert_eq!(rejection, Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn body_kind_detection() {
        let mut headers = HeaderMap::new();
        assert_eq!(body_kind(&headers), None);

        headers.insert(CONTENT_TYPE, "application/vnd.api+json".parse().expect("header"));
        assert_eq!(body_kind(&headers), Some(BodyKind::Json));

        headers.insert(
            CONTENT_TYPE,
            "Application/X-WWW-Form-Urlencoded".parse().expect("header"),
        );
        assert_eq!(body_kind(&headers), Some(BodyKind::Form));
    }
}
