use crate::{request::AuthRequest, server::AppState, store::StoredUser, strategy::Strategy};
use axum::{extract::Extension, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Serialize, Debug)]
pub struct LoginResponse {
    username: String,
}

// axum handler for login; the extractor must stay last since it consumes the body
#[instrument(skip_all)]
pub async fn login(state: Extension<Arc<AppState>>, request: AuthRequest) -> impl IntoResponse {
    let outcome = state.strategy.authenticate(&request).await;

    state.policy.respond(outcome, |user: StoredUser| {
        info!(username = user.username(), "login succeeded");
        Json(LoginResponse {
            username: user.username().to_string(),
        })
    })
}
