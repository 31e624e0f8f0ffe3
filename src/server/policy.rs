//! Maps strategy outcomes to HTTP responses.

use crate::strategy::{Failure, FailureReason, Outcome};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

pub const MASKED_FAILURE: &str = "Invalid credentials";

/// Host-side decisions layered over the strategy outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResponsePolicy {
    /// Collapse "Incorrect username." and "Incorrect password." into one message.
    pub mask_failures: bool,
}

impl ResponsePolicy {
    #[must_use]
    pub const fn new(mask_failures: bool) -> Self {
        Self { mask_failures }
    }

    /// Status and body for a rejected request.
    #[must_use]
    pub fn failure(&self, failure: &Failure) -> (StatusCode, String) {
        let status = failure.status_hint().unwrap_or(StatusCode::UNAUTHORIZED);
        let message = match failure.reason() {
            FailureReason::IncorrectUsername | FailureReason::IncorrectPassword
                if self.mask_failures =>
            {
                MASKED_FAILURE
            }
            _ => failure.message(),
        };
        (status, message.to_string())
    }

    /// Turn an outcome into a response, rendering the identity with `on_success`.
    pub fn respond<I, F, R>(&self, outcome: Outcome<I>, on_success: F) -> Response
    where
        F: FnOnce(I) -> R,
        R: IntoResponse,
    {
        match outcome {
            Outcome::Success(identity) => on_success(identity).into_response(),
            Outcome::Fail(failure) => {
                info!("authentication failed: {failure}");
                self.failure(&failure).into_response()
            }
            Outcome::Error(err) => {
                error!("authentication error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
