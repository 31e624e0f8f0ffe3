use super::error::AuthError;
use axum::http::StatusCode;
use std::fmt;

/// Why a request was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    MissingCredentials,
    IncorrectUsername,
    IncorrectPassword,
}

impl FailureReason {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingCredentials => "Missing credentials",
            Self::IncorrectUsername => "Incorrect username.",
            Self::IncorrectPassword => "Incorrect password.",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A rejected request plus an optional transport status suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Failure {
    reason: FailureReason,
    status_hint: Option<StatusCode>,
}

impl Failure {
    #[must_use]
    pub const fn missing_credentials() -> Self {
        Self {
            reason: FailureReason::MissingCredentials,
            status_hint: Some(StatusCode::BAD_REQUEST),
        }
    }

    #[must_use]
    pub const fn incorrect_username() -> Self {
        Self {
            reason: FailureReason::IncorrectUsername,
            status_hint: None,
        }
    }

    #[must_use]
    pub const fn incorrect_password() -> Self {
        Self {
            reason: FailureReason::IncorrectPassword,
            status_hint: None,
        }
    }

    #[must_use]
    pub const fn reason(&self) -> FailureReason {
        self.reason
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.reason.message()
    }

    #[must_use]
    pub const fn status_hint(&self) -> Option<StatusCode> {
        self.status_hint
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.reason, f)
    }
}

/// Terminal result of one authentication attempt.
#[derive(Debug)]
pub enum Outcome<I> {
    Success(I),
    Fail(Failure),
    Error(AuthError),
}

impl<I> Outcome<I> {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Fail(failure) => Some(failure),
            _ => None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&AuthError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Consume the outcome, keeping the identity on success.
    #[must_use]
    pub fn into_identity(self) -> Option<I> {
        match self {
            Self::Success(identity) => Some(identity),
            _ => None,
        }
    }
}
