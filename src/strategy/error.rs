use crate::identity::BoxError;
use std::fmt;
use thiserror::Error;

/// Pipeline stage where an unexpected failure happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Resolve,
    Compare,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve => f.write_str("identity resolution"),
            Self::Compare => f.write_str("secret comparison"),
        }
    }
}

/// Unexpected failure while authenticating; says nothing about the credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("identity resolver failed: {0}")]
    Resolver(#[source] BoxError),
    #[error("secret comparison failed: {0}")]
    Comparator(#[source] BoxError),
    #[error("{stage} panicked: {message}")]
    Panicked { stage: Stage, message: String },
}

impl AuthError {
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Resolver(_) => Stage::Resolve,
            Self::Comparator(_) => Stage::Compare,
            Self::Panicked { stage, .. } => *stage,
        }
    }

    /// The error reported by the collaborator, if it reported one.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Resolver(cause) | Self::Comparator(cause) => Some(cause.as_ref()),
            Self::Panicked { .. } => None,
        }
    }
}

/// Construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("password strategy requires an identity resolver")]
    MissingResolver,
}
