//! Authentication strategies.
//!
//! Hosts hold strategies through the [`Strategy`] trait and interpret the
//! returned [`Outcome`] themselves.

mod error;
mod options;
mod outcome;
pub mod password;

pub use self::error::{AuthError, BuildError, Stage};
pub use self::options::{StrategyOptions, DEFAULT_PASSWORD_FIELD, DEFAULT_USERNAME_FIELD};
pub use self::outcome::{Failure, FailureReason, Outcome};
pub use self::password::PasswordStrategy;

use crate::request::CredentialSource;
use async_trait::async_trait;

/// One way of authenticating a request.
#[async_trait]
pub trait Strategy: Send + Sync {
    type Identity: Send;

    /// Name hosts use to register and select the strategy.
    fn name(&self) -> &str;

    /// Run the strategy against `request`, producing exactly one outcome.
    async fn authenticate(&self, request: &dyn CredentialSource) -> Outcome<Self::Identity>;
}
