//! Username and password strategy.
//!
//! Flow Overview: extract the credentials (body first, then query), resolve the
//! username to an identity, then ask that identity to compare the password.
//! Each stage is a terminal exit on failure, so a call yields exactly one
//! [`Outcome`]. Panics raised by the resolver or the comparator are caught at
//! the stage boundary and reported as [`AuthError::Panicked`].

use super::{AuthError, BuildError, Failure, Outcome, Stage, Strategy, StrategyOptions};
use crate::{
    identity::{BoxError, IdentityResolver, VerifySecret},
    request::{CredentialSource, Credentials},
};
use async_trait::async_trait;
use futures::FutureExt;
use std::{any::Any, future::Future, panic::AssertUnwindSafe};
use tracing::{debug, instrument, warn};

/// Name the strategy registers under.
pub const STRATEGY_NAME: &str = "pythia";

/// Verifies a username and password against an injected resolver.
#[derive(Debug)]
pub struct PasswordStrategy<R> {
    options: StrategyOptions,
    resolver: R,
}

impl<R: IdentityResolver> PasswordStrategy<R> {
    /// Strategy with the default `username` / `password` fields.
    #[must_use]
    pub fn new(resolver: R) -> Self {
        Self::with_options(StrategyOptions::default(), resolver)
    }

    #[must_use]
    pub fn with_options(options: StrategyOptions, resolver: R) -> Self {
        debug!(
            strategy = STRATEGY_NAME,
            username_field = options.username_field(),
            password_field = options.password_field(),
            "initializing password strategy"
        );
        Self { options, resolver }
    }

    #[must_use]
    pub fn builder() -> PasswordStrategyBuilder<R> {
        PasswordStrategyBuilder::new()
    }

    #[must_use]
    pub fn options(&self) -> &StrategyOptions {
        &self.options
    }

    async fn verify(&self, request: &dyn CredentialSource) -> Outcome<R::Identity> {
        let Some(credentials) = Credentials::extract(request, &self.options) else {
            debug!("request is missing credentials");
            return Outcome::Fail(Failure::missing_credentials());
        };

        let resolved = guarded(Stage::Resolve, async {
            self.resolver.resolve(credentials.identifier()).await
        })
        .await;
        let identity = match resolved {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                debug!("unknown username");
                return Outcome::Fail(Failure::incorrect_username());
            }
            Err(err) => return Outcome::Error(err),
        };

        let matched = guarded(Stage::Compare, async {
            identity.verify_secret(credentials.secret()).await
        })
        .await;
        match matched {
            Ok(true) => Outcome::Success(identity),
            Ok(false) => {
                debug!("password mismatch");
                Outcome::Fail(Failure::incorrect_password())
            }
            Err(err) => Outcome::Error(err),
        }
    }
}

#[async_trait]
impl<R: IdentityResolver> Strategy for PasswordStrategy<R> {
    type Identity = R::Identity;

    fn name(&self) -> &str {
        STRATEGY_NAME
    }

    #[instrument(skip_all, fields(strategy = STRATEGY_NAME))]
    async fn authenticate(&self, request: &dyn CredentialSource) -> Outcome<R::Identity> {
        let outcome = self.verify(request).await;
        if let Outcome::Error(err) = &outcome {
            warn!("authentication error: {err}");
        }
        outcome
    }
}

/// Run one collaborator stage, turning reported errors and panics into [`AuthError`].
async fn guarded<T, F>(stage: Stage, stage_future: F) -> Result<T, AuthError>
where
    F: Future<Output = Result<T, BoxError>>,
{
    match AssertUnwindSafe(stage_future).catch_unwind().await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(cause)) => Err(match stage {
            Stage::Resolve => AuthError::Resolver(cause),
            Stage::Compare => AuthError::Comparator(cause),
        }),
        Err(payload) => Err(AuthError::Panicked {
            stage,
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Builder for [`PasswordStrategy`]; the resolver is mandatory.
#[derive(Debug)]
pub struct PasswordStrategyBuilder<R> {
    username_field: String,
    password_field: String,
    resolver: Option<R>,
}

impl<R: IdentityResolver> PasswordStrategyBuilder<R> {
    fn new() -> Self {
        let defaults = StrategyOptions::default();
        Self {
            username_field: defaults.username_field().to_string(),
            password_field: defaults.password_field().to_string(),
            resolver: None,
        }
    }

    #[must_use]
    pub fn username_field(mut self, field: impl Into<String>) -> Self {
        self.username_field = field.into();
        self
    }

    #[must_use]
    pub fn password_field(mut self, field: impl Into<String>) -> Self {
        self.password_field = field.into();
        self
    }

    #[must_use]
    pub fn options(mut self, options: &StrategyOptions) -> Self {
        self.username_field = options.username_field().to_string();
        self.password_field = options.password_field().to_string();
        self
    }

    #[must_use]
    pub fn resolver(mut self, resolver: R) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// # Errors
    /// Returns [`BuildError::MissingResolver`] when no resolver was supplied.
    pub fn build(self) -> Result<PasswordStrategy<R>, BuildError> {
        let resolver = self.resolver.ok_or(BuildError::MissingResolver)?;
        Ok(PasswordStrategy::with_options(
            StrategyOptions::new(self.username_field, self.password_field),
            resolver,
        ))
    }
}
