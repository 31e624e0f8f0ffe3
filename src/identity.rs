//! Collaborator traits consumed by the strategy.
//!
//! The strategy never owns a user store or a password hasher. Hosts plug them
//! in through [`IdentityResolver`] and [`VerifySecret`].

use async_trait::async_trait;
use secrecy::SecretString;
use std::future::Future;

/// Type-erased error reported by resolvers and comparators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Capability of an identity record to check a candidate password.
#[async_trait]
pub trait VerifySecret: Send + Sync {
    /// Return `Ok(true)` when `candidate` matches the stored secret.
    ///
    /// # Errors
    /// Returns an error when the comparison itself could not be performed.
    async fn verify_secret(&self, candidate: &SecretString) -> Result<bool, BoxError>;
}

/// Maps a username to an identity record.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    type Identity: VerifySecret + 'static;

    /// Look up `identifier`; `Ok(None)` means no such user.
    ///
    /// # Errors
    /// Returns an error when the lookup failed, not when the user is unknown.
    async fn resolve(&self, identifier: &str) -> Result<Option<Self::Identity>, BoxError>;
}

/// Resolver backed by an async closure, see [`resolver_fn`].
#[derive(Clone)]
pub struct ResolverFn<F>(F);

impl<F> std::fmt::Debug for ResolverFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverFn").finish_non_exhaustive()
    }
}

/// Wrap an async closure `|identifier: String| async { .. }` as a resolver.
pub fn resolver_fn<F, Fut, I>(f: F) -> ResolverFn<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<I>, BoxError>> + Send + 'static,
    I: VerifySecret + 'static,
{
    ResolverFn(f)
}

#[async_trait]
impl<F, Fut, I> IdentityResolver for ResolverFn<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<I>, BoxError>> + Send + 'static,
    I: VerifySecret + 'static,
{
    type Identity = I;

    async fn resolve(&self, identifier: &str) -> Result<Option<I>, BoxError> {
        (self.0)(identifier.to_string()).await
    }
}
