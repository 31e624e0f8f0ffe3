//! # Pythia (username and password verification strategy)
//!
//! `pythia` decides whether a request carrying a username and a password
//! represents a valid identity. It does not store users, issue sessions, or
//! route requests; those stay with the host.
//!
//! ## Verification flow
//!
//! A [`PasswordStrategy`] runs one linear pipeline per call:
//!
//! 1. Extract the credentials from the request body, then the query string.
//! 2. Resolve the username through an injected [`IdentityResolver`].
//! 3. Compare the password through the identity's [`VerifySecret`] capability.
//!
//! Every call ends in exactly one [`Outcome`]: `Success`, `Fail` (bad input or
//! wrong credentials), or `Error` (the resolver or comparator broke, including
//! panics). Hosts map the outcome to their transport, e.g. 200/400/401/500.
//!
//! ## Username enumeration
//!
//! The strategy reports whether the username or the password was wrong. The
//! bundled HTTP host can collapse both into one message through
//! [`server::ResponsePolicy`].

pub mod cli;
pub mod identity;
pub mod request;
pub mod server;
pub mod store;
pub mod strategy;

pub use identity::{resolver_fn, BoxError, IdentityResolver, ResolverFn, VerifySecret};
pub use request::{AuthRequest, CredentialSource, Credentials};
pub use strategy::{
    AuthError, BuildError, Failure, FailureReason, Outcome, PasswordStrategy, Stage, Strategy,
    StrategyOptions,
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
