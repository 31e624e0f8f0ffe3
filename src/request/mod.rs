//! Credential-bearing requests.
//!
//! A request exposes two sources, a body-like one and a query-like one. The
//! strategy reads both with [`lookup`] and never mutates them.

mod extract;
mod lookup;

pub use lookup::lookup;

use crate::strategy::StrategyOptions;
use secrecy::SecretString;
use serde_json::Value;

/// Anything the strategy can read credentials from.
pub trait CredentialSource: Send + Sync {
    /// Submitted body, e.g. a JSON document or a decoded form.
    fn body(&self) -> Option<&Value>;

    /// Decoded query string.
    fn query(&self) -> Option<&Value>;
}

/// Owned request sources, also usable as an axum extractor.
#[derive(Clone, Debug, Default)]
pub struct AuthRequest {
    body: Option<Value>,
    query: Option<Value>,
}

impl AuthRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: Value) -> Self {
        self.query = Some(query);
        self
    }
}

impl CredentialSource for AuthRequest {
    fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    fn query(&self) -> Option<&Value> {
        self.query.as_ref()
    }
}

/// Username and password pulled from a request.
#[derive(Debug)]
pub struct Credentials {
    identifier: String,
    secret: SecretString,
}

impl Credentials {
    /// Read both fields, body first, then query.
    ///
    /// Returns `None` when either field is absent or empty in both sources.
    #[must_use]
    pub fn extract(request: &dyn CredentialSource, options: &StrategyOptions) -> Option<Self> {
        let identifier = field(request, options.username_field())?;
        let secret = field(request, options.password_field())?;

        Some(Self {
            identifier,
            secret: SecretString::from(secret),
        })
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }
}

fn field(request: &dyn CredentialSource, name: &str) -> Option<String> {
    lookup(request.body(), name)
        .filter(|value| !value.is_empty())
        .or_else(|| lookup(request.query(), name).filter(|value| !value.is_empty()))
}
