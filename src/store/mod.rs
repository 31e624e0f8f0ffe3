//! In-memory user store backed by Argon2 password hashes.
//!
//! The store is the reference [`IdentityResolver`] used by the bundled server.
//! Users are loaded from a JSON file:
//!
//! ```json
//! { "users": [ { "username": "alice", "password_hash": "$argon2id$v=19$..." } ] }
//! ```

use crate::identity::{BoxError, IdentityResolver, VerifySecret};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::{collections::HashMap, path::Path, sync::Arc};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read user file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid user file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate username: {0}")]
    DuplicateUser(String),
    #[error("empty username")]
    EmptyUsername,
    #[error("invalid password hash for {username}: {message}")]
    InvalidHash { username: String, message: String },
    #[error("failed to hash password: {0}")]
    Hash(String),
}

/// A user record; compares passwords against its Argon2 PHC hash.
#[derive(Clone, Debug)]
pub struct StoredUser {
    username: String,
    password_hash: Arc<str>,
}

impl StoredUser {
    #[must_use]
    pub fn new(username: impl Into<String>, password_hash: impl Into<Arc<str>>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

#[async_trait]
impl VerifySecret for StoredUser {
    #[instrument(skip_all, fields(username = %self.username))]
    async fn verify_secret(&self, candidate: &SecretString) -> Result<bool, BoxError> {
        let hash = Arc::clone(&self.password_hash);
        let candidate = candidate.expose_secret().as_bytes().to_vec();

        // Argon2 is CPU bound; keep it off the async workers.
        let verified = tokio::task::spawn_blocking(move || -> Result<bool, BoxError> {
            let parsed = PasswordHash::new(&hash).map_err(|e| e.to_string())?;
            match Argon2::default().verify_password(&candidate, &parsed) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(err) => Err(err.to_string().into()),
            }
        })
        .await??;

        Ok(verified)
    }
}

#[derive(Deserialize)]
struct UserFile {
    users: Vec<UserEntry>,
}

#[derive(Deserialize)]
struct UserEntry {
    username: String,
    password_hash: String,
}

/// Users keyed by username.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    users: HashMap<String, StoredUser>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user. Hashes are validated up front so a corrupt entry fails here.
    ///
    /// # Errors
    /// Returns an error for empty or duplicate usernames and malformed hashes.
    pub fn insert(&mut self, user: StoredUser) -> Result<(), StoreError> {
        if user.username.is_empty() {
            return Err(StoreError::EmptyUsername);
        }
        PasswordHash::new(&user.password_hash).map_err(|e| StoreError::InvalidHash {
            username: user.username.clone(),
            message: e.to_string(),
        })?;
        if self.users.contains_key(&user.username) {
            return Err(StoreError::DuplicateUser(user.username));
        }
        self.users.insert(user.username.clone(), user);
        Ok(())
    }

    /// Parse a user file document.
    ///
    /// # Errors
    /// Returns an error if the JSON is invalid or any entry is rejected by [`Self::insert`].
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let file: UserFile = serde_json::from_str(json)?;
        let mut store = Self::new();
        for entry in file.users {
            store.insert(StoredUser::new(entry.username, entry.password_hash))?;
        }
        Ok(store)
    }

    /// Load users from a JSON file on disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let store = Self::from_json(&json)?;
        debug!("loaded {} users from {}", store.len(), path.display());
        Ok(store)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl IdentityResolver for MemoryStore {
    type Identity = StoredUser;

    async fn resolve(&self, identifier: &str) -> Result<Option<StoredUser>, BoxError> {
        Ok(self.users.get(identifier).cloned())
    }
}

/// Hash `password` into an Argon2id PHC string with a random salt.
///
/// # Errors
/// Returns an error if hashing fails.
pub fn hash_password(password: &SecretString) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StoreError::Hash(e.to_string()))
}
