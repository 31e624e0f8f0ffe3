use crate::{
    server::{self, AppState, ResponsePolicy},
    store::MemoryStore,
    strategy::{PasswordStrategy, StrategyOptions},
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub users: String,
    pub fields: StrategyOptions,
    pub mask_failures: bool,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the user file cannot be loaded or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let store = MemoryStore::load(&args.users)
        .await
        .with_context(|| format!("Failed to load users from {}", args.users))?;

    if store.is_empty() {
        warn!("user file {} has no users, every login will fail", args.users);
    }

    let strategy = PasswordStrategy::builder()
        .options(&args.fields)
        .resolver(store)
        .build()?;

    debug!(mask_failures = args.mask_failures, "starting server");

    let state = Arc::new(AppState::new(
        Arc::new(strategy),
        ResponsePolicy::new(args.mask_failures),
    ));

    server::new(args.port, state).await
}
