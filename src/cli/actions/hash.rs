use crate::store::hash_password;
use anyhow::{bail, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use tokio::io::{self, AsyncBufReadExt, BufReader};

/// Read one password line from stdin and print its Argon2id PHC string.
/// # Errors
/// Returns an error if stdin cannot be read, the password is empty, or hashing fails.
pub async fn execute() -> Result<()> {
    let mut line = String::new();
    BufReader::new(io::stdin())
        .read_line(&mut line)
        .await
        .context("Failed to read password from stdin")?;

    let password = SecretString::from(line.trim_end_matches(['\r', '\n']).to_string());
    line.clear();

    let hash = hash_password_line(&password)?;
    println!("{hash}");

    Ok(())
}

fn hash_password_line(password: &SecretString) -> Result<String> {
    if password.expose_secret().is_empty() {
        bail!("password must not be empty");
    }

    Ok(hash_password(password)?)
}
