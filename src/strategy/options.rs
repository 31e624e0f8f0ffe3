use serde::{Deserialize, Serialize};

pub const DEFAULT_USERNAME_FIELD: &str = "username";
pub const DEFAULT_PASSWORD_FIELD: &str = "password";

/// Names of the request fields holding the credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyOptions {
    username_field: String,
    password_field: String,
}

impl StrategyOptions {
    /// Build options; empty names fall back to the defaults.
    #[must_use]
    pub fn new(username_field: impl Into<String>, password_field: impl Into<String>) -> Self {
        Self {
            username_field: or_default(username_field.into(), DEFAULT_USERNAME_FIELD),
            password_field: or_default(password_field.into(), DEFAULT_PASSWORD_FIELD),
        }
    }

    #[must_use]
    pub fn username_field(&self) -> &str {
        if self.username_field.is_empty() {
            DEFAULT_USERNAME_FIELD
        } else {
            &self.username_field
        }
    }

    #[must_use]
    pub fn password_field(&self) -> &str {
        if self.password_field.is_empty() {
            DEFAULT_PASSWORD_FIELD
        } else {
            &self.password_field
        }
    }
}

impl Default for StrategyOptions {
    fn default() -> Self {
        Self {
            username_field: DEFAULT_USERNAME_FIELD.to_string(),
            password_field: DEFAULT_PASSWORD_FIELD.to_string(),
        }
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = StrategyOptions::default();
        assert_eq!(options.username_field(), "username");
        assert_eq!(options.password_field(), "password");
    }

    #[test]
    fn empty_names_fall_back() {
        let options = StrategyOptions::new("", "pin");
        assert_eq!(options.username_field(), "username");
        assert_eq!(options.password_field(), "pin");
    }

    #[test]
    fn deserialize_partial() -> Result<(), serde_json::Error> {
        let options: StrategyOptions = serde_json::from_str(r#"{"username_field":"email"}"#)?;
        assert_eq!(options.username_field(), "email");
        assert_eq!(options.password_field(), "password");

        // explicit empty strings still resolve to the defaults
        let options: StrategyOptions = serde_json::from_str(r#"{"password_field":""}"#)?;
        assert_eq!(options.password_field(), "password");
        Ok(())
    }
}
