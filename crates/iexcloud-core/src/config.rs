use thiserror::Error;

pub const SECRET_KEY_VAR: &str = "IEX_SECRET_KEY";
pub const PUBLISHABLE_KEY_VAR: &str = "IEX_PUBLISHABLE_KEY";
pub const SANDBOX_VAR: &str = "IEX_SANDBOX";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {name} is not set")]
    MissingVar { name: &'static str },
    #[error("environment variable {name} must be a boolean, got '{value}'")]
    InvalidBool { name: &'static str, value: String },
}

/// Credentials and host selection for [`IexClient`](crate::IexClient).
///
/// Keys are never logged or included in error messages.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub secret_key: String,
    pub publishable_key: Option<String>,
    pub sandbox: bool,
}

impl ClientConfig {
    pub fn new(secret_key: impl Into<String>, sandbox: bool) -> Self {
        Self {
            secret_key: secret_key.into(),
            publishable_key: None,
            sandbox,
        }
    }

    /// Reads `IEX_SECRET_KEY` (required), `IEX_PUBLISHABLE_KEY` and
    /// `IEX_SANDBOX` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup(SECRET_KEY_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingVar {
                name: SECRET_KEY_VAR,
            })?;
        let publishable_key = lookup(PUBLISHABLE_KEY_VAR).filter(|value| !value.trim().is_empty());
        let sandbox = match lookup(SANDBOX_VAR) {
            Some(value) => parse_bool(SANDBOX_VAR, &value)?,
            None => false,
        };

        Ok(Self {
            secret_key,
            publishable_key,
            sandbox,
        })
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("secret_key", &"<redacted>")
            .field(
                "publishable_key",
                &self.publishable_key.as_ref().map(|_| "<redacted>"),
            )
            .field("sandbox", &self.sandbox)
            .finish()
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_owned(),
        }),
    }
}
