use std::env;

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SECRET_KEY};

#[derive(Debug, Clone)]
pub struct Config {
    /// VULNERABILITY (intentional): falls back to a hardcoded secret when
    /// SECRET_KEY is unset, instead of refusing to start.
    pub secret_key: String,
    pub debug: bool,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            secret_key: env::var("SECRET_KEY")
                .unwrap_or_else(|_| DEFAULT_SECRET_KEY.to_string()),
            debug: env::var("DEBUG")
                .unwrap_or_else(|_| "false".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(false),
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()?,
        })
    }
}
