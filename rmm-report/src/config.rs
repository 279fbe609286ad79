//! Typed run configuration, read once from the environment at startup.
//!
//! This module is the only place the process environment is consulted. The
//! resulting [`Config`] is passed down into the pipeline; nothing reads env
//! vars mid-run. A missing (or empty) required value is a typed
//! [`ConfigError`], which `main` maps to the distinguished
//! [`EXIT_MISCONFIGURED`] status before any remote client is constructed.

use std::env;
use std::fmt;

use tracing::info;

/// Exit status signalling misconfiguration, reserved for operational alerting.
pub const EXIT_MISCONFIGURED: u8 = 3;

/// Default base URL of the RMM directory API.
pub const DEFAULT_BASE_URL: &str = "https://app.ninjarmm.com";

/// All values a run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct Config {
    /// RMM API key id (`NRMM_KEY_ID`).
    pub key_id: String,
    /// RMM API secret (`NRMM_SECRET`).
    pub secret: String,
    /// Destination bucket name (`S3_BUCKET`).
    pub bucket: String,
    /// Device group to report on (`DEVICE_GROUP`).
    pub device_group: String,
    /// Directory API base URL (`NRMM_BASE_URL`, optional override).
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    MissingVar(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVar(name) => {
                write!(f, "required environment variable {name} is not set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Read and validate the full configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let key_id = require("NRMM_KEY_ID")?;
        let secret = require("NRMM_SECRET")?;
        let bucket = require("S3_BUCKET")?;
        let device_group = require("DEVICE_GROUP")?;
        let base_url =
            env::var("NRMM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Config {
            key_id,
            secret,
            bucket,
            device_group,
            base_url,
        })
    }

    pub fn trace_loaded(&self) {
        info!(
            bucket = %self.bucket,
            device_group = %self.device_group,
            base_url = %self.base_url,
            key_id_len = self.key_id.len(),
            "Loaded Config"
        );
    }
}

// Empty values count as missing.
fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
