//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LOTE_OUTPUT_FORMAT` - `json` or `yaml` (default: json)
//! - `LOTE_CLIENT_PRICE_PER_BOX` - Client price per master box used for the
//!   margin (default: 384.00)
//! - `RUST_LOG` - Log filter (default: info)
//!
//! Command-line flags take precedence over these values.

use std::str::FromStr;

use lote_core::costing::CLIENT_PRICE_PER_BOX;
use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Serialization format for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("expected json or yaml, got {s}")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Default output format
    pub output_format: OutputFormat,
    /// Client price per master box for margin calculations
    pub client_price_per_box: Decimal,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            client_price_per_box: CLIENT_PRICE_PER_BOX,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let output_format = get_optional_env("LOTE_OUTPUT_FORMAT")
            .map(|value| parse_output_format("LOTE_OUTPUT_FORMAT", &value))
            .transpose()?
            .unwrap_or_default();

        let client_price_per_box = get_optional_env("LOTE_CLIENT_PRICE_PER_BOX")
            .map(|value| parse_client_price("LOTE_CLIENT_PRICE_PER_BOX", &value))
            .transpose()?
            .unwrap_or(CLIENT_PRICE_PER_BOX);

        Ok(Self {
            output_format,
            client_price_per_box,
        })
    }
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_output_format(key: &str, value: &str) -> Result<OutputFormat, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|e: String| ConfigError::InvalidEnvVar(key.to_string(), e))
}

fn parse_client_price(key: &str, value: &str) -> Result<Decimal, ConfigError> {
    let price = Decimal::from_str(value.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if price <= Decimal::ZERO {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be positive, got {price}"),
        ));
    }
    Ok(price)
}
