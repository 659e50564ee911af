use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::domain::Money;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Runtime policy for the shop. Every field has a default, so an empty
/// environment is a valid configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    pub delivery_fee: Money,
    /// Per-line cap on cart quantities; `None` when set to 0.
    pub max_line_quantity: Option<u32>,
    pub eta_minutes: u32,
    pub tick_interval: Duration,
    pub actor_buffer: usize,
    pub storage_dir: PathBuf,
    pub log_level: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            delivery_fee: Money::from(50),
            max_line_quantity: Some(10),
            eta_minutes: 28,
            tick_interval: Duration::from_secs(60),
            actor_buffer: 32,
            storage_dir: PathBuf::from("./.krave-mart"),
            log_level: "info".to_string(),
        }
    }
}

/// Load configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` first so a local `.env` file is honoured.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but cannot be parsed.
pub fn load_config() -> Result<ShopConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
fn build_config<F>(lookup: F) -> Result<ShopConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = ShopConfig::default();

    fn parse<T: FromStr>(var: &str, raw: Option<String>, default: T) -> Result<T, ConfigError>
    where
        T::Err: std::fmt::Display,
    {
        match raw {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    let get = |var: &str| lookup(var).ok();

    let delivery_fee: Money = parse("KRAVE_DELIVERY_FEE", get("KRAVE_DELIVERY_FEE"), defaults.delivery_fee)?;
    if delivery_fee.is_sign_negative() {
        return Err(ConfigError::InvalidEnvVar {
            var: "KRAVE_DELIVERY_FEE".to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    let max_line_quantity = parse(
        "KRAVE_MAX_LINE_QUANTITY",
        get("KRAVE_MAX_LINE_QUANTITY"),
        defaults.max_line_quantity.unwrap_or(0),
    )?;
    let eta_minutes = parse("KRAVE_ETA_MINUTES", get("KRAVE_ETA_MINUTES"), defaults.eta_minutes)?;
    let tick_secs = parse("KRAVE_TICK_SECS", get("KRAVE_TICK_SECS"), defaults.tick_interval.as_secs())?;
    if tick_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "KRAVE_TICK_SECS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let actor_buffer = parse("KRAVE_ACTOR_BUFFER", get("KRAVE_ACTOR_BUFFER"), defaults.actor_buffer)?;

    Ok(ShopConfig {
        delivery_fee,
        max_line_quantity: (max_line_quantity > 0).then_some(max_line_quantity),
        eta_minutes,
        tick_interval: Duration::from_secs(tick_secs),
        actor_buffer: actor_buffer.max(1),
        storage_dir: get("KRAVE_STORAGE_DIR").map_or(defaults.storage_dir, PathBuf::from),
        log_level: get("KRAVE_LOG_LEVEL").unwrap_or(defaults.log_level),
    })
}
