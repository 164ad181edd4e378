//! Store configuration.
//!
//! Loaded from environment variables with fallback to defaults.

use std::env;

use thiserror::Error;

use crate::domain::OrderValidation;

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Runtime settings for the store system.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Request buffer of the store service channel (`STORE_CHANNEL_CAPACITY`)
    pub channel_capacity: usize,

    /// Stock check used by orders (`STORE_ORDER_VALIDATION`: `per-line` or `aggregate`)
    pub order_validation: OrderValidation,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            order_validation: OrderValidation::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let channel_capacity = match lookup("STORE_CHANNEL_CAPACITY") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "STORE_CHANNEL_CAPACITY".to_string(),
                    value: raw.clone(),
                })?,
            None => DEFAULT_CHANNEL_CAPACITY,
        };

        let order_validation = match lookup("STORE_ORDER_VALIDATION") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "STORE_ORDER_VALIDATION".to_string(),
                value: raw.clone(),
            })?,
            None => OrderValidation::default(),
        };

        Ok(Self {
            channel_capacity,
            order_validation,
        })
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}
