// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Replay configuration
//!
//! ```toml
//! format = "json"
//! max_record_len = 65536
//! verify_crc = true
//! ```

use crate::format::{AnyFormat, JsonFormat, LogFormatKind, PickleFormat, DEFAULT_MAX_RECORD_LEN};
use crate::iter::LogIterator;
use sbp_adapters::Driver;
use sbp_core::Dispatch;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How to read a recorded log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplayConfig {
    /// Storage layout of the log
    pub format: LogFormatKind,
    /// Largest encoded record accepted, in bytes
    pub max_record_len: u32,
    /// Reject records whose stored CRC disagrees with their contents
    pub verify_crc: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            format: LogFormatKind::default(),
            max_record_len: DEFAULT_MAX_RECORD_LEN,
            verify_crc: true,
        }
    }
}

impl ReplayConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_record_len == 0 {
            return Err(ConfigError::Invalid(
                "max_record_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured format
    pub fn log_format(&self) -> AnyFormat {
        match self.format {
            LogFormatKind::Pickle => AnyFormat::Pickle(
                PickleFormat::new()
                    .with_max_record_len(self.max_record_len)
                    .with_verify_crc(self.verify_crc),
            ),
            LogFormatKind::Json => AnyFormat::Json(
                JsonFormat::new()
                    .with_max_record_len(self.max_record_len)
                    .with_verify_crc(self.verify_crc),
            ),
        }
    }

    /// Start a replay of `driver` against the built-in message table
    pub fn open<D: Driver>(&self, driver: D) -> LogIterator<D, AnyFormat> {
        LogIterator::open(driver, self.log_format())
    }

    /// Start a replay of `driver` with a custom dispatch strategy
    pub fn open_with<D: Driver, P: Dispatch>(
        &self,
        driver: D,
        dispatcher: P,
    ) -> LogIterator<D, AnyFormat, P> {
        LogIterator::with_dispatcher(driver, self.log_format(), dispatcher)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
