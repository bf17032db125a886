//! # Decoder Configuration Module
//!
//! Optional limits and expectations applied on top of the fixed layout. The default
//! configuration accepts every well-formed MessageSent account, so
//! `MessageSentDecoder::default()` behaves exactly like `decode_message_sent`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::MAX_ACCOUNT_DATA_SIZE;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid decoder config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Decoder configuration for different deployments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Largest account data accepted before any field is read
    pub max_event_size: usize,

    /// Reject headers whose source domain differs (Solana is 5)
    pub expected_source_domain: Option<u32>,

    /// Reject headers whose destination domain differs
    pub expected_destination_domain: Option<u32>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_event_size: MAX_ACCOUNT_DATA_SIZE,
            expected_source_domain: None,
            expected_destination_domain: None,
        }
    }
}

impl DecoderConfig {
    pub fn with_max_event_size(mut self, max_event_size: usize) -> Self {
        self.max_event_size = max_event_size;
        self
    }

    pub fn with_source_domain(mut self, domain: u32) -> Self {
        self.expected_source_domain = Some(domain);
        self
    }

    pub fn with_destination_domain(mut self, domain: u32) -> Self {
        self.expected_destination_domain = Some(domain);
        self
    }

    /// Parse from TOML; missing keys take their defaults
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        debug!(?config, "Loaded decoder config");
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load from a TOML file, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default decoder config: {}", e);
                Self::default()
            }
        }
    }
}
