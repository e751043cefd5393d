//! # Configuration Management
//!
//! Centralized configuration for the codec pipeline.
//!
//! This module provides structured configuration for the message catalog,
//! packet wire metadata, and logging, loaded ahead of decoration so that
//! registration mistakes are caught at startup.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-specific overrides via `from_env()`
//!
//! ## Example
//! ```rust
//! use codec_chain::config::CodecConfig;
//!
//! let config = CodecConfig::from_toml(r#"
//!     [catalog]
//!     messages = ["LoginMessage", "NewPlayerMessage"]
//!
//!     [[packets]]
//!     name = "login"
//!     opcode = 16
//!     size = "var_byte"
//! "#).unwrap();
//!
//! let catalog = config.build_catalog().unwrap();
//! assert!(catalog.contains("LoginMessage"));
//! ```

use crate::core::message::{CatalogRegistry, MessageDescriptor};
use crate::core::packet::PacketDescriptor;
use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Main configuration structure for one codec category.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CodecConfig {
    /// Message types known to the catalog.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Wire metadata for the packet types this category handles.
    #[serde(default)]
    pub packets: Vec<PacketDescriptor>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The `[catalog]` section: message type names the host recognizes.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CatalogConfig {
    /// Catalog names of the known message types.
    #[serde(default)]
    pub messages: Vec<String>,
}

/// The `[logging]` section.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridable by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CodecConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| CodecError::ConfigError(format!("failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| CodecError::ConfigError(format!("failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| CodecError::ConfigError(format!("failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables.
    ///
    /// `CODEC_CHAIN_CATALOG_FILE` names a TOML file to start from;
    /// `CODEC_CHAIN_LOG_LEVEL` overrides the logging level.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var("CODEC_CHAIN_CATALOG_FILE") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(level) = std::env::var("CODEC_CHAIN_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration.
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Build the catalog registry this configuration describes.
    ///
    /// Duplicate packet descriptors are a configuration error; startup for
    /// the category should abort rather than dispatch with a half-built
    /// catalog.
    pub fn build_catalog(&self) -> Result<CatalogRegistry> {
        let mut registry = CatalogRegistry::new();
        for name in &self.catalog.messages {
            registry.register(MessageDescriptor::new(name));
        }
        for descriptor in &self.packets {
            registry.register_packet(descriptor.clone())?;
        }
        Ok(registry)
    }
}
