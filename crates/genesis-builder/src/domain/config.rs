//! Genesis builder configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use genesis_builder::domain::GenesisConfigBuilder;
//!
//! let config = GenesisConfigBuilder::new()
//!     .codec_version(0)
//!     .max_slice_len(1 << 16)
//!     .build()
//!     .expect("Valid config");
//! ```

use serde::{Deserialize, Serialize};
use shared_codec::{DEFAULT_MAX_SLICE_LEN, VERSION_LEN};

use super::errors::GenesisError;

/// Codec version written in front of every genesis payload.
pub const DEFAULT_CODEC_VERSION: u16 = 0;

/// Codec limits and the version the builder encodes with.
///
/// Fixed at service construction; every build from one service uses the same
/// values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Version prefix embedded in the payload
    pub codec_version: u16,
    /// Maximum entries in any encoded slice or sequence
    pub max_slice_len: usize,
    /// Maximum encoded payload size in bytes, version prefix included
    pub max_payload_size: usize,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            codec_version: DEFAULT_CODEC_VERSION,
            max_slice_len: DEFAULT_MAX_SLICE_LEN,
            max_payload_size: u32::MAX as usize,
        }
    }
}

impl GenesisConfig {
    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.max_slice_len == 0 {
            return Err(GenesisError::InvalidConfig(
                "max_slice_len cannot be 0".to_string(),
            ));
        }

        // Must at least hold the version prefix.
        if self.max_payload_size < VERSION_LEN {
            return Err(GenesisError::InvalidConfig(format!(
                "max_payload_size must be at least {VERSION_LEN} bytes, got {}",
                self.max_payload_size
            )));
        }

        Ok(())
    }

    /// Builder-style method to set the codec version
    pub fn with_codec_version(mut self, version: u16) -> Self {
        self.codec_version = version;
        self
    }
}

/// Builder for GenesisConfig with validation
#[derive(Default)]
pub struct GenesisConfigBuilder {
    codec_version: Option<u16>,
    max_slice_len: Option<usize>,
    max_payload_size: Option<usize>,
}

impl GenesisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn codec_version(mut self, version: u16) -> Self {
        self.codec_version = Some(version);
        self
    }

    pub fn max_slice_len(mut self, len: usize) -> Self {
        self.max_slice_len = Some(len);
        self
    }

    pub fn max_payload_size(mut self, size: usize) -> Self {
        self.max_payload_size = Some(size);
        self
    }

    /// Build the GenesisConfig, validating all parameters
    pub fn build(self) -> Result<GenesisConfig, GenesisError> {
        let defaults = GenesisConfig::default();

        let config = GenesisConfig {
            codec_version: self.codec_version.unwrap_or(defaults.codec_version),
            max_slice_len: self.max_slice_len.unwrap_or(defaults.max_slice_len),
            max_payload_size: self.max_payload_size.unwrap_or(defaults.max_payload_size),
        };

        config.validate()?;
        Ok(config)
    }
}
