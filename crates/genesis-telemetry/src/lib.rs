//! # Genesis Telemetry
//!
//! Structured logging for the genesis tooling: a `tracing-subscriber`
//! registry with an `EnvFilter` and a human-readable or JSON `fmt` layer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use genesis_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `GENESIS_LOG_LEVEL` | `RUST_LOG`, then `info` | Log filter |
//! | `GENESIS_JSON_LOGS` | `false` | JSON lines output |
//! | `GENESIS_SERVICE_NAME` | `asset-genesis` | Service name in the startup log event |

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_LOG_LEVEL, DEFAULT_SERVICE_NAME};
pub use logging::env_filter;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter {0}")]
    InvalidFilter(String),

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Install logging for the process. Fails if a subscriber is already set.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    logging::init_logging(config)
}
