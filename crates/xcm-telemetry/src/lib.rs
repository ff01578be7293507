//! # XCM Telemetry
//!
//! Logging bootstrap for applications embedding the XCM bridge.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use xcm_telemetry::{init_logging, LoggingConfig};
//!
//! fn main() {
//!     let config = LoggingConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//!
//!     // Adapter logs are now emitted through tracing-subscriber
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `XCM_SERVICE_NAME` | `xcm-bridge` | Service name attached to the startup log |
//! | `XCM_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `XCM_JSON_LOGS` | `false` | Emit JSON lines instead of pretty output |
//! | `XCM_CONSOLE_OUTPUT` | `true` | Install the console layer at all |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::LoggingConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Logging initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log filter directive could not be parsed.
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber was already installed.
    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// Subsystem tag attached to every structured bridge log line.
pub const SUBSYSTEM: &str = "xcm-bridge";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TelemetryError::Filter("bogus[".to_string());
        assert!(err.to_string().contains("bogus["));
    }
}
