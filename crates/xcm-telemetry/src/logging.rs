//! Structured logging setup.
//!
//! Log lines carry consistent fields so they can be parsed downstream:
//! - `subsystem`: always `xcm-bridge` for bridge events
//! - `chain` / `to` / `token`: the transfer corridor being worked on
//! - Additional context fields

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{LoggingConfig, TelemetryError};

/// Install the global tracing subscriber.
///
/// Fails if the level directive is malformed or a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Filter(e.to_string()))?;

    let json_layer = (config.console_output && config.json_logs).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
    });

    let pretty_layer = (config.console_output && !config.json_logs).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .map_err(|e| TelemetryError::Install(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Logging initialized"
    );

    Ok(())
}

/// Helper to create structured log entries with the bridge subsystem tag.
#[macro_export]
macro_rules! log_event {
    ($level:ident, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = $crate::SUBSYSTEM,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a transfer-related event with the standard corridor fields.
#[macro_export]
macro_rules! log_transfer_event {
    ($level:ident, $msg:expr, $from:expr, $to:expr, $token:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = $crate::SUBSYSTEM,
            chain = %$from,
            to = %$to,
            token = %$token,
            $($($field)*,)?
            $msg
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_rejected() {
        let config = LoggingConfig::with_level("xcm_bridge=verbose");
        let result = init_logging(&config);
        assert!(matches!(result, Err(TelemetryError::Filter(_))));
    }

    #[test]
    fn test_macros_expand_without_subscriber() {
        log_event!(debug, "plain event");
        log_event!(info, "event with fields", attempt = 1);
        log_transfer_event!(debug, "transfer", "kusama", "karura", "KSM", amount = 10u64);
    }
}
