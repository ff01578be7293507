//! # XCM Version Detection
//!
//! Decides once per connection whether the runtime still accepts the legacy
//! encoding.

use crate::domain::{BridgeError, XcmVersion};
use tracing::{debug, warn};

/// Variant name whose presence marks a legacy-capable runtime.
pub const LEGACY_LOCATION_VARIANT: &str = "V0";

/// Classify a runtime from the variant names of its versioned-location type.
///
/// A failed probe is treated as a runtime without legacy support.
pub fn detect_xcm_version(probe: Result<Vec<String>, BridgeError>) -> XcmVersion {
    match probe {
        Ok(variants) if variants.iter().any(|v| v == LEGACY_LOCATION_VARIANT) => {
            debug!(?variants, "[xcm-bridge] runtime accepts legacy XCM");
            XcmVersion::Legacy
        }
        Ok(variants) => {
            debug!(?variants, "[xcm-bridge] runtime accepts current XCM only");
            XcmVersion::Current
        }
        Err(e) => {
            warn!(error = %e, "[xcm-bridge] XCM version probe failed, assuming current");
            XcmVersion::Current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants(names: &[&str]) -> Result<Vec<String>, BridgeError> {
        Ok(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn test_v0_means_legacy() {
        assert_eq!(detect_xcm_version(variants(&["V0", "V1", "V3"])), XcmVersion::Legacy);
    }

    #[test]
    fn test_without_v0_is_current() {
        assert_eq!(detect_xcm_version(variants(&["V2", "V3"])), XcmVersion::Current);
    }

    #[test]
    fn test_probe_failure_is_current() {
        let probe = Err(BridgeError::Connection("type not found".to_string()));
        assert_eq!(detect_xcm_version(probe), XcmVersion::Current);
    }
}
