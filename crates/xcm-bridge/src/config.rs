//! # Bridge Configuration
//!
//! Fee margins and probing policy shared by every adapter.

use crate::domain::BridgeError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Gas units consumed by the EVM-family cross-chain call.
pub const DEFAULT_EVM_XCM_GAS: u64 = 35_697;

/// An exact `numerator / denominator` multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    /// Numerator.
    pub numerator: u64,
    /// Denominator, never zero in a validated config.
    pub denominator: u64,
}

impl Ratio {
    /// Create a ratio.
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// `(numerator, denominator)`.
    pub fn as_pair(&self) -> (u64, u64) {
        (self.numerator, self.denominator)
    }
}

impl FromStr for Ratio {
    type Err = BridgeError;

    /// Parse `"12/10"` or a bare integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BridgeError::InvalidConfig(format!("invalid ratio: {s}"));
        let (numerator, denominator) = s.trim().split_once('/').unwrap_or((s.trim(), "1"));
        Ok(Self::new(
            numerator.trim().parse().map_err(|_| invalid())?,
            denominator.trim().parse().map_err(|_| invalid())?,
        ))
    }
}

/// Adapter configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Safety margin applied to the estimated fee in max-input.
    pub fee_factor: Ratio,

    /// Gas units of the EVM-family cross-chain call.
    pub evm_xcm_gas: u64,

    /// Wallet "medium" tier applied to the EVM minimum fee.
    pub evm_fee_multiplier: Ratio,

    /// Probe the runtime for legacy XCM support on `init`.
    /// When off, the current encoding is assumed.
    pub probe_xcm_version: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            fee_factor: Ratio::new(12, 10),
            evm_xcm_gas: DEFAULT_EVM_XCM_GAS,
            evm_fee_multiplier: Ratio::new(3, 2),
            probe_xcm_version: true,
        }
    }
}

impl BridgeConfig {
    /// Create a config for testing (no version probing).
    pub fn for_testing() -> Self {
        Self {
            probe_xcm_version: false,
            ..Self::default()
        }
    }

    /// Load overrides from the environment on top of the defaults.
    ///
    /// - `XCM_FEE_FACTOR` (e.g. `12/10`)
    /// - `XCM_EVM_GAS`
    /// - `XCM_EVM_FEE_MULTIPLIER` (e.g. `3/2`)
    /// - `XCM_PROBE_VERSION` (`true`/`false`)
    pub fn from_env() -> Result<Self, BridgeError> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("XCM_FEE_FACTOR") {
            config.fee_factor = value.parse()?;
        }
        if let Ok(value) = std::env::var("XCM_EVM_GAS") {
            config.evm_xcm_gas = value
                .trim()
                .parse()
                .map_err(|_| BridgeError::InvalidConfig(format!("invalid XCM_EVM_GAS: {value}")))?;
        }
        if let Ok(value) = std::env::var("XCM_EVM_FEE_MULTIPLIER") {
            config.evm_fee_multiplier = value.parse()?;
        }
        if let Ok(value) = std::env::var("XCM_PROBE_VERSION") {
            config.probe_xcm_version = parse_flag(&value).ok_or_else(|| {
                BridgeError::InvalidConfig(format!("invalid XCM_PROBE_VERSION: {value}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values no adapter can work with.
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.fee_factor.denominator == 0 {
            return Err(BridgeError::InvalidConfig(
                "fee_factor denominator is zero".to_string(),
            ));
        }
        if self.evm_fee_multiplier.denominator == 0 {
            return Err(BridgeError::InvalidConfig(
                "evm_fee_multiplier denominator is zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
