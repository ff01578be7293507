//! # Domain Errors
//!
//! Error types for the cross-chain adapters.
//!
//! Every precondition failure is returned before any chain query is issued or
//! any stream is created.

use super::value_objects::ChainId;
use thiserror::Error;

/// Raw 32-byte account id.
pub type AccountId32 = [u8; 32];

/// Raw 20-byte (EVM) account key.
pub type AccountKey20 = [u8; 20];

/// Extrinsic hash returned by the connection on submission.
pub type TxHash = [u8; 32];

/// Cross-chain adapter error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Adapter used before a chain connection was bound.
    #[error("Api not found for chain {0}")]
    ApiNotFound(ChainId),

    /// Token unknown to the chain, or no route configured for it.
    #[error("Token not found: {0}")]
    TokenNotFound(String),

    /// Token is known but has no usable on-chain currency id.
    #[error("Currency not found: {0}")]
    CurrencyNotFound(String),

    /// Address fails the chain's format rules.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Chain identifier not present in the registry.
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    /// Opaque failure of the chain connection.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Fixed-point overflow or precision loss.
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// Call arguments could not be encoded.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Rejected configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_not_found_error() {
        let err = BridgeError::ApiNotFound(ChainId::Kusama);
        assert_eq!(err.to_string(), "Api not found for chain kusama");
    }

    #[test]
    fn test_token_not_found_error() {
        let err = BridgeError::TokenNotFound("ACA".to_string());
        assert!(err.to_string().contains("ACA"));
    }

    #[test]
    fn test_invalid_address_error() {
        let err = BridgeError::InvalidAddress("0xdead".to_string());
        assert!(err.to_string().contains("Invalid address"));
        assert!(err.to_string().contains("0xdead"));
    }

    #[test]
    fn test_currency_not_found_error() {
        let err = BridgeError::CurrencyNotFound("KUSD".to_string());
        assert!(err.to_string().contains("Currency not found"));
    }
}
