//! # XCM Bridge
//!
//! Cross-chain asset-transfer routing over XCM.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! For a (source chain, destination chain, token) triple:
//! - report a user's spendable balance on the source chain
//! - compute the maximum transferable amount after fees and existential deposit
//! - build the correctly shaped outbound transfer call
//!
//! ## Source Families
//!
//! | Family | Chains | Call | Fee |
//! |--------|--------|------|-----|
//! | Relay chain | Polkadot, Kusama | `xcmPallet` reserve/teleport | route table |
//! | xTokens | Calamari | `xTokens.transfer` | route table |
//! | EVM | Moonbeam, Moonriver | `xTokens.transfer` | live gas price |
//!
//! ## Module Structure
//!
//! ```text
//! xcm-bridge/
//! ├── domain/          # ChainId, Token, Route, FixedPoint, XCM shapes, errors
//! ├── registry/        # static chain, token and route tables
//! ├── algorithms/      # combine-latest, max-input, locations, version, addresses
//! ├── ports/           # CrossChainApi, ChainConnection
//! ├── adapters/        # InMemoryConnection
//! ├── balance.rs       # BalanceAdapter
//! ├── bridge/          # CrossChainAdapter + source families
//! ├── config.rs        # BridgeConfig
//! └── router.rs        # AdapterRegistry
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut registry = AdapterRegistry::with_default_adapters(BridgeConfig::from_env()?)?;
//! let kusama = registry.get_mut(ChainId::Kusama).unwrap();
//! kusama.init(connection).await?;
//!
//! let call = kusama.create_tx(&params)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod balance;
pub mod bridge;
pub mod config;
pub mod domain;
pub mod ports;
pub mod registry;
pub mod router;

// Re-exports
pub use adapters::{InMemoryConnection, SubmittedCall};
pub use algorithms::{Account, AddressCodec, DestinationKind};
pub use balance::BalanceAdapter;
pub use bridge::{CrossChainAdapter, SourceFamily};
pub use config::{BridgeConfig, Ratio};
pub use domain::{
    BalanceSnapshot, BridgeError, Chain, ChainId, CurrencyId, FixedPoint, Route, Token,
    TransferCall, TransferParams, WeightLimit, XcmVersion,
};
pub use ports::{
    BalanceStream, ChainConnection, CrossChainApi, MaxInputStream, RawAccountBalances,
    RawAssetAccount,
};
pub use registry::TokenRegistry;
pub use router::AdapterRegistry;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
