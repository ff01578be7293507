//! # Adapter Registry
//!
//! Maps a chain identifier to its configured adapter. Construction is pure;
//! callers bind connections afterwards with `get_mut(..).init(..)`.

use crate::bridge::CrossChainAdapter;
use crate::config::BridgeConfig;
use crate::domain::{BridgeError, ChainId};
use std::collections::BTreeMap;
use tracing::debug;

/// Source chains with configured token and route tables.
pub const SOURCE_CHAINS: [ChainId; 5] = [
    ChainId::Polkadot,
    ChainId::Kusama,
    ChainId::Calamari,
    ChainId::Moonbeam,
    ChainId::Moonriver,
];

/// Adapters keyed by source chain.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: BTreeMap<ChainId, CrossChainAdapter>,
}

impl AdapterRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with an adapter for every configured source chain.
    pub fn with_default_adapters(config: BridgeConfig) -> Result<Self, BridgeError> {
        config.validate()?;
        let mut registry = Self::new();
        for id in SOURCE_CHAINS {
            registry.register(CrossChainAdapter::for_chain(id, config.clone())?);
        }
        debug!(adapters = registry.adapters.len(), "[xcm-bridge] adapter registry built");
        Ok(registry)
    }

    /// Add or replace the adapter of its chain.
    pub fn register(&mut self, adapter: CrossChainAdapter) {
        self.adapters.insert(adapter.chain().id, adapter);
    }

    /// Adapter of a chain.
    pub fn get(&self, id: ChainId) -> Option<&CrossChainAdapter> {
        self.adapters.get(&id)
    }

    /// Mutable adapter of a chain, for binding a connection.
    pub fn get_mut(&mut self, id: ChainId) -> Option<&mut CrossChainAdapter> {
        self.adapters.get_mut(&id)
    }

    /// Adapter by chain identifier string.
    pub fn find(&self, id: &str) -> Result<&CrossChainAdapter, BridgeError> {
        let chain: ChainId = id.parse()?;
        self.get(chain)
            .ok_or_else(|| BridgeError::UnsupportedChain(id.to_string()))
    }

    /// Chains with an adapter, in identifier order.
    pub fn chains(&self) -> Vec<ChainId> {
        self.adapters.keys().copied().collect()
    }
}
