//! # Inbound Ports
//!
//! The uniform contract every source-chain adapter exposes.

use super::outbound::ChainConnection;
use crate::domain::{
    BalanceSnapshot, BridgeError, ChainId, FixedPoint, TransferCall, TransferParams,
};
use async_trait::async_trait;
use futures::stream::BoxStream;
use std::sync::Arc;

/// Live balance snapshots.
pub type BalanceStream = BoxStream<'static, BalanceSnapshot>;

/// Live max-input amounts. Items are `Err` only when the live fee estimate fails.
pub type MaxInputStream = BoxStream<'static, Result<FixedPoint, BridgeError>>;

/// Cross-chain adapter API - inbound port.
///
/// Every operation except `init` fails with `ApiNotFound` until a connection
/// is bound. Precondition errors are returned before any stream is created.
#[async_trait]
pub trait CrossChainApi: Send + Sync {
    /// Bind the live connection. Rebinding replaces the previous connection.
    async fn init(&mut self, connection: Arc<dyn ChainConnection>) -> Result<(), BridgeError>;

    /// Live balance of `token` held by `address` on this chain.
    fn subscribe_token_balance(
        &self,
        token: &str,
        address: &str,
    ) -> Result<BalanceStream, BridgeError>;

    /// Live maximum amount of `token` that `address` can send to `to`.
    ///
    /// A route to `to` must be configured even for tokens whose fee is zero;
    /// otherwise this fails with `TokenNotFound`.
    fn subscribe_max_input(
        &self,
        token: &str,
        address: &str,
        to: ChainId,
    ) -> Result<MaxInputStream, BridgeError>;

    /// Fee of a transfer, in the fee token's units.
    async fn estimate_tx_fee(&self, params: &TransferParams) -> Result<FixedPoint, BridgeError>;

    /// Build the transfer call for `params`.
    fn create_tx(&self, params: &TransferParams) -> Result<TransferCall, BridgeError>;
}
