//! # Outbound Ports
//!
//! The live chain connection the adapters consume. RPC transport, connection
//! lifecycle and the storage-subscription primitive all live behind it.

use crate::algorithms::Account;
use crate::domain::{BridgeError, TransferCall, TxHash};
use async_trait::async_trait;
use futures::stream::BoxStream;
use primitive_types::U256;

/// Raw balances of an account's native token, as the runtime reports them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawAccountBalances {
    /// Free balance.
    pub free: u128,
    /// Locked balance.
    pub locked: u128,
    /// Reserved balance.
    pub reserved: u128,
    /// Spendable balance computed by the runtime.
    pub available: u128,
}

/// Raw asset-pallet record of an (asset, account) pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawAssetAccount {
    /// Free asset balance.
    pub balance: u128,
}

/// Live chain connection - outbound port.
///
/// Subscriptions replay the current value first and then follow chain state
/// in order. They never end on their own.
#[async_trait]
pub trait ChainConnection: Send + Sync {
    /// Resolve once the connection can serve queries.
    async fn ready(&self) -> Result<(), BridgeError>;

    /// Variant names of the runtime's versioned-location type (`"V0"`, `"V1"`, ...).
    async fn xcm_location_versions(&self) -> Result<Vec<String>, BridgeError>;

    /// Live native balances of `account`.
    fn subscribe_account_balances(
        &self,
        account: &Account,
    ) -> Result<BoxStream<'static, RawAccountBalances>, BridgeError>;

    /// Live asset record of `account`; `None` while no record exists.
    fn subscribe_asset_account(
        &self,
        asset_id: u128,
        account: &Account,
    ) -> Result<BoxStream<'static, Option<RawAssetAccount>>, BridgeError>;

    /// Current base gas price of the chain's execution layer.
    async fn gas_price(&self) -> Result<U256, BridgeError>;

    /// Sign and dispatch a constructed call on behalf of `signer`.
    async fn submit(&self, call: &TransferCall, signer: &Account) -> Result<TxHash, BridgeError>;
}
