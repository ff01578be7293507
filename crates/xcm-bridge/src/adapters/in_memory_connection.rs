//! In-Memory Chain Connection
//!
//! Implements the `ChainConnection` port over `tokio::sync::watch` channels.
//! Tests and embedders drive chain state through the setters.

use crate::algorithms::Account;
use crate::domain::{BridgeError, ChainId, TransferCall, TxHash};
use crate::ports::outbound::{ChainConnection, RawAccountBalances, RawAssetAccount};
use async_trait::async_trait;
use blake2::{Blake2b512, Digest};
use futures::stream::{BoxStream, StreamExt};
use parking_lot::RwLock;
use primitive_types::U256;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info};

/// A call handed to `submit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmittedCall {
    /// The call.
    pub call: TransferCall,
    /// Signing account.
    pub signer: Account,
    /// Hash returned to the caller.
    pub hash: TxHash,
}

/// In-memory chain connection.
pub struct InMemoryConnection {
    chain: ChainId,
    /// Probe result for the versioned-location type.
    location_versions: RwLock<Result<Vec<String>, BridgeError>>,
    /// Gas price query result.
    gas_price: RwLock<Result<U256, BridgeError>>,
    balances: RwLock<HashMap<Account, watch::Sender<RawAccountBalances>>>,
    assets: RwLock<HashMap<(u128, Account), watch::Sender<Option<RawAssetAccount>>>>,
    submitted: RwLock<Vec<SubmittedCall>>,
    /// Number of state queries opened.
    queries: AtomicUsize,
}

impl InMemoryConnection {
    /// Connection to a runtime that only accepts current XCM.
    pub fn new(chain: ChainId) -> Self {
        Self {
            chain,
            location_versions: RwLock::new(Ok(vec!["V2".to_string(), "V3".to_string()])),
            gas_price: RwLock::new(Ok(U256::zero())),
            balances: RwLock::new(HashMap::new()),
            assets: RwLock::new(HashMap::new()),
            submitted: RwLock::new(Vec::new()),
            queries: AtomicUsize::new(0),
        }
    }

    /// Connection to a runtime that still accepts legacy XCM.
    pub fn legacy(chain: ChainId) -> Self {
        let connection = Self::new(chain);
        connection.set_location_versions(Ok(vec![
            "V0".to_string(),
            "V1".to_string(),
            "V3".to_string(),
        ]));
        connection
    }

    /// Chain this connection serves.
    pub fn chain(&self) -> ChainId {
        self.chain
    }

    /// Set the versioned-location probe result.
    pub fn set_location_versions(&self, versions: Result<Vec<String>, BridgeError>) {
        *self.location_versions.write() = versions;
    }

    /// Set the base gas price.
    pub fn set_gas_price(&self, price: U256) {
        *self.gas_price.write() = Ok(price);
    }

    /// Make gas price queries fail with `error`.
    pub fn fail_gas_price(&self, error: BridgeError) {
        *self.gas_price.write() = Err(error);
    }

    /// Publish native balances of an account.
    pub fn set_balances(&self, account: Account, balances: RawAccountBalances) {
        self.balances
            .write()
            .entry(account)
            .or_insert_with(|| watch::channel(RawAccountBalances::default()).0)
            .send_replace(balances);
    }

    /// Publish (or remove, with `None`) an asset record.
    pub fn set_asset(&self, asset_id: u128, account: Account, record: Option<RawAssetAccount>) {
        self.assets
            .write()
            .entry((asset_id, account))
            .or_insert_with(|| watch::channel(None).0)
            .send_replace(record);
    }

    /// Calls submitted so far.
    pub fn submitted(&self) -> Vec<SubmittedCall> {
        self.submitted.read().clone()
    }

    /// Number of subscriptions opened so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainConnection for InMemoryConnection {
    async fn ready(&self) -> Result<(), BridgeError> {
        Ok(())
    }

    async fn xcm_location_versions(&self) -> Result<Vec<String>, BridgeError> {
        self.location_versions.read().clone()
    }

    fn subscribe_account_balances(
        &self,
        account: &Account,
    ) -> Result<BoxStream<'static, RawAccountBalances>, BridgeError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let receiver = self
            .balances
            .write()
            .entry(*account)
            .or_insert_with(|| watch::channel(RawAccountBalances::default()).0)
            .subscribe();
        debug!(chain = %self.chain, "[xcm-bridge] balances subscription opened");
        Ok(WatchStream::new(receiver).boxed())
    }

    fn subscribe_asset_account(
        &self,
        asset_id: u128,
        account: &Account,
    ) -> Result<BoxStream<'static, Option<RawAssetAccount>>, BridgeError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let receiver = self
            .assets
            .write()
            .entry((asset_id, *account))
            .or_insert_with(|| watch::channel(None).0)
            .subscribe();
        debug!(chain = %self.chain, asset_id = %asset_id, "[xcm-bridge] asset subscription opened");
        Ok(WatchStream::new(receiver).boxed())
    }

    async fn gas_price(&self) -> Result<U256, BridgeError> {
        self.gas_price.read().clone()
    }

    async fn submit(&self, call: &TransferCall, signer: &Account) -> Result<TxHash, BridgeError> {
        let mut submitted = self.submitted.write();
        let hash = call_hash(call, submitted.len())?;
        submitted.push(SubmittedCall {
            call: call.clone(),
            signer: *signer,
            hash,
        });
        info!(
            chain = %self.chain,
            call = %format!("{}.{}", call.pallet(), call.method()),
            "[xcm-bridge] call submitted"
        );
        Ok(hash)
    }
}

/// Hash a call together with its submission index.
fn call_hash(call: &TransferCall, nonce: usize) -> Result<TxHash, BridgeError> {
    let encoded = serde_json::to_vec(call).map_err(|e| BridgeError::Encoding(e.to_string()))?;
    let mut hasher = Blake2b512::new();
    hasher.update(&encoded);
    hasher.update((nonce as u64).to_le_bytes());

    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result[..32]);
    Ok(hash)
}
