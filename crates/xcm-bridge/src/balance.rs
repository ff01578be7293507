//! # Balance Adapter
//!
//! Normalizes native and asset-pallet account state into `BalanceSnapshot`s.

use crate::algorithms::AddressCodec;
use crate::domain::{BalanceSnapshot, BridgeError, Chain, FixedPoint, Token};
use crate::ports::{BalanceStream, ChainConnection, RawAccountBalances, RawAssetAccount};
use crate::registry::TokenRegistry;
use futures::future;
use futures::stream::StreamExt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Balance subscriptions of one chain.
#[derive(Clone)]
pub struct BalanceAdapter {
    chain: &'static Chain,
    tokens: TokenRegistry,
    connection: Arc<dyn ChainConnection>,
}

impl BalanceAdapter {
    /// Create an adapter over a bound connection.
    pub fn new(chain: &'static Chain, tokens: TokenRegistry, connection: Arc<dyn ChainConnection>) -> Self {
        Self {
            chain,
            tokens,
            connection,
        }
    }

    /// Symbol of the native token.
    pub fn native_token(&self) -> Option<&'static str> {
        self.tokens.native().map(|t| t.symbol)
    }

    /// Look up a token.
    pub fn get_token(&self, symbol: &str) -> Result<&'static Token, BridgeError> {
        self.tokens.get(symbol)
    }

    /// Live balance of `token` held by `address`.
    ///
    /// The address is checked before the token; both checks run before any
    /// subscription is opened.
    pub fn subscribe_balance(&self, token: &str, address: &str) -> Result<BalanceStream, BridgeError> {
        let account = AddressCodec::decode(address, self.chain.account_model)?;
        let meta = self.tokens.get(token)?;
        let decimals = meta.decimals;

        debug!(chain = %self.chain.id, token, "[xcm-bridge] subscribing balance");

        if self.tokens.is_native(token) {
            let stream = self.connection.subscribe_account_balances(&account)?;
            return Ok(stream
                .filter_map(move |raw| future::ready(in_range(native_snapshot(raw, decimals))))
                .boxed());
        }

        let asset_id = self
            .tokens
            .currency_id(token)?
            .asset_id()
            .ok_or_else(|| BridgeError::CurrencyNotFound(token.to_string()))?;

        let stream = self.connection.subscribe_asset_account(asset_id, &account)?;
        Ok(stream
            .filter_map(move |record| future::ready(in_range(asset_snapshot(record, decimals))))
            .boxed())
    }
}

fn native_snapshot(raw: RawAccountBalances, decimals: u8) -> Result<BalanceSnapshot, BridgeError> {
    Ok(BalanceSnapshot {
        free: FixedPoint::from_inner(raw.free, decimals)?,
        locked: FixedPoint::from_inner(raw.locked, decimals)?,
        reserved: FixedPoint::from_inner(raw.reserved, decimals)?,
        available: FixedPoint::from_inner(raw.available, decimals)?,
    })
}

/// A missing record is a zero balance.
fn asset_snapshot(
    record: Option<RawAssetAccount>,
    decimals: u8,
) -> Result<BalanceSnapshot, BridgeError> {
    let balance = record.map(|r| r.balance).unwrap_or_default();
    Ok(BalanceSnapshot::free_only(FixedPoint::from_inner(balance, decimals)?))
}

/// Chain states that do not fit an amount are skipped, not truncated.
fn in_range(snapshot: Result<BalanceSnapshot, BridgeError>) -> Option<BalanceSnapshot> {
    snapshot
        .map_err(|e| warn!(error = %e, "[xcm-bridge] skipping out-of-range balance"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryConnection;
    use crate::algorithms::Account;
    use crate::domain::ChainId;
    use crate::registry::chain;
    use std::time::Duration;
    use tokio::time::timeout;

    const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";

    fn alice() -> Account {
        AddressCodec::decode(ALICE, crate::domain::AccountModel::Substrate32).unwrap()
    }

    fn calamari(connection: Arc<InMemoryConnection>) -> BalanceAdapter {
        BalanceAdapter::new(
            chain(ChainId::Calamari),
            TokenRegistry::for_chain(ChainId::Calamari).unwrap(),
            connection,
        )
    }

    #[tokio::test]
    async fn test_native_balance_fields() {
        let connection = Arc::new(InMemoryConnection::new(ChainId::Calamari));
        connection.set_balances(
            alice(),
            RawAccountBalances {
                free: 5_000_000_000_000,
                locked: 1_000_000_000_000,
                reserved: 500_000_000_000,
                available: 4_000_000_000_000,
            },
        );

        let adapter = calamari(connection);
        let snapshot = adapter
            .subscribe_balance("KMA", ALICE)
            .unwrap()
            .next()
            .await
            .unwrap();

        assert_eq!(snapshot.free, FixedPoint::from_units(5, 12).unwrap());
        assert_eq!(snapshot.locked, FixedPoint::from_units(1, 12).unwrap());
        assert_eq!(snapshot.reserved.inner(), 500_000_000_000);
        assert_eq!(snapshot.available, FixedPoint::from_units(4, 12).unwrap());
    }

    #[tokio::test]
    async fn test_asset_balance_is_free_only() {
        let connection = Arc::new(InMemoryConnection::new(ChainId::Calamari));
        connection.set_asset(14, alice(), Some(RawAssetAccount { balance: 2_500_000 }));

        let adapter = calamari(connection);
        let snapshot = adapter
            .subscribe_balance("USDT", ALICE)
            .unwrap()
            .next()
            .await
            .unwrap();

        assert_eq!(snapshot.free.inner(), 2_500_000);
        assert_eq!(snapshot.available, snapshot.free);
        assert_eq!(snapshot.locked, FixedPoint::zero(6));
        assert_eq!(snapshot.reserved, FixedPoint::zero(6));
    }

    #[tokio::test]
    async fn test_missing_asset_record_is_zero() {
        let connection = Arc::new(InMemoryConnection::new(ChainId::Calamari));
        let adapter = calamari(connection);
        let snapshot = adapter
            .subscribe_balance("KSM", ALICE)
            .unwrap()
            .next()
            .await
            .unwrap();

        assert_eq!(snapshot, BalanceSnapshot::free_only(FixedPoint::zero(12)));
    }

    #[tokio::test]
    async fn test_out_of_range_balance_is_skipped() {
        let connection = Arc::new(InMemoryConnection::new(ChainId::Calamari));
        connection.set_balances(
            alice(),
            RawAccountBalances {
                free: u128::MAX,
                available: u128::MAX,
                ..Default::default()
            },
        );
        let mut stream = calamari(connection.clone())
            .subscribe_balance("KMA", ALICE)
            .unwrap();

        assert!(timeout(Duration::from_millis(50), stream.next()).await.is_err());

        connection.set_balances(
            alice(),
            RawAccountBalances {
                free: 7,
                available: 7,
                ..Default::default()
            },
        );
        let snapshot = timeout(Duration::from_secs(1), stream.next())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(snapshot.available.inner(), 7);
    }

    #[tokio::test]
    async fn test_invalid_address_before_query() {
        let connection = Arc::new(InMemoryConnection::new(ChainId::Calamari));
        let adapter = calamari(connection.clone());

        let result = adapter.subscribe_balance("KMA", "not-an-address");
        assert!(matches!(result, Err(BridgeError::InvalidAddress(_))));
        assert_eq!(connection.query_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let connection = Arc::new(InMemoryConnection::new(ChainId::Calamari));
        let adapter = calamari(connection.clone());

        let result = adapter.subscribe_balance("DOT", ALICE);
        assert!(matches!(result, Err(BridgeError::TokenNotFound(_))));
        assert_eq!(connection.query_count(), 0);
    }

    #[tokio::test]
    async fn test_token_without_currency_id() {
        let connection = Arc::new(InMemoryConnection::new(ChainId::Moonriver));
        let adapter = BalanceAdapter::new(
            chain(ChainId::Moonriver),
            TokenRegistry::for_chain(ChainId::Moonriver).unwrap(),
            connection,
        );

        let result = adapter.subscribe_balance("KAR", "0x1111111111111111111111111111111111111111");
        assert!(matches!(result, Err(BridgeError::CurrencyNotFound(_))));
    }

    #[test]
    fn test_native_token_symbol() {
        let adapter = calamari(Arc::new(InMemoryConnection::new(ChainId::Calamari)));
        assert_eq!(adapter.native_token(), Some("KMA"));
        assert_eq!(adapter.get_token("WBTC").unwrap().decimals, 8);
    }
}
