//! # Domain Entities
//!
//! Chains, tokens, routes, balances and transfer requests.

use super::errors::BridgeError;
use super::fixed_point::FixedPoint;
use super::value_objects::{AccountModel, ChainId, CurrencyId, RelayNetwork, WeightLimit};
use serde::Serialize;

/// Static chain metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Chain {
    /// Identifier.
    pub id: ChainId,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Parachain id; `None` for relay chains.
    pub para_chain_id: Option<u32>,
    /// Relay network membership.
    pub relay: RelayNetwork,
    /// Account model.
    pub account_model: AccountModel,
    /// SS58 address prefix.
    pub ss58_prefix: u16,
    /// Common-good system chain (reachable from the relay by teleport).
    pub is_system: bool,
}

impl Chain {
    /// Relay chains have no parachain id.
    pub fn is_relay_chain(&self) -> bool {
        self.para_chain_id.is_none()
    }

    /// Chains with 20-byte EVM accounts.
    pub fn is_evm(&self) -> bool {
        self.account_model == AccountModel::Evm20
    }
}

/// Token metadata, one per (chain, symbol).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Ticker.
    pub symbol: &'static str,
    /// Human name.
    pub name: &'static str,
    /// Decimal precision.
    pub decimals: u8,
    /// Existential deposit (raw).
    pub ed: u128,
    /// On-wire currency id; `None` for metadata-only entries.
    pub currency: Option<CurrencyId>,
}

impl Token {
    /// Token whose name equals its symbol.
    pub const fn new(
        symbol: &'static str,
        decimals: u8,
        ed: u128,
        currency: Option<CurrencyId>,
    ) -> Self {
        Self {
            symbol,
            name: symbol,
            decimals,
            ed,
            currency,
        }
    }

    /// Existential deposit as an amount.
    pub fn existential_deposit(&self) -> Result<FixedPoint, BridgeError> {
        FixedPoint::from_inner(self.ed, self.decimals)
    }
}

/// Fixed protocol fee charged for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct XcmFee {
    /// Fee token symbol.
    pub token: &'static str,
    /// Raw fee amount.
    pub amount: u128,
}

/// Fee and weight policy of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct XcmRouteConfig {
    /// Destination fee.
    pub fee: XcmFee,
    /// Destination weight policy.
    pub weight_limit: WeightLimit,
}

/// One statically configured transfer corridor out of a source chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Destination chain.
    pub to: ChainId,
    /// Token symbol, registered on the source chain.
    pub token: &'static str,
    /// Fee and weight policy.
    pub xcm: XcmRouteConfig,
}

impl Route {
    /// Route whose fee is paid in the transferred token.
    pub const fn new(to: ChainId, token: &'static str, fee: u128, weight_limit: WeightLimit) -> Self {
        Self {
            to,
            token,
            xcm: XcmRouteConfig {
                fee: XcmFee { token, amount: fee },
                weight_limit,
            },
        }
    }
}

/// Route tables of a source chain.
///
/// `current` replaces `legacy` once the runtime drops the legacy XCM version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSet {
    /// Table used while the legacy version is supported.
    pub legacy: &'static [Route],
    /// Table used afterwards, if it differs.
    pub current: Option<&'static [Route]>,
}

impl RouteSet {
    /// A set with a single table for every version.
    pub const fn single(routes: &'static [Route]) -> Self {
        Self {
            legacy: routes,
            current: None,
        }
    }

    /// Table for a detected version.
    pub fn active(&self, legacy: bool) -> &'static [Route] {
        match (legacy, self.current) {
            (false, Some(current)) => current,
            _ => self.legacy,
        }
    }
}

/// Normalized account balance of one token.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BalanceSnapshot {
    /// Free balance.
    pub free: FixedPoint,
    /// Locked balance.
    pub locked: FixedPoint,
    /// Reserved balance.
    pub reserved: FixedPoint,
    /// Spendable balance, as computed by the runtime.
    pub available: FixedPoint,
}

impl BalanceSnapshot {
    /// Snapshot of an asset with only a free balance.
    pub fn free_only(free: FixedPoint) -> Self {
        let zero = FixedPoint::zero(free.decimals());
        Self {
            free,
            locked: zero,
            reserved: zero,
            available: free,
        }
    }
}

/// A transfer request; the source chain is implied by the adapter.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferParams {
    /// Destination chain.
    pub to: ChainId,
    /// Token symbol.
    pub token: String,
    /// Amount to send.
    pub amount: FixedPoint,
    /// Receiving address on the destination chain.
    pub address: String,
    /// Sending address on the source chain.
    pub signer: String,
}
