//! # Source Chain Families
//!
//! Per-family call construction and fee models. A family is fixed per source
//! chain; the destination kind is chosen per transfer.

use crate::algorithms::{
    account_junction, account_path, parachain_junction, Account, DestinationKind, Envelope,
};
use crate::config::BridgeConfig;
use crate::domain::{
    BridgeError, Chain, ChainId, CurrencyId, Junctions, MultiAsset, MultiAssetV0, NetworkId,
    Route, Token, TransferCall, VersionedMultiAssets, WeightLimit, XTokensCall, XcmPalletCall,
    XcmPalletMethod, XcmVersion,
};
use primitive_types::U256;

/// Legacy destinations that only accept the unweighted reserve transfer.
const UNWEIGHTED_LEGACY_DESTINATIONS: [ChainId; 2] = [ChainId::Acala, ChainId::Karura];

/// How a source chain sends and prices transfers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceFamily {
    /// Relay chain using `xcmPallet`.
    RelayChain,
    /// Parachain using `xTokens` with asset-manager currency ids.
    XTokens,
    /// EVM parachain using `xTokens`, priced by live gas.
    Evm,
}

impl SourceFamily {
    /// Family of a source chain.
    pub fn for_chain(chain: &Chain) -> Self {
        if chain.is_relay_chain() {
            SourceFamily::RelayChain
        } else if chain.is_evm() {
            SourceFamily::Evm
        } else {
            SourceFamily::XTokens
        }
    }

    /// Whether the detected XCM version changes this family's encoding.
    pub fn is_version_sensitive(&self) -> bool {
        matches!(self, SourceFamily::RelayChain)
    }

    /// Whether fees come from the chain's gas price instead of the route table.
    pub fn uses_live_fee(&self) -> bool {
        matches!(self, SourceFamily::Evm)
    }

    /// Build the transfer call.
    pub fn build_call(&self, request: &CallRequest<'_>) -> Result<TransferCall, BridgeError> {
        match self {
            SourceFamily::RelayChain => relay_call(request),
            SourceFamily::XTokens | SourceFamily::Evm => xtokens_call(request),
        }
    }
}

/// Everything a family needs to build one call. Inputs are already validated.
#[derive(Clone, Copy, Debug)]
pub struct CallRequest<'a> {
    /// Destination chain.
    pub destination: &'a Chain,
    /// Destination family as seen from the source.
    pub kind: DestinationKind,
    /// Detected runtime version.
    pub version: XcmVersion,
    /// Token being sent.
    pub token: &'a Token,
    /// Whether `token` is the source chain's native token.
    pub is_native: bool,
    /// Route for (destination, token).
    pub route: &'a Route,
    /// Decoded receiving account.
    pub account: Account,
    /// Raw amount.
    pub amount: u128,
}

fn relay_call(request: &CallRequest<'_>) -> Result<TransferCall, BridgeError> {
    if !request.is_native {
        return Err(BridgeError::TokenNotFound(request.token.symbol.to_string()));
    }

    let legacy = request.version.is_legacy();
    let dest_interior = Junctions::X1(parachain_junction(request.destination)?);

    let call = if request.kind == DestinationKind::TeleportSystemChain {
        let envelope = if legacy { Envelope::V1 } else { Envelope::V3 };
        let network = legacy.then_some(NetworkId::Any);
        let assets = vec![MultiAsset::native(request.amount)];

        XcmPalletCall {
            method: XcmPalletMethod::LimitedTeleportAssets,
            dest: envelope.wrap(0, dest_interior),
            beneficiary: envelope.wrap(0, Junctions::X1(account_junction(request.account, network))),
            assets: if legacy {
                VersionedMultiAssets::V1(assets)
            } else {
                VersionedMultiAssets::V3(assets)
            },
            fee_asset_item: 0,
            weight_limit: Some(WeightLimit::Unlimited),
        }
    } else if legacy {
        let unweighted = UNWEIGHTED_LEGACY_DESTINATIONS.contains(&request.destination.id);

        XcmPalletCall {
            method: if unweighted {
                XcmPalletMethod::ReserveTransferAssets
            } else {
                XcmPalletMethod::LimitedReserveTransferAssets
            },
            dest: Envelope::V0.wrap(0, dest_interior),
            beneficiary: Envelope::V0.wrap(
                0,
                Junctions::X1(account_junction(request.account, Some(NetworkId::Any))),
            ),
            assets: VersionedMultiAssets::V0(vec![MultiAssetV0::ConcreteFungible {
                amount: request.amount,
            }]),
            fee_asset_item: 0,
            weight_limit: (!unweighted).then_some(request.route.xcm.weight_limit),
        }
    } else {
        XcmPalletCall {
            method: XcmPalletMethod::LimitedReserveTransferAssets,
            dest: Envelope::V3.wrap(0, dest_interior),
            beneficiary: Envelope::V3.wrap(0, Junctions::X1(account_junction(request.account, None))),
            assets: VersionedMultiAssets::V3(vec![MultiAsset::native(request.amount)]),
            fee_asset_item: 0,
            weight_limit: Some(request.route.xcm.weight_limit),
        }
    };

    Ok(TransferCall::XcmPallet(call))
}

fn xtokens_call(request: &CallRequest<'_>) -> Result<TransferCall, BridgeError> {
    let currency = request
        .token
        .currency
        .filter(|c| *c != CurrencyId::Native)
        .ok_or_else(|| BridgeError::CurrencyNotFound(request.token.symbol.to_string()))?;

    let interior = account_path(
        request.kind,
        request.destination,
        request.account,
        Some(NetworkId::Any),
    )?;

    Ok(TransferCall::XTokens(XTokensCall {
        currency,
        amount: request.amount,
        dest: Envelope::V1.wrap(1, interior),
        dest_weight_limit: request.route.xcm.weight_limit,
    }))
}

/// EVM-family transfer fee: `gas_price * gas * multiplier`, in raw native units.
pub fn evm_transfer_fee(gas_price: U256, config: &BridgeConfig) -> Result<u128, BridgeError> {
    let overflow = || BridgeError::Arithmetic("evm fee overflow".to_string());
    let (numerator, denominator) = config.evm_fee_multiplier.as_pair();
    if denominator == 0 {
        return Err(BridgeError::Arithmetic("division by zero".to_string()));
    }

    let min_fee = gas_price
        .checked_mul(U256::from(config.evm_xcm_gas))
        .ok_or_else(overflow)?;
    let fee = min_fee
        .checked_mul(U256::from(numerator))
        .ok_or_else(overflow)?
        / U256::from(denominator);

    if fee.bits() > 128 {
        return Err(overflow());
    }
    Ok(fee.low_u128())
}
