//! # Transfer Calls
//!
//! The submittable transfer message produced by `create_tx`. The caller hands
//! it to the chain connection for signing and dispatch.

use super::errors::BridgeError;
use super::location::{VersionedMultiAssets, VersionedMultiLocation};
use super::value_objects::{CurrencyId, WeightLimit};
use serde::Serialize;
use serde_json::Value;

/// `xcmPallet` transfer methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum XcmPalletMethod {
    /// Unweighted reserve transfer (legacy runtimes only).
    ReserveTransferAssets,
    /// Reserve transfer with a destination weight limit.
    LimitedReserveTransferAssets,
    /// Teleport with a destination weight limit.
    LimitedTeleportAssets,
}

impl XcmPalletMethod {
    /// Runtime call name.
    pub fn name(&self) -> &'static str {
        match self {
            XcmPalletMethod::ReserveTransferAssets => "reserveTransferAssets",
            XcmPalletMethod::LimitedReserveTransferAssets => "limitedReserveTransferAssets",
            XcmPalletMethod::LimitedTeleportAssets => "limitedTeleportAssets",
        }
    }

    /// Whether the asset is teleported rather than reserve-transferred.
    pub fn is_teleport(&self) -> bool {
        matches!(self, XcmPalletMethod::LimitedTeleportAssets)
    }
}

/// Relay-chain `xcmPallet` transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct XcmPalletCall {
    /// Method to call.
    pub method: XcmPalletMethod,
    /// Destination chain.
    pub dest: VersionedMultiLocation,
    /// Receiving account, relative to `dest`.
    pub beneficiary: VersionedMultiLocation,
    /// Assets to move.
    pub assets: VersionedMultiAssets,
    /// Index into `assets` of the fee-paying asset.
    pub fee_asset_item: u32,
    /// Weight limit; absent for the unweighted legacy method.
    pub weight_limit: Option<WeightLimit>,
}

/// Parachain `xTokens.transfer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct XTokensCall {
    /// Currency being sent.
    pub currency: CurrencyId,
    /// Raw amount.
    #[serde(serialize_with = "crate::domain::location::serialize_u128_str")]
    pub amount: u128,
    /// Destination chain and account in one location.
    pub dest: VersionedMultiLocation,
    /// Destination weight limit.
    pub dest_weight_limit: WeightLimit,
}

/// A constructed, unsigned transfer call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TransferCall {
    /// Relay-chain transfer.
    XcmPallet(XcmPalletCall),
    /// Parachain transfer.
    XTokens(XTokensCall),
}

impl TransferCall {
    /// Runtime pallet name.
    pub fn pallet(&self) -> &'static str {
        match self {
            TransferCall::XcmPallet(_) => "xcmPallet",
            TransferCall::XTokens(_) => "xTokens",
        }
    }

    /// Runtime call name.
    pub fn method(&self) -> &'static str {
        match self {
            TransferCall::XcmPallet(call) => call.method.name(),
            TransferCall::XTokens(_) => "transfer",
        }
    }

    /// Location of the receiving account.
    pub fn beneficiary(&self) -> &VersionedMultiLocation {
        match self {
            TransferCall::XcmPallet(call) => &call.beneficiary,
            TransferCall::XTokens(call) => &call.dest,
        }
    }

    /// Envelope tag used for the locations in this call.
    pub fn version_tag(&self) -> &'static str {
        self.beneficiary().version_tag()
    }

    /// Positional call arguments, ready for an RPC client.
    pub fn args(&self) -> Result<Vec<Value>, BridgeError> {
        let encode = |value: Result<Value, serde_json::Error>| {
            value.map_err(|e| BridgeError::Encoding(e.to_string()))
        };

        match self {
            TransferCall::XcmPallet(call) => {
                let mut args = vec![
                    encode(serde_json::to_value(call.dest))?,
                    encode(serde_json::to_value(call.beneficiary))?,
                    encode(serde_json::to_value(&call.assets))?,
                    Value::from(call.fee_asset_item),
                ];
                if let Some(limit) = call.weight_limit {
                    args.push(encode(serde_json::to_value(limit))?);
                }
                Ok(args)
            }
            TransferCall::XTokens(call) => Ok(vec![
                encode(serde_json::to_value(call.currency))?,
                Value::String(call.amount.to_string()),
                encode(serde_json::to_value(call.dest))?,
                encode(serde_json::to_value(call.dest_weight_limit))?,
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::{Junction, Junctions, MultiAsset, MultiLocation, NetworkId};
    use serde_json::json;

    fn teleport_call() -> TransferCall {
        TransferCall::XcmPallet(XcmPalletCall {
            method: XcmPalletMethod::LimitedTeleportAssets,
            dest: VersionedMultiLocation::V3(MultiLocation::new(
                0,
                Junctions::X1(Junction::Parachain(1000)),
            )),
            beneficiary: VersionedMultiLocation::V3(MultiLocation::new(
                0,
                Junctions::X1(Junction::AccountId32 {
                    network: None,
                    id: [2u8; 32],
                }),
            )),
            assets: VersionedMultiAssets::V3(vec![MultiAsset::native(1_000)]),
            fee_asset_item: 0,
            weight_limit: Some(WeightLimit::Unlimited),
        })
    }

    #[test]
    fn test_xcm_pallet_names() {
        let call = teleport_call();
        assert_eq!(call.pallet(), "xcmPallet");
        assert_eq!(call.method(), "limitedTeleportAssets");
        assert_eq!(call.version_tag(), "V3");
    }

    #[test]
    fn test_xcm_pallet_args() {
        let args = teleport_call().args().unwrap();
        assert_eq!(args.len(), 5);
        assert_eq!(args[3], json!(0));
        assert_eq!(args[4], json!("Unlimited"));
    }

    #[test]
    fn test_unweighted_call_has_four_args() {
        let call = TransferCall::XcmPallet(XcmPalletCall {
            method: XcmPalletMethod::ReserveTransferAssets,
            dest: VersionedMultiLocation::V0(Junctions::X1(Junction::Parachain(2000))),
            beneficiary: VersionedMultiLocation::V0(Junctions::X1(Junction::AccountId32 {
                network: Some(NetworkId::Any),
                id: [3u8; 32],
            })),
            assets: VersionedMultiAssets::V0(vec![]),
            fee_asset_item: 0,
            weight_limit: None,
        });
        assert_eq!(call.args().unwrap().len(), 4);
    }

    #[test]
    fn test_xtokens_args() {
        let call = TransferCall::XTokens(XTokensCall {
            currency: CurrencyId::MantaCurrency(12),
            amount: 1_000_000_000_000,
            dest: VersionedMultiLocation::V1(MultiLocation::new(1, Junctions::Here)),
            dest_weight_limit: WeightLimit::Limited(5_000_000_000),
        });
        assert_eq!(call.pallet(), "xTokens");
        assert_eq!(call.method(), "transfer");

        let args = call.args().unwrap();
        assert_eq!(args[0], json!({ "MantaCurrency": 12 }));
        assert_eq!(args[1], json!("1000000000000"));
        assert_eq!(args[3], json!("5000000000"));
    }
}
