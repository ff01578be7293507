//! # Domain Value Objects
//!
//! Immutable value types shared by registries, adapters and calls.

use super::errors::BridgeError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Supported chain identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainId {
    /// Polkadot relay chain.
    Polkadot,
    /// Kusama relay chain.
    Kusama,
    /// Acala (Polkadot parachain).
    Acala,
    /// Karura (Kusama parachain).
    Karura,
    /// Basilisk (Kusama parachain).
    Basilisk,
    /// Statemine system chain (Kusama).
    Statemine,
    /// Statemint system chain (Polkadot).
    Statemint,
    /// Calamari (Kusama parachain, Manta family).
    Calamari,
    /// Moonbeam (Polkadot parachain, EVM accounts).
    Moonbeam,
    /// Moonriver (Kusama parachain, EVM accounts).
    Moonriver,
}

impl ChainId {
    /// Every chain in the registry.
    pub const ALL: [ChainId; 10] = [
        ChainId::Polkadot,
        ChainId::Kusama,
        ChainId::Acala,
        ChainId::Karura,
        ChainId::Basilisk,
        ChainId::Statemine,
        ChainId::Statemint,
        ChainId::Calamari,
        ChainId::Moonbeam,
        ChainId::Moonriver,
    ];

    /// Registry identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainId::Polkadot => "polkadot",
            ChainId::Kusama => "kusama",
            ChainId::Acala => "acala",
            ChainId::Karura => "karura",
            ChainId::Basilisk => "basilisk",
            ChainId::Statemine => "statemine",
            ChainId::Statemint => "statemint",
            ChainId::Calamari => "calamari",
            ChainId::Moonbeam => "moonbeam",
            ChainId::Moonriver => "moonriver",
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainId {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChainId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| BridgeError::UnsupportedChain(s.to_string()))
    }
}

/// Relay network a chain belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelayNetwork {
    /// Polkadot and its parachains.
    Polkadot,
    /// Kusama and its parachains.
    Kusama,
}

/// Account model of a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountModel {
    /// 32-byte account ids, SS58 encoded.
    Substrate32,
    /// 20-byte EVM keys, hex encoded.
    Evm20,
}

/// XCM encoding generation supported by the connected runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XcmVersion {
    /// Runtime still accepts V0/V1 messages.
    Legacy,
    /// Runtime only accepts V3 messages.
    #[default]
    Current,
}

impl XcmVersion {
    /// Whether the legacy encoding path applies.
    pub fn is_legacy(&self) -> bool {
        matches!(self, XcmVersion::Legacy)
    }
}

/// Destination weight policy of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeightLimit {
    /// No limit.
    Unlimited,
    /// Fixed weight.
    Limited(u64),
}

impl Serialize for WeightLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WeightLimit::Unlimited => serializer.serialize_str("Unlimited"),
            WeightLimit::Limited(weight) => serializer.serialize_str(&weight.to_string()),
        }
    }
}

/// On-wire currency identifier of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CurrencyId {
    /// The relay chain's own token, moved by `xcmPallet`.
    Native,
    /// Native token of an EVM-family parachain.
    #[serde(serialize_with = "serialize_unit")]
    SelfReserve,
    /// Asset id in the Manta asset manager.
    MantaCurrency(u32),
    /// Foreign asset id in an EVM-family asset pallet.
    #[serde(serialize_with = "crate::domain::location::serialize_u128_str")]
    ForeignAsset(u128),
}

impl CurrencyId {
    /// Key of this currency in the chain's asset pallet, if it lives there.
    pub fn asset_id(&self) -> Option<u128> {
        match self {
            CurrencyId::MantaCurrency(id) => Some(u128::from(*id)),
            CurrencyId::ForeignAsset(id) => Some(*id),
            CurrencyId::Native | CurrencyId::SelfReserve => None,
        }
    }
}

fn serialize_unit<S: Serializer>(serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_none()
}
