//! # XCM Locations and Assets
//!
//! Location and asset shapes as accepted by the runtime's call arguments.
//! Serialization matches the JSON argument form Substrate RPC clients take.

use super::errors::{AccountId32, AccountKey20};
use serde::{Serialize, Serializer};

/// Network qualifier of an account junction (legacy encodings only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NetworkId {
    /// Any network.
    Any,
}

/// A single hop in a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Junction {
    /// Parachain by id.
    Parachain(u32),
    /// 32-byte account.
    AccountId32 {
        /// Legacy network qualifier, omitted in current encodings.
        #[serde(skip_serializing_if = "Option::is_none")]
        network: Option<NetworkId>,
        /// Raw account id.
        #[serde(serialize_with = "serialize_hex")]
        id: AccountId32,
    },
    /// 20-byte EVM key.
    AccountKey20 {
        /// Legacy network qualifier, omitted in current encodings.
        #[serde(skip_serializing_if = "Option::is_none")]
        network: Option<NetworkId>,
        /// Raw key.
        #[serde(serialize_with = "serialize_hex")]
        key: AccountKey20,
    },
}

impl Junction {
    /// Whether this junction names an account (as opposed to a chain).
    pub fn is_account(&self) -> bool {
        !matches!(self, Junction::Parachain(_))
    }
}

/// Interior of a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Junctions {
    /// The location itself.
    Here,
    /// One junction.
    X1(Junction),
    /// Two junctions.
    X2(Junction, Junction),
}

impl Junctions {
    /// Number of junctions.
    pub fn len(&self) -> usize {
        match self {
            Junctions::Here => 0,
            Junctions::X1(_) => 1,
            Junctions::X2(..) => 2,
        }
    }

    /// True for `Here`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last junction, if any.
    pub fn last(&self) -> Option<&Junction> {
        match self {
            Junctions::Here => None,
            Junctions::X1(j) => Some(j),
            Junctions::X2(_, j) => Some(j),
        }
    }

    /// First junction, if any.
    pub fn first(&self) -> Option<&Junction> {
        match self {
            Junctions::Here => None,
            Junctions::X1(j) | Junctions::X2(j, _) => Some(j),
        }
    }
}

/// Structured location relative to the sender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MultiLocation {
    /// Number of hops up.
    pub parents: u8,
    /// Path down from there.
    pub interior: Junctions,
}

impl MultiLocation {
    /// Create a location.
    pub fn new(parents: u8, interior: Junctions) -> Self {
        Self { parents, interior }
    }

    /// The sender itself, used to name root-level native assets.
    pub fn here() -> Self {
        Self::new(0, Junctions::Here)
    }
}

/// Location wrapped in its version envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum VersionedMultiLocation {
    /// Free-form legacy encoding (junctions only, no parents field).
    V0(Junctions),
    /// Structured location, V1 envelope.
    V1(MultiLocation),
    /// Structured location, V3 envelope.
    V3(MultiLocation),
}

impl VersionedMultiLocation {
    /// Envelope tag.
    pub fn version_tag(&self) -> &'static str {
        match self {
            VersionedMultiLocation::V0(_) => "V0",
            VersionedMultiLocation::V1(_) => "V1",
            VersionedMultiLocation::V3(_) => "V3",
        }
    }

    /// Interior junctions regardless of envelope.
    pub fn junctions(&self) -> &Junctions {
        match self {
            VersionedMultiLocation::V0(junctions) => junctions,
            VersionedMultiLocation::V1(location) | VersionedMultiLocation::V3(location) => {
                &location.interior
            }
        }
    }
}

/// Legacy asset encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MultiAssetV0 {
    /// Fungible amount of the sender's native asset.
    ConcreteFungible {
        /// Raw amount.
        #[serde(serialize_with = "serialize_u128_str")]
        amount: u128,
    },
}

/// Asset identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AssetId {
    /// Identified by location.
    Concrete(MultiLocation),
}

/// Asset quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Fungibility {
    /// Fungible amount.
    Fungible(#[serde(serialize_with = "serialize_u128_str")] u128),
}

/// Structured asset encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MultiAsset {
    /// Asset identity.
    pub id: AssetId,
    /// Quantity.
    pub fun: Fungibility,
}

impl MultiAsset {
    /// Root-level native asset of the sending chain.
    pub fn native(amount: u128) -> Self {
        Self {
            id: AssetId::Concrete(MultiLocation::here()),
            fun: Fungibility::Fungible(amount),
        }
    }
}

/// Asset list wrapped in its version envelope.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum VersionedMultiAssets {
    /// Legacy encoding.
    V0(Vec<MultiAssetV0>),
    /// V1 envelope.
    V1(Vec<MultiAsset>),
    /// V3 envelope.
    V3(Vec<MultiAsset>),
}

fn serialize_hex<S: Serializer, const N: usize>(
    bytes: &[u8; N],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
}

/// Serialize a `u128` as a decimal string (JSON numbers lose precision).
pub fn serialize_u128_str<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_legacy_account_junction_carries_network() {
        let junction = Junction::AccountId32 {
            network: Some(NetworkId::Any),
            id: [1u8; 32],
        };
        let value = serde_json::to_value(junction).unwrap();
        assert_eq!(value["AccountId32"]["network"], json!("Any"));
        assert_eq!(
            value["AccountId32"]["id"],
            json!(format!("0x{}", "01".repeat(32)))
        );
    }

    #[test]
    fn test_current_account_junction_omits_network() {
        let junction = Junction::AccountId32 {
            network: None,
            id: [0u8; 32],
        };
        let value = serde_json::to_value(junction).unwrap();
        assert!(value["AccountId32"].get("network").is_none());
    }

    #[test]
    fn test_versioned_location_shape() {
        let location = VersionedMultiLocation::V3(MultiLocation::new(
            0,
            Junctions::X1(Junction::Parachain(2000)),
        ));
        assert_eq!(
            serde_json::to_value(location).unwrap(),
            json!({ "V3": { "parents": 0, "interior": { "X1": { "Parachain": 2000 } } } })
        );
    }

    #[test]
    fn test_native_asset_shape() {
        let assets = VersionedMultiAssets::V3(vec![MultiAsset::native(42)]);
        assert_eq!(
            serde_json::to_value(assets).unwrap(),
            json!({ "V3": [{
                "id": { "Concrete": { "parents": 0, "interior": "Here" } },
                "fun": { "Fungible": "42" }
            }] })
        );
    }

    #[test]
    fn test_legacy_asset_shape() {
        let assets = VersionedMultiAssets::V0(vec![MultiAssetV0::ConcreteFungible { amount: 7 }]);
        assert_eq!(
            serde_json::to_value(assets).unwrap(),
            json!({ "V0": [{ "ConcreteFungible": { "amount": "7" } }] })
        );
    }

    #[test]
    fn test_junctions_accessors() {
        let junctions = Junctions::X2(
            Junction::Parachain(2023),
            Junction::AccountKey20 {
                network: None,
                key: [9u8; 20],
            },
        );
        assert_eq!(junctions.len(), 2);
        assert_eq!(junctions.first(), Some(&Junction::Parachain(2023)));
        assert!(junctions.last().unwrap().is_account());
        assert!(Junctions::Here.is_empty());
    }
}
