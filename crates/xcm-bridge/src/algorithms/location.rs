//! # Destination Encoding
//!
//! Classifies a destination once per transfer and builds the locations a
//! transfer call carries.

use super::address::Account;
use crate::domain::{
    BridgeError, Chain, Junction, Junctions, MultiLocation, NetworkId, VersionedMultiLocation,
};

/// Destination family of a single transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DestinationKind {
    /// Parachain with 20-byte accounts.
    Evm,
    /// Relay chain (no parachain id).
    RelayChain,
    /// Parachain with 32-byte accounts.
    SiblingParachain,
    /// System chain reached from its relay chain by teleport.
    TeleportSystemChain,
}

impl DestinationKind {
    /// Classify `destination` as seen from `source`.
    pub fn classify(source: &Chain, destination: &Chain) -> Self {
        if source.is_relay_chain() && destination.is_system {
            DestinationKind::TeleportSystemChain
        } else if destination.is_evm() {
            DestinationKind::Evm
        } else if destination.is_relay_chain() {
            DestinationKind::RelayChain
        } else {
            DestinationKind::SiblingParachain
        }
    }
}

/// Location envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Envelope {
    /// Free-form legacy junctions.
    V0,
    /// Structured, V1 tag.
    V1,
    /// Structured, V3 tag.
    V3,
}

impl Envelope {
    /// Wrap junctions. `parents` is dropped by the free-form envelope.
    pub fn wrap(self, parents: u8, interior: Junctions) -> VersionedMultiLocation {
        match self {
            Envelope::V0 => VersionedMultiLocation::V0(interior),
            Envelope::V1 => VersionedMultiLocation::V1(MultiLocation::new(parents, interior)),
            Envelope::V3 => VersionedMultiLocation::V3(MultiLocation::new(parents, interior)),
        }
    }
}

/// Account junction for a decoded account.
pub fn account_junction(account: Account, network: Option<NetworkId>) -> Junction {
    match account {
        Account::Id32(id) => Junction::AccountId32 { network, id },
        Account::Key20(key) => Junction::AccountKey20 { network, key },
    }
}

/// Parachain junction of a destination; relay chains have none.
pub fn parachain_junction(destination: &Chain) -> Result<Junction, BridgeError> {
    destination
        .para_chain_id
        .map(Junction::Parachain)
        .ok_or_else(|| BridgeError::UnsupportedChain(format!("{} has no parachain id", destination.id)))
}

/// Path from relay level to the receiving account on `destination`.
///
/// Relay destinations are a single account junction; parachains prefix the
/// account with their parachain junction.
pub fn account_path(
    kind: DestinationKind,
    destination: &Chain,
    account: Account,
    network: Option<NetworkId>,
) -> Result<Junctions, BridgeError> {
    let account = account_junction(account, network);
    match kind {
        DestinationKind::RelayChain => Ok(Junctions::X1(account)),
        DestinationKind::Evm
        | DestinationKind::SiblingParachain
        | DestinationKind::TeleportSystemChain => {
            Ok(Junctions::X2(parachain_junction(destination)?, account))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChainId;
    use crate::registry::chain;

    #[test]
    fn test_classification() {
        let kusama = chain(ChainId::Kusama);
        let calamari = chain(ChainId::Calamari);

        assert_eq!(
            DestinationKind::classify(kusama, chain(ChainId::Statemine)),
            DestinationKind::TeleportSystemChain
        );
        assert_eq!(
            DestinationKind::classify(kusama, chain(ChainId::Karura)),
            DestinationKind::SiblingParachain
        );
        assert_eq!(
            DestinationKind::classify(calamari, chain(ChainId::Statemine)),
            DestinationKind::SiblingParachain
        );
        assert_eq!(
            DestinationKind::classify(calamari, chain(ChainId::Moonriver)),
            DestinationKind::Evm
        );
        assert_eq!(
            DestinationKind::classify(calamari, kusama),
            DestinationKind::RelayChain
        );
    }

    #[test]
    fn test_account_path_shapes() {
        let key = Account::Key20([1u8; 20]);
        let id = Account::Id32([2u8; 32]);

        let calamari = chain(ChainId::Calamari);
        let path = |to: ChainId, account| {
            let destination = chain(to);
            let kind = DestinationKind::classify(calamari, destination);
            account_path(kind, destination, account, None)
        };

        let evm = account_path(
            DestinationKind::Evm,
            chain(ChainId::Moonriver),
            key,
            Some(NetworkId::Any),
        )
        .unwrap();
        assert_eq!(
            evm,
            Junctions::X2(
                Junction::Parachain(2023),
                Junction::AccountKey20 {
                    network: Some(NetworkId::Any),
                    key: [1u8; 20]
                }
            )
        );

        let relay = path(ChainId::Kusama, id).unwrap();
        assert_eq!(relay.len(), 1);

        let sibling = path(ChainId::Karura, id).unwrap();
        assert_eq!(sibling.first(), Some(&Junction::Parachain(2000)));
    }

    #[test]
    fn test_account_path_follows_kind() {
        let id = Account::Id32([2u8; 32]);
        let kusama = chain(ChainId::Kusama);

        assert!(matches!(
            account_path(DestinationKind::RelayChain, kusama, id, None),
            Ok(Junctions::X1(Junction::AccountId32 { .. }))
        ));
        assert!(matches!(
            account_path(DestinationKind::SiblingParachain, kusama, id, None),
            Err(BridgeError::UnsupportedChain(_))
        ));
    }

    #[test]
    fn test_envelope_wrap() {
        let interior = Junctions::X1(Junction::Parachain(2000));
        assert_eq!(Envelope::V0.wrap(1, interior), VersionedMultiLocation::V0(interior));
        assert_eq!(
            Envelope::V3.wrap(0, interior),
            VersionedMultiLocation::V3(MultiLocation::new(0, interior))
        );
    }

    #[test]
    fn test_relay_has_no_parachain_junction() {
        assert!(matches!(
            parachain_junction(chain(ChainId::Polkadot)),
            Err(BridgeError::UnsupportedChain(_))
        ));
    }
}
