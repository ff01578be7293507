//! Static chain registry.

use crate::domain::{AccountModel, Chain, ChainId, RelayNetwork};

const fn parachain(
    id: ChainId,
    display_name: &'static str,
    para_chain_id: u32,
    relay: RelayNetwork,
    account_model: AccountModel,
    ss58_prefix: u16,
) -> Chain {
    Chain {
        id,
        display_name,
        para_chain_id: Some(para_chain_id),
        relay,
        account_model,
        ss58_prefix,
        is_system: false,
    }
}

const fn relay(id: ChainId, display_name: &'static str, relay: RelayNetwork, ss58_prefix: u16) -> Chain {
    Chain {
        id,
        display_name,
        para_chain_id: None,
        relay,
        account_model: AccountModel::Substrate32,
        ss58_prefix,
        is_system: false,
    }
}

const fn system(id: ChainId, display_name: &'static str, relay: RelayNetwork, ss58_prefix: u16) -> Chain {
    Chain {
        id,
        display_name,
        para_chain_id: Some(1000),
        relay,
        account_model: AccountModel::Substrate32,
        ss58_prefix,
        is_system: true,
    }
}

static POLKADOT: Chain = relay(ChainId::Polkadot, "Polkadot", RelayNetwork::Polkadot, 0);
static KUSAMA: Chain = relay(ChainId::Kusama, "Kusama", RelayNetwork::Kusama, 2);
static STATEMINT: Chain = system(ChainId::Statemint, "Statemint", RelayNetwork::Polkadot, 0);
static STATEMINE: Chain = system(ChainId::Statemine, "Statemine", RelayNetwork::Kusama, 2);
static ACALA: Chain = parachain(
    ChainId::Acala,
    "Acala",
    2000,
    RelayNetwork::Polkadot,
    AccountModel::Substrate32,
    10,
);
static KARURA: Chain = parachain(
    ChainId::Karura,
    "Karura",
    2000,
    RelayNetwork::Kusama,
    AccountModel::Substrate32,
    8,
);
static BASILISK: Chain = parachain(
    ChainId::Basilisk,
    "Basilisk",
    2090,
    RelayNetwork::Kusama,
    AccountModel::Substrate32,
    10041,
);
static CALAMARI: Chain = parachain(
    ChainId::Calamari,
    "Calamari",
    2084,
    RelayNetwork::Kusama,
    AccountModel::Substrate32,
    78,
);
static MOONBEAM: Chain = parachain(
    ChainId::Moonbeam,
    "Moonbeam",
    2004,
    RelayNetwork::Polkadot,
    AccountModel::Evm20,
    1284,
);
static MOONRIVER: Chain = parachain(
    ChainId::Moonriver,
    "Moonriver",
    2023,
    RelayNetwork::Kusama,
    AccountModel::Evm20,
    1285,
);

/// Metadata of a chain.
pub fn chain(id: ChainId) -> &'static Chain {
    match id {
        ChainId::Polkadot => &POLKADOT,
        ChainId::Kusama => &KUSAMA,
        ChainId::Acala => &ACALA,
        ChainId::Karura => &KARURA,
        ChainId::Basilisk => &BASILISK,
        ChainId::Statemine => &STATEMINE,
        ChainId::Statemint => &STATEMINT,
        ChainId::Calamari => &CALAMARI,
        ChainId::Moonbeam => &MOONBEAM,
        ChainId::Moonriver => &MOONRIVER,
    }
}
