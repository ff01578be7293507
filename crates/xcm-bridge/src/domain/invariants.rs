//! # Domain Invariants
//!
//! Rules that static tables and constructed calls must satisfy.

use super::call::TransferCall;
use super::entities::{Chain, Route, Token};
use super::errors::BridgeError;
use super::location::Junction;

/// Invariant: a route's token is registered on its source chain.
pub fn invariant_route_token_registered(route: &Route, tokens: &[Token]) -> Result<(), BridgeError> {
    if tokens.iter().any(|t| t.symbol == route.token) {
        Ok(())
    } else {
        Err(BridgeError::TokenNotFound(route.token.to_string()))
    }
}

/// Invariant: a route's fee token is registered on the source chain.
pub fn invariant_fee_token_registered(route: &Route, tokens: &[Token]) -> Result<(), BridgeError> {
    if tokens.iter().any(|t| t.symbol == route.xcm.fee.token) {
        Ok(())
    } else {
        Err(BridgeError::TokenNotFound(route.xcm.fee.token.to_string()))
    }
}

/// Invariant: the receiving account in a call matches the destination's
/// account model.
///
/// - EVM destinations end in a 20-byte key under their parachain.
/// - Relay destinations are a single 32-byte account junction.
/// - Other parachains end in a 32-byte account.
pub fn invariant_destination_shape(call: &TransferCall, destination: &Chain) -> bool {
    let junctions = call.beneficiary().junctions();
    let account = junctions.last();

    if destination.is_evm() {
        matches!(account, Some(Junction::AccountKey20 { .. }))
    } else if destination.is_relay_chain() {
        junctions.len() == 1 && matches!(account, Some(Junction::AccountId32 { .. }))
    } else {
        matches!(account, Some(Junction::AccountId32 { .. }))
    }
}
