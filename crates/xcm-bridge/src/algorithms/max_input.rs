//! # Max Input
//!
//! `available - fee * factor - ed`, never clamped.

use crate::domain::{BridgeError, FixedPoint, Token};

/// Largest amount of `token` that can be sent without dropping below the
/// existential deposit once the (margined) fee is paid.
///
/// A non-positive result means nothing can be sent.
pub fn compute_max_input(
    available: FixedPoint,
    fee: FixedPoint,
    token: &Token,
    fee_factor: (u64, u64),
) -> Result<FixedPoint, BridgeError> {
    let (numerator, denominator) = fee_factor;
    let margined_fee = fee.mul_ratio_ceil(numerator, denominator)?;

    available
        .minus(&margined_fee)?
        .minus(&token.existential_deposit()?)
}
