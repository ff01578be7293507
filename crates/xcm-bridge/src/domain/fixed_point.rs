//! # Fixed-Point Amounts
//!
//! Signed decimal amounts scaled to a token's precision.

use super::errors::BridgeError;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Largest supported decimal precision (10^38 still fits in `i128`).
pub const MAX_DECIMALS: u8 = 38;

/// Signed fixed-point decimal: `inner / 10^decimals`.
///
/// Values may be negative; a negative max-input means "cannot transfer".
#[derive(Clone, Copy, Debug)]
pub struct FixedPoint {
    inner: i128,
    decimals: u8,
}

impl FixedPoint {
    /// Zero at precision 0.
    pub const ZERO: FixedPoint = FixedPoint {
        inner: 0,
        decimals: 0,
    };

    /// Build from a raw on-chain integer.
    ///
    /// Raw values above `i128::MAX` are rejected.
    pub fn from_inner(raw: u128, decimals: u8) -> Result<Self, BridgeError> {
        let inner = i128::try_from(raw).map_err(|_| {
            BridgeError::Arithmetic(format!("raw amount {raw} exceeds the signed range"))
        })?;
        Ok(Self { inner, decimals })
    }

    /// Build from a signed raw integer.
    pub fn from_signed_inner(inner: i128, decimals: u8) -> Self {
        Self { inner, decimals }
    }

    /// Build a whole number of units (`units * 10^decimals`).
    pub fn from_units(units: i64, decimals: u8) -> Result<Self, BridgeError> {
        let inner = i128::from(units)
            .checked_mul(pow10(decimals)?)
            .ok_or_else(|| overflow("from_units"))?;
        Ok(Self { inner, decimals })
    }

    /// Parse a decimal string such as `"-12.5"` at the given precision.
    pub fn from_decimal_str(value: &str, decimals: u8) -> Result<Self, BridgeError> {
        let (negative, digits) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(BridgeError::Arithmetic(format!("empty amount: {value:?}")));
        }
        if !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return Err(BridgeError::Arithmetic(format!("malformed amount: {value:?}")));
        }
        if frac.len() > usize::from(decimals) {
            return Err(BridgeError::Arithmetic(format!(
                "{value} has more than {decimals} decimals"
            )));
        }

        let whole_part = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i128>()
                .map_err(|_| overflow("from_decimal_str"))?
        };
        let padded = format!("{frac:0<width$}", width = usize::from(decimals));
        let frac_part = if padded.is_empty() {
            0
        } else {
            padded
                .parse::<i128>()
                .map_err(|_| overflow("from_decimal_str"))?
        };

        let inner = whole_part
            .checked_mul(pow10(decimals)?)
            .and_then(|v| v.checked_add(frac_part))
            .ok_or_else(|| overflow("from_decimal_str"))?;

        Ok(Self {
            inner: if negative { -inner } else { inner },
            decimals,
        })
    }

    /// Zero at the given precision.
    pub fn zero(decimals: u8) -> Self {
        Self { inner: 0, decimals }
    }

    /// Raw scaled integer.
    pub fn inner(&self) -> i128 {
        self.inner
    }

    /// Decimal precision.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.inner > 0
    }

    /// Less than zero.
    pub fn is_negative(&self) -> bool {
        self.inner < 0
    }

    /// Re-express at another precision without loss.
    ///
    /// Lowering the precision fails if a non-zero digit would be dropped.
    pub fn rescale(&self, decimals: u8) -> Result<Self, BridgeError> {
        match decimals.cmp(&self.decimals) {
            Ordering::Equal => Ok(*self),
            Ordering::Less => {
                let factor = pow10(self.decimals - decimals)?;
                if self.inner % factor != 0 {
                    return Err(BridgeError::Arithmetic(format!(
                        "{self} has more than {decimals} decimals"
                    )));
                }
                Ok(Self {
                    inner: self.inner / factor,
                    decimals,
                })
            }
            Ordering::Greater => {
                let factor = pow10(decimals - self.decimals)?;
                let inner = self
                    .inner
                    .checked_mul(factor)
                    .ok_or_else(|| overflow("rescale"))?;
                Ok(Self { inner, decimals })
            }
        }
    }

    /// `self - other`, expressed at the larger of the two precisions.
    pub fn minus(&self, other: &FixedPoint) -> Result<Self, BridgeError> {
        let decimals = self.decimals.max(other.decimals);
        let lhs = self.rescale(decimals)?;
        let rhs = other.rescale(decimals)?;
        let inner = lhs
            .inner
            .checked_sub(rhs.inner)
            .ok_or_else(|| overflow("minus"))?;
        Ok(Self { inner, decimals })
    }

    /// Multiply by `numerator / denominator`, rounding up.
    ///
    /// Used for fee margins, where rounding must never understate the fee.
    pub fn mul_ratio_ceil(&self, numerator: u64, denominator: u64) -> Result<Self, BridgeError> {
        if denominator == 0 {
            return Err(BridgeError::Arithmetic("division by zero".to_string()));
        }
        let product = self
            .inner
            .checked_mul(i128::from(numerator))
            .ok_or_else(|| overflow("mul_ratio_ceil"))?;
        let den = i128::from(denominator);
        let quotient = -((-product).div_euclid(den));
        Ok(Self {
            inner: quotient,
            decimals: self.decimals,
        })
    }

    /// Raw on-chain integer at this precision.
    pub fn to_chain_data(&self) -> Result<u128, BridgeError> {
        u128::try_from(self.inner).map_err(|_| {
            BridgeError::Arithmetic(format!("negative amount {self} has no chain encoding"))
        })
    }
}

impl PartialEq for FixedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for FixedPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let decimals = self.decimals.max(other.decimals);
        let lhs = self.rescale(decimals).ok()?;
        let rhs = other.rescale(decimals).ok()?;
        Some(lhs.inner.cmp(&rhs.inner))
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.inner < 0 { "-" } else { "" };
        let digits = self.inner.unsigned_abs().to_string();
        let scale = usize::from(self.decimals);

        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }

        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (whole, frac) = padded.split_at(padded.len() - scale);
        let frac = frac.trim_end_matches('0');

        if frac.is_empty() {
            write!(f, "{sign}{whole}")
        } else {
            write!(f, "{sign}{whole}.{frac}")
        }
    }
}

impl Serialize for FixedPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn pow10(exp: u8) -> Result<i128, BridgeError> {
    if exp > MAX_DECIMALS {
        return Err(BridgeError::Arithmetic(format!(
            "precision {exp} exceeds {MAX_DECIMALS}"
        )));
    }
    Ok(10i128.pow(u32::from(exp)))
}

fn overflow(op: &str) -> BridgeError {
    BridgeError::Arithmetic(format!("overflow in {op}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_display() {
        assert_eq!(FixedPoint::from_signed_inner(12_345, 2).to_string(), "123.45");
        assert_eq!(FixedPoint::from_signed_inner(5, 3).to_string(), "0.005");
        assert_eq!(FixedPoint::from_signed_inner(1_000, 3).to_string(), "1");
        assert_eq!(FixedPoint::from_signed_inner(-150, 2).to_string(), "-1.5");
        assert_eq!(FixedPoint::from_signed_inner(7, 0).to_string(), "7");
    }

    #[test]
    fn test_from_decimal_str() {
        let amount = FixedPoint::from_decimal_str("1.5", 12).unwrap();
        assert_eq!(amount.inner(), 1_500_000_000_000);

        let negative = FixedPoint::from_decimal_str("-0.25", 2).unwrap();
        assert_eq!(negative.inner(), -25);

        let fraction_only = FixedPoint::from_decimal_str(".5", 1).unwrap();
        assert_eq!(fraction_only.inner(), 5);
    }

    #[test]
    fn test_from_decimal_str_rejects_excess_precision() {
        assert!(FixedPoint::from_decimal_str("0.001", 2).is_err());
        assert!(FixedPoint::from_decimal_str("1a", 2).is_err());
        assert!(FixedPoint::from_decimal_str("", 2).is_err());
    }

    #[test]
    fn test_minus_across_precisions() {
        let a = FixedPoint::from_signed_inner(100, 0);
        let b = FixedPoint::from_signed_inner(1_250, 2);
        let diff = a.minus(&b).unwrap();
        assert_eq!(diff.decimals(), 2);
        assert_eq!(diff.inner(), 8_750);
    }

    #[test]
    fn test_minus_may_go_negative() {
        let a = FixedPoint::from_signed_inner(1, 0);
        let b = FixedPoint::from_signed_inner(3, 0);
        let diff = a.minus(&b).unwrap();
        assert!(diff.is_negative());
        assert_eq!(diff.to_string(), "-2");
    }

    #[test]
    fn test_mul_ratio_ceil() {
        let fee = FixedPoint::from_signed_inner(10, 0);
        assert_eq!(fee.mul_ratio_ceil(12, 10).unwrap().inner(), 12);

        // 7 * 1.2 = 8.4 -> 9 raw units
        let fee = FixedPoint::from_signed_inner(7, 0);
        assert_eq!(fee.mul_ratio_ceil(12, 10).unwrap().inner(), 9);

        assert!(fee.mul_ratio_ceil(1, 0).is_err());
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(FixedPoint::from_signed_inner(1, 0), FixedPoint::from_signed_inner(1_000, 3));
        assert!(FixedPoint::from_signed_inner(2, 0) > FixedPoint::from_signed_inner(1_999, 3));
    }

    #[test]
    fn test_negative_has_no_chain_data() {
        let negative = FixedPoint::from_signed_inner(-1, 10);
        assert!(negative.to_chain_data().is_err());
    }

    #[test]
    fn test_raw_above_signed_range_rejected() {
        assert!(matches!(
            FixedPoint::from_inner(u128::MAX, 12),
            Err(BridgeError::Arithmetic(_))
        ));
        let max = FixedPoint::from_inner(i128::MAX as u128, 12).unwrap();
        assert_eq!(max.to_chain_data().unwrap(), i128::MAX as u128);
    }

    #[test]
    fn test_rescale_down_when_exact() {
        let amount = FixedPoint::from_decimal_str("1.5", 18).unwrap();
        let rescaled = amount.rescale(12).unwrap();
        assert_eq!(rescaled.decimals(), 12);
        assert_eq!(rescaled.inner(), 1_500_000_000_000);
    }

    #[test]
    fn test_rescale_down_rejects_lost_digits() {
        let amount = FixedPoint::from_decimal_str("1.0000000000001", 18).unwrap();
        assert!(matches!(amount.rescale(12), Err(BridgeError::Arithmetic(_))));
    }

    #[test]
    fn test_from_units() {
        let amount = FixedPoint::from_units(100, 12).unwrap();
        assert_eq!(amount.to_chain_data().unwrap(), 100_000_000_000_000);
        assert!(FixedPoint::from_units(1, 39).is_err());
    }

    proptest! {
        #[test]
        fn prop_raw_round_trip(raw in 0u128..=(i128::MAX as u128), decimals in 0u8..=18) {
            let amount = FixedPoint::from_inner(raw, decimals).unwrap();
            prop_assert_eq!(amount.to_chain_data().unwrap(), raw);
        }

        #[test]
        fn prop_decimal_string_round_trip(raw in 0u64.., decimals in 0u8..=18) {
            let amount = FixedPoint::from_inner(u128::from(raw), decimals).unwrap();
            let parsed = FixedPoint::from_decimal_str(&amount.to_string(), decimals).unwrap();
            prop_assert_eq!(parsed.to_chain_data().unwrap(), u128::from(raw));
        }
    }
}
