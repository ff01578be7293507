//! # Address Codec
//!
//! Validation and decoding of user-supplied addresses per account model.
//!
//! - `Substrate32`: SS58 (any network prefix) or `0x` + 32-byte hex.
//! - `Evm20`: `0x` + 20-byte hex.

use crate::domain::{AccountId32, AccountKey20, AccountModel, BridgeError};
use blake2::{Blake2b512, Digest};

const SS58_CHECKSUM_PREFIX: &[u8] = b"SS58PRE";
const SS58_CHECKSUM_LEN: usize = 2;

/// A decoded account, ready to be placed in a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Account {
    /// 32-byte Substrate account id.
    Id32(AccountId32),
    /// 20-byte EVM key.
    Key20(AccountKey20),
}

impl Account {
    /// Account model this account belongs to.
    pub fn model(&self) -> AccountModel {
        match self {
            Account::Id32(_) => AccountModel::Substrate32,
            Account::Key20(_) => AccountModel::Evm20,
        }
    }
}

/// Stateless address codec.
pub struct AddressCodec;

impl AddressCodec {
    /// Decode `address` under `model`, or fail with `InvalidAddress`.
    pub fn decode(address: &str, model: AccountModel) -> Result<Account, BridgeError> {
        let decoded = match model {
            AccountModel::Substrate32 => match address.strip_prefix("0x") {
                Some(hex) => decode_hex::<32>(hex).map(Account::Id32),
                None => decode_ss58(address).map(|(_, id)| Account::Id32(id)),
            },
            AccountModel::Evm20 => address
                .strip_prefix("0x")
                .and_then(decode_hex::<20>)
                .map(Account::Key20),
        };
        decoded.ok_or_else(|| BridgeError::InvalidAddress(address.to_string()))
    }

    /// Check `address` without keeping the result.
    pub fn validate(address: &str, model: AccountModel) -> Result<(), BridgeError> {
        Self::decode(address, model).map(|_| ())
    }

    /// SS58-encode an account id under a network prefix.
    ///
    /// Prefixes above 16383 have no SS58 form and yield `InvalidAddress`.
    pub fn encode_ss58(id: &AccountId32, prefix: u16) -> Result<String, BridgeError> {
        let mut data = match prefix {
            0..=63 => vec![prefix as u8],
            64..=16_383 => {
                let first = ((prefix & 0b0000_0000_1111_1100) as u8) >> 2;
                let second = ((prefix >> 8) as u8) | (((prefix & 0b0000_0000_0000_0011) as u8) << 6);
                vec![first | 0b0100_0000, second]
            }
            _ => {
                return Err(BridgeError::InvalidAddress(format!(
                    "ss58 prefix {prefix} out of range"
                )))
            }
        };
        data.extend_from_slice(id);
        let checksum = ss58_checksum(&data);
        data.extend_from_slice(&checksum[..SS58_CHECKSUM_LEN]);
        Ok(bs58::encode(data).into_string())
    }
}

fn decode_hex<const N: usize>(hex: &str) -> Option<[u8; N]> {
    let mut out = [0u8; N];
    hex::decode_to_slice(hex, &mut out).ok()?;
    Some(out)
}

fn decode_ss58(address: &str) -> Option<(u16, AccountId32)> {
    let data = bs58::decode(address).into_vec().ok()?;
    let first = *data.first()?;

    let (prefix_len, prefix) = match first {
        0..=63 => (1, u16::from(first)),
        64..=127 => {
            let second = *data.get(1)?;
            let lower = (first << 2) | (second >> 6);
            let upper = second & 0b0011_1111;
            (2, u16::from(lower) | (u16::from(upper) << 8))
        }
        _ => return None,
    };

    if data.len() != prefix_len + 32 + SS58_CHECKSUM_LEN {
        return None;
    }

    let (body, checksum) = data.split_at(prefix_len + 32);
    if ss58_checksum(body)[..SS58_CHECKSUM_LEN] != *checksum {
        return None;
    }

    let mut id = [0u8; 32];
    id.copy_from_slice(&body[prefix_len..]);
    Some((prefix, id))
}

fn ss58_checksum(data: &[u8]) -> Vec<u8> {
    let mut hasher = Blake2b512::new();
    hasher.update(SS58_CHECKSUM_PREFIX);
    hasher.update(data);
    hasher.finalize().to_vec()
}
