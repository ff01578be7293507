//! # Algorithms Module
//!
//! Pure building blocks of the adapters: stream combination, max-input math,
//! destination encoding, version detection and address decoding.

pub mod address;
pub mod combine;
pub mod location;
pub mod max_input;
pub mod version;

pub use address::{Account, AddressCodec};
pub use combine::combine_latest;
pub use location::{account_junction, account_path, parachain_junction, DestinationKind, Envelope};
pub use max_input::compute_max_input;
pub use version::{detect_xcm_version, LEGACY_LOCATION_VARIANT};
