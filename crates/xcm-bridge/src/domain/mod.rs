//! # Domain Module
//!
//! Core domain types for the cross-chain adapters.

pub mod call;
pub mod entities;
pub mod errors;
pub mod fixed_point;
pub mod invariants;
pub mod location;
pub mod value_objects;

pub use call::*;
pub use entities::*;
pub use errors::*;
pub use fixed_point::*;
pub use invariants::*;
pub use location::*;
pub use value_objects::*;
