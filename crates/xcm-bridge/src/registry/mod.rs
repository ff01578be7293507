//! # Static Registries
//!
//! Chain metadata, token tables and route tables, loaded once.

pub mod chains;
pub mod routes;
pub mod tokens;

pub use chains::chain;
pub use routes::route_set;
pub use tokens::TokenRegistry;
