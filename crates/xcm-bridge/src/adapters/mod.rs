//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound chain-connection port.

mod in_memory_connection;

pub use in_memory_connection::{InMemoryConnection, SubmittedCall};
