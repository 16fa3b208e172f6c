//! Shared primitives for the Pathfinder character sheet server.
//!
//! Holds the key type used by every table and the domain error enum that
//! the API layer maps onto HTTP responses.

pub mod error;
pub mod types;
