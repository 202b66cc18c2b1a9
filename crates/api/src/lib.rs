//! Public API traits and types for the mchybrid workspace
//!
//! This crate defines the error taxonomy, the capability traits implemented
//! by KEM and symmetric-cipher backends, and the byte containers that carry
//! keys, secrets and ciphertexts between them.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{ConfigurationErrorKind, Error, Result};
pub use types::*;

pub use traits::{DecapsulationStyle, KemProvider, KemSession, SymmetricCapability};

// Re-export trait modules for direct access
pub use traits::{kem, symmetric};
