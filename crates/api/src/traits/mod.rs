//! Capability traits consumed by the hybrid pipeline

pub mod kem;
pub mod symmetric;

pub use kem::{DecapsulationStyle, KemProvider, KemSession};
pub use symmetric::SymmetricCapability;
