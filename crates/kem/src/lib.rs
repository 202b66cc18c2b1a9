//! Key Encapsulation Mechanism capability
//!
//! This crate implements the KEM capability traits of `mchybrid-api` on top
//! of the Classic McEliece reference implementation.

#![forbid(unsafe_code)]

pub mod mceliece;

// Re-exports
pub use mceliece::{McElieceProvider, McElieceSession, McElieceVariant};
