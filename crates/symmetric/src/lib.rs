//! Symmetric layer for the mchybrid workspace
//!
//! Provides AES-128 in CBC mode behind the [`SymmetricCapability`] trait,
//! plus the PKCS#7 padding the pipeline applies before encryption and
//! checks after decryption.
//!
//! [`SymmetricCapability`]: mchybrid_api::SymmetricCapability

#![forbid(unsafe_code)]

pub mod aes;
pub mod cbc;
pub mod cipher;
pub mod padding;

pub use self::aes::{Aes128, Aes128Cbc};
pub use cbc::Cbc;
pub use cipher::{Block, BlockCipher};
pub use padding::{pad, unpad};

pub use mchybrid_api::error::{validate, Error, Result};
