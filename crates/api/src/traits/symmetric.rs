//! Symmetric cipher capability
//!
//! The capability encrypts already-padded data in CBC mode under a 16-byte
//! key and IV. Padding is applied and removed by the caller.

use crate::error::Result;
use crate::types::{Ciphertext, DerivedKey, Iv};
use zeroize::Zeroizing;

/// Block cipher in CBC chaining mode
pub trait SymmetricCapability {
    /// Block size in bytes; padded input must be a multiple of it
    fn block_size(&self) -> usize;

    /// Returns the name of this cipher
    fn name(&self) -> &'static str;

    /// Encrypt block-aligned plaintext
    fn encrypt(&self, key: &DerivedKey, iv: &Iv, padded: &[u8]) -> Result<Ciphertext>;

    /// Decrypt to block-aligned plaintext, still padded
    fn decrypt(&self, key: &DerivedKey, iv: &Iv, ciphertext: &Ciphertext)
        -> Result<Zeroizing<Vec<u8>>>;
}
