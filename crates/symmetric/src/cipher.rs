//! Block cipher trait for mchybrid-symmetric
//!
//! Chaining modes are written against this trait so the raw block
//! primitive can be swapped without touching them.

use mchybrid_params::utils::symmetric::AES_BLOCK_SIZE;

/// One raw block of the cipher
pub type Block = [u8; AES_BLOCK_SIZE];

/// A 128-bit block cipher keyed at construction
pub trait BlockCipher {
    /// Block size in bytes
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    /// Returns the name of this cipher
    fn name() -> &'static str;

    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut Block);

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut Block);
}
