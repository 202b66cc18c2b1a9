//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode is a block cipher mode of operation that provides confidentiality
//! by XORing each plaintext block with the previous ciphertext block before
//! encryption. The first block is XORed with an initialization vector (IV).
//!
//! This implementation follows NIST SP 800-38A. It performs no padding: input
//! must already be a whole number of blocks.

use zeroize::Zeroizing;

use crate::cipher::{Block, BlockCipher};
use mchybrid_params::utils::symmetric::AES_BLOCK_SIZE;
use mchybrid_api::error::{validate, Result};
use mchybrid_api::Iv;

/// CBC mode over any [`BlockCipher`]
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    iv: Block,
}

impl<B: BlockCipher> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    pub fn new(cipher: B, iv: &Iv) -> Self {
        Self {
            cipher,
            iv: *iv.as_bytes(),
        }
    }

    /// Encrypts a message using CBC mode
    ///
    /// The plaintext must be a non-empty multiple of the block size.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::block_multiple("CBC plaintext", plaintext.len(), B::BLOCK_SIZE)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut prev_block = self.iv;

        for chunk in plaintext.chunks_exact(B::BLOCK_SIZE) {
            let mut block = load_block("CBC plaintext block", chunk)?;

            // XOR with previous ciphertext block (or IV for the first block)
            for (b, p) in block.iter_mut().zip(prev_block.iter()) {
                *b ^= p;
            }

            self.cipher.encrypt_block(&mut block);

            ciphertext.extend_from_slice(&block);
            prev_block = block;
        }

        Ok(ciphertext)
    }

    /// Decrypts a message using CBC mode
    ///
    /// The ciphertext must be a non-empty multiple of the block size. The
    /// output is still padded and is zeroized on drop.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        validate::block_multiple("CBC ciphertext", ciphertext.len(), B::BLOCK_SIZE)?;

        let mut plaintext = Zeroizing::new(Vec::with_capacity(ciphertext.len()));
        let mut prev_block = self.iv;

        for chunk in ciphertext.chunks_exact(B::BLOCK_SIZE) {
            let current_block = load_block("CBC ciphertext block", chunk)?;
            let mut block = current_block;

            self.cipher.decrypt_block(&mut block);

            for (b, p) in block.iter_mut().zip(prev_block.iter()) {
                *b ^= p;
            }

            plaintext.extend_from_slice(&block);
            prev_block = current_block;
        }

        Ok(plaintext)
    }
}

fn load_block(context: &'static str, chunk: &[u8]) -> Result<Block> {
    validate::length(context, chunk.len(), AES_BLOCK_SIZE)?;
    let mut block = [0u8; AES_BLOCK_SIZE];
    block.copy_from_slice(chunk);
    Ok(block)
}
