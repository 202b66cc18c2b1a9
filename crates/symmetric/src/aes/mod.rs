//! AES-128 block cipher and the AES-128-CBC capability
//!
//! The raw block primitive comes from the RustCrypto `aes` crate, which uses
//! hardware instructions when available and a constant-time bitsliced
//! fallback otherwise. [`Aes128Cbc`] chains it with [`Cbc`] and is the
//! symmetric capability the pipeline consumes.

use ::aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use zeroize::Zeroizing;

use crate::cbc::Cbc;
use crate::cipher::{Block, BlockCipher};
use mchybrid_api::error::{validate, ResultExt};
use mchybrid_api::{Ciphertext, DerivedKey, Error, Iv, Result, SymmetricCapability};
use mchybrid_params::utils::symmetric::{AES128_KEY_SIZE, AES_BLOCK_SIZE};

/// AES-128 keyed block cipher
///
/// The expanded key schedule is zeroized when dropped.
pub struct Aes128 {
    inner: ::aes::Aes128,
}

impl Aes128 {
    /// Creates a new AES-128 instance from a 16-byte key
    pub fn new(key: &DerivedKey) -> Self {
        Self {
            inner: ::aes::Aes128::new(GenericArray::from_slice(key.as_ref())),
        }
    }

    /// Creates a new AES-128 instance from a raw key slice
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;
        let inner = ::aes::Aes128::new_from_slice(key)
            .wrap_err(|| Error::cipher("AES-128 key", "rejected by block cipher"))?;
        Ok(Self { inner })
    }
}

impl BlockCipher for Aes128 {
    fn name() -> &'static str {
        "AES-128"
    }

    fn encrypt_block(&self, block: &mut Block) {
        self.inner
            .encrypt_block(GenericArray::from_mut_slice(block.as_mut_slice()));
    }

    fn decrypt_block(&self, block: &mut Block) {
        self.inner
            .decrypt_block(GenericArray::from_mut_slice(block.as_mut_slice()));
    }
}

/// AES-128 in CBC mode over pre-padded input
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes128Cbc;

impl Aes128Cbc {
    pub fn new() -> Self {
        Self
    }
}

impl SymmetricCapability for Aes128Cbc {
    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn name(&self) -> &'static str {
        "AES-128-CBC"
    }

    fn encrypt(&self, key: &DerivedKey, iv: &Iv, padded: &[u8]) -> Result<Ciphertext> {
        validate::block_multiple("AES-128-CBC plaintext", padded.len(), AES_BLOCK_SIZE)?;
        let cbc = Cbc::new(Aes128::new(key), iv);
        Ok(Ciphertext::new(cbc.encrypt(padded)?))
    }

    fn decrypt(
        &self,
        key: &DerivedKey,
        iv: &Iv,
        ciphertext: &Ciphertext,
    ) -> Result<Zeroizing<Vec<u8>>> {
        validate::block_multiple("AES-128-CBC ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;
        let cbc = Cbc::new(Aes128::new(key), iv);
        cbc.decrypt(ciphertext.as_bytes())
    }
}
