//! Shared secret to symmetric key derivation
//!
//! The KEM shared secret length depends on the parameter set; the symmetric
//! cipher wants exactly 16 bytes. Both derivations hash the full secret, so
//! raw KEM output is never used as a cipher key.

use hkdf::Hkdf;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use mchybrid_api::error::ResultExt;
use mchybrid_api::{DerivedKey, Error, Result, SharedSecret, DERIVED_KEY_SIZE};
use mchybrid_params::utils::hash::SHA256_OUTPUT_SIZE;

/// How a [`DerivedKey`] is obtained from a shared secret
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyDerivation {
    /// First 16 bytes of SHA-256 over the whole secret
    #[default]
    Sha256Truncate,
    /// HKDF-SHA256 with no salt, expanded to 16 bytes under `info`
    HkdfSha256 { info: Vec<u8> },
}

impl KeyDerivation {
    /// HKDF-SHA256 with the given context label
    pub fn hkdf(info: impl Into<Vec<u8>>) -> Self {
        Self::HkdfSha256 { info: info.into() }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha256Truncate => "SHA-256/128",
            Self::HkdfSha256 { .. } => "HKDF-SHA256",
        }
    }

    /// Derive a 16-byte key. Deterministic; uses no randomness. Any secret
    /// length is accepted, including zero.
    pub fn derive(&self, secret: &SharedSecret) -> Result<DerivedKey> {
        match self {
            Self::Sha256Truncate => {
                let mut digest: [u8; SHA256_OUTPUT_SIZE] = Sha256::digest(secret.as_ref()).into();
                let key = DerivedKey::from_slice(&digest[..DERIVED_KEY_SIZE]);
                digest.zeroize();
                key
            }
            Self::HkdfSha256 { info } => {
                let hk = Hkdf::<Sha256>::new(None, secret.as_ref());
                let mut okm = [0u8; DERIVED_KEY_SIZE];
                hk.expand(info, &mut okm).wrap_err(|| Error::InvalidParameter {
                    context: "HKDF-SHA256",
                    message: "output length rejected".into(),
                })?;
                let key = DerivedKey::new(okm);
                okm.zeroize();
                Ok(key)
            }
        }
    }
}

/// Derive the symmetric key for a shared secret
pub fn derive_key(secret: &SharedSecret, derivation: &KeyDerivation) -> Result<DerivedKey> {
    derivation.derive(secret)
}
