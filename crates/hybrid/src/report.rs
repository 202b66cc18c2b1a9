//! Run outputs and display helpers

use zeroize::Zeroizing;

use mchybrid_api::{Ciphertext, Iv, KemCiphertext, Result, IV_SIZE};
use mchybrid_api::error::validate;

use crate::selector::ParameterSet;
use crate::state::PipelineState;

/// Symmetric ciphertext together with the IV it was produced under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedPayload {
    pub iv: Iv,
    pub ciphertext: Ciphertext,
}

impl SealedPayload {
    pub fn new(iv: Iv, ciphertext: Ciphertext) -> Self {
        Self { iv, ciphertext }
    }

    /// `iv || ciphertext`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(IV_SIZE + self.ciphertext.len());
        out.extend_from_slice(self.iv.as_bytes());
        out.extend_from_slice(self.ciphertext.as_bytes());
        out
    }

    /// Split `iv || ciphertext`. The ciphertext part must not be empty.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::parameter(
            bytes.len() > IV_SIZE,
            "SealedPayload::from_bytes",
            "input shorter than IV plus one byte",
        )?;
        let (iv, ciphertext) = bytes.split_at(IV_SIZE);
        Ok(Self {
            iv: Iv::from_slice(iv)?,
            ciphertext: Ciphertext::from_slice(ciphertext),
        })
    }

    pub fn ciphertext_hex(&self) -> String {
        self.ciphertext.to_hex()
    }
}

/// Everything a successful run produced that is safe to hand back
///
/// Holds no private key, shared secret or derived key.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub parameter_set: ParameterSet,
    pub public_key_size: usize,
    /// Present when the run exported the private key
    pub secret_key_size: Option<usize>,
    pub shared_secret_size: usize,
    pub kem_ciphertext: KemCiphertext,
    pub payload: SealedPayload,
    /// Present when the run decrypted its own output
    pub recovered_plaintext: Option<Zeroizing<Vec<u8>>>,
    pub states: Vec<PipelineState>,
}

impl PipelineReport {
    pub fn kem_ciphertext_hex(&self) -> String {
        self.kem_ciphertext.to_hex()
    }

    pub fn payload_hex(&self) -> String {
        self.payload.ciphertext_hex()
    }

    /// One-line human summary with sizes only
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{}: public key {}, KEM ciphertext {}, payload {}",
            self.parameter_set,
            format_size(self.public_key_size),
            format_size(self.kem_ciphertext.len()),
            format_size(self.payload.ciphertext.len()),
        );
        if let Some(sk) = self.secret_key_size {
            line.push_str(&format!(", secret key {}", format_size(sk)));
        }
        line
    }
}

/// Render a byte count as `B`, `KB` or `MB` with one decimal
pub fn format_size(n: usize) -> String {
    const KIB: usize = 1024;
    const MIB: usize = 1024 * 1024;
    if n < KIB {
        format!("{} B", n)
    } else if n < MIB {
        format!("{:.1} KB", n as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", n as f64 / MIB as f64)
    }
}
