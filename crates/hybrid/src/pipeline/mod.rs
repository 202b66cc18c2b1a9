//! Hybrid encryption orchestrator
//!
//! One run walks the whole protocol under a single KEM session:
//!
//! 1. select the configured parameter set (no session is opened on failure)
//! 2. acquire a scoped session
//! 3. generate a keypair and encapsulate against its public key
//! 4. decapsulate and compare both secrets in constant time, aborting with
//!    `SecretMismatch` before anything is derived or encrypted
//! 5. derive a 16-byte key, pad and encrypt the payload in CBC mode
//! 6. optionally decrypt, unpad and compare with the input
//!
//! The session is closed exactly once on every exit path. Secrets, the
//! private key and the derived key are dropped (and zeroized) inside the
//! run; only public values leave it in a [`PipelineReport`].

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{info, warn};
use zeroize::Zeroizing;

use mchybrid_api::{
    DerivedKey, Error, Iv, KemCiphertext, KemProvider, Result, SymmetricCapability,
};
use mchybrid_internal::constant_time::ct_eq;
use mchybrid_symmetric::padding::{pad, unpad};

use crate::config::{IvPolicy, PipelineConfig};
use crate::guard::SessionGuard;
use crate::report::{PipelineReport, SealedPayload};
use crate::selector::{ParameterSelector, ParameterSet};
use crate::state::{PipelineState, StateMachine};

/// Explicitly constructed pipeline over a KEM capability and a symmetric
/// capability
///
/// The pipeline holds no session between runs. Each call to
/// [`run`](Self::run) opens, uses and closes its own.
pub struct HybridPipeline<P, C> {
    provider: P,
    cipher: C,
    config: PipelineConfig,
}

/// What a session produced before it was released
struct SessionOutput {
    public_key_size: usize,
    secret_key_size: Option<usize>,
    shared_secret_size: usize,
    kem_ciphertext: KemCiphertext,
    payload: SealedPayload,
    recovered_plaintext: Option<Zeroizing<Vec<u8>>>,
}

impl<P, C> HybridPipeline<P, C>
where
    P: KemProvider,
    C: SymmetricCapability,
{
    /// Pipeline with the default configuration
    pub fn new(provider: P, cipher: C) -> Self {
        Self::with_config(provider, cipher, PipelineConfig::default())
    }

    pub fn with_config(provider: P, cipher: C, config: PipelineConfig) -> Self {
        Self {
            provider,
            cipher,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Selector over the capability's currently enabled mechanisms
    pub fn selector(&self) -> ParameterSelector {
        ParameterSelector::from_provider(&self.provider)
    }

    /// Validate the configured parameter set without opening a session
    pub fn select(&self) -> Result<ParameterSet> {
        self.selector().select(&self.config.parameter_set)
    }

    /// Run the full pipeline over `plaintext`, drawing IVs from the OS
    pub fn run(&self, plaintext: &[u8]) -> Result<PipelineReport> {
        self.run_with_rng(plaintext, &mut OsRng)
    }

    /// Run the full pipeline with a caller-supplied CSPRNG for the IV
    pub fn run_with_rng<R>(&self, plaintext: &[u8], rng: &mut R) -> Result<PipelineReport>
    where
        R: RngCore + CryptoRng,
    {
        let parameter_set = self.select()?;

        let mut machine = StateMachine::new();
        let mut guard = SessionGuard::acquire(&self.provider, &parameter_set)?;
        machine.advance(PipelineState::SessionAcquired)?;

        let outcome = self.run_session(&mut guard, &mut machine, &parameter_set, plaintext, rng);

        guard.release();
        machine.release();

        let output = outcome?;
        info!(
            %parameter_set,
            public_key = output.public_key_size,
            kem_ciphertext = output.kem_ciphertext.len(),
            payload = output.payload.ciphertext.len(),
            cipher = self.cipher.name(),
            "hybrid pipeline run complete"
        );

        Ok(PipelineReport {
            parameter_set,
            public_key_size: output.public_key_size,
            secret_key_size: output.secret_key_size,
            shared_secret_size: output.shared_secret_size,
            kem_ciphertext: output.kem_ciphertext,
            payload: output.payload,
            recovered_plaintext: output.recovered_plaintext,
            states: machine.into_trace(),
        })
    }

    fn run_session<R>(
        &self,
        guard: &mut SessionGuard<P::Session>,
        machine: &mut StateMachine,
        parameter_set: &ParameterSet,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<SessionOutput>
    where
        R: RngCore + CryptoRng,
    {
        let public_key = guard.generate_keypair()?;
        machine.advance(PipelineState::KeyGenerated)?;

        let secret_key_size = if self.config.export_secret_key {
            Some(guard.export_secret_key()?.len())
        } else {
            None
        };

        let (kem_ciphertext, secret_enc) = guard.encapsulate(&public_key)?;
        machine.advance(PipelineState::Encapsulated)?;

        let secret_dec = guard.decapsulate(&kem_ciphertext)?;
        if secret_enc != secret_dec {
            warn!(%parameter_set, "decapsulated secret does not match; aborting run");
            return Err(Error::SecretMismatch {
                parameter_set: parameter_set.to_string(),
            });
        }
        drop(secret_dec);
        machine.advance(PipelineState::SecretVerified)?;

        let shared_secret_size = secret_enc.len();
        let key = self.config.key_derivation.derive(&secret_enc)?;
        drop(secret_enc);
        machine.advance(PipelineState::KeyDerived)?;

        let iv = match self.config.iv_policy {
            IvPolicy::Random => Iv::random(rng),
            IvPolicy::Zero => Iv::zero(),
        };
        let padded = Zeroizing::new(pad(plaintext, self.cipher.block_size())?);
        let ciphertext = self.cipher.encrypt(&key, &iv, &padded)?;
        let payload = SealedPayload::new(iv, ciphertext);
        machine.advance(PipelineState::Encrypted)?;

        let recovered_plaintext = if self.config.verify_roundtrip {
            let recovered = open_payload(&self.cipher, &key, &payload)?;
            if !ct_eq(&recovered[..], plaintext) {
                return Err(Error::cipher(
                    "round-trip check",
                    "recovered plaintext differs from input",
                ));
            }
            machine.advance(PipelineState::Decrypted)?;
            Some(recovered)
        } else {
            None
        };

        Ok(SessionOutput {
            public_key_size: public_key.len(),
            secret_key_size,
            shared_secret_size,
            kem_ciphertext,
            payload,
            recovered_plaintext,
        })
    }
}

/// Decrypt a sealed payload and strip its padding
///
/// Malformed padding surfaces as `Padding`; it indicates a tampered
/// ciphertext or the wrong key.
pub fn open_payload<C: SymmetricCapability>(
    cipher: &C,
    key: &DerivedKey,
    payload: &SealedPayload,
) -> Result<Zeroizing<Vec<u8>>> {
    let padded = cipher.decrypt(key, &payload.iv, &payload.ciphertext)?;
    match unpad(&padded, cipher.block_size()) {
        Ok(unpadded) => Ok(Zeroizing::new(unpadded.to_vec())),
        Err(err) => {
            if err.is_padding() {
                warn!(cipher = cipher.name(), "padding check failed after decryption");
            }
            Err(err)
        }
    }
}
