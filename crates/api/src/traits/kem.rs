//! Capability traits for Key Encapsulation Mechanisms (KEM)
//!
//! A [`KemProvider`] is the explicitly constructed handle to a KEM library.
//! It lists the mechanisms it has enabled and opens one [`KemSession`] per
//! parameter set. A session owns native resources and the private key of the
//! keypair it generated; callers must release it exactly once through
//! [`KemSession::close`], which is idempotent.

use crate::error::Result;
use crate::types::{KemCiphertext, PublicKey, SecretKey, SharedSecret};

/// How a session expects decapsulation to be called.
///
/// Capability versions differ here: some keep the private key inside the
/// session and decapsulate from the ciphertext alone, others require the
/// exported private key to be passed back in. The tag is read once, when the
/// session is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecapsulationStyle {
    /// `decapsulate(ciphertext)`; the private key stays in the session
    Retained,
    /// `decapsulate_with_key(ciphertext, private_key)`
    ExplicitKey,
}

/// Handle to a KEM library
pub trait KemProvider {
    /// Session type opened by this provider
    type Session: KemSession;

    /// Names of every mechanism this capability has enabled, in capability
    /// order. An empty list means the capability is unavailable.
    fn enabled_mechanisms(&self) -> Vec<String>;

    /// Open a session for one parameter set.
    ///
    /// Fails with `UnsupportedParameter` if the capability does not
    /// recognize the name, or with a `CapabilityUnavailable` configuration
    /// error if native resources cannot be acquired.
    fn open(&self, parameter_set: &str) -> Result<Self::Session>;
}

/// One KEM session bound to a single parameter set
pub trait KemSession {
    /// Parameter set this session was opened with
    fn parameter_set(&self) -> &str;

    /// Decapsulation call shape of this session
    fn decapsulation_style(&self) -> DecapsulationStyle;

    /// Generate a keypair, keep the private key, return the public key
    fn generate_keypair(&mut self) -> Result<PublicKey>;

    /// Export the private key generated by this session.
    ///
    /// The returned bytes are owned by the caller and zeroize on drop.
    fn export_secret_key(&self) -> Result<SecretKey>;

    /// Encapsulate against a public key, producing `(ciphertext, secret)`
    fn encapsulate(&mut self, public_key: &PublicKey) -> Result<(KemCiphertext, SharedSecret)>;

    /// Decapsulate with the session's retained private key
    fn decapsulate(&mut self, ciphertext: &KemCiphertext) -> Result<SharedSecret>;

    /// Decapsulate with an explicitly supplied private key
    fn decapsulate_with_key(
        &mut self,
        ciphertext: &KemCiphertext,
        secret_key: &SecretKey,
    ) -> Result<SharedSecret>;

    /// Release native resources. Calling it again has no effect.
    fn close(&mut self);

    /// Whether `close` has already run
    fn is_closed(&self) -> bool;
}
