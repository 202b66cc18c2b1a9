//! Scoped KEM session
//!
//! [`SessionGuard`] owns one open session, resolves its decapsulation call
//! shape once at acquisition, and closes it exactly once: either through
//! [`SessionGuard::release`] or when dropped on an early return.

use mchybrid_api::{
    ConfigurationErrorKind, DecapsulationStyle, Error, KemCiphertext, KemProvider, KemSession,
    PublicKey, Result, SecretKey, SharedSecret,
};
use tracing::{debug, warn};

use crate::selector::ParameterSet;

pub struct SessionGuard<S: KemSession> {
    session: S,
    style: DecapsulationStyle,
    released: bool,
}

impl<S: KemSession> SessionGuard<S> {
    /// Open a session for an already-selected parameter set
    ///
    /// Capability rejections of the name pass through as
    /// `UnsupportedParameter`; any other open failure means the native
    /// capability is unavailable and becomes a configuration error.
    pub fn acquire<P>(provider: &P, parameter_set: &ParameterSet) -> Result<Self>
    where
        P: KemProvider<Session = S>,
    {
        let session = provider.open(parameter_set.name()).map_err(|err| match err {
            Error::UnsupportedParameter { .. } | Error::Configuration { .. } => err,
            other => {
                warn!(%parameter_set, error = %other, "KEM capability unavailable");
                Error::configuration(
                    ConfigurationErrorKind::CapabilityUnavailable,
                    format!("could not open a session for '{}'", parameter_set),
                )
            }
        })?;
        let style = session.decapsulation_style();
        debug!(%parameter_set, ?style, "KEM session acquired");
        Ok(Self {
            session,
            style,
            released: false,
        })
    }

    pub fn parameter_set(&self) -> &str {
        self.session.parameter_set()
    }

    pub fn decapsulation_style(&self) -> DecapsulationStyle {
        self.style
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn generate_keypair(&mut self) -> Result<PublicKey> {
        self.session.generate_keypair()
    }

    pub fn export_secret_key(&self) -> Result<SecretKey> {
        self.session.export_secret_key()
    }

    pub fn encapsulate(&mut self, public_key: &PublicKey) -> Result<(KemCiphertext, SharedSecret)> {
        self.session.encapsulate(public_key)
    }

    /// Decapsulate with the session's own private key, whichever call shape
    /// the session expects
    pub fn decapsulate(&mut self, ciphertext: &KemCiphertext) -> Result<SharedSecret> {
        match self.style {
            DecapsulationStyle::Retained => self.session.decapsulate(ciphertext),
            DecapsulationStyle::ExplicitKey => {
                // Zeroized when it goes out of scope
                let secret_key = self.session.export_secret_key()?;
                self.session.decapsulate_with_key(ciphertext, &secret_key)
            }
        }
    }

    /// Close the session now
    pub fn release(mut self) {
        self.close_once();
    }

    fn close_once(&mut self) {
        if !self.released {
            self.released = true;
            self.session.close();
            debug!(parameter_set = self.session.parameter_set(), "KEM session released");
        }
    }
}

impl<S: KemSession> Drop for SessionGuard<S> {
    fn drop(&mut self) {
        self.close_once();
    }
}
