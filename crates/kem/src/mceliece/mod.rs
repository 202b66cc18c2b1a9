//! Classic McEliece KEM capability
//!
//! [`McElieceProvider`] exposes the ten round-4 parameter sets under their
//! `Classic-McEliece-*` mechanism names and opens [`McElieceSession`]s.
//! Sessions can be opened in either decapsulation style so callers written
//! against either capability shape work unchanged.

mod native;
mod session;


pub use session::McElieceSession;

use mchybrid_api::{DecapsulationStyle, Error, KemProvider, Result};
use mchybrid_params::pqc::mceliece::{self as params, McElieceParams};
use tracing::warn;

/// One Classic McEliece parameter set backed by native code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum McElieceVariant {
    Mceliece348864,
    Mceliece348864f,
    Mceliece460896,
    Mceliece460896f,
    Mceliece6688128,
    Mceliece6688128f,
    Mceliece6960119,
    Mceliece6960119f,
    Mceliece8192128,
    Mceliece8192128f,
}

impl McElieceVariant {
    /// Every variant, in the same order as the parameter table
    pub const ALL: [McElieceVariant; 10] = [
        Self::Mceliece348864,
        Self::Mceliece348864f,
        Self::Mceliece460896,
        Self::Mceliece460896f,
        Self::Mceliece6688128,
        Self::Mceliece6688128f,
        Self::Mceliece6960119,
        Self::Mceliece6960119f,
        Self::Mceliece8192128,
        Self::Mceliece8192128f,
    ];

    pub fn params(self) -> &'static McElieceParams {
        match self {
            Self::Mceliece348864 => &params::MCELIECE_348864,
            Self::Mceliece348864f => &params::MCELIECE_348864F,
            Self::Mceliece460896 => &params::MCELIECE_460896,
            Self::Mceliece460896f => &params::MCELIECE_460896F,
            Self::Mceliece6688128 => &params::MCELIECE_6688128,
            Self::Mceliece6688128f => &params::MCELIECE_6688128F,
            Self::Mceliece6960119 => &params::MCELIECE_6960119,
            Self::Mceliece6960119f => &params::MCELIECE_6960119F,
            Self::Mceliece8192128 => &params::MCELIECE_8192128,
            Self::Mceliece8192128f => &params::MCELIECE_8192128F,
        }
    }

    /// Mechanism name, e.g. `Classic-McEliece-348864`
    pub fn name(self) -> &'static str {
        self.params().name
    }

    /// Exact-match lookup by mechanism name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    /// `(public key, secret key, ciphertext, shared secret)` sizes as
    /// reported by the native implementation
    pub fn native_sizes(self) -> (usize, usize, usize, usize) {
        native::sizes(self)
    }
}

/// Explicitly constructed handle to the Classic McEliece capability
#[derive(Debug, Clone)]
pub struct McElieceProvider {
    enabled: Vec<McElieceVariant>,
    style: DecapsulationStyle,
}

impl Default for McElieceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl McElieceProvider {
    /// Provider with every parameter set enabled and the private key
    /// retained inside sessions
    pub fn new() -> Self {
        Self {
            enabled: McElieceVariant::ALL.to_vec(),
            style: DecapsulationStyle::Retained,
        }
    }

    /// Restrict the enabled parameter sets
    pub fn with_variants(mut self, variants: impl IntoIterator<Item = McElieceVariant>) -> Self {
        self.enabled = variants.into_iter().collect();
        self
    }

    /// Choose how sessions expect decapsulation to be called
    pub fn with_decapsulation_style(mut self, style: DecapsulationStyle) -> Self {
        self.style = style;
        self
    }

    pub fn decapsulation_style(&self) -> DecapsulationStyle {
        self.style
    }
}

impl KemProvider for McElieceProvider {
    type Session = McElieceSession;

    fn enabled_mechanisms(&self) -> Vec<String> {
        self.enabled.iter().map(|v| v.name().to_string()).collect()
    }

    fn open(&self, parameter_set: &str) -> Result<Self::Session> {
        match McElieceVariant::from_name(parameter_set) {
            Some(variant) if self.enabled.contains(&variant) => {
                Ok(McElieceSession::new(variant, self.style))
            }
            _ => {
                warn!(parameter_set, "McEliece capability rejected parameter set");
                Err(Error::UnsupportedParameter {
                    name: parameter_set.to_string(),
                })
            }
        }
    }
}
