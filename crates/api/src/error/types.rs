//! Error type definitions for the hybrid pipeline

use thiserror::Error;

/// Why a parameter set could not be configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigurationErrorKind {
    /// The capability reports no enabled mechanisms at all
    NoMechanisms,
    /// The requested name is not a member of the enabled set
    UnknownParameterSet,
    /// The native capability could not be acquired
    CapabilityUnavailable,
}

impl core::fmt::Display for ConfigurationErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::NoMechanisms => "no mechanisms enabled",
            Self::UnknownParameterSet => "unknown parameter set",
            Self::CapabilityUnavailable => "capability unavailable",
        };
        f.write_str(label)
    }
}

/// Primary error type for pipeline operations
///
/// Messages never contain key material; at most they carry a parameter-set
/// name or byte lengths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Requested parameter set unknown, no mechanisms available, or the
    /// capability could not be acquired. Raised before any session exists.
    #[error("configuration error ({kind}): {message}")]
    Configuration {
        kind: ConfigurationErrorKind,
        message: String,
    },

    /// The capability rejected a name that passed selection (version skew)
    #[error("parameter set '{name}' is not supported by the capability")]
    UnsupportedParameter { name: String },

    /// Decapsulated secret differs from the encapsulated one
    #[error("shared secret mismatch for parameter set '{parameter_set}'")]
    SecretMismatch { parameter_set: String },

    /// Padding validation failed after decryption
    #[error("padding error: {context}")]
    Padding { context: &'static str },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Pipeline state machine was asked to move backwards or skip a stage
    #[error("illegal pipeline transition from {from} to {to}")]
    InvalidState { from: &'static str, to: &'static str },

    /// Opaque failure reported by the KEM capability
    #[error("KEM operation failed: {context}: {message}")]
    Kem {
        context: &'static str,
        message: String,
    },

    /// Opaque failure reported by the symmetric capability
    #[error("cipher operation failed: {context}: {message}")]
    Cipher {
        context: &'static str,
        message: String,
    },
}

/// Result type for pipeline operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for a configuration error
    pub fn configuration(kind: ConfigurationErrorKind, message: impl Into<String>) -> Self {
        Self::Configuration {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for an opaque KEM failure
    pub fn kem(context: &'static str, message: impl Into<String>) -> Self {
        Self::Kem {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an opaque cipher failure
    pub fn cipher(context: &'static str, message: impl Into<String>) -> Self {
        Self::Cipher {
            context,
            message: message.into(),
        }
    }

    /// The configuration sub-kind, if this is a configuration error
    pub fn configuration_kind(&self) -> Option<ConfigurationErrorKind> {
        match self {
            Self::Configuration { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    pub fn is_unsupported_parameter(&self) -> bool {
        matches!(self, Self::UnsupportedParameter { .. })
    }

    pub fn is_secret_mismatch(&self) -> bool {
        matches!(self, Self::SecretMismatch { .. })
    }

    pub fn is_padding(&self) -> bool {
        matches!(self, Self::Padding { .. })
    }

    /// Replace the context of context-carrying variants
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Padding { .. } => Self::Padding { context },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Kem { message, .. } => Self::Kem { context, message },
            Self::Cipher { message, .. } => Self::Cipher { context, message },
            other => other,
        }
    }
}
