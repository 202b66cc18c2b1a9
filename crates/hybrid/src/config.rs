//! Pipeline configuration

use mchybrid_params::pqc::mceliece::DEFAULT_PARAMETER_SET;

pub use crate::derive::KeyDerivation;

/// Where the CBC initialization vector comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IvPolicy {
    /// Fresh 16 bytes from a CSPRNG per encryption, carried with the ciphertext
    #[default]
    Random,
    /// All-zero IV. Reproduces fixed demo output; never reuse a key with it.
    Zero,
}

/// Settings for one [`HybridPipeline`](crate::HybridPipeline)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineConfig {
    /// Requested mechanism name, validated against the enabled set
    pub parameter_set: String,
    pub iv_policy: IvPolicy,
    pub key_derivation: KeyDerivation,
    /// Export the private key during the run to report its size
    pub export_secret_key: bool,
    /// Decrypt and compare after encrypting
    pub verify_roundtrip: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parameter_set: DEFAULT_PARAMETER_SET.to_string(),
            iv_policy: IvPolicy::default(),
            key_derivation: KeyDerivation::default(),
            export_secret_key: false,
            verify_roundtrip: true,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter_set(mut self, name: impl Into<String>) -> Self {
        self.parameter_set = name.into();
        self
    }

    pub fn with_iv_policy(mut self, policy: IvPolicy) -> Self {
        self.iv_policy = policy;
        self
    }

    pub fn with_key_derivation(mut self, derivation: KeyDerivation) -> Self {
        self.key_derivation = derivation;
        self
    }

    pub fn with_secret_key_export(mut self, export: bool) -> Self {
        self.export_secret_key = export;
        self
    }

    pub fn with_roundtrip_verification(mut self, verify: bool) -> Self {
        self.verify_roundtrip = verify;
        self
    }
}
