//! # mchybrid
//!
//! Seal a payload under a Classic McEliece shared secret: generate a
//! keypair, encapsulate, verify that decapsulation agrees, derive an
//! AES-128 key from the secret and encrypt in CBC mode.
//!
//! ## Features
//!
//! - `mceliece` (default): the native Classic McEliece capability
//! - `serde`: `Serialize`/`Deserialize` on configuration types
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`mchybrid-api`]: Errors, capability traits, byte containers
//! - [`mchybrid-params`]: Parameter-set tables and constants
//! - [`mchybrid-symmetric`]: AES-128-CBC and PKCS#7 padding
//! - [`mchybrid-kem`]: Classic McEliece capability
//! - [`mchybrid-hybrid`]: Selection, key derivation and the pipeline
//!
//! ## Example
//!
//! ```no_run
//! use mchybrid::prelude::*;
//!
//! # fn main() -> mchybrid::api::Result<()> {
//! let pipeline = HybridPipeline::new(McElieceProvider::new(), Aes128Cbc::new());
//! let report = pipeline.run(b"Hello")?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use mchybrid_api as api;
pub use mchybrid_hybrid as hybrid;
pub use mchybrid_internal as internal;
pub use mchybrid_params as params;
pub use mchybrid_symmetric as symmetric;

#[cfg(feature = "mceliece")]
pub use mchybrid_kem as kem;

/// Common imports for mchybrid users
pub mod prelude {
    pub use crate::api::{ConfigurationErrorKind, Error, Result};

    pub use crate::api::{DecapsulationStyle, KemProvider, KemSession, SymmetricCapability};

    pub use crate::api::{
        Ciphertext, DerivedKey, Iv, KemCiphertext, PublicKey, SecretKey, SharedSecret,
    };

    pub use crate::hybrid::{
        derive_key, format_size, HybridPipeline, IvPolicy, KeyDerivation, ParameterSelector,
        ParameterSet, PipelineConfig, PipelineReport, PipelineState, SealedPayload,
    };

    pub use crate::symmetric::Aes128Cbc;

    #[cfg(feature = "mceliece")]
    pub use crate::kem::{McElieceProvider, McElieceVariant};
}
