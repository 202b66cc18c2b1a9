//! Hybrid Classic McEliece to AES-128-CBC pipeline
//!
//! This crate holds the orchestration layer: parameter-set selection, the
//! shared-secret to key derivation, the one-way run state machine and the
//! [`HybridPipeline`] that sequences capability calls. The KEM and cipher
//! themselves are supplied by the caller through the capability traits in
//! `mchybrid-api`.

#![forbid(unsafe_code)]

pub mod config;
pub mod derive;
pub mod guard;
pub mod pipeline;
pub mod report;
pub mod selector;
pub mod state;

pub use config::{IvPolicy, KeyDerivation, PipelineConfig};
pub use derive::derive_key;
pub use guard::SessionGuard;
pub use pipeline::{open_payload, HybridPipeline};
pub use report::{format_size, PipelineReport, SealedPayload};
pub use selector::{ParameterSelector, ParameterSet};
pub use state::{PipelineState, StateMachine};

pub use mchybrid_api::error::{Error, Result};
