//! Error handling for the hybrid pipeline

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{ConfigurationErrorKind, Error, Result};

// Re-export error traits
pub use traits::ResultExt;
