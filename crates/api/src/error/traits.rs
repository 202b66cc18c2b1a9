//! Error handling traits for capability boundaries

use super::types::{Error, Result};

/// Extension trait for results produced by third-party primitives
pub trait ResultExt<T, E>: Sized {
    /// Wrap an error with a replacement built lazily
    fn wrap_err<F, E2>(self, f: F) -> core::result::Result<T, E2>
    where
        F: FnOnce() -> E2;

    /// Map a foreign error into an opaque KEM failure
    fn kem_context(self, context: &'static str) -> Result<T>
    where
        E: core::fmt::Display;

    /// Map a foreign error into an opaque cipher failure
    fn cipher_context(self, context: &'static str) -> Result<T>
    where
        E: core::fmt::Display;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn wrap_err<F, E2>(self, f: F) -> core::result::Result<T, E2>
    where
        F: FnOnce() -> E2,
    {
        self.map_err(|_| f())
    }

    fn kem_context(self, context: &'static str) -> Result<T>
    where
        E: core::fmt::Display,
    {
        self.map_err(|e| Error::kem(context, e.to_string()))
    }

    fn cipher_context(self, context: &'static str) -> Result<T>
    where
        E: core::fmt::Display,
    {
        self.map_err(|e| Error::cipher(context, e.to_string()))
    }
}
