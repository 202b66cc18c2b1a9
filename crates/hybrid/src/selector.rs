//! Parameter-set selection
//!
//! Validates a requested mechanism name against the names a KEM capability
//! reports as enabled. Selection never opens a session.

use core::fmt;

use mchybrid_api::{ConfigurationErrorKind, Error, KemProvider, Result};
use mchybrid_params::pqc::mceliece::{self, McElieceParams, DEFAULT_PARAMETER_SET, MCELIECE_FAMILY};

/// A validated parameter-set name
///
/// Only [`ParameterSelector`] creates these, so holding one means the name
/// was a member of the enabled set at selection time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParameterSet(String);

impl ParameterSet {
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Classic McEliece metadata for this name, if it is a known set
    pub fn params(&self) -> Option<&'static McElieceParams> {
        mceliece::by_name(&self.0)
    }
}

impl AsRef<str> for ParameterSet {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exact-match selector over a snapshot of enabled mechanism names
#[derive(Debug, Clone, Default)]
pub struct ParameterSelector {
    enabled: Vec<String>,
}

impl ParameterSelector {
    pub fn new(enabled: Vec<String>) -> Self {
        Self { enabled }
    }

    /// Snapshot the enabled set of a capability
    pub fn from_provider<P: KemProvider>(provider: &P) -> Self {
        Self::new(provider.enabled_mechanisms())
    }

    /// Keep only mechanisms whose name starts with `prefix`, preserving
    /// capability order
    pub fn restrict_to_family(mut self, prefix: &str) -> Self {
        self.enabled.retain(|name| name.starts_with(prefix));
        self
    }

    pub fn enabled(&self) -> &[String] {
        &self.enabled
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Enabled names belonging to a mechanism family, in capability order
    pub fn family<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.enabled
            .iter()
            .map(String::as_str)
            .filter(move |name| name.starts_with(prefix))
    }

    /// Validate `name` against the enabled set
    ///
    /// An empty enabled set is reported as [`ConfigurationErrorKind::NoMechanisms`]
    /// whatever the name; otherwise a missing name is
    /// [`ConfigurationErrorKind::UnknownParameterSet`].
    pub fn select(&self, name: &str) -> Result<ParameterSet> {
        if self.enabled.is_empty() {
            return Err(Error::configuration(
                ConfigurationErrorKind::NoMechanisms,
                "the KEM capability reports no enabled mechanisms",
            ));
        }
        if self.enabled.iter().any(|enabled| enabled == name) {
            Ok(ParameterSet(name.to_string()))
        } else {
            Err(Error::configuration(
                ConfigurationErrorKind::UnknownParameterSet,
                format!("'{}' is not an enabled mechanism", name),
            ))
        }
    }

    /// Pick `Classic-McEliece-348864` if enabled, otherwise the first
    /// enabled Classic McEliece mechanism
    pub fn select_default(&self) -> Result<ParameterSet> {
        if self.enabled.iter().any(|name| name == DEFAULT_PARAMETER_SET) {
            return Ok(ParameterSet(DEFAULT_PARAMETER_SET.to_string()));
        }
        self.family(MCELIECE_FAMILY)
            .next()
            .map(|name| ParameterSet(name.to_string()))
            .ok_or_else(|| {
                Error::configuration(
                    ConfigurationErrorKind::NoMechanisms,
                    format!("no {} mechanism is enabled", MCELIECE_FAMILY),
                )
            })
    }
}
