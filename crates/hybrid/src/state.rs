//! One-way pipeline state machine

use core::fmt;

use mchybrid_api::{Error, Result};
use tracing::debug;

/// Stages of one pipeline run, in protocol order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PipelineState {
    Uninitialized,
    SessionAcquired,
    KeyGenerated,
    Encapsulated,
    SecretVerified,
    KeyDerived,
    Encrypted,
    Decrypted,
    Released,
}

impl PipelineState {
    pub fn name(self) -> &'static str {
        match self {
            Self::Uninitialized => "Uninitialized",
            Self::SessionAcquired => "SessionAcquired",
            Self::KeyGenerated => "KeyGenerated",
            Self::Encapsulated => "Encapsulated",
            Self::SecretVerified => "SecretVerified",
            Self::KeyDerived => "KeyDerived",
            Self::Encrypted => "Encrypted",
            Self::Decrypted => "Decrypted",
            Self::Released => "Released",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Released
    }

    /// Whether `self -> next` is a legal single step.
    ///
    /// Stages advance one at a time. `Decrypted` is optional. `Released` is
    /// reachable from every non-terminal stage.
    pub fn can_advance_to(self, next: PipelineState) -> bool {
        use PipelineState::*;
        match (self, next) {
            (Released, _) => false,
            (_, Released) => true,
            (Uninitialized, SessionAcquired)
            | (SessionAcquired, KeyGenerated)
            | (KeyGenerated, Encapsulated)
            | (Encapsulated, SecretVerified)
            | (SecretVerified, KeyDerived)
            | (KeyDerived, Encrypted)
            | (Encrypted, Decrypted) => true,
            _ => false,
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current state plus every state visited so far
#[derive(Debug, Clone)]
pub struct StateMachine {
    current: PipelineState,
    trace: Vec<PipelineState>,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            current: PipelineState::Uninitialized,
            trace: vec![PipelineState::Uninitialized],
        }
    }

    pub fn current(&self) -> PipelineState {
        self.current
    }

    pub fn trace(&self) -> &[PipelineState] {
        &self.trace
    }

    pub fn into_trace(self) -> Vec<PipelineState> {
        self.trace
    }

    /// Move to `next`, rejecting backward or skipping transitions
    pub fn advance(&mut self, next: PipelineState) -> Result<()> {
        if !self.current.can_advance_to(next) {
            return Err(Error::InvalidState {
                from: self.current.name(),
                to: next.name(),
            });
        }
        debug!(from = self.current.name(), to = next.name(), "pipeline transition");
        self.current = next;
        self.trace.push(next);
        Ok(())
    }

    /// Move to `Released` unless already there
    pub fn release(&mut self) {
        if !self.current.is_terminal() {
            debug!(from = self.current.name(), "pipeline released");
            self.current = PipelineState::Released;
            self.trace.push(PipelineState::Released);
        }
    }
}
