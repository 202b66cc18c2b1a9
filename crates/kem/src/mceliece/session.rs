//! Classic McEliece session

use super::{native, McElieceVariant};
use mchybrid_api::{
    DecapsulationStyle, Error, KemCiphertext, KemSession, PublicKey, Result, SecretKey,
    SharedSecret,
};
use tracing::debug;

/// One Classic McEliece session.
///
/// Holds the private key of the last generated keypair until the session is
/// closed or dropped; the key is zeroized either way.
pub struct McElieceSession {
    variant: McElieceVariant,
    style: DecapsulationStyle,
    secret_key: Option<SecretKey>,
    closed: bool,
}

impl McElieceSession {
    pub(crate) fn new(variant: McElieceVariant, style: DecapsulationStyle) -> Self {
        debug!(parameter_set = variant.name(), ?style, "opened McEliece session");
        Self {
            variant,
            style,
            secret_key: None,
            closed: false,
        }
    }

    pub fn variant(&self) -> McElieceVariant {
        self.variant
    }

    fn ensure_open(&self, context: &'static str) -> Result<()> {
        if self.closed {
            return Err(Error::kem(context, "session already closed"));
        }
        Ok(())
    }

    fn retained_key(&self, context: &'static str) -> Result<&SecretKey> {
        self.secret_key
            .as_ref()
            .ok_or_else(|| Error::kem(context, "no keypair generated in this session"))
    }
}

impl KemSession for McElieceSession {
    fn parameter_set(&self) -> &str {
        self.variant.name()
    }

    fn decapsulation_style(&self) -> DecapsulationStyle {
        self.style
    }

    fn generate_keypair(&mut self) -> Result<PublicKey> {
        self.ensure_open("McEliece keypair")?;
        let (public_key, secret_key) = native::keypair(self.variant)?;
        // Replacing an earlier key drops (and zeroizes) it
        self.secret_key = Some(secret_key);
        Ok(public_key)
    }

    fn export_secret_key(&self) -> Result<SecretKey> {
        self.ensure_open("McEliece export")?;
        self.retained_key("McEliece export").cloned()
    }

    fn encapsulate(&mut self, public_key: &PublicKey) -> Result<(KemCiphertext, SharedSecret)> {
        self.ensure_open("McEliece encapsulate")?;
        native::encapsulate(self.variant, public_key)
    }

    fn decapsulate(&mut self, ciphertext: &KemCiphertext) -> Result<SharedSecret> {
        self.ensure_open("McEliece decapsulate")?;
        if self.style != DecapsulationStyle::Retained {
            return Err(Error::InvalidParameter {
                context: "McEliece decapsulate",
                message: "this session requires the private key to be supplied".into(),
            });
        }
        let secret_key = self.retained_key("McEliece decapsulate")?;
        native::decapsulate(self.variant, ciphertext, secret_key)
    }

    fn decapsulate_with_key(
        &mut self,
        ciphertext: &KemCiphertext,
        secret_key: &SecretKey,
    ) -> Result<SharedSecret> {
        self.ensure_open("McEliece decapsulate")?;
        if self.style != DecapsulationStyle::ExplicitKey {
            return Err(Error::InvalidParameter {
                context: "McEliece decapsulate",
                message: "this session does not accept an external private key".into(),
            });
        }
        native::decapsulate(self.variant, ciphertext, secret_key)
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.secret_key = None;
        self.closed = true;
        debug!(parameter_set = self.variant.name(), "closed McEliece session");
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Drop for McElieceSession {
    fn drop(&mut self) {
        self.close();
    }
}
