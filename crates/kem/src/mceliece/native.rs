//! Calls into the native Classic McEliece implementation.
//!
//! The native types are fixed-size arrays held on the stack; they are copied
//! into heap buffers immediately. Key generation for the larger parameter
//! sets needs several megabytes of stack, more than a default spawned thread
//! or test-harness thread has. Every native call therefore runs on a scoped
//! worker thread whose stack is sized from the parameter set, and only the
//! heap-backed results come back to the caller.

use std::thread;

use super::McElieceVariant;
use mchybrid_api::{Error, KemCiphertext, PublicKey, Result, SecretKey, SharedSecret};
use tracing::warn;

/// Stack reserved for the native code itself
const NATIVE_STACK_BASE: usize = 8 * 1024 * 1024;

/// Headroom per public-key byte for the key arrays and their copies
const NATIVE_STACK_PER_KEY_BYTE: usize = 16;

/// Worker stack size for `variant`
pub(crate) fn stack_size(variant: McElieceVariant) -> usize {
    NATIVE_STACK_BASE + NATIVE_STACK_PER_KEY_BYTE * variant.params().public_key_size
}

/// Run `f` on a worker thread with a stack large enough for `variant`
fn on_native_stack<T, F>(variant: McElieceVariant, context: &'static str, f: F) -> Result<T>
where
    F: FnOnce() -> T + Send,
    T: Send,
{
    thread::scope(|scope| {
        let handle = thread::Builder::new()
            .name(format!("{}-native", variant.name()))
            .stack_size(stack_size(variant))
            .spawn_scoped(scope, f)
            .map_err(|err| {
                warn!(parameter_set = variant.name(), %err, "could not spawn native worker");
                Error::kem(context, "could not spawn native worker thread")
            })?;
        handle.join().map_err(|_| {
            warn!(parameter_set = variant.name(), "native worker panicked");
            Error::kem(context, "native worker thread panicked")
        })
    })
}

macro_rules! native_ops {
    ($($variant:ident => $module:ident),* $(,)?) => {
        $(
            mod $module {
                use mchybrid_api::error::{validate, ResultExt};
                use mchybrid_api::{Error, KemCiphertext, PublicKey, Result, SecretKey, SharedSecret};
                use pqcrypto_classicmceliece::$module as m;
                use pqcrypto_traits::kem::{
                    Ciphertext as _, PublicKey as _, SecretKey as _, SharedSecret as _,
                };

                pub(super) fn sizes() -> (usize, usize, usize, usize) {
                    (
                        m::public_key_bytes(),
                        m::secret_key_bytes(),
                        m::ciphertext_bytes(),
                        m::shared_secret_bytes(),
                    )
                }

                pub(super) fn keypair() -> (PublicKey, SecretKey) {
                    let (pk, sk) = m::keypair();
                    (
                        PublicKey::from_slice(pk.as_bytes()),
                        SecretKey::from_slice(sk.as_bytes()),
                    )
                }

                pub(super) fn encapsulate(
                    public_key: &PublicKey,
                ) -> Result<(KemCiphertext, SharedSecret)> {
                    validate::length("McEliece public key", public_key.len(), m::public_key_bytes())?;
                    let pk = m::PublicKey::from_bytes(public_key.as_bytes())
                        .wrap_err(|| Error::kem("McEliece public key", "rejected by backend"))?;
                    let (ss, ct) = m::encapsulate(&pk);
                    Ok((
                        KemCiphertext::from_slice(ct.as_bytes()),
                        SharedSecret::from_slice(ss.as_bytes()),
                    ))
                }

                pub(super) fn decapsulate(
                    ciphertext: &KemCiphertext,
                    secret_key: &SecretKey,
                ) -> Result<SharedSecret> {
                    validate::length("McEliece ciphertext", ciphertext.len(), m::ciphertext_bytes())?;
                    validate::length("McEliece secret key", secret_key.len(), m::secret_key_bytes())?;
                    let ct = m::Ciphertext::from_bytes(ciphertext.as_bytes())
                        .wrap_err(|| Error::kem("McEliece ciphertext", "rejected by backend"))?;
                    let sk = m::SecretKey::from_bytes(secret_key.as_ref())
                        .wrap_err(|| Error::kem("McEliece secret key", "rejected by backend"))?;
                    let ss = m::decapsulate(&ct, &sk);
                    Ok(SharedSecret::from_slice(ss.as_bytes()))
                }
            }
        )*

        /// Byte sizes reported by the native implementation:
        /// `(public key, secret key, ciphertext, shared secret)`
        pub(crate) fn sizes(variant: McElieceVariant) -> (usize, usize, usize, usize) {
            match variant {
                $(McElieceVariant::$variant => $module::sizes(),)*
            }
        }

        pub(crate) fn keypair(variant: McElieceVariant) -> Result<(PublicKey, SecretKey)> {
            on_native_stack(variant, "McEliece keypair", || match variant {
                $(McElieceVariant::$variant => $module::keypair(),)*
            })
        }

        pub(crate) fn encapsulate(
            variant: McElieceVariant,
            public_key: &PublicKey,
        ) -> Result<(KemCiphertext, SharedSecret)> {
            on_native_stack(variant, "McEliece encapsulate", || match variant {
                $(McElieceVariant::$variant => $module::encapsulate(public_key),)*
            })?
        }

        pub(crate) fn decapsulate(
            variant: McElieceVariant,
            ciphertext: &KemCiphertext,
            secret_key: &SecretKey,
        ) -> Result<SharedSecret> {
            on_native_stack(variant, "McEliece decapsulate", || match variant {
                $(McElieceVariant::$variant => $module::decapsulate(ciphertext, secret_key),)*
            })?
        }
    };
}

native_ops! {
    Mceliece348864 => mceliece348864,
    Mceliece348864f => mceliece348864f,
    Mceliece460896 => mceliece460896,
    Mceliece460896f => mceliece460896f,
    Mceliece6688128 => mceliece6688128,
    Mceliece6688128f => mceliece6688128f,
    Mceliece6960119 => mceliece6960119,
    Mceliece6960119f => mceliece6960119f,
    Mceliece8192128 => mceliece8192128,
    Mceliece8192128f => mceliece8192128f,
}
