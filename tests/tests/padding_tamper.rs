//! Tampering with a sealed payload is detected by the padding check

use mchybrid_api::{Ciphertext, DerivedKey, Iv, SymmetricCapability};
use mchybrid_hybrid::{open_payload, SealedPayload};
use mchybrid_symmetric::{pad, Aes128Cbc};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn seal(cipher: &Aes128Cbc, key: &DerivedKey, iv: Iv, message: &[u8]) -> SealedPayload {
    let padded = pad(message, cipher.block_size()).unwrap();
    SealedPayload::new(iv, cipher.encrypt(key, &iv, &padded).unwrap())
}

#[test]
fn test_flipping_last_ciphertext_byte_is_not_silent() {
    let cipher = Aes128Cbc::new();
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    let mut padding_errors = 0;
    let trials = 64;

    for _ in 0..trials {
        let mut key = [0u8; 16];
        rng.fill_bytes(&mut key);
        let key = DerivedKey::new(key);
        let payload = seal(&cipher, &key, Iv::random(&mut rng), b"Hello");

        let mut bytes = payload.ciphertext.clone().into_bytes();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        let tampered = SealedPayload::new(payload.iv, Ciphertext::new(bytes));

        match open_payload(&cipher, &key, &tampered) {
            Err(err) => {
                assert!(err.is_padding(), "{:?}", err);
                padding_errors += 1;
            }
            // The garbled final block can still end in valid padding
            // (roughly 1 in 256); it must never reproduce the message
            Ok(recovered) => assert_ne!(&recovered[..], b"Hello"),
        }
    }

    assert!(padding_errors >= trials - 4, "{} of {}", padding_errors, trials);
}

#[test]
fn test_truncated_ciphertext_rejected() {
    let cipher = Aes128Cbc::new();
    let key = DerivedKey::new([7u8; 16]);
    let payload = seal(&cipher, &key, Iv::zero(), b"a longer message over two blocks");

    let mut bytes = payload.ciphertext.clone().into_bytes();
    bytes.pop();
    let truncated = SealedPayload::new(payload.iv, Ciphertext::new(bytes));
    assert!(open_payload(&cipher, &key, &truncated).is_err());
}
