//! Property-based tests for derivation and the symmetric layer

use mchybrid_api::{DerivedKey, Iv, SharedSecret, SymmetricCapability};
use mchybrid_hybrid::{derive_key, open_payload, KeyDerivation, SealedPayload};
use mchybrid_symmetric::{pad, unpad, Aes128, Aes128Cbc, Cbc};
use proptest::prelude::*;

/// Generate data that's a multiple of 16 bytes (AES block size)
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 16..=256).prop_map(|mut v| {
        v.truncate(v.len() / 16 * 16);
        v
    })
}

fn derivation() -> impl Strategy<Value = KeyDerivation> {
    prop_oneof![
        Just(KeyDerivation::Sha256Truncate),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(KeyDerivation::hkdf),
    ]
}

proptest! {
    #[test]
    fn aes128_cbc_roundtrip(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        let iv = Iv::new(iv);
        let cbc = Cbc::new(Aes128::new(&DerivedKey::new(key)), &iv);
        let ciphertext = cbc.encrypt(&data).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());

        let plaintext = cbc.decrypt(&ciphertext).unwrap();
        prop_assert_eq!(&plaintext[..], &data[..]);
    }

    #[test]
    fn padded_message_roundtrip(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        message in prop::collection::vec(any::<u8>(), 0..300)
    ) {
        let cipher = Aes128Cbc::new();
        let key = DerivedKey::new(key);
        let iv = Iv::new(iv);

        let padded = pad(&message, cipher.block_size()).unwrap();
        prop_assert!(padded.len() > message.len());
        prop_assert_eq!(padded.len() % 16, 0);

        let ciphertext = cipher.encrypt(&key, &iv, &padded).unwrap();
        let decrypted = cipher.decrypt(&key, &iv, &ciphertext).unwrap();
        prop_assert_eq!(unpad(&decrypted, 16).unwrap(), &message[..]);

        let payload = SealedPayload::new(iv, ciphertext);
        prop_assert_eq!(&open_payload(&cipher, &key, &payload).unwrap()[..], &message[..]);
    }

    #[test]
    fn derivation_is_deterministic(
        secret in prop::collection::vec(any::<u8>(), 1..128),
        kdf in derivation()
    ) {
        let secret = SharedSecret::new(secret);
        let a = derive_key(&secret, &kdf).unwrap();
        let b = derive_key(&secret, &kdf).unwrap();
        prop_assert_eq!(a.len(), 16);
        prop_assert!(a == b);
    }

    #[test]
    fn distinct_secrets_give_distinct_keys(
        s1 in prop::collection::vec(any::<u8>(), 32),
        s2 in prop::collection::vec(any::<u8>(), 32),
        kdf in derivation()
    ) {
        prop_assume!(s1 != s2);
        let k1 = derive_key(&SharedSecret::new(s1), &kdf).unwrap();
        let k2 = derive_key(&SharedSecret::new(s2), &kdf).unwrap();
        prop_assert!(k1 != k2);
    }
}
