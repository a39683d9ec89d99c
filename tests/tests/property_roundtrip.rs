//! Property-based tests for the cipher engine

use proptest::prelude::*;
use saltcrypt_symmetric::{Algorithm, Crypt, Error, Mode, Options, PaddingScheme, SaltHeader};
use saltcrypt_tests::{combinations, Combination};

/// Messages spanning several block boundaries
fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=80)
}

fn combination() -> impl Strategy<Value = Combination> {
    prop::sample::select(combinations())
}

/// Combinations that run without padding
fn unpadded_combination() -> impl Strategy<Value = Combination> {
    let unpadded: Vec<Combination> = combinations()
        .into_iter()
        .filter(|c| c.algorithm.is_stream() || !c.mode.requires_padding())
        .collect();
    prop::sample::select(unpadded)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn roundtrip_with_explicit_iv(combo in combination(), msg in message()) {
        let msg = combo.admissible(msg);
        let key = combo.key();
        let iv = combo.iv();
        let crypt = Crypt::new(combo.algorithm, &key, iv.as_deref(), combo.options()).unwrap();

        let ciphertext = crypt.encrypt(&msg).unwrap();
        prop_assert_eq!(crypt.decrypt(&ciphertext).unwrap(), msg);
    }

    #[test]
    fn roundtrip_with_salted_header(combo in combination(), msg in message()) {
        let msg = combo.admissible(msg);
        let key = combo.key();
        let crypt = Crypt::new(combo.algorithm, &key, None, combo.options()).unwrap();

        let ciphertext = crypt.encrypt(&msg).unwrap();
        if combo.algorithm.uses_salt_header(combo.mode) {
            prop_assert_eq!(&ciphertext[..8], b"salted__");
            prop_assert!(SaltHeader::detect(&ciphertext).is_some());
        }
        prop_assert_eq!(crypt.decrypt(&ciphertext).unwrap(), msg);
    }

    #[test]
    fn stream_modes_preserve_length(combo in unpadded_combination(), msg in message()) {
        let key = combo.key();
        let iv = combo.iv();
        let crypt = Crypt::new(combo.algorithm, &key, iv.as_deref(), combo.options()).unwrap();

        let overhead = if combo.mode == Mode::Gcm { 16 } else { 0 };
        prop_assert_eq!(crypt.encrypt(&msg).unwrap().len(), msg.len() + overhead);
    }

    #[test]
    fn salted_encryptions_differ(msg in message()) {
        let crypt = Crypt::new(Algorithm::Aes, &[7u8; 32], None, Options::default()).unwrap();
        let first = crypt.encrypt(&msg).unwrap();
        let second = crypt.encrypt(&msg).unwrap();

        prop_assert_ne!(&first[8..16], &second[8..16]);
        prop_assert_ne!(&first, &second);
        prop_assert_eq!(crypt.decrypt(&first).unwrap(), msg.clone());
        prop_assert_eq!(crypt.decrypt(&second).unwrap(), msg);
    }

    #[test]
    fn pkcs7_corruption_is_padding_error(
        msg in prop::collection::vec(any::<u8>(), 16..=64),
        bad_last in prop_oneof![Just(0u8), 17u8..=255],
    ) {
        let key = [0x11u8; 16];
        let iv = [0x22u8; 16];
        let crypt = Crypt::new(Algorithm::Aes, &key, Some(&iv[..]), Options::default()).unwrap();
        let mut ciphertext = crypt.encrypt(&msg).unwrap();

        // Flipping the penultimate block XORs the same delta into the
        // final plaintext block, so the last padding byte becomes bad_last
        let pad = (16 - msg.len() % 16) as u8;
        let idx = ciphertext.len() - 17;
        ciphertext[idx] ^= pad ^ bad_last;

        prop_assert!(
            matches!(crypt.decrypt(&ciphertext), Err(Error::Padding { .. })),
            "{:?}",
            crypt.decrypt(&ciphertext)
        );
    }

    #[test]
    fn gcm_corruption_is_authentication_error(
        msg in prop::collection::vec(any::<u8>(), 0..=48),
        idx in any::<prop::sample::Index>(),
        mask in 1u8..=255,
    ) {
        let crypt = Crypt::new(
            Algorithm::Aes,
            &[0x33u8; 32],
            Some(&[0x44u8; 12][..]),
            Options::default().with_mode(Mode::Gcm),
        )
        .unwrap();
        let mut ciphertext = crypt.encrypt(&msg).unwrap();
        let i = idx.index(ciphertext.len());
        ciphertext[i] ^= mask;

        let err = crypt.decrypt(&ciphertext).unwrap_err();
        prop_assert!(err.is_authentication(), "{:?}", err);
    }

    #[test]
    fn salted_gcm_corruption_is_authentication_error(
        msg in prop::collection::vec(any::<u8>(), 0..=48),
        idx in any::<prop::sample::Index>(),
        mask in 1u8..=255,
    ) {
        let crypt = Crypt::new(
            Algorithm::Aes,
            &[0x55u8; 32],
            None,
            Options::default().with_mode(Mode::Gcm),
        )
        .unwrap();
        let mut ciphertext = crypt.encrypt(&msg).unwrap();
        // Leave the header intact and damage the sealed body
        let i = 16 + idx.index(ciphertext.len() - 16);
        ciphertext[i] ^= mask;

        let err = crypt.decrypt(&ciphertext).unwrap_err();
        prop_assert!(err.is_authentication(), "{:?}", err);
    }

    #[test]
    fn padding_schemes_roundtrip(
        data in prop::collection::vec(any::<u8>(), 0..=64),
        block_size in 1usize..=32,
        scheme in prop::sample::select(vec![
            PaddingScheme::Pkcs7,
            PaddingScheme::Iso97971,
            PaddingScheme::AnsiX923,
            PaddingScheme::Iso10126,
        ]),
    ) {
        let padded = scheme.pad(&data, block_size).unwrap();
        prop_assert_eq!(padded.len() % block_size, 0);
        prop_assert!(padded.len() > data.len());
        // ISO/IEC 9797-1 zero-pads after the marker byte
        let max_overhead = match scheme {
            PaddingScheme::Iso97971 => block_size + 1,
            _ => block_size,
        };
        prop_assert!(padded.len() - data.len() <= max_overhead);
        prop_assert_eq!(scheme.unpad(&padded, block_size).unwrap(), data);
    }
}
