use saltcrypt_algorithms::block::{Aes128, BlockPrimitive, Des};
use saltcrypt_algorithms::hash::{md5_hex, sha3_256};
use saltcrypt_algorithms::padding::{ansix923_pad, iso97971_pad, pkcs7_pad, pkcs7_unpad};
use saltcrypt_algorithms::{bytes_to_key, random_bytes, Ecb};
use saltcrypt_symmetric::{
    Aes, Algorithm, Blowfish, ChaCha20, Crypt, Des as DesFacade, Error, Mode, Options,
    PaddingScheme, Rc4, SaltHeader, TripleDes,
};
use saltcrypt_tests::{combinations, iv_for, key_for};

#[test]
fn test_padding_exactness() {
    let data = [1u8, 2, 3, 4, 5];

    let padded = pkcs7_pad(&data, 8).unwrap();
    assert_eq!(&padded[5..], &[3, 3, 3]);

    let full: Vec<u8> = (1..=8).collect();
    let padded = pkcs7_pad(&full, 8).unwrap();
    assert_eq!(padded.len(), 16);
    assert_eq!(&padded[8..], &[8u8; 8]);

    assert_eq!(&ansix923_pad(&data, 8).unwrap()[5..], &[0, 0, 3]);
    assert_eq!(&iso97971_pad(&data, 8).unwrap()[5..], &[128, 0, 0]);
}

#[test]
fn test_pkcs7_out_of_range_byte() {
    let mut block = pkcs7_pad(&[1, 2, 3, 4, 5], 8).unwrap();
    for bad in [0u8, 9, 200] {
        block[7] = bad;
        assert!(pkcs7_unpad(&block, 8).is_err(), "{bad}");
    }
}

#[test]
fn test_key_normalization() {
    let long: Vec<u8> = (0u8..40).collect();
    let crypt = Crypt::new(Algorithm::Aes, &long, Some(&[0u8; 16][..]), Options::default()).unwrap();
    assert_eq!(crypt.key_len(), 32);

    // Same result as the first 32 bytes on their own
    let truncated = Crypt::new(
        Algorithm::Aes,
        &long[..32],
        Some(&[0u8; 16][..]),
        Options::default(),
    )
    .unwrap();
    let msg = b"normalised key";
    assert_eq!(crypt.encrypt(msg).unwrap(), truncated.encrypt(msg).unwrap());

    assert!(matches!(
        Crypt::new(Algorithm::Aes, &[0u8; 10], None, Options::default()),
        Err(Error::KeyLength { actual: 10, .. })
    ));
}

#[test]
fn test_gcm_only_for_aes() {
    for algorithm in [Algorithm::Des, Algorithm::TripleDes, Algorithm::Blowfish] {
        let key = key_for(algorithm);
        let err = Crypt::new(algorithm, &key, None, Options::default().with_mode(Mode::Gcm))
            .unwrap_err();
        assert!(
            matches!(err, Error::UnsupportedCombination { mode: "GCM", .. }),
            "{algorithm}: {err}"
        );
    }
    for algorithm in [Algorithm::ChaCha20, Algorithm::Rc4] {
        let key = key_for(algorithm);
        assert!(Crypt::new(algorithm, &key, None, Options::default().with_mode(Mode::Gcm)).is_err());
    }
    assert!(Crypt::new(
        Algorithm::Aes,
        &key_for(Algorithm::Aes),
        None,
        Options::default().with_mode(Mode::Gcm)
    )
    .is_ok());
}

#[test]
fn test_unsupported_combination_reported_before_nonce() {
    // A bad nonce would also fail, but the combination is checked first
    let err = TripleDes::new(&[1u8; 24], Some(&[0u8; 3][..]), Options::default().with_mode(Mode::Gcm))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedCombination { .. }));
}

#[test]
fn test_nonce_lengths() {
    let aes_key = key_for(Algorithm::Aes);
    let gcm = Options::default().with_mode(Mode::Gcm);
    assert!(Aes::new(&aes_key, Some(&[0u8; 12][..]), gcm).is_ok());
    assert!(matches!(
        Aes::new(&aes_key, Some(&[0u8; 16][..]), gcm),
        Err(Error::NonceLength { expected: 12, actual: 16, .. })
    ));
    assert!(matches!(
        DesFacade::new(b"8bytekey", Some(&[0u8; 16][..]), Options::default()),
        Err(Error::NonceLength { expected: 8, .. })
    ));

    // ECB ignores whatever IV is supplied
    let ecb = Options::default().with_mode(Mode::Ecb);
    assert!(Aes::new(&aes_key, Some(&[0u8; 3][..]), ecb).is_ok());

    let chacha_key = key_for(Algorithm::ChaCha20);
    assert!(matches!(
        ChaCha20::new(&chacha_key, Some(&[0u8; 16][..])),
        Err(Error::NonceLength { expected: 24, actual: 16, .. })
    ));
}

#[test]
fn test_salt_header_format() {
    let crypt = Aes::new(&key_for(Algorithm::Aes), None, Options::default()).unwrap();
    let ct = crypt.encrypt(b"header check").unwrap();
    let header = SaltHeader::detect(&ct).unwrap();
    assert_eq!(&ct[..8], b"salted__");
    assert_eq!(&ct[8..16], header.salt());
    assert_eq!(header.to_bytes(), ct[..16]);
}

#[test]
fn test_salted_sizes_per_algorithm() {
    let msg = [0x61u8; 20];
    let cases = [
        (Algorithm::Aes, Mode::Cbc, 16 + 32),
        (Algorithm::Aes, Mode::Ctr, 16 + 20),
        (Algorithm::Aes, Mode::Gcm, 16 + 20 + 16),
        (Algorithm::Des, Mode::Cbc, 16 + 24),
        (Algorithm::TripleDes, Mode::Ofb, 16 + 20),
        (Algorithm::Blowfish, Mode::Cfb, 16 + 20),
        (Algorithm::ChaCha20, Mode::Cbc, 16 + 20),
        (Algorithm::Rc4, Mode::Cbc, 20),
        (Algorithm::Aes, Mode::Ecb, 32),
    ];
    for (algorithm, mode, expected) in cases {
        let crypt = Crypt::new(
            algorithm,
            &key_for(algorithm),
            None,
            Options::default().with_mode(mode),
        )
        .unwrap();
        let ct = crypt.encrypt(&msg).unwrap();
        assert_eq!(ct.len(), expected, "{algorithm} {mode}");
        assert_eq!(crypt.decrypt(&ct).unwrap(), msg, "{algorithm} {mode}");
    }
}

#[test]
fn test_every_combination_round_trips_across_block_boundaries() {
    for combo in combinations() {
        let key = combo.key();
        let iv = combo.iv();
        let crypt = Crypt::new(combo.algorithm, &key, iv.as_deref(), combo.options()).unwrap();
        for len in [0usize, 1, 7, 8, 9, 15, 16, 17, 31, 32, 33, 64] {
            let msg = combo.admissible((1..=len as u8).collect());
            let ct = crypt.encrypt(&msg).unwrap();
            assert_eq!(crypt.decrypt(&ct).unwrap(), msg, "{combo:?} len {len}");
        }
    }
}

#[test]
fn test_contexts_share_across_threads() {
    let crypt = std::sync::Arc::new(
        Crypt::new(Algorithm::Aes, &key_for(Algorithm::Aes), None, Options::default()).unwrap(),
    );
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let crypt = crypt.clone();
            std::thread::spawn(move || {
                let msg = vec![i; 100];
                let ct = crypt.encrypt(&msg).unwrap();
                crypt.decrypt(&ct).unwrap() == msg
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_facades() {
    let ct = Blowfish::encrypt(b"blowfish", b"k").unwrap();
    assert_eq!(Blowfish::decrypt(&ct, b"k").unwrap(), b"blowfish");

    let ct = Rc4::encrypt(b"rc4", b"key").unwrap();
    assert_eq!(ct.len(), 3);
    assert_eq!(Rc4::decrypt(&ct, b"key").unwrap(), b"rc4");

    let ct = ChaCha20::encrypt(b"chacha", &[3u8; 40], None).unwrap();
    assert_eq!(ChaCha20::decrypt(&ct, &[3u8; 32], None).unwrap(), b"chacha");
}

#[test]
fn test_zero_padding_is_lossy() {
    let opts = Options::new(Mode::Cbc, PaddingScheme::ZeroPadding);
    let iv = iv_for(Algorithm::Des, Mode::Cbc);
    let crypt = Crypt::new(Algorithm::Des, b"8bytekey", iv.as_deref(), opts).unwrap();
    let ct = crypt.encrypt(b"ends in zero\0\0").unwrap();
    assert_eq!(crypt.decrypt(&ct).unwrap(), b"ends in zero");
}

#[test]
fn test_tag_parsing() {
    assert_eq!("aes".parse::<Algorithm>().unwrap(), Algorithm::Aes);
    assert_eq!("des3".parse::<Algorithm>().unwrap(), Algorithm::TripleDes);
    assert_eq!("gcm".parse::<Mode>().unwrap(), Mode::Gcm);
    assert_eq!("pkcs7".parse::<PaddingScheme>().unwrap(), PaddingScheme::Pkcs7);
    assert!(matches!("xts".parse::<Mode>(), Err(Error::UnknownMode(_))));
    assert!(matches!(Algorithm::try_from(6u8), Err(Error::UnknownAlgorithm(_))));
    assert!(matches!(PaddingScheme::try_from(9u8), Err(Error::UnknownPadding(_))));
}

#[test]
#[should_panic(expected = "not a multiple")]
fn test_ecb_misaligned_blocks_panic() {
    let ecb = Ecb::new(Aes128::from_key(&[0u8; 16]).unwrap());
    let mut out = [0u8; 20];
    ecb.encrypt_blocks(&mut out, &[0u8; 20]);
}

#[test]
fn test_ecb_blocks_are_independent() {
    let ecb = Ecb::new(Des::from_key(b"8bytekey").unwrap());
    let src = [0x42u8; 16];
    let mut dst = [0u8; 16];
    ecb.encrypt_blocks(&mut dst, &src);
    assert_eq!(dst[..8], dst[8..]);

    let mut back = [0u8; 16];
    ecb.decrypt_blocks(&mut back, &dst);
    assert_eq!(back, src);
}

#[test]
fn test_supporting_primitives() {
    let material = bytes_to_key(b"password", &[1, 2, 3, 4, 5, 6, 7, 8], 32, 48).unwrap();
    assert_eq!(
        hex::encode(&*material.key),
        "e7b0971e52ca5cc8d0539fb3412f6316f7ba2e6ee293d9f3457b99436b51ce02"
    );
    assert_eq!(hex::encode(&*material.iv), "8d450e2ed75a84a923d4eac9fe49226b");

    assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(
        hex::encode(sha3_256(b"")),
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
    );

    let (bytes, source) = random_bytes(32);
    assert_eq!(bytes.len(), 32);
    assert!(source.is_cryptographic());
}
