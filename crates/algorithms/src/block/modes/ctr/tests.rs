use super::*;
use crate::block::{Aes128, Des};

// NIST SP 800-38A F.5.1
const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const COUNTER: &str = "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff";
const PT: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51";
const CT: &str = "874d6191b620e3261bef6864990db6ce9806f66b7970fdff8617187bb9fffdff";

fn aes_ctr() -> Ctr<Aes128> {
    let key = hex::decode(KEY).unwrap();
    let counter = hex::decode(COUNTER).unwrap();
    Ctr::new(Aes128::from_key(&key).unwrap(), &counter).unwrap()
}

#[test]
fn test_aes128_ctr_vector() {
    let ctr = aes_ctr();
    let pt = hex::decode(PT).unwrap();
    let ct = ctr.encrypt(&pt).unwrap();
    assert_eq!(hex::encode(&ct), CT);
    assert_eq!(ctr.decrypt(&ct).unwrap(), pt);
}

#[test]
fn test_partial_block_is_prefix_of_full_keystream() {
    let ctr = aes_ctr();
    let pt = hex::decode(PT).unwrap();
    let ct = ctr.encrypt(&pt[..21]).unwrap();
    assert_eq!(ct.len(), 21);
    assert_eq!(hex::encode(&ct), &CT[..42]);
}

#[test]
fn test_counter_length() {
    let key = hex::decode(KEY).unwrap();
    assert!(Ctr::new(Aes128::from_key(&key).unwrap(), &[0u8; 12]).is_err());
    assert!(Ctr::new(Des::from_key(&[1u8; 8]).unwrap(), &[0u8; 8]).is_ok());
}

#[test]
fn test_des_ctr_round_trip() {
    let ctr = Ctr::new(Des::from_key(b"8bytekey").unwrap(), &[0u8; 8]).unwrap();
    let pt = b"counter mode over a 64-bit block";
    let ct = ctr.encrypt(pt).unwrap();
    assert_eq!(ct.len(), pt.len());
    assert_eq!(ctr.decrypt(&ct).unwrap(), pt);
}
