use chaskey::Chaskey;
use cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use hex_literal::hex;

/// The permutation has no round constants, so the zero state is a fixed
/// point and the all-zero key adds no whitening.
#[test]
fn zero_fixed_point() {
    let cipher = Chaskey::new_from_slice(&[0u8; 16]).unwrap();
    let mut block = GenericArray::clone_from_slice(&[0u8; 16]);
    cipher.encrypt_block(&mut block);
    assert_eq!(block.as_slice(), &[0u8; 16]);
}

#[test]
fn round_trip() {
    let key = hex!("000102030405060708090a0b0c0d0e0f");
    let cipher = Chaskey::new_from_slice(&key).unwrap();
    for i in 0..64 {
        let pt = GenericArray::clone_from_slice(&[i as u8; 16]);
        let mut block = pt.clone();
        cipher.encrypt_block(&mut block);
        assert_ne!(pt, block);
        cipher.decrypt_block(&mut block);
        assert_eq!(pt, block);
    }
}

/// Different keys must whiten the same plaintext differently.
#[test]
fn key_separation() {
    let pt = GenericArray::clone_from_slice(b"0123456789abcdef");

    let mut a = pt.clone();
    Chaskey::new_from_slice(&[1u8; 16])
        .unwrap()
        .encrypt_block(&mut a);

    let mut b = pt.clone();
    Chaskey::new_from_slice(&[2u8; 16])
        .unwrap()
        .encrypt_block(&mut b);

    assert_ne!(a, b);
}
