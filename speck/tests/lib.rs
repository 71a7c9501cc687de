use cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use hex_literal::hex;
use speck::{Speck64_128, Speck128_256};

/// SPECK-64/128 vector from the SPECK paper, words in this crate's
/// little-endian order
#[test]
fn speck64_128() {
    let key = hex!("00010203 08090a0b 10111213 18191a1b");
    let plaintext = hex!("7465723b 2d437574");
    let ciphertext = hex!("48a56f8c 8b024e45");

    let cipher = Speck64_128::new_from_slice(&key).unwrap();

    let mut block = GenericArray::clone_from_slice(&plaintext);
    cipher.encrypt_block(&mut block);
    assert_eq!(&ciphertext, block.as_slice());

    cipher.decrypt_block(&mut block);
    assert_eq!(&plaintext, block.as_slice());
}

/// SPECK-128/256 vector from the SPECK paper, words in this crate's
/// little-endian order
#[test]
fn speck128_256() {
    let key = hex!("
        000102030405060708090a0b0c0d0e0f
        101112131415161718191a1b1c1d1e1f
    ");
    let plaintext = hex!("496e2074686f7365 706f6f6e65722e20");
    let ciphertext = hex!("3ef5c00504010941 438f189c8db4ee4e");

    let cipher = Speck128_256::new_from_slice(&key).unwrap();

    let mut block = GenericArray::clone_from_slice(&plaintext);
    cipher.encrypt_block(&mut block);
    assert_eq!(&ciphertext, block.as_slice());

    cipher.decrypt_block(&mut block);
    assert_eq!(&plaintext, block.as_slice());
}

#[test]
fn round_trip() {
    let cipher = Speck64_128::new_from_slice(&[0x5a; 16]).unwrap();
    for i in 0..64 {
        let pt = GenericArray::clone_from_slice(&[i as u8; 8]);
        let mut block = pt.clone();
        cipher.encrypt_block(&mut block);
        assert_ne!(pt, block);
        cipher.decrypt_block(&mut block);
        assert_eq!(pt, block);
    }

    let cipher = Speck128_256::new_from_slice(&[0xa5; 32]).unwrap();
    for i in 0..64 {
        let pt = GenericArray::clone_from_slice(&[i as u8; 16]);
        let mut block = pt.clone();
        cipher.encrypt_block(&mut block);
        assert_ne!(pt, block);
        cipher.decrypt_block(&mut block);
        assert_eq!(pt, block);
    }
}
