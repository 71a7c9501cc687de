//! Pure Rust implementation of the [SPECK][1] family of lightweight block
//! ciphers, in the two shapes used by the Maru hash: SPECK-64/128 (64-bit
//! block, 128-bit key, 27 rounds) and SPECK-128/256 (128-bit block, 256-bit
//! key, 34 rounds).
//!
//! Blocks and keys are sequences of little-endian words; the first word of a
//! block is the one rotated and added in each round. Round keys are expanded
//! once at initialization, which yields the same subkey sequence as the
//! on-the-fly schedule of the reference code.
//!
//! # Examples
//! ```
//! use speck::Speck64_128;
//! use speck::cipher::{
//!     generic_array::GenericArray,
//!     BlockEncrypt, BlockDecrypt, KeyInit,
//! };
//! use hex_literal::hex;
//!
//! // SPECK-64/128 test vector from the SPECK paper, re-expressed
//! // in this crate's little-endian word order
//! let key = hex!("00010203 08090a0b 10111213 18191a1b");
//! let plaintext = hex!("7465723b 2d437574");
//! let ciphertext = hex!("48a56f8c 8b024e45");
//!
//! let cipher = Speck64_128::new(GenericArray::from_slice(&key));
//!
//! let mut block = GenericArray::clone_from_slice(&plaintext);
//! cipher.encrypt_block(&mut block);
//! assert_eq!(&ciphertext, block.as_slice());
//!
//! cipher.decrypt_block(&mut block);
//! assert_eq!(&plaintext, block.as_slice());
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/Speck_(cipher)
#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use cipher;

use cipher::{
    consts::{U8, U16, U32},
    BlockCipher, KeyInit, KeySizeUser,
};
use core::{convert::TryInto, fmt};

const ROUNDS_64: usize = 27;
const ROUNDS_128: usize = 34;

/// Block over which SPECK-64/128 operates.
pub type Speck64Block = cipher::Block<Speck64_128>;
/// The SPECK-64/128 initialization key.
pub type Speck64Key = cipher::Key<Speck64_128>;
/// Block over which SPECK-128/256 operates.
pub type Speck128Block = cipher::Block<Speck128_256>;
/// The SPECK-128/256 initialization key.
pub type Speck128Key = cipher::Key<Speck128_256>;

/// SPECK block cipher with a 64-bit block and 128-bit key.
#[derive(Clone, Copy)]
pub struct Speck64_128 {
    keys: [u32; ROUNDS_64],
}

impl KeySizeUser for Speck64_128 {
    type KeySize = U16;
}

impl KeyInit for Speck64_128 {
    fn new(key: &Speck64Key) -> Self {
        let mut k = [0u32; 4];
        key.chunks_exact(4)
            .zip(k.iter_mut())
            .for_each(|(chunk, v)| *v = u32::from_le_bytes(chunk.try_into().unwrap()));
        let [mut k0, mut k1, mut k2, mut k3] = k;
        let mut keys = [0u32; ROUNDS_64];
        for (i, rk) in keys.iter_mut().enumerate() {
            *rk = k0;
            let t = k1.rotate_right(8).wrapping_add(k0) ^ i as u32;
            k0 = k0.rotate_left(3) ^ t;
            k1 = k2;
            k2 = k3;
            k3 = t;
        }
        Self { keys }
    }
}

impl BlockCipher for Speck64_128 {}

impl fmt::Debug for Speck64_128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Speck64_128 {{ ... }}")
    }
}

cipher::impl_simple_block_encdec!(
    Speck64_128, U8, cipher, block,
    encrypt: {
        let b = block.get_in();
        let mut x0 = u32::from_le_bytes(b[0..4].try_into().unwrap());
        let mut x1 = u32::from_le_bytes(b[4..8].try_into().unwrap());
        for &k in cipher.keys.iter() {
            x0 = x0.rotate_right(8).wrapping_add(x1) ^ k;
            x1 = x1.rotate_left(3) ^ x0;
        }
        let block = block.get_out();
        block[0..4].copy_from_slice(&x0.to_le_bytes());
        block[4..8].copy_from_slice(&x1.to_le_bytes());
    }
    decrypt: {
        let b = block.get_in();
        let mut x0 = u32::from_le_bytes(b[0..4].try_into().unwrap());
        let mut x1 = u32::from_le_bytes(b[4..8].try_into().unwrap());
        for &k in cipher.keys.iter().rev() {
            x1 = (x1 ^ x0).rotate_right(3);
            x0 = (x0 ^ k).wrapping_sub(x1).rotate_left(8);
        }
        let block = block.get_out();
        block[0..4].copy_from_slice(&x0.to_le_bytes());
        block[4..8].copy_from_slice(&x1.to_le_bytes());
    }
);

/// SPECK block cipher with a 128-bit block and 256-bit key.
#[derive(Clone, Copy)]
pub struct Speck128_256 {
    keys: [u64; ROUNDS_128],
}

impl KeySizeUser for Speck128_256 {
    type KeySize = U32;
}

impl KeyInit for Speck128_256 {
    fn new(key: &Speck128Key) -> Self {
        let mut k = [0u64; 4];
        key.chunks_exact(8)
            .zip(k.iter_mut())
            .for_each(|(chunk, v)| *v = u64::from_le_bytes(chunk.try_into().unwrap()));
        let [mut k0, mut k1, mut k2, mut k3] = k;
        let mut keys = [0u64; ROUNDS_128];
        for (i, rk) in keys.iter_mut().enumerate() {
            *rk = k0;
            let t = k1.rotate_right(8).wrapping_add(k0) ^ i as u64;
            k0 = k0.rotate_left(3) ^ t;
            k1 = k2;
            k2 = k3;
            k3 = t;
        }
        Self { keys }
    }
}

impl BlockCipher for Speck128_256 {}

impl fmt::Debug for Speck128_256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Speck128_256 {{ ... }}")
    }
}

cipher::impl_simple_block_encdec!(
    Speck128_256, U16, cipher, block,
    encrypt: {
        let b = block.get_in();
        let mut x0 = u64::from_le_bytes(b[0..8].try_into().unwrap());
        let mut x1 = u64::from_le_bytes(b[8..16].try_into().unwrap());
        for &k in cipher.keys.iter() {
            x0 = x0.rotate_right(8).wrapping_add(x1) ^ k;
            x1 = x1.rotate_left(3) ^ x0;
        }
        let block = block.get_out();
        block[0..8].copy_from_slice(&x0.to_le_bytes());
        block[8..16].copy_from_slice(&x1.to_le_bytes());
    }
    decrypt: {
        let b = block.get_in();
        let mut x0 = u64::from_le_bytes(b[0..8].try_into().unwrap());
        let mut x1 = u64::from_le_bytes(b[8..16].try_into().unwrap());
        for &k in cipher.keys.iter().rev() {
            x1 = (x1 ^ x0).rotate_right(3);
            x0 = (x0 ^ k).wrapping_sub(x1).rotate_left(8);
        }
        let block = block.get_out();
        block[0..8].copy_from_slice(&x0.to_le_bytes());
        block[8..16].copy_from_slice(&x1.to_le_bytes());
    }
);
