//! Pure Rust implementation of the [Chaskey][1] block function: the 12-round
//! Chaskey permutation with the 128-bit key XOR-ed into the state before and
//! after, giving a 128-bit block cipher shape.
//!
//! The rotation amounts are {5, 16, 8, 13, 7, 16} with each addition
//! performed before the paired rotation, i.e. the round used by the Chaskey
//! MAC reference code. State words are little-endian.
//!
//! # Examples
//! ```
//! use chaskey::Chaskey;
//! use chaskey::cipher::{
//!     generic_array::GenericArray,
//!     BlockEncrypt, BlockDecrypt, KeyInit,
//! };
//!
//! let cipher = Chaskey::new(GenericArray::from_slice(&[7u8; 16]));
//!
//! let plaintext = GenericArray::clone_from_slice(b"maru hash input!");
//! let mut block = plaintext.clone();
//! cipher.encrypt_block(&mut block);
//! assert_ne!(plaintext, block);
//!
//! cipher.decrypt_block(&mut block);
//! assert_eq!(plaintext, block);
//! ```
//!
//! [1]: https://mouha.be/chaskey/
#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use cipher;

use cipher::{
    consts::U16,
    BlockCipher, KeyInit, KeySizeUser,
};
use core::{convert::TryInto, fmt};

const ROUNDS: usize = 12;

/// Block over which Chaskey operates.
pub type Block = cipher::Block<Chaskey>;
/// The Chaskey initialization key.
pub type Key = cipher::Key<Chaskey>;

/// Chaskey block function with a 128-bit block and 128-bit key.
#[derive(Clone, Copy)]
pub struct Chaskey {
    key: [u32; 4],
}

#[inline(always)]
fn round(v: &mut [u32; 4]) {
    v[0] = v[0].wrapping_add(v[1]);
    v[1] = v[1].rotate_left(5) ^ v[0];
    v[0] = v[0].rotate_left(16);
    v[2] = v[2].wrapping_add(v[3]);
    v[3] = v[3].rotate_left(8) ^ v[2];
    v[0] = v[0].wrapping_add(v[3]);
    v[3] = v[3].rotate_left(13) ^ v[0];
    v[2] = v[2].wrapping_add(v[1]);
    v[1] = v[1].rotate_left(7) ^ v[2];
    v[2] = v[2].rotate_left(16);
}

#[inline(always)]
fn round_inv(v: &mut [u32; 4]) {
    v[2] = v[2].rotate_right(16);
    v[1] = (v[1] ^ v[2]).rotate_right(7);
    v[2] = v[2].wrapping_sub(v[1]);
    v[3] = (v[3] ^ v[0]).rotate_right(13);
    v[0] = v[0].wrapping_sub(v[3]);
    v[3] = (v[3] ^ v[2]).rotate_right(8);
    v[2] = v[2].wrapping_sub(v[3]);
    v[0] = v[0].rotate_right(16);
    v[1] = (v[1] ^ v[0]).rotate_right(5);
    v[0] = v[0].wrapping_sub(v[1]);
}

impl KeySizeUser for Chaskey {
    type KeySize = U16;
}

impl KeyInit for Chaskey {
    fn new(key: &Key) -> Self {
        let mut k = [0u32; 4];
        key.chunks_exact(4)
            .zip(k.iter_mut())
            .for_each(|(chunk, v)| *v = u32::from_le_bytes(chunk.try_into().unwrap()));
        Self { key: k }
    }
}

impl BlockCipher for Chaskey {}

impl fmt::Debug for Chaskey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Chaskey {{ ... }}")
    }
}

cipher::impl_simple_block_encdec!(
    Chaskey, U16, cipher, block,
    encrypt: {
        let b = block.get_in();
        let mut v = [0u32; 4];
        b.chunks_exact(4)
            .zip(v.iter_mut())
            .for_each(|(chunk, w)| *w = u32::from_le_bytes(chunk.try_into().unwrap()));
        for i in 0..4 {
            v[i] ^= cipher.key[i];
        }
        for _ in 0..ROUNDS {
            round(&mut v);
        }
        for i in 0..4 {
            v[i] ^= cipher.key[i];
        }
        let block = block.get_out();
        for (chunk, w) in block.chunks_exact_mut(4).zip(v.iter()) {
            chunk.copy_from_slice(&w.to_le_bytes());
        }
    }
    decrypt: {
        let b = block.get_in();
        let mut v = [0u32; 4];
        b.chunks_exact(4)
            .zip(v.iter_mut())
            .for_each(|(chunk, w)| *w = u32::from_le_bytes(chunk.try_into().unwrap()));
        for i in 0..4 {
            v[i] ^= cipher.key[i];
        }
        for _ in 0..ROUNDS {
            round_inv(&mut v);
        }
        for i in 0..4 {
            v[i] ^= cipher.key[i];
        }
        let block = block.get_out();
        for (chunk, w) in block.chunks_exact_mut(4).zip(v.iter()) {
            chunk.copy_from_slice(&w.to_le_bytes());
        }
    }
);
