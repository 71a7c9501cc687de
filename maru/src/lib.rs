//! The Maru family of fast, non-cryptographic hashes for short ASCII
//! strings, built as [Davies-Meyer][1] constructions over lightweight block
//! ciphers. Each message block keys the cipher, the chaining value is the
//! plaintext, and the ciphertext is XOR-ed back into the chaining value.
//!
//! Three constructions are exposed:
//!
//! - [`maru`]: iterated hash with a 64-bit chaining value, compressed with
//!   SPECK-64/128 (16-byte message blocks).
//! - [`maru2`]: iterated hash with a 128-bit chaining value, compressed with
//!   SPECK-128/256 (32-byte message blocks) or, via [`maru2_with`], with
//!   Chaskey (16-byte message blocks).
//! - [`maru_key`]: a fixed two-block keyed construction that derives a
//!   128-bit key from a 32-byte padded message and encrypts the secret
//!   under it.
//!
//! Inputs are NUL-terminated in spirit: hashing stops at the first zero
//! byte, the end of the slice, or the [`MAX_STR`] cap, whichever comes
//! first. Everything is one-shot and stack-local; there is no streaming
//! interface.
//!
//! These hashes personalize an import lookup table, nothing more. They are
//! not collision resistant against an adversary who controls the seed.
//!
//! # Examples
//! ```
//! // IV is hex(trunc(frac(sqrt(137))*(2^32)))
//! assert_eq!(maru::maru(b"CreateProcessA", 0xB467369E), 0xdfa1de9f2ba8bb90);
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/One-way_compression_function#Davies%E2%80%93Meyer
#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use cipher;

pub use chaskey::Chaskey;
pub use speck::{Speck64_128, Speck128_256};

use cipher::{
    consts::{U8, U16},
    Block, BlockEncrypt, BlockSizeUser, Key, KeyInit, KeySizeUser,
};
use core::convert::TryInto;

/// Maximum number of input bytes hashed by [`maru`] and [`maru2`].
pub const MAX_STR: usize = 64;

/// Maximum number of input bytes consumed by [`maru_key`].
pub const KEYED_MAX_STR: usize = 32;

/// First half of the wide initial state.
/// hex(trunc(frac(cbrt(1/139))*(2^64))), byte-swapped
pub const INIT_B: u64 = 0x4284476e587d6b31;

/// Second half of the wide initial state.
/// hex(or(shr(hex(trunc(cos(1/137)*(2^64)));8);shl(0x80;56))), byte-swapped
pub const INIT_D: u64 = 0xda2825fd0f41fe80;

/// One encryption of a 64-bit chaining value under a 16-byte message block.
fn encrypt64<C>(m: &Key<C>, h: u64) -> u64
where
    C: BlockEncrypt + KeyInit + BlockSizeUser<BlockSize = U8> + KeySizeUser<KeySize = U16>,
{
    let cipher = C::new(m);
    let mut block = Block::<C>::clone_from_slice(&h.to_le_bytes());
    cipher.encrypt_block(&mut block);
    u64::from_le_bytes(block.as_slice().try_into().unwrap())
}

/// One encryption of a 128-bit chaining value under a native-key-width
/// message block.
fn encrypt128<E>(m: &Key<E>, h: &[u64; 2]) -> [u64; 2]
where
    E: BlockEncrypt + KeyInit + BlockSizeUser<BlockSize = U16>,
{
    let cipher = E::new(m);
    let mut block = Block::<E>::default();
    block[..8].copy_from_slice(&h[0].to_le_bytes());
    block[8..].copy_from_slice(&h[1].to_le_bytes());
    cipher.encrypt_block(&mut block);
    [
        u64::from_le_bytes(block[..8].try_into().unwrap()),
        u64::from_le_bytes(block[8..].try_into().unwrap()),
    ]
}

/// Iterated Maru hash with a 64-bit chaining value, generic over the
/// compression cipher.
///
/// The chaining value starts as `iv` and each full message block keys one
/// cipher call with feed-forward. Padding is a `0x80` terminator, zero
/// fill, and the input bit length as a little-endian 32-bit word in the
/// last word of the final block; when fewer than four free bytes remain
/// after the terminator, the block is flushed and the length goes into a
/// fresh all-zero block.
pub fn maru_with<C>(api: &[u8], iv: u64) -> u64
where
    C: BlockEncrypt + KeyInit + BlockSizeUser<BlockSize = U8> + KeySizeUser<KeySize = U16>,
{
    let blk_len = C::key_size();
    let mut h = iv;
    let mut m = Key::<C>::default();
    let mut idx = 0;
    let mut len = 0;

    for &b in api {
        if b == 0 || len == MAX_STR {
            break;
        }
        m[idx] = b;
        idx += 1;
        len += 1;
        if idx == blk_len {
            h ^= encrypt64::<C>(&m, h);
            m = Key::<C>::default();
            idx = 0;
        }
    }

    m[idx] = 0x80;
    // no room left for the length field?
    if idx >= blk_len - 4 {
        h ^= encrypt64::<C>(&m, h);
        m = Key::<C>::default();
    }
    let bits = (len as u32) * 8;
    m[blk_len - 4..].copy_from_slice(&bits.to_le_bytes());
    h ^ encrypt64::<C>(&m, h)
}

/// Narrow Maru hash: 64-bit digest, SPECK-64/128 compression.
pub fn maru(api: &[u8], iv: u64) -> u64 {
    maru_with::<Speck64_128>(api, iv)
}

/// Iterated Maru hash with a 128-bit chaining value, generic over the
/// compression cipher. Message blocks are the cipher's native key width:
/// 32 bytes for [`Speck128_256`], 16 bytes for [`Chaskey`].
///
/// The chaining value starts as `[INIT_B ^ seed, INIT_D ^ seed]`; padding
/// follows the same scheme as [`maru_with`], with the bit length still a
/// 32-bit word, except that the overflow flush triggers one byte earlier:
/// a terminator in the last five bytes of a block pushes the length into a
/// fresh all-zero block.
pub fn maru2_with<E>(api: &[u8], seed: u64) -> [u8; 16]
where
    E: BlockEncrypt + KeyInit + BlockSizeUser<BlockSize = U16>,
{
    let blk_len = E::key_size();
    let mut h = [INIT_B ^ seed, INIT_D ^ seed];
    let mut m = Key::<E>::default();
    let mut idx = 0;
    let mut len = 0;

    for &b in api {
        if b == 0 || len == MAX_STR {
            break;
        }
        m[idx] = b;
        idx += 1;
        len += 1;
        if idx == blk_len {
            let c = encrypt128::<E>(&m, &h);
            h[0] ^= c[0];
            h[1] ^= c[1];
            m = Key::<E>::default();
            idx = 0;
        }
    }

    m[idx] = 0x80;
    // the wide scheme reserves five trailing bytes, one more than maru
    if idx >= blk_len - 5 {
        let c = encrypt128::<E>(&m, &h);
        h[0] ^= c[0];
        h[1] ^= c[1];
        m = Key::<E>::default();
    }
    let bits = (len as u32) * 8;
    m[blk_len - 4..].copy_from_slice(&bits.to_le_bytes());
    let c = encrypt128::<E>(&m, &h);
    h[0] ^= c[0];
    h[1] ^= c[1];

    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&h[0].to_le_bytes());
    out[8..].copy_from_slice(&h[1].to_le_bytes());
    out
}

/// Wide Maru hash: 128-bit digest, SPECK-128/256 compression.
pub fn maru2(api: &[u8], seed: u64) -> [u8; 16] {
    maru2_with::<Speck128_256>(api, seed)
}

/// Keyed Maru: a fixed two-block construction, generic over the cipher.
///
/// The message is padded into a single 32-byte buffer: `0x80` OR-ed into
/// the last byte and the bit length XOR-ed into the third 32-bit word.
/// Each 16-byte half keys one encryption of the secret, the two outputs
/// are concatenated into a derived key, and the digest is the secret
/// encrypted under that key. Input beyond [`KEYED_MAX_STR`] bytes is
/// ignored.
pub fn maru_key_with<C>(api: &[u8], key: &[u8; 8]) -> u64
where
    C: BlockEncrypt + KeyInit + BlockSizeUser<BlockSize = U8> + KeySizeUser<KeySize = U16>,
{
    let mut m = [0u8; 32];
    let mut len = 0;
    for &b in api {
        if b == 0 || len == KEYED_MAX_STR {
            break;
        }
        m[len] = b;
        len += 1;
    }
    m[31] |= 0x80;
    let bits = u32::from_le_bytes(m[8..12].try_into().unwrap()) ^ ((len as u32) * 8);
    m[8..12].copy_from_slice(&bits.to_le_bytes());

    let h = u64::from_le_bytes(*key);
    let k0 = encrypt64::<C>(Key::<C>::from_slice(&m[..16]), h);
    let k1 = encrypt64::<C>(Key::<C>::from_slice(&m[16..]), h);

    let mut k = Key::<C>::default();
    k[..8].copy_from_slice(&k0.to_le_bytes());
    k[8..].copy_from_slice(&k1.to_le_bytes());
    encrypt64::<C>(&k, h)
}

/// Keyed Maru over SPECK-64/128.
pub fn maru_key(api: &[u8], key: &[u8; 8]) -> u64 {
    maru_key_with::<Speck64_128>(api, key)
}
