//! BLAKE2b-256 code hashing for the validation code payload.
//!
//! The relay chain identifies registered validation code by the BLAKE2b hash
//! of the raw wasm bytes with a 32-byte output, so the injected chainspec
//! must carry the same digest the chain will compute on registration.

use std::fmt;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;

/// A 32-byte BLAKE2b digest of the validation code.
///
/// Displays as `0x` followed by 64 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeHash([u8; 32]);

impl fmt::Display for CodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Compute the BLAKE2b-256 hash of a validation code payload.
pub fn code_hash(payload: &[u8]) -> CodeHash {
    let mut hasher = Blake2b256::new();
    hasher.update(payload);
    CodeHash(hasher.finalize().into())
}
