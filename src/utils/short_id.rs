//! Short URL-safe identifiers.
//!
//! Each identifier character carries 6 bits, so a key of `n` characters needs
//! `ceil(6n / 8)` random bytes. The bytes are encoded with the URL-safe base64
//! alphabet (`-` and `_` instead of `+` and `/`) and cut to exactly `n` chars.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;

use crate::domain::ports::IdGenerator;

/// 12 characters carry 72 bits of entropy.
pub const DEFAULT_ID_LENGTH: usize = 12;

/// Generate a key of `length` characters from the thread-local RNG.
pub fn generate_short_key(length: usize) -> String {
    generate_short_key_with(&mut rand::thread_rng(), length)
}

/// Generate a key of `length` characters from an explicit randomness source.
pub fn generate_short_key_with<R: RngCore + ?Sized>(rng: &mut R, length: usize) -> String {
    let byte_count = (6 * length).div_ceil(8);
    let mut buffer = vec![0u8; byte_count];
    rng.fill_bytes(&mut buffer);

    let mut key = URL_SAFE_NO_PAD.encode(&buffer);
    key.truncate(length);
    key
}

/// [`IdGenerator`] backed by the thread-local RNG.
///
/// Holds no state besides the key length, so it can be shared freely between tasks.
#[derive(Debug, Clone, Copy)]
pub struct ShortIdGenerator {
    length: usize,
}

impl ShortIdGenerator {
    pub const fn new(length: usize) -> Self {
        Self { length }
    }

    pub const fn length(&self) -> usize {
        self.length
    }
}

impl Default for ShortIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for ShortIdGenerator {
    fn generate(&self) -> String {
        generate_short_key(self.length)
    }
}
