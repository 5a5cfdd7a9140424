//! Random hexadecimal tokens in the widths the profile columns expect.

use rand_core::{OsRng, RngCore};

/// Bytes behind a 32-character activation token.
pub const ACTIVATION_TOKEN_BYTES: usize = 16;

/// Bytes behind a 64-character password salt.
pub const SALT_BYTES: usize = 32;

/// `bytes` random bytes from the OS RNG, lowercase hex encoded.
pub fn random_hex(bytes: usize) -> String {
  let mut buf = vec![0u8; bytes];
  OsRng.fill_bytes(&mut buf);
  hex::encode(buf)
}
