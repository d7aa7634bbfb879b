//! # Key Derivation with PBKDF2-HMAC-SHA256
//!
//! Turns a password and a per-container salt into the AES-256 key.
//!
//! ## Parameters
//!
//! - **PRF**: HMAC-SHA256
//! - **Iterations**: [`PBKDF2_ITERATIONS`] (310 000), fixed for format version 1
//! - **Salt**: [`SALT_SIZE`] bytes, fresh for every encryption
//! - **Output Length**: [`KEY_SIZE`] bytes
//!
//! The iteration count is not written into the container. It is part of the
//! format contract for version 1, so it can only change together with the
//! version number.

use aes_gcm::aead::OsRng;
use aes_gcm::aead::rand_core::RngCore;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use tracing::debug;

use crate::cipher::DerivedKey;
use crate::config::{PBKDF2_ITERATIONS, SALT_SIZE};
use crate::error::{Error, Result};

/// Derives the container key from `password` and `salt`.
///
/// Deterministic and pure: the same inputs always produce the same key. Any
/// password is accepted, including the empty one; password policy belongs to
/// the caller.
///
/// # Errors
///
/// Returns [`Error::KeyDerivationFailure`] if `salt` is not exactly
/// [`SALT_SIZE`] bytes long.
pub fn derive_key(password: &[u8], salt: &[u8]) -> Result<DerivedKey> {
    if salt.len() != SALT_SIZE {
        return Err(Error::KeyDerivationFailure(format!("expected {SALT_SIZE} bytes salt, got {}", salt.len())));
    }

    let mut key = DerivedKey::zeroed();
    pbkdf2_sha256(password, salt, PBKDF2_ITERATIONS, key.as_mut_bytes());

    debug!(iterations = PBKDF2_ITERATIONS, "derived container key");
    Ok(key)
}

/// Generates a fresh random salt from the operating system CSPRNG.
///
/// # Errors
///
/// Returns [`Error::KeyDerivationFailure`] if the OS random source fails.
pub fn generate_salt() -> Result<[u8; SALT_SIZE]> {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.try_fill_bytes(&mut salt).map_err(|e| Error::KeyDerivationFailure(format!("rng failed: {e}")))?;

    Ok(salt)
}

#[inline]
fn pbkdf2_sha256(password: &[u8], salt: &[u8], rounds: u32, out: &mut [u8]) {
    pbkdf2_hmac::<Sha256>(password, salt, rounds, out);
}
