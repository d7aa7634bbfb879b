//! # Container Codec
//!
//! Builds and opens the self-describing container:
//!
//! ```text
//! [version: 4][salt: 16][nonce: 12][ciphertext || tag]
//! ```
//!
//! Each call is single-shot and keeps no state between invocations:
//!
//! - encrypt: `Start -> KeyDerived -> Encrypted`
//! - decrypt: `Start -> Validated -> KeyDerived -> Decrypted | AuthenticationFailed`
//!
//! A container is never updated in place. Changing the content or the
//! password means producing a new one.

use tracing::{debug, instrument, warn};

use crate::cipher::{AesGcm, derive_key, generate_salt};
use crate::error::Result;

mod header;

pub use header::Header;

/// Encrypts `plaintext` under `password` into a new container.
///
/// A fresh salt and nonce are drawn for every call, so encrypting the same
/// input twice yields two different containers. The empty plaintext is
/// valid and produces a 48-byte container.
///
/// # Errors
///
/// - [`Error::KeyDerivationFailure`](crate::Error::KeyDerivationFailure) if
///   the random source fails while generating the salt.
/// - [`Error::EncryptionPrimitiveFailure`](crate::Error::EncryptionPrimitiveFailure)
///   if AES-GCM or the nonce source fails.
#[instrument(skip_all, fields(plaintext_len = plaintext.len()))]
pub fn encrypt(plaintext: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    let salt = generate_salt()?;
    let key = derive_key(password, &salt)?;

    let nonce = AesGcm::generate_nonce()?;
    let sealed = AesGcm::new(&key).encrypt(&nonce, plaintext)?;

    let header = Header::new(salt, nonce);
    let mut container = Vec::with_capacity(Header::LEN + sealed.len());
    container.extend_from_slice(&header.to_bytes());
    container.extend_from_slice(&sealed);

    debug!(container_len = container.len(), "sealed container");
    Ok(container)
}

/// Decrypts a container produced by [`encrypt`].
///
/// # Errors
///
/// - [`Error::MalformedContainer`](crate::Error::MalformedContainer) for
///   inputs shorter than 48 bytes, before any cryptographic work.
/// - [`Error::UnsupportedVersion`](crate::Error::UnsupportedVersion) for any
///   version other than 1, before key derivation.
/// - [`Error::AuthenticationFailed`](crate::Error::AuthenticationFailed) for a
///   wrong password or any modification of salt, nonce, ciphertext or tag.
#[instrument(skip_all, fields(container_len = container.len()))]
pub fn decrypt(container: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    let (header, sealed) = Header::parse(container).inspect_err(|e| warn!(error = %e, "rejected container"))?;

    let key = derive_key(password, header.salt())?;
    let plaintext = AesGcm::new(&key).decrypt(header.nonce(), sealed).inspect_err(|e| warn!(error = %e, "container did not verify"))?;

    debug!(plaintext_len = plaintext.len(), "opened container");
    Ok(plaintext)
}

/// Returns `true` if `bytes` start with a well-formed header of a supported
/// version. Says nothing about whether the payload will authenticate.
#[must_use]
pub fn is_container(bytes: &[u8]) -> bool {
    Header::parse(bytes).is_ok()
}
