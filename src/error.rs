//! Typed failures of the core.
//!
//! Every variant is terminal; nothing in the core retries. Callers branch on
//! the variant, never on the message text.

use thiserror::Error;

use crate::config::MIN_CONTAINER_SIZE;

/// Errors returned by key derivation and the container codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The KDF rejected its inputs (e.g. a salt of the wrong length).
    #[error("key derivation failed: {0}")]
    KeyDerivationFailure(String),

    /// Input is shorter than a header plus an authentication tag.
    #[error("malformed container: expected at least {min} bytes, got {len}", min = MIN_CONTAINER_SIZE)]
    MalformedContainer { len: usize },

    /// The version field is not one this build can decrypt.
    #[error("unsupported container version: {0}")]
    UnsupportedVersion(u32),

    /// Tag verification failed. Wrong passwords and corrupted data are
    /// indistinguishable and deliberately share this variant.
    #[error("incorrect password or corrupted data")]
    AuthenticationFailed,

    #[error("encryption failed: {0}")]
    EncryptionPrimitiveFailure(String),

    #[error("decryption failed: {0}")]
    DecryptionPrimitiveFailure(String),
}

pub type Result<T> = std::result::Result<T, Error>;
