//! Fixed-size container header.
//!
//! # Layout
//!
//! | Offset | Length | Field   |
//! |--------|--------|---------|
//! | 0      | 4      | version (u32 little-endian) |
//! | 4      | 16     | salt    |
//! | 20     | 12     | nonce   |
//!
//! The header is followed by the AES-GCM ciphertext with its 16-byte tag.

use crate::config::{CURRENT_VERSION, HEADER_SIZE, MIN_CONTAINER_SIZE, NONCE_SIZE, SALT_SIZE, VERSION_SIZE};
use crate::error::{Error, Result};

/// Parsed header of a container.
///
/// Parsing requires no password, so a header can be inspected before the
/// user is asked for one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    version: u32,
    salt: [u8; SALT_SIZE],
    nonce: [u8; NONCE_SIZE],
}

impl Header {
    /// Encoded size of the header in bytes.
    pub const LEN: usize = HEADER_SIZE;

    /// Smallest input that can possibly be a container.
    pub const MIN_CONTAINER_LEN: usize = MIN_CONTAINER_SIZE;

    /// Creates a header for the current format version.
    #[inline]
    #[must_use]
    pub const fn new(salt: [u8; SALT_SIZE], nonce: [u8; NONCE_SIZE]) -> Self {
        Self { version: CURRENT_VERSION, salt, nonce }
    }

    #[inline]
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    #[inline]
    #[must_use]
    pub const fn salt(&self) -> &[u8; SALT_SIZE] {
        &self.salt
    }

    #[inline]
    #[must_use]
    pub const fn nonce(&self) -> &[u8; NONCE_SIZE] {
        &self.nonce
    }

    /// Encodes the header into its 32-byte wire form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        let (version, rest) = buf.split_at_mut(VERSION_SIZE);
        let (salt, nonce) = rest.split_at_mut(SALT_SIZE);

        version.copy_from_slice(&self.version.to_le_bytes());
        salt.copy_from_slice(&self.salt);
        nonce.copy_from_slice(&self.nonce);

        buf
    }

    /// Parses the header at the start of `container`.
    ///
    /// Returns the header and the remaining `ciphertext || tag` bytes. The
    /// length check happens first, then the version gate, so nothing is
    /// read as salt or nonce unless the layout is known.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedContainer`] if `container` is shorter than
    ///   [`MIN_CONTAINER_SIZE`].
    /// - [`Error::UnsupportedVersion`] if the version is not [`CURRENT_VERSION`].
    pub fn parse(container: &[u8]) -> Result<(Self, &[u8])> {
        let malformed = || Error::MalformedContainer { len: container.len() };

        if container.len() < MIN_CONTAINER_SIZE {
            return Err(malformed());
        }

        let (version, rest) = container.split_first_chunk::<VERSION_SIZE>().ok_or_else(malformed)?;
        let version = u32::from_le_bytes(*version);
        if version != CURRENT_VERSION {
            return Err(Error::UnsupportedVersion(version));
        }

        let (salt, rest) = rest.split_first_chunk::<SALT_SIZE>().ok_or_else(malformed)?;
        let (nonce, sealed) = rest.split_first_chunk::<NONCE_SIZE>().ok_or_else(malformed)?;

        Ok((Self { version, salt: *salt, nonce: *nonce }, sealed))
    }

    /// Plaintext size implied by a container of `container_len` bytes.
    ///
    /// Returns `None` when the length is below the container minimum.
    #[inline]
    #[must_use]
    pub const fn plaintext_len(container_len: usize) -> Option<usize> {
        container_len.checked_sub(MIN_CONTAINER_SIZE)
    }
}
