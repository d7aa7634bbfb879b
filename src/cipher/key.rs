use std::fmt::{Debug, Formatter, Result};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::KEY_SIZE;

/// A 256-bit key produced by [`derive_key`](super::derive_key).
///
/// Lives only for the duration of one encrypt/decrypt call. The bytes are
/// wiped when the value is dropped, on success and error paths alike, and
/// are never printed.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: [u8; KEY_SIZE],
}

impl DerivedKey {
    pub(crate) const fn zeroed() -> Self {
        Self { bytes: [0u8; KEY_SIZE] }
    }

    #[cfg(test)]
    pub(crate) const fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8; KEY_SIZE] {
        &mut self.bytes
    }

    #[inline]
    #[must_use]
    pub fn expose(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl Debug for DerivedKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let key = DerivedKey::from_bytes([0xAB; KEY_SIZE]);
        let printed = format!("{key:?}");
        assert_eq!(printed, "DerivedKey([REDACTED])");
        assert!(!printed.contains("171"));
    }

    #[test]
    fn test_zeroize_clears_bytes() {
        let mut key = DerivedKey::from_bytes([0x5A; KEY_SIZE]);
        key.zeroize();
        assert_eq!(key.expose(), &[0u8; KEY_SIZE]);
    }
}
