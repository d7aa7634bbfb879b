use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Key, Nonce};

use crate::cipher::DerivedKey;
use crate::config::{NONCE_SIZE, TAG_SIZE};
use crate::error::{Error, Result};

/// AES-256-GCM bound to one derived key.
///
/// The expanded round keys inside `inner` are wiped when the value drops.
pub struct AesGcm {
    inner: Aes256Gcm,
}

impl AesGcm {
    #[inline]
    #[must_use]
    pub fn new(key: &DerivedKey) -> Self {
        let inner = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.expose()));
        Self { inner }
    }

    /// Draws a fresh 96-bit nonce from the OS random source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncryptionPrimitiveFailure`] if the nonce has an
    /// unexpected length.
    #[inline]
    pub fn generate_nonce() -> Result<[u8; NONCE_SIZE]> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        nonce.as_slice().try_into().map_err(|_| Error::EncryptionPrimitiveFailure("invalid nonce length".into()))
    }

    /// Seals `plaintext` without associated data; the 16-byte tag is appended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncryptionPrimitiveFailure`] if AES-GCM refuses the input.
    #[inline]
    pub fn encrypt(&self, nonce: &[u8; NONCE_SIZE], plaintext: &[u8]) -> Result<Vec<u8>> {
        self.inner.encrypt(Nonce::from_slice(nonce), plaintext).map_err(|e| Error::EncryptionPrimitiveFailure(format!("aes-gcm: {e}")))
    }

    /// Opens `ciphertext` (tag included) and returns the verified plaintext.
    ///
    /// # Errors
    ///
    /// - [`Error::DecryptionPrimitiveFailure`] if `ciphertext` is shorter than the tag.
    /// - [`Error::AuthenticationFailed`] if the tag does not verify.
    #[inline]
    pub fn decrypt(&self, nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < TAG_SIZE {
            return Err(Error::DecryptionPrimitiveFailure(format!("ciphertext too short: need at least {TAG_SIZE} bytes, got {}", ciphertext.len())));
        }

        self.inner.decrypt(Nonce::from_slice(nonce), ciphertext).map_err(|_| Error::AuthenticationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KEY_SIZE;

    fn cipher() -> AesGcm {
        AesGcm::new(&DerivedKey::from_bytes([0x42; KEY_SIZE]))
    }

    #[test]
    fn test_encrypt_decrypt() {
        let cipher = cipher();
        let nonce = AesGcm::generate_nonce().unwrap();

        let ciphertext = cipher.encrypt(&nonce, b"Hello, World!").unwrap();
        assert_eq!(ciphertext.len(), 13 + TAG_SIZE);

        let decrypted = cipher.decrypt(&nonce, &ciphertext).unwrap();
        assert_eq!(decrypted, b"Hello, World!");
    }

    #[test]
    fn test_encrypt_empty() {
        let cipher = cipher();
        let nonce = [0u8; NONCE_SIZE];

        let ciphertext = cipher.encrypt(&nonce, b"").unwrap();
        assert_eq!(ciphertext.len(), TAG_SIZE);
        assert!(cipher.decrypt(&nonce, &ciphertext).unwrap().is_empty());
    }

    #[test]
    fn test_decrypt_too_short() {
        let cipher = cipher();
        let err = cipher.decrypt(&[0u8; NONCE_SIZE], &[0u8; TAG_SIZE - 1]).unwrap_err();
        assert!(matches!(err, Error::DecryptionPrimitiveFailure(_)));
    }

    #[test]
    fn test_decrypt_tampered() {
        let cipher = cipher();
        let nonce = [9u8; NONCE_SIZE];
        let mut ciphertext = cipher.encrypt(&nonce, b"Hello, World!").unwrap();

        if let Some(last) = ciphertext.last_mut() {
            *last ^= 0x01;
        }

        assert_eq!(cipher.decrypt(&nonce, &ciphertext).unwrap_err(), Error::AuthenticationFailed);
    }

    #[test]
    fn test_decrypt_wrong_nonce() {
        let cipher = cipher();
        let ciphertext = cipher.encrypt(&[1u8; NONCE_SIZE], b"payload").unwrap();
        assert_eq!(cipher.decrypt(&[2u8; NONCE_SIZE], &ciphertext).unwrap_err(), Error::AuthenticationFailed);
    }

    #[test]
    fn test_decrypt_wrong_key() {
        let nonce = [1u8; NONCE_SIZE];
        let ciphertext = cipher().encrypt(&nonce, b"payload").unwrap();
        let other = AesGcm::new(&DerivedKey::from_bytes([0x43; KEY_SIZE]));
        assert_eq!(other.decrypt(&nonce, &ciphertext).unwrap_err(), Error::AuthenticationFailed);
    }

    #[test]
    fn test_round_keys_wiped_on_drop() {
        fn assert_wiped_on_drop<T: zeroize::ZeroizeOnDrop>() {}

        assert_wiped_on_drop::<aes::Aes256>();
        assert_wiped_on_drop::<DerivedKey>();
    }

    #[test]
    fn test_generate_nonce_unique() {
        assert_ne!(AesGcm::generate_nonce().unwrap(), AesGcm::generate_nonce().unwrap());
    }
}
