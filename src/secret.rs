use secrecy::{ExposeSecret, SecretString};

/// A user password held in memory that is wiped on drop.
///
/// The core consumes passwords as UTF-8 bytes; this type exists so callers
/// never have to keep the text in a plain `String`.
pub struct Password {
    inner: SecretString,
}

impl Password {
    #[must_use]
    pub fn new(password: &str) -> Self {
        Self { inner: SecretString::from(password.to_owned()) }
    }

    #[must_use]
    pub fn from_string(password: String) -> Self {
        Self { inner: SecretString::from(password) }
    }

    #[must_use]
    pub fn expose_secret(&self) -> &str {
        self.inner.expose_secret()
    }

    /// UTF-8 encoding of the password, as fed to key derivation.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.expose_secret().as_bytes()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_bytes_are_utf8() {
        let password = Password::new("pässwörd");
        assert_eq!(password.as_bytes(), "pässwörd".as_bytes());
        assert_eq!(password.as_bytes().len(), 10);
    }

    #[test]
    fn test_password_debug_redacted() {
        let password = Password::from_string("hunter2".to_owned());
        assert!(!format!("{password:?}").contains("hunter2"));
    }

    #[test]
    fn test_password_empty() {
        assert!(Password::new("").is_empty());
        assert!(!Password::new("x").is_empty());
    }
}
