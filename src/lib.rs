//! sealbyte - password-based file protection.
//!
//! Encrypts arbitrary bytes under a password into a small, self-describing
//! container and recovers them later. All cryptography is local:
//! - PBKDF2-HMAC-SHA256 (310 000 iterations) for key derivation
//! - AES-256-GCM for authenticated encryption
//! - A versioned 32-byte header carrying salt and nonce
//!
//! ```no_run
//! let container = sealbyte::encrypt(b"hello world", b"Tr0ub4dor&3")?;
//! let plaintext = sealbyte::decrypt(&container, b"Tr0ub4dor&3")?;
//! assert_eq!(plaintext, b"hello world");
//! # Ok::<(), sealbyte::Error>(())
//! ```

pub mod cipher;
pub mod config;
pub mod container;
pub mod error;
pub mod secret;

pub use cipher::{DerivedKey, derive_key, generate_salt};
pub use container::{Header, decrypt, encrypt, is_container};
pub use error::{Error, Result};
pub use secret::Password;
