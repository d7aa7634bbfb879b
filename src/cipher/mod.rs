//! # Cryptographic Primitives
//!
//! The two building blocks of a container:
//!
//! - **Key derivation**: PBKDF2-HMAC-SHA256 turns a password and salt into a
//!   256-bit [`DerivedKey`].
//! - **Authenticated encryption**: AES-256-GCM with a 96-bit random nonce and
//!   a 128-bit tag, no associated data.
//!
//! Neither layer holds process-wide state, so any number of calls can run in
//! parallel. Key material is wiped on drop and never logged.

mod aes_gcm;
mod derive;
mod key;

pub use aes_gcm::AesGcm;
pub use derive::{derive_key, generate_salt};
pub use key::DerivedKey;
