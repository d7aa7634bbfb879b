//! Global Configuration Constants
//!
//! Every parameter of the container format and of the key derivation lives
//! here as a compiled-in constant. None of them are runtime-tunable: a
//! container's version field implies exactly one set of values, and changing
//! any of the format or KDF constants requires a new [`CURRENT_VERSION`].

/// Application name used in user interfaces.
pub const APP_NAME: &str = "sealbyte";

/// File extension appended to encrypted files by the command-line front end.
///
/// The core never looks at file names; this is purely a caller convention.
pub const FILE_EXTENSION: &str = ".sbx";

/// Extension used for decrypted output when the input lacks [`FILE_EXTENSION`].
pub const DECRYPTED_EXTENSION: &str = ".out";

// === Container Format ===
// [version: 4][salt: 16][nonce: 12][ciphertext || tag: remaining]

/// Current (and only supported) container format version.
///
/// Stored little-endian in the first four bytes of every container.
/// Decryption rejects every other value before any key derivation happens.
pub const CURRENT_VERSION: u32 = 1;

/// Size of the version field in bytes.
pub const VERSION_SIZE: usize = 4;

/// Length of the PBKDF2 salt in bytes.
///
/// Generated fresh for every encryption and stored in the clear. It is not
/// secret, but it must never be reused across independent encryptions.
pub const SALT_SIZE: usize = 16;

/// Size of the AES-GCM nonce in bytes (96 bits, the GCM standard).
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes (128 bits).
pub const TAG_SIZE: usize = 16;

/// Size of the fixed header that precedes the ciphertext.
pub const HEADER_SIZE: usize = VERSION_SIZE + SALT_SIZE + NONCE_SIZE;

/// Smallest well-formed container: a header plus the tag of an empty plaintext.
pub const MIN_CONTAINER_SIZE: usize = HEADER_SIZE + TAG_SIZE;

// === Key Derivation ===

/// Size of the derived AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

/// PBKDF2-HMAC-SHA256 iteration count for version 1 containers.
///
/// Not stored in the container. Raising it without bumping
/// [`CURRENT_VERSION`] would make every existing container undecryptable.
pub const PBKDF2_ITERATIONS: u32 = 310_000;

// === Front End ===

/// Minimum length for interactively chosen encryption passwords.
///
/// Only enforced by the prompt; the core accepts any password, including
/// the empty one.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Environment variable the front end reads a password from.
pub const PASSWORD_ENV: &str = "SEALBYTE_PASSWORD";
