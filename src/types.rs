//! Common type definitions for the command-line front end.

use strum::{Display, VariantArray};

/// Represents the type of file operation to perform.
///
/// Determines the output path convention and which core call runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, VariantArray)]
pub enum ProcessorMode {
    /// Encrypt the file, producing a `.sbx` output.
    #[strum(to_string = "Encrypt")]
    Encrypt,

    /// Decrypt the file, removing the `.sbx` extension.
    #[strum(to_string = "Decrypt")]
    Decrypt,
}

impl ProcessorMode {
    /// Progress label shown while the operation runs.
    #[inline]
    #[must_use]
    pub fn progress_label(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypting",
            Self::Decrypt => "Decrypting",
        }
    }

    /// Past-tense label used in result lines.
    #[inline]
    #[must_use]
    pub fn done_label(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypted",
            Self::Decrypt => "Decrypted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(ProcessorMode::Encrypt.to_string(), "Encrypt");
        assert_eq!(ProcessorMode::Decrypt.progress_label(), "Decrypting");
        assert_eq!(ProcessorMode::Encrypt.done_label(), "Encrypted");
    }

    #[test]
    fn test_variants_order() {
        assert_eq!(ProcessorMode::VARIANTS, &[ProcessorMode::Encrypt, ProcessorMode::Decrypt]);
    }
}
