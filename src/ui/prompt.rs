//! Interactive prompts for passwords, paths and confirmations.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use inquire::{Confirm, PasswordDisplayMode, Select, Text};
use sealbyte::Password;
use strum::VariantArray;

use crate::types::ProcessorMode;

/// Interactive prompt handler.
pub struct Prompt {
    /// Minimum length for newly chosen passwords.
    password_min_length: usize,
}

impl Prompt {
    #[must_use]
    pub fn new(password_min_length: usize) -> Self {
        Self { password_min_length }
    }

    /// Prompts for an encryption password, entered twice.
    ///
    /// Choosing a password is the only place a length policy applies; the
    /// core itself accepts anything.
    pub fn prompt_encryption_password(&self) -> Result<Password> {
        let min = self.password_min_length;
        inquire::Password::new("Enter encryption password")
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_custom_confirmation_message("Confirm password")
            .with_custom_confirmation_error_message("passwords do not match")
            .with_validator(inquire::required!("password cannot be empty"))
            .with_validator(inquire::min_length!(min, format!("password must be at least {min} characters long")))
            .prompt()
            .map(Password::from_string)
            .map_err(|e| anyhow!("password input failed: {e}"))
    }

    /// Prompts once for a decryption password.
    ///
    /// A wrong password surfaces later as an authentication failure.
    pub fn prompt_decryption_password() -> Result<Password> {
        inquire::Password::new("Enter decryption password")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
            .map(Password::from_string)
            .map_err(|e| anyhow!("password input failed: {e}"))
    }

    /// Prompts for the password matching `mode`.
    pub fn prompt_password(&self, mode: ProcessorMode) -> Result<Password> {
        match mode {
            ProcessorMode::Encrypt => self.prompt_encryption_password(),
            ProcessorMode::Decrypt => Self::prompt_decryption_password(),
        }
    }

    /// Lets the user pick encrypt or decrypt, pre-selecting `suggested`.
    pub fn select_processing_mode(suggested: ProcessorMode) -> Result<ProcessorMode> {
        let modes = ProcessorMode::VARIANTS;
        let cursor = modes.iter().position(|m| *m == suggested).unwrap_or(0);

        Select::new("Select operation", modes.to_vec()).with_starting_cursor(cursor).prompt().map_err(|e| anyhow!("mode selection failed: {e}"))
    }

    /// Asks for the path of the file to process.
    pub fn prompt_path() -> Result<PathBuf> {
        Text::new("File to process")
            .with_validator(inquire::required!("path cannot be empty"))
            .prompt()
            .map(|p| PathBuf::from(p.trim()))
            .map_err(|e| anyhow!("path input failed: {e}"))
    }

    /// Asks before an existing output file is replaced. Defaults to no.
    pub fn confirm_file_overwrite(path: &Path) -> Result<bool> {
        let filename = path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        Confirm::new(&format!("Output file {filename} already exists. Overwrite?"))
            .with_default(false)
            .prompt()
            .map_err(|e| anyhow!("confirmation failed: {e}"))
    }
}
