//! File handling for the command-line front end.
//!
//! The core works on byte buffers only. This module is where paths, output
//! naming and overwrite policy live: inputs are read whole into memory,
//! outputs are written in one go once the core call has succeeded, so a
//! failed decryption never leaves a partial file behind.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use sealbyte::config::{DECRYPTED_EXTENSION, FILE_EXTENSION};

use crate::types::ProcessorMode;

/// A file taking part in an encrypt or decrypt operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
}

impl File {
    /// Wraps a path without touching the filesystem.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file name carries the encrypted-file extension.
    ///
    /// Only a naming heuristic; the header decides what the bytes really are.
    #[inline]
    #[must_use]
    pub fn is_encrypted(&self) -> bool {
        self.path.as_os_str().to_string_lossy().ends_with(FILE_EXTENSION)
    }

    /// Default output path for `mode`.
    ///
    /// Encryption appends [`FILE_EXTENSION`]. Decryption strips it, or
    /// appends [`DECRYPTED_EXTENSION`] if it is missing so the input is
    /// never the output.
    #[must_use]
    pub fn output_path(&self, mode: ProcessorMode) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        match mode {
            ProcessorMode::Encrypt => {
                name.push(FILE_EXTENSION);
                PathBuf::from(name)
            }
            ProcessorMode::Decrypt => match self.path.to_string_lossy().strip_suffix(FILE_EXTENSION) {
                Some(stripped) if !stripped.is_empty() => PathBuf::from(stripped),
                _ => {
                    name.push(DECRYPTED_EXTENSION);
                    PathBuf::from(name)
                }
            },
        }
    }

    #[inline]
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Absolute form of the path with symlinks and `..` resolved.
    ///
    /// Works for files that do not exist yet: the deepest existing ancestor
    /// is canonicalized and the missing tail is applied on top of it.
    pub async fn resolved_path(&self) -> Result<PathBuf> {
        let mut ancestor = self.path.clone();
        let mut tail = Vec::new();

        let mut resolved = loop {
            let probe = if ancestor.as_os_str().is_empty() { PathBuf::from(".") } else { ancestor.clone() };
            match fs::canonicalize(&probe).await {
                Ok(path) => break path,
                Err(error) => {
                    let Some(last) = ancestor.components().next_back() else {
                        return Err(error).with_context(|| format!("failed to resolve path: {}", self.path.display()));
                    };
                    tail.push(last.as_os_str().to_os_string());
                    ancestor.pop();
                }
            }
        };

        for part in tail.into_iter().rev() {
            if part == ".." {
                resolved.pop();
            } else if part != "." {
                resolved.push(part);
            }
        }

        Ok(resolved)
    }

    /// Size of the file in bytes.
    pub async fn size(&self) -> Result<u64> {
        let meta = fs::metadata(&self.path).await.with_context(|| format!("failed to get metadata: {}", self.path.display()))?;
        Ok(meta.len())
    }

    /// Checks that the path names an existing regular file.
    pub async fn validate(&self) -> Result<()> {
        ensure!(self.exists(), "file not found: {}", self.path.display());

        let meta = fs::metadata(&self.path).await.with_context(|| format!("failed to get metadata: {}", self.path.display()))?;
        ensure!(meta.is_file(), "not a regular file: {}", self.path.display());

        Ok(())
    }

    /// Reads the whole file into memory.
    pub async fn read(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).await.with_context(|| format!("failed to read file: {}", self.path.display()))
    }

    /// Reads at most `limit` bytes from the start of the file.
    pub async fn head(&self, limit: usize) -> Result<Vec<u8>> {
        let file = fs::File::open(&self.path).await.with_context(|| format!("failed to open file: {}", self.path.display()))?;

        let mut buffer = Vec::with_capacity(limit);
        file.take(limit as u64).read_to_end(&mut buffer).await.with_context(|| format!("failed to read file: {}", self.path.display()))?;

        Ok(buffer)
    }

    /// Writes `data` to the file, creating parent directories as needed.
    ///
    /// Without `overwrite` the file must not exist yet; the check is done by
    /// the open call itself so a concurrent writer cannot slip in between.
    pub async fn write(&self, data: &[u8], overwrite: bool) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = options.open(&self.path).await.with_context(|| format!("failed to create file: {}", self.path.display()))?;
        file.write_all(data).await.with_context(|| format!("failed to write file: {}", self.path.display()))?;
        file.flush().await.with_context(|| format!("failed to flush file: {}", self.path.display()))?;

        Ok(())
    }
}
