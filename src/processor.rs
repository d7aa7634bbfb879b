//! Runs one file through the core.

use std::sync::Arc;

use anyhow::{Context, Result, ensure};
use sealbyte::Password;
use tracing::{info, warn};

use crate::file::File;
use crate::types::ProcessorMode;

/// Encrypts or decrypts files with one password.
///
/// Cheap to clone; clones share the password, so a batch of files can be
/// processed concurrently without copying it.
#[derive(Clone)]
pub struct Processor {
    password: Arc<Password>,
}

impl Processor {
    #[must_use]
    pub fn new(password: Password) -> Self {
        Self { password: Arc::new(password) }
    }

    /// Reads `input`, runs the core operation for `mode` on a blocking worker
    /// and writes the result to `output`.
    ///
    /// Nothing is written unless the core call succeeds.
    pub async fn process(&self, mode: ProcessorMode, input: &File, output: &File, overwrite: bool) -> Result<()> {
        input.validate().await?;
        ensure!(input.resolved_path().await? != output.resolved_path().await?, "input and output are the same file: {}", input.path().display());
        ensure!(overwrite || !output.exists(), "output file already exists: {} (use --force to overwrite)", output.path().display());

        if mode == ProcessorMode::Encrypt && input.is_encrypted() {
            warn!(input = %input.path().display(), "input already looks encrypted, encrypting again");
        }

        let data = input.read().await?;
        let password = Arc::clone(&self.password);

        let result = tokio::task::spawn_blocking(move || match mode {
            ProcessorMode::Encrypt => sealbyte::encrypt(&data, password.as_bytes()),
            ProcessorMode::Decrypt => sealbyte::decrypt(&data, password.as_bytes()),
        })
        .await
        .context("worker task failed")?;

        let bytes = result.with_context(|| format!("{} failed: {}", mode, input.path().display()))?;
        output.write(&bytes, overwrite).await?;

        info!(input = %input.path().display(), output = %output.path().display(), bytes = bytes.len(), "{}", mode.done_label());
        Ok(())
    }
}
