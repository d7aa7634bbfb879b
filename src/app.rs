use std::path::PathBuf;

use anyhow::{Context, Result, bail, ensure};
use clap::{ArgAction, Parser, Subcommand};
use indicatif::MultiProgress;
use sealbyte::config::{MIN_CONTAINER_SIZE, PASSWORD_ENV, PASSWORD_MIN_LENGTH};
use sealbyte::{Header, Password};
use tokio::task::JoinSet;
use tracing::level_filters::LevelFilter;

use crate::file::File;
use crate::processor::Processor;
use crate::types::ProcessorMode;
use crate::ui::display;
use crate::ui::progress::Spinner;
use crate::ui::prompt::Prompt;

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt one or more files.
    Encrypt {
        /// Files to encrypt.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output path (only with a single input).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Password (prompted with confirmation if not provided).
        #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,

        /// Overwrite existing output files.
        #[arg(short, long)]
        force: bool,
    },

    /// Decrypt one or more files.
    Decrypt {
        /// Files to decrypt.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output path (only with a single input).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Password (prompted if not provided).
        #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,

        /// Overwrite existing output files.
        #[arg(short, long)]
        force: bool,
    },

    /// Show the header of an encrypted file without decrypting it.
    Inspect {
        /// Encrypted file.
        input: PathBuf,
    },

    /// Start interactive mode.
    Interactive,
}

#[derive(Parser)]
#[command(name = "sealbyte", version, about = "Protect files with a password using PBKDF2-HMAC-SHA256 and AES-256-GCM.")]
pub struct App {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl App {
    pub fn init() -> Result<Self> {
        let app = Self::parse();

        let level = match app.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        let subscriber = tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;

        Ok(app)
    }

    pub async fn execute(self) -> Result<()> {
        let prompt = Prompt::new(PASSWORD_MIN_LENGTH);
        match self.command {
            Some(Commands::Encrypt { inputs, output, password, force }) => Self::run_mode(ProcessorMode::Encrypt, inputs, output, password, force, &prompt).await,
            Some(Commands::Decrypt { inputs, output, password, force }) => Self::run_mode(ProcessorMode::Decrypt, inputs, output, password, force, &prompt).await,
            Some(Commands::Inspect { input }) => Self::run_inspect(input).await,
            Some(Commands::Interactive) | None => Self::run_interactive(&prompt).await,
        }
    }

    async fn run_mode(mode: ProcessorMode, inputs: Vec<PathBuf>, output: Option<PathBuf>, password: Option<String>, force: bool, prompt: &Prompt) -> Result<()> {
        ensure!(output.is_none() || inputs.len() == 1, "--output can only be used with a single input file");

        let password = match password {
            Some(password) => Password::from_string(password),
            None => prompt.prompt_password(mode)?,
        };
        ensure!(mode == ProcessorMode::Decrypt || !password.is_empty(), "encryption password cannot be empty");
        let processor = Processor::new(password);

        let progress = MultiProgress::new();
        let mut tasks = JoinSet::new();
        for path in inputs {
            let input = File::new(path);
            let output = File::new(output.clone().unwrap_or_else(|| input.output_path(mode)));
            let spinner = Spinner::new(&progress, &format!("{} {}", mode.progress_label(), input.path().display()));
            let processor = processor.clone();

            tasks.spawn(async move {
                let result = processor.process(mode, &input, &output, force).await;
                spinner.finish();
                (input, output, result)
            });
        }

        let mut failures = 0usize;
        while let Some(joined) = tasks.join_next().await {
            let (input, output, result) = joined.context("processing task panicked")?;
            match result {
                Ok(()) => progress.suspend(|| display::show_success(mode, input.path(), output.path())),
                Err(error) => {
                    failures += 1;
                    progress.suspend(|| display::show_failure(input.path(), &error));
                }
            }
        }

        ensure!(failures == 0, "{failures} file(s) could not be processed");
        Ok(())
    }

    async fn run_inspect(path: PathBuf) -> Result<()> {
        let input = File::new(path);
        input.validate().await?;

        let head = input.head(MIN_CONTAINER_SIZE).await?;
        let (header, _) = Header::parse(&head).with_context(|| format!("not a valid container: {}", input.path().display()))?;

        display::show_header(input.path(), &header, input.size().await?);
        Ok(())
    }

    async fn run_interactive(prompt: &Prompt) -> Result<()> {
        let input = File::new(Prompt::prompt_path()?);
        input.validate().await?;

        let suggested = if sealbyte::is_container(&input.head(MIN_CONTAINER_SIZE).await?) { ProcessorMode::Decrypt } else { ProcessorMode::Encrypt };
        let mode = Prompt::select_processing_mode(suggested)?;

        let output = File::new(input.output_path(mode));
        let overwrite = output.exists();
        if overwrite && !Prompt::confirm_file_overwrite(output.path())? {
            bail!("operation canceled");
        }

        let password = prompt.prompt_password(mode)?;

        let progress = MultiProgress::new();
        let spinner = Spinner::new(&progress, &format!("{} {}", mode.progress_label(), input.path().display()));
        let result = Processor::new(password).process(mode, &input, &output, overwrite).await;
        spinner.finish();
        result?;

        display::show_success(mode, input.path(), output.path());
        Ok(())
    }
}
