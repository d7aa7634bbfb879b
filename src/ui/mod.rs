//! User interface components for terminal interaction.
//!
//! # Modules
//!
//! - [`display`]: Result lines and the container header table
//! - [`progress`]: Spinners shown while files are processed
//! - [`prompt`]: Interactive password, path and confirmation dialogs

pub mod display;
pub mod progress;
pub mod prompt;
