//! Display utilities for operation results and container headers.

use std::path::Path;

use bytesize::ByteSize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use console::style;
use sealbyte::Header;

use crate::types::ProcessorMode;

/// Prints a success line for one processed file.
pub fn show_success(mode: ProcessorMode, input: &Path, output: &Path) {
    println!("{} {}: {} -> {}", style("✓").green(), mode.done_label(), input.display(), output.display());
}

/// Prints a failure line with the full error chain.
pub fn show_failure(input: &Path, error: &anyhow::Error) {
    eprintln!("{} {}: {error:#}", style("✗").red(), input.display());
}

/// Builds the table printed by `inspect`.
#[must_use]
pub fn header_table(path: &Path, header: &Header, container_len: u64) -> Table {
    let plaintext = usize::try_from(container_len).ok().and_then(Header::plaintext_len).map_or_else(|| "n/a".to_owned(), |len| ByteSize::b(len as u64).to_string());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Field", "Value"]);

    table.add_row(vec!["File".to_owned(), path.display().to_string()]);
    table.add_row(vec!["Version".to_owned(), header.version().to_string()]);
    table.add_row(vec!["Salt".to_owned(), hex::encode(header.salt())]);
    table.add_row(vec!["Nonce".to_owned(), hex::encode(header.nonce())]);
    table.add_row(vec!["Container size".to_owned(), ByteSize::b(container_len).to_string()]);
    table.add_row(vec!["Plaintext size".to_owned(), plaintext]);

    table
}

/// Prints the header of a container.
pub fn show_header(path: &Path, header: &Header, container_len: u64) {
    println!("{}", header_table(path, header, container_len));
}
