use std::path::PathBuf;

use crate::cli::{read_input, OutputArgs};
use crate::config;
use crate::error::Result;
use crate::formatter::format_text;

/// Format a single text and send the fragment to the display sink
pub fn run(input: Option<PathBuf>, output: OutputArgs) -> Result<()> {
    let config = config::resolve(output.config.clone())?;

    let text = read_input(input.as_deref())?;
    let html = format_text(&text);

    let mut sink = output.sink(&config)?;
    sink.display(&html)
}
