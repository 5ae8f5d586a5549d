//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - format: Format one text as an HTML fragment
//! - compare: Render two texts side by side in a comparison table
//! - config init: Initialize configuration file

pub mod compare;
pub mod config;
pub mod format;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::{Config, SinkKind};
use crate::display::{self, DisplaySink};
use crate::error::{MdCompareError, Result};

/// Output flags shared by commands that display HTML
#[derive(clap::Args, Debug, Default)]
pub struct OutputArgs {
    /// Display sink (defaults to the configured one)
    #[arg(long, value_enum)]
    pub sink: Option<SinkKind>,

    /// Output file for the file sink
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl OutputArgs {
    /// Build the display sink, letting flags override the config.
    ///
    /// `--output` without `--sink` selects the file sink.
    pub fn sink(&self, config: &Config) -> Result<Box<dyn DisplaySink>> {
        let kind = match (self.sink, &self.output) {
            (Some(kind), _) => kind,
            (None, Some(_)) => SinkKind::File,
            (None, None) => config.output.sink,
        };
        let path = self.output.clone().or_else(|| config.output.path.clone());

        display::build(kind, path, config.output.standalone)
    }
}

/// Whether a path argument means stdin
pub fn is_stdin(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p.as_os_str() == "-")
}

/// Read a text argument: a file, or stdin for `-` or no path
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let text = match path {
        Some(path) if !is_stdin(Some(path)) => fs::read_to_string(path).map_err(|e| {
            MdCompareError::Input(format!("Cannot read '{}': {}", path.display(), e))
        })?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    log::debug!("Read {} bytes of input", text.len());
    Ok(text)
}
