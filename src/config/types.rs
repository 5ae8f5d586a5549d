use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default title of the left comparison column
pub const DEFAULT_LEFT_TITLE: &str = "BEFORE OPTIMIZATION";

/// Default title of the right comparison column
pub const DEFAULT_RIGHT_TITLE: &str = "AFTER OPTIMIZATION";

/// mdcompare configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Column titles for the comparison table
    pub titles: Titles,

    /// Where rendered HTML goes
    pub output: Output,
}

/// Column titles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Titles {
    pub left: String,
    pub right: String,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    /// Display sink to deliver HTML to
    pub sink: SinkKind,

    /// Target file for the `file` sink
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Wrap file output in a full HTML document
    pub standalone: bool,

    /// Run both sides through the formatter unless told otherwise
    pub format: bool,
}

/// Available display sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Stdout,
    Jupyter,
    File,
}

impl Default for Titles {
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT_TITLE.to_string(),
            right: DEFAULT_RIGHT_TITLE.to_string(),
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self {
            sink: SinkKind::Stdout,
            path: None,
            standalone: true,
            format: false,
        }
    }
}
