//! Jupyter `display_data` output
//!
//! Emits one JSON object per line in the shape a notebook kernel sends for a
//! rich display, so a kernel bridge can forward it untouched.

use serde::Serialize;
use std::io::{self, Write};

use super::DisplaySink;
use crate::error::Result;

/// Plain-text fallback shown by frontends that cannot render HTML
const PLAIN_FALLBACK: &str = "<HTML object>";

#[derive(Debug, Serialize)]
struct DisplayData<'a> {
    output_type: &'static str,
    data: MimeBundle<'a>,
    metadata: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct MimeBundle<'a> {
    #[serde(rename = "text/html")]
    html: &'a str,
    #[serde(rename = "text/plain")]
    plain: &'static str,
}

/// Writes `display_data` messages carrying the HTML
pub struct JupyterSink<W: Write> {
    writer: W,
}

impl<W: Write> JupyterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl JupyterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DisplaySink for JupyterSink<W> {
    fn display(&mut self, html: &str) -> Result<()> {
        let message = DisplayData {
            output_type: "display_data",
            data: MimeBundle {
                html,
                plain: PLAIN_FALLBACK,
            },
            metadata: serde_json::Map::new(),
        };

        serde_json::to_writer(&mut self.writer, &message)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
