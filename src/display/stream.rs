use std::io::{self, Write};

use super::DisplaySink;
use crate::error::Result;

/// Writes raw HTML, newline terminated, to any writer
pub struct StreamSink<W: Write> {
    writer: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl StreamSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DisplaySink for StreamSink<W> {
    fn display(&mut self, html: &str) -> Result<()> {
        writeln!(self.writer, "{}", html)?;
        self.writer.flush()?;
        Ok(())
    }
}
