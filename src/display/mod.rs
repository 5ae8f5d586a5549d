//! Display sinks
//!
//! A display sink takes a finished HTML string and shows it somewhere:
//! stdout, a file on disk, or a Jupyter `display_data` payload.

mod file;
mod jupyter;
mod stream;

pub use file::FileSink;
pub use jupyter::JupyterSink;
pub use stream::StreamSink;

use crate::config::SinkKind;
use crate::error::{MdCompareError, Result};
use std::path::PathBuf;

/// Anything that can render an HTML string
pub trait DisplaySink {
    fn display(&mut self, html: &str) -> Result<()>;
}

/// Build the sink selected by `kind`.
///
/// The file sink needs a target path; every other sink writes to stdout.
pub fn build(
    kind: SinkKind,
    path: Option<PathBuf>,
    standalone: bool,
) -> Result<Box<dyn DisplaySink>> {
    log::info!("Using {:?} display sink", kind);

    match kind {
        SinkKind::Stdout => Ok(Box::new(StreamSink::stdout())),
        SinkKind::Jupyter => Ok(Box::new(JupyterSink::stdout())),
        SinkKind::File => {
            let path = path.ok_or_else(|| {
                MdCompareError::Config(
                    "The file sink needs an output path (--output or [output] path)".to_string(),
                )
            })?;
            Ok(Box::new(FileSink::new(path, standalone)))
        }
    }
}

/// Collects every displayed fragment in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub shown: Vec<String>,
}

#[cfg(test)]
impl DisplaySink for MemorySink {
    fn display(&mut self, html: &str) -> Result<()> {
        self.shown.push(html.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_file_sink_requires_path() {
        let result = build(SinkKind::File, None, true);
        assert!(matches!(result, Err(MdCompareError::Config(_))));
    }

    #[test]
    fn test_build_file_sink_with_path() {
        assert!(build(SinkKind::File, Some(PathBuf::from("out.html")), false).is_ok());
    }

    #[test]
    fn test_build_stdout_ignores_path() {
        assert!(build(SinkKind::Stdout, Some(PathBuf::from("ignored.html")), true).is_ok());
        assert!(build(SinkKind::Jupyter, None, true).is_ok());
    }

    #[test]
    fn test_memory_sink_collects() {
        let mut sink = MemorySink::default();
        sink.display("<p>a</p>").unwrap();
        sink.display("<p>b</p>").unwrap();
        assert_eq!(sink.shown, vec!["<p>a</p>", "<p>b</p>"]);
    }
}
