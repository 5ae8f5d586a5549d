use std::fs;
use std::path::PathBuf;

use super::DisplaySink;
use crate::error::{MdCompareError, Result};

/// Writes HTML to a file, optionally as a complete document
pub struct FileSink {
    path: PathBuf,
    standalone: bool,
}

impl FileSink {
    pub fn new(path: PathBuf, standalone: bool) -> Self {
        Self { path, standalone }
    }

    fn document(&self, html: &str) -> String {
        if !self.standalone {
            return html.to_string();
        }

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n{}\n</body>\n</html>\n",
            html
        )
    }
}

impl DisplaySink for FileSink {
    fn display(&mut self, html: &str) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, self.document(html)).map_err(|e| {
            MdCompareError::Sink(format!("Cannot write '{}': {}", self.path.display(), e))
        })?;

        println!("HTML written to: {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_fragment() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.html");

        let mut sink = FileSink::new(path.clone(), false);
        sink.display("<table></table>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<table></table>");
    }

    #[test]
    fn test_writes_standalone_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/out.html");

        let mut sink = FileSink::new(path.clone(), true);
        sink.display("<table></table>").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("<meta charset=\"utf-8\">"));
        assert!(written.contains("<body>\n<table></table>\n</body>"));
    }

    #[test]
    fn test_overwrites_previous_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.html");

        let mut sink = FileSink::new(path.clone(), false);
        sink.display("first").unwrap();
        sink.display("second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
