//! Side-by-side comparison table
//!
//! Lays two texts out in a fixed two-column HTML table, optionally running
//! each through the formatter first, and hands the result to a display sink.

mod style;

use crate::config::{DEFAULT_LEFT_TITLE, DEFAULT_RIGHT_TITLE};
use crate::display::DisplaySink;
use crate::error::Result;
use crate::formatter::{format_text, wrap_preformatted};

/// Two texts to compare and how to present them
#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub left: String,
    pub right: String,
    pub formatting_enabled: bool,
    pub left_title: String,
    pub right_title: String,
}

impl CompareRequest {
    /// Unformatted comparison under the default titles
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            formatting_enabled: false,
            left_title: DEFAULT_LEFT_TITLE.to_string(),
            right_title: DEFAULT_RIGHT_TITLE.to_string(),
        }
    }

    pub fn formatted(mut self, enabled: bool) -> Self {
        self.formatting_enabled = enabled;
        self
    }

    pub fn titles(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_title = left.into();
        self.right_title = right.into();
        self
    }

    fn cell(&self, text: &str) -> String {
        if self.formatting_enabled {
            format_text(text)
        } else {
            wrap_preformatted(text)
        }
    }
}

/// Build the complete HTML fragment: stylesheet followed by the table
pub fn render_table(request: &CompareRequest) -> String {
    let left = request.cell(&request.left);
    let right = request.cell(&request.right);

    let mut output = String::new();

    output.push_str(style::STYLESHEET);
    output.push('\n');
    output.push_str("<table>\n");

    // Header row
    output.push_str("    <tr>\n");
    output.push_str(&format!(
        "        <th style=\"text-align:left;\"><strong>{}</strong></th>\n",
        request.left_title
    ));
    output.push_str(&format!(
        "        <th style=\"text-align:left;\"><strong>{}</strong></th>\n",
        request.right_title
    ));
    output.push_str("    </tr>\n");

    // Body row
    output.push_str("    <tr>\n");
    output.push_str(&format!(
        "        <td style=\"text-align:left; vertical-align:top;\">{}</td>\n",
        left
    ));
    output.push_str(&format!(
        "        <td style=\"text-align:left; vertical-align:top;\">{}</td>\n",
        right
    ));
    output.push_str("    </tr>\n");
    output.push_str("</table>");

    output
}

/// Render the comparison table and hand it to `sink`
pub fn render(request: &CompareRequest, sink: &mut dyn DisplaySink) -> Result<()> {
    log::debug!(
        "Rendering comparison ({} / {} bytes, formatting {})",
        request.left.len(),
        request.right.len(),
        if request.formatting_enabled { "on" } else { "off" }
    );

    sink.display(&render_table(request))
}
