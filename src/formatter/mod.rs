//! Marker syntax to HTML formatter
//!
//! Turns `**bold**`, `*italic*`, `- bullets`, fenced code, `{{ }}` blocks and
//! JSON explanation blocks into an HTML fragment. Each rule in [`rules`] is an
//! independent regex substitution applied in a fixed order to the output of
//! the previous one.

mod rules;

use std::borrow::Cow;

/// Wrap text in a container that keeps spaces and newlines as written
pub fn wrap_preformatted(text: &str) -> String {
    format!(r#"<div style="white-space: pre-wrap;">{}</div>"#, text)
}

/// Format marker syntax as an HTML fragment.
///
/// Never fails: text without markers comes back unchanged inside the
/// whitespace-preserving wrapper, and unbalanced markers are left as-is or
/// partially formatted.
pub fn format_text(text: &str) -> String {
    let mut current = text.to_string();

    for pass in rules::PASSES {
        let next = match (pass.apply)(&current) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(next) => next,
        };
        log::trace!("{}: {} -> {} bytes", pass.name, current.len(), next.len());
        current = next;
    }

    wrap_preformatted(&current)
}
