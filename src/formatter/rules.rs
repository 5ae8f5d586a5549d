//! Substitution passes, in the order the formatter applies them

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Pixels of left margin per leading space of a bullet line
pub const BULLET_INDENT_PX: usize = 10;

static HEADING_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\*\*(.*?)\*\*:").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\*\*(.*?)\*\*").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static STEP_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\*\*STEP (\d+)\*\*:").unwrap());
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());
static DOUBLE_CURLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\{\{[\s\S]*?\}\})").unwrap());
static EXPLANATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\{[\s\S]*?"explanation":.*?\})"#).unwrap());
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^( *)- (.+)").unwrap());
static LIST_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)((<li.*?</li>\s*)+)").unwrap());
static LIST_SEAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</ul>\s*<ul>").unwrap());

/// A single named text transform
pub struct Pass {
    pub name: &'static str,
    pub apply: fn(&str) -> Cow<'_, str>,
}

/// Every pass, in application order
pub static PASSES: &[Pass] = &[
    Pass {
        name: "headings",
        apply: headings,
    },
    Pass {
        name: "bold",
        apply: bold,
    },
    Pass {
        name: "italic",
        apply: italic,
    },
    Pass {
        name: "step labels",
        apply: step_labels,
    },
    Pass {
        name: "code fences",
        apply: code_fences,
    },
    Pass {
        name: "double curly blocks",
        apply: double_curly_blocks,
    },
    Pass {
        name: "explanation blocks",
        apply: explanation_blocks,
    },
    Pass {
        name: "bullets",
        apply: bullets,
    },
    Pass {
        name: "list wrapping",
        apply: wrap_lists,
    },
];

/// `**Heading**:` and `**Heading**` at the start of a line
pub fn headings(text: &str) -> Cow<'_, str> {
    match HEADING_COLON.replace_all(text, "<strong>$1:</strong>") {
        Cow::Borrowed(_) => HEADING.replace_all(text, "<strong>$1</strong>"),
        Cow::Owned(replaced) => {
            Cow::Owned(HEADING.replace_all(&replaced, "<strong>$1</strong>").into_owned())
        }
    }
}

pub fn bold(text: &str) -> Cow<'_, str> {
    BOLD.replace_all(text, "<strong>$1</strong>")
}

/// Also turns a stray `**` pair left over by [`bold`] into an empty `<em></em>`
pub fn italic(text: &str) -> Cow<'_, str> {
    ITALIC.replace_all(text, "<em>$1</em>")
}

/// `**STEP n**:` labels.
///
/// Runs after [`headings`] and [`bold`], which already rewrite any `**...**`
/// run, so this only fires for label text neither of them reached.
pub fn step_labels(text: &str) -> Cow<'_, str> {
    STEP_LABEL.replace_all(text, "<strong>STEP $1:</strong>")
}

pub fn code_fences(text: &str) -> Cow<'_, str> {
    CODE_FENCE.replace_all(text, r#"<pre class="dark-pre">$1</pre>"#)
}

/// `{{ ... }}` blocks, braces included
pub fn double_curly_blocks(text: &str) -> Cow<'_, str> {
    DOUBLE_CURLY.replace_all(text, r#"<pre class="dark-pre">$1</pre>"#)
}

/// Brace spans carrying an `"explanation":` key.
///
/// Heuristic only: the span runs from the first `{` to the first `}` after
/// the key, with no attempt to balance nested braces.
pub fn explanation_blocks(text: &str) -> Cow<'_, str> {
    EXPLANATION.replace_all(text, r#"<pre class="dark-pre">$1</pre>"#)
}

/// `- item` lines become list items indented by their leading spaces
pub fn bullets(text: &str) -> Cow<'_, str> {
    BULLET.replace_all(text, |caps: &Captures| {
        let spaces = caps[1].len();
        format!(
            r#"<li style="margin-left:{}px">{}</li>"#,
            spaces * BULLET_INDENT_PX,
            &caps[2]
        )
    })
}

/// Wraps runs of list items in `<ul>`, then merges containers that only
/// whitespace separates
pub fn wrap_lists(text: &str) -> Cow<'_, str> {
    match LIST_RUN.replace_all(text, "<ul>$1</ul>") {
        Cow::Borrowed(_) => Cow::Borrowed(text),
        Cow::Owned(wrapped) => Cow::Owned(LIST_SEAM.replace_all(&wrapped, "").into_owned()),
    }
}
