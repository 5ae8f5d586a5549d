use std::path::PathBuf;

use crate::cli::{is_stdin, read_input, OutputArgs};
use crate::config;
use crate::error::{MdCompareError, Result};
use crate::table::{self, CompareRequest};

/// Options for the compare command
#[derive(Debug)]
pub struct CompareOptions {
    pub left: PathBuf,
    pub right: PathBuf,
    pub format: bool,
    pub left_title: Option<String>,
    pub right_title: Option<String>,
}

/// Render two texts side by side
pub fn run(options: CompareOptions, output: OutputArgs) -> Result<()> {
    if is_stdin(Some(&options.left)) && is_stdin(Some(&options.right)) {
        return Err(MdCompareError::Input(
            "Only one side of the comparison can be read from stdin".to_string(),
        ));
    }

    let config = config::resolve(output.config.clone())?;

    let left = read_input(Some(&options.left))?;
    let right = read_input(Some(&options.right))?;

    let left_title = options
        .left_title
        .unwrap_or_else(|| config.titles.left.clone());
    let right_title = options
        .right_title
        .unwrap_or_else(|| config.titles.right.clone());

    let request = CompareRequest::new(left, right)
        .formatted(options.format || config.output.format)
        .titles(left_title, right_title);

    let mut sink = output.sink(&config)?;
    table::render(&request, sink.as_mut())
}
