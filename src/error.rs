use thiserror::Error;

/// mdcompare error types
#[derive(Error, Debug)]
pub enum MdCompareError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Display sink error: {0}")]
    Sink(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for mdcompare operations
pub type Result<T> = std::result::Result<T, MdCompareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = MdCompareError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_error_display_input() {
        let err = MdCompareError::Input("both sides read stdin".to_string());
        assert_eq!(err.to_string(), "Input error: both sides read stdin");
    }

    #[test]
    fn test_error_display_sink() {
        let err = MdCompareError::Sink("closed".to_string());
        assert_eq!(err.to_string(), "Display sink error: closed");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: MdCompareError = io.into();
        assert!(err.to_string().starts_with("IO error:"));
    }
}
