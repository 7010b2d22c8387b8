use thiserror::Error;

/// Main error type for the replay harness
#[derive(Error, Debug)]
pub enum HarnessError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file could not be parsed
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Outbound HTTP call failed (connection, DNS, non-2xx status)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body does not match the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A question record has no text entry for the requested language
    #[error("question {id} has no \"{lang}\" text")]
    MissingLanguage { id: String, lang: String },
}

/// Convenient Result type using HarnessError
pub type Result<T> = std::result::Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HarnessError::Dataset("unexpected end of file".to_string());
        assert!(err.to_string().contains("Dataset error"));
        assert!(err.to_string().contains("unexpected end of file"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HarnessError = io_err.into();
        assert!(matches!(err, HarnessError::Io(_)));
    }

    #[test]
    fn test_missing_language_names_the_record() {
        let err = HarnessError::MissingLanguage {
            id: "42".to_string(),
            lang: "en".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("42"));
        assert!(msg.contains("\"en\""));
    }
}
