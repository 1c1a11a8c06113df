use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to open {uri}: {source}")]
    Link {
        uri: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging error: {0}")]
    Logging(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let app_err: AppError = toml_err.into();
        assert!(app_err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Link {
            uri: "tel:123".to_string(),
            source: std::io::Error::other("no handler"),
        };
        assert_eq!(err.to_string(), "Failed to open tel:123: no handler");

        let err = AppError::Logging("subscriber already set".to_string());
        assert_eq!(err.to_string(), "Logging error: subscriber already set");
    }
}
