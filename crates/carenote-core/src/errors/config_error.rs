/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid configuration for {field}: {message}")]
    ConfigurationError { field: String, message: String },
}
