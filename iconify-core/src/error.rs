//! Error types for the Iconify CLI core

use thiserror::Error;

/// Core error type for Iconify operations
#[derive(Error, Debug)]
pub enum IconifyError {
    /// A line of a configuration file did not match any known form
    #[error("Config file parse error: {message} (at line {line})")]
    ConfigFileParse { line: usize, message: String },

    /// A value in a configuration section is missing, ambiguous or has the wrong type
    #[error("Config section error: {0}")]
    ConfigSection(String),

    /// Template key outside the built-in set
    #[error("Unknown template '{0}', possible templates are raw, raw-ts, svg, vue, php, jsx, tsx")]
    UnknownTemplate(String),

    /// Stored template payload is not valid base64 or not valid UTF-8
    #[error("Malformed template: {0}")]
    MalformedTemplate(String),

    /// Naming strategy outside the closed set
    #[error("Unknown naming strategy '{0}', possible strategies are 'lower', 'upper', 'camel', 'pascal' or 'kebab'")]
    UnknownNamingStrategy(String),

    /// Placement strategy outside the closed set
    #[error("Unknown placement strategy '{0}', possible strategies are 'flat', 'prefixed' or 'grouped'")]
    UnknownPlacementStrategy(String),

    /// Icon identifier is not of the form `prefix:name`
    #[error("Icon identifier '{0}' is in a wrong format, expected 'prefix:name'")]
    InvalidIconId(String),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Iconify operations
pub type Result<T> = std::result::Result<T, IconifyError>;
