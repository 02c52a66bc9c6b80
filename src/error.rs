use miette::Diagnostic;
use thiserror::Error;

/// Main error type for portfoliodb operations
#[derive(Error, Diagnostic, Debug)]
pub enum PortfolioError {
    #[error("IO error: {0}")]
    #[diagnostic(code(portfoliodb::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(portfoliodb::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(portfoliodb::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(portfoliodb::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(portfoliodb::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

/// A problem found while parsing a description that does not stop the parse.
///
/// The parser always produces a document; these are handed back next to it
/// so callers can decide how loud to be about them.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum RecoverableError {
    #[error("Invalid YAML in front matter: {message}")]
    #[diagnostic(
        code(portfoliodb::metadata),
        help("Front matter must be a YAML mapping between two --- lines")
    )]
    MetadataDecode { message: String },

    #[error("{field} `{raw}` is not a number between 0 and 65535, using 0")]
    #[diagnostic(code(portfoliodb::numeric_field))]
    NumericField { field: &'static str, raw: String },
}
