use miette::Diagnostic;
use thiserror::Error;

/// Main error type for artgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum ArtError {
    #[error("IO error: {0}")]
    #[diagnostic(code(artgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(artgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// The encoder's error is kept as the source and shown in the message.
    #[error("Failed to write image {path}: {source}")]
    #[diagnostic(code(artgen::image))]
    Image {
        path: std::path::PathBuf,
        source: image::ImageError,
    },

    #[error("Division by zero: degenerate interval {interval}")]
    #[diagnostic(
        code(artgen::remap),
        help("Both the input and output intervals must have distinct endpoints")
    )]
    DivisionByZero { interval: String },

    #[error("Invalid tree: {message}")]
    #[diagnostic(code(artgen::tree))]
    InvalidTree {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(artgen::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ArtError>;
