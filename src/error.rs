use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum GenError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pxgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(pxgen::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pxgen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(pxgen::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;
