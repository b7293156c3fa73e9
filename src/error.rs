use miette::Diagnostic;
use thiserror::Error;

/// Main error type for nine-patch operations
#[derive(Error, Diagnostic, Debug)]
pub enum NinePatchError {
    #[error("IO error: {0}")]
    #[diagnostic(code(ninepatch::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(ninepatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(code(ninepatch::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid bitmap: {message}")]
    #[diagnostic(code(ninepatch::bitmap))]
    InvalidBitmap {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Pixel ({x}, {y}) is not a border tick pixel")]
    #[diagnostic(
        code(ninepatch::border),
        help("Ticks live on the outer 1-px border, excluding the four corners")
    )]
    NotOnBorder { x: u32, y: u32 },

    #[error("Parse error: {message}")]
    #[diagnostic(code(ninepatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Nine-patch has {count} corrupt chunk(s)")]
    #[diagnostic(
        code(ninepatch::corrupt),
        help("Fix the border ticks so every stretch band is a single solid black run")
    )]
    Corrupt { count: usize },

    #[error("Validation error: {message}")]
    #[diagnostic(code(ninepatch::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, NinePatchError>;
