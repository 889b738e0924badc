use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Failed to list directory {}: {source}", path.display())]
    DirectoryReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode PNG image: {0}")]
    DecodeError(String),

    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StripError {
    /// True for failures tied to a single image file (open, decode, encode, save).
    pub fn is_image_io(&self) -> bool {
        matches!(
            self,
            StripError::InputReadError(_)
                | StripError::OutputWriteError(_)
                | StripError::DecodeError(_)
                | StripError::EncodeError(_)
                | StripError::IoError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StripError>;
