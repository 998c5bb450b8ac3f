use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while locating, extracting or parsing the dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Neither the CSV nor its backing archive exist.
    #[error("File not found: {}", .path.display())]
    MissingArchive { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
