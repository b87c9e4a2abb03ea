use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    #[error("{path}: required column '{column}' not found in csv header")]
    MissingColumn { path: PathBuf, column: String },

    #[error("{path}: {message}")]
    UnrecognizedEquipmentType { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;

impl IngestError {
    /// Classify an I/O error from opening `path`.
    pub(crate) fn from_open(path: &std::path::Path, error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            }
            _ => IngestError::CsvParse {
                path: path.to_path_buf(),
                message: error.to_string(),
            },
        }
    }
}
