use leadboard_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid lead at index {index}: {source}")]
    InvalidLead {
        index: usize,
        #[source]
        source: CoreError,
    },
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("dataset not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, DatasetError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetErrorKind {
    Io,
    Parse,
    InvalidLead,
    MissingHomeDir,
    InvalidDataPath,
    NotFound,
}

impl DatasetError {
    pub fn kind(&self) -> DatasetErrorKind {
        match self {
            DatasetError::Io(_) => DatasetErrorKind::Io,
            DatasetError::Parse { .. } => DatasetErrorKind::Parse,
            DatasetError::InvalidLead { .. } => DatasetErrorKind::InvalidLead,
            DatasetError::MissingHomeDir => DatasetErrorKind::MissingHomeDir,
            DatasetError::InvalidDataPath(_) => DatasetErrorKind::InvalidDataPath,
            DatasetError::NotFound(_) => DatasetErrorKind::NotFound,
        }
    }
}
