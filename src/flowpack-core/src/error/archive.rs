use crate::error::workspace::CreateWorkspaceError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveExtractionError {
    #[error(transparent)]
    CreateWorkspace(#[from] CreateWorkspaceError),

    #[error("failed to open archive {path}")]
    OpenArchiveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read entries of archive {path}")]
    ReadEntriesFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read an entry of archive {path}")]
    ReadEntryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("archive entry '{path}' has unsupported type {entry_type:?}")]
    UnsupportedEntryType {
        path: PathBuf,
        entry_type: tar::EntryType,
    },

    #[error("archive entry '{path}' escapes the extraction directory")]
    EntryEscapesDestination { path: PathBuf },

    #[error("failed to unpack archive entry '{path}'")]
    UnpackEntryFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}
