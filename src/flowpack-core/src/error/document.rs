use crate::error::fs::ReadFileError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseDocumentError {
    #[error("failed to read workflow document")]
    ReadDocumentFailed(#[from] ReadFileError),

    #[error("failed to parse contents of {path} as yaml")]
    ParseYamlFailed {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
