use crate::error::fs::CreateDirAllError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreateWorkspaceError {
    #[error(transparent)]
    EnsureParentDirExists(#[from] CreateDirAllError),

    #[error("failed to create workspace directory under {parent}")]
    CreateTempDirFailed {
        parent: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
#[error("failed to remove workspace directory {path} and its contents")]
pub struct CleanupError {
    pub path: PathBuf,
    pub source: std::io::Error,
}
