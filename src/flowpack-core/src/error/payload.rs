use crate::error::fs::ReadFileError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadArrayError {
    #[error("failed to read float payload")]
    ReadPayloadFailed(#[from] ReadFileError),

    #[error("payload {path} is {len} bytes, which is not a whole number of 32-bit floats")]
    InvalidPayloadLength { path: PathBuf, len: usize },
}
