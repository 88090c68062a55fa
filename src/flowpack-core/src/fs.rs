use crate::error::fs::{CreateDirAllError, ReadFileError};
use std::path::Path;

pub fn create_dir_all(path: &Path) -> Result<(), CreateDirAllError> {
    std::fs::create_dir_all(path).map_err(|err| CreateDirAllError {
        path: path.to_path_buf(),
        source: err,
    })
}

pub fn read(path: &Path) -> Result<Vec<u8>, ReadFileError> {
    std::fs::read(path).map_err(|err| ReadFileError {
        path: path.to_path_buf(),
        source: err,
    })
}
