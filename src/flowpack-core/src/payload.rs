use crate::error::payload::LoadArrayError;
use crate::fs;
use crate::model::workflow::FloatArray;
use std::path::Path;

/// Loads a binary float payload referenced by a `link_to_` property.
pub trait ArrayLoader {
    fn load(&self, file: &Path) -> Result<FloatArray, LoadArrayError>;
}

/// Loader for the raw payload format: densely packed native-byte-order
/// 32-bit floats, no header and no length prefix. The element count is the
/// byte length divided by four; anything else is a malformed payload.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawArrayLoader;

impl ArrayLoader for RawArrayLoader {
    fn load(&self, file: &Path) -> Result<FloatArray, LoadArrayError> {
        let bytes = fs::read(file)?;
        if bytes.len() % 4 != 0 {
            return Err(LoadArrayError::InvalidPayloadLength {
                path: file.to_path_buf(),
                len: bytes.len(),
            });
        }
        let values = bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect::<Vec<f32>>();
        Ok(FloatArray::from(values))
    }
}
