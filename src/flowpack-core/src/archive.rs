use crate::error::archive::ArchiveExtractionError;
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::Path;
use tar::{Archive, EntryType};

/// Unpacks a workflow package into a destination directory.
///
/// Implementations must be all-or-nothing: any entry failure aborts the
/// extraction with an error, and whatever was already written is left for the
/// workspace teardown to remove.
pub trait ArchiveExtractor {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<(), ArchiveExtractionError>;
}

/// Extractor for the standard package container, a gzip-compressed tarball.
///
/// Only regular files and directories are accepted; links, devices and other
/// special entries have no meaning in a workflow package. Entry paths are kept
/// relative to the destination and an entry that would land outside it fails
/// the extraction.
#[derive(Clone, Copy, Debug, Default)]
pub struct TarGzArchiveExtractor;

impl ArchiveExtractor for TarGzArchiveExtractor {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<(), ArchiveExtractionError> {
        let file = File::open(archive).map_err(|err| ArchiveExtractionError::OpenArchiveFailed {
            path: archive.to_path_buf(),
            source: err,
        })?;
        let mut container = Archive::new(GzDecoder::new(file));
        let entries =
            container
                .entries()
                .map_err(|err| ArchiveExtractionError::ReadEntriesFailed {
                    path: archive.to_path_buf(),
                    source: err,
                })?;
        for entry in entries {
            let mut entry = entry.map_err(|err| ArchiveExtractionError::ReadEntryFailed {
                path: archive.to_path_buf(),
                source: err,
            })?;
            let entry_path = entry
                .path()
                .map_err(|err| ArchiveExtractionError::ReadEntryFailed {
                    path: archive.to_path_buf(),
                    source: err,
                })?
                .into_owned();
            let entry_type = entry.header().entry_type();
            if !matches!(entry_type, EntryType::Regular | EntryType::Directory) {
                return Err(ArchiveExtractionError::UnsupportedEntryType {
                    path: entry_path,
                    entry_type,
                });
            }
            let unpacked = entry.unpack_in(destination).map_err(|err| {
                ArchiveExtractionError::UnpackEntryFailed {
                    path: entry_path.clone(),
                    source: err,
                }
            })?;
            if !unpacked {
                return Err(ArchiveExtractionError::EntryEscapesDestination { path: entry_path });
            }
        }
        Ok(())
    }
}
