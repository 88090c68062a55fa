use crate::error::workspace::{CleanupError, CreateWorkspaceError};
use crate::fs;
use std::path::Path;
use tempfile::TempDir;

const WORKSPACE_PREFIX: &str = "flowpack-";

/// A uniquely named transient directory holding one load's extracted files.
///
/// Closing the workspace removes the directory and everything under it and
/// reports failures; dropping an unclosed workspace still removes it
/// best-effort, so extracted files never outlive a load on any exit path.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Creates a fresh workspace under `parent`, or under the system temp
    /// directory when no parent is given. A missing parent is created first.
    pub fn create(parent: Option<&Path>) -> Result<Self, CreateWorkspaceError> {
        let dir = match parent {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                tempfile::Builder::new()
                    .prefix(WORKSPACE_PREFIX)
                    .tempdir_in(parent)
                    .map_err(|err| CreateWorkspaceError::CreateTempDirFailed {
                        parent: parent.to_path_buf(),
                        source: err,
                    })?
            }
            None => tempfile::Builder::new()
                .prefix(WORKSPACE_PREFIX)
                .tempdir()
                .map_err(|err| CreateWorkspaceError::CreateTempDirFailed {
                    parent: std::env::temp_dir(),
                    source: err,
                })?,
        };
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Removes the workspace directory and everything under it.
    pub fn close(self) -> Result<(), CleanupError> {
        let path = self.dir.path().to_path_buf();
        self.dir
            .close()
            .map_err(|err| CleanupError { path, source: err })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_uniquely_named_directories() {
        let parent = tempfile::tempdir().unwrap();
        let first = Workspace::create(Some(parent.path())).unwrap();
        let second = Workspace::create(Some(parent.path())).unwrap();
        assert!(first.root().is_dir());
        assert!(second.root().is_dir());
        assert_ne!(first.root(), second.root());
        let name = first
            .root()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert!(name.starts_with("flowpack-"));
    }

    #[test]
    fn close_removes_the_directory_and_its_contents() {
        let workspace = Workspace::create(None).unwrap();
        let root = workspace.root().to_path_buf();
        std::fs::write(root.join("payload.bin"), b"0123").unwrap();
        workspace.close().unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn dropping_an_unclosed_workspace_removes_the_directory() {
        let workspace = Workspace::create(None).unwrap();
        let root = workspace.root().to_path_buf();
        drop(workspace);
        assert!(!root.exists());
    }

    #[test]
    fn creates_a_missing_parent_directory() {
        let parent = tempfile::tempdir().unwrap();
        let nested = parent.path().join("scratch").join("loads");
        let workspace = Workspace::create(Some(&nested)).unwrap();
        assert!(workspace.root().starts_with(&nested));
    }
}
