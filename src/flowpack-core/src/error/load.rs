use crate::error::archive::ArchiveExtractionError;
use crate::error::workflow::WorkflowExtractionError;
use crate::error::workspace::CleanupError;
use thiserror::Error;

/// The three failure kinds a load can surface, in pipeline order.
#[derive(Error, Debug)]
pub enum LoadWorkflowError {
    #[error("failed to unpack workflow package")]
    ArchiveExtraction(#[from] ArchiveExtractionError),

    #[error("failed to load workflow description from package")]
    WorkflowExtraction(#[from] WorkflowExtractionError),

    #[error(transparent)]
    Cleanup(#[from] CleanupError),
}
