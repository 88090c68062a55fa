use crate::archive::{ArchiveExtractor, TarGzArchiveExtractor};
use crate::document::{DocumentParser, YamlDocumentParser, WORKFLOW_DOCUMENT_FILE};
use crate::error::archive::ArchiveExtractionError;
use crate::error::load::LoadWorkflowError;
use crate::error::workflow::WorkflowExtractionError;
use crate::model::workflow::WorkflowDescription;
use crate::payload::{ArrayLoader, RawArrayLoader};
use crate::resolve::assemble_workflow;
use crate::workspace::Workspace;
use slog::{debug, warn, Logger};
use std::path::{Path, PathBuf};

/// Loads workflow packages and keeps the most recently loaded description.
///
/// Every load runs the same pipeline: create a fresh workspace, extract the
/// package into it, parse the workflow document, resolve properties and
/// payloads into a description, then remove the workspace. The workspace is
/// torn down on every path; a failed load leaves the loader holding the empty
/// default description.
pub struct WorkflowLoader {
    logger: Logger,
    extractor: Box<dyn ArchiveExtractor>,
    parser: Box<dyn DocumentParser>,
    arrays: Box<dyn ArrayLoader>,
    workspace_parent: Option<PathBuf>,
    description: WorkflowDescription,
}

impl WorkflowLoader {
    /// A loader with the standard collaborators: tar.gz extraction, yaml
    /// documents, raw float payloads, workspaces under the system temp dir.
    pub fn new(logger: Logger) -> Self {
        Self::builder().with_logger(logger).build()
    }

    pub fn builder() -> WorkflowLoaderBuilder {
        WorkflowLoaderBuilder::new()
    }

    /// Loads a workflow package, replacing the stored description on success.
    ///
    /// When extraction and resolution succeed but the workspace removal
    /// fails, the new description is kept and the removal failure is returned
    /// as `LoadWorkflowError::Cleanup`. When the load itself fails, the load
    /// error is returned and a removal failure is only logged.
    pub fn load(&mut self, archive: &Path) -> Result<(), LoadWorkflowError> {
        let workspace =
            Workspace::create(self.workspace_parent.as_deref()).map_err(ArchiveExtractionError::from)?;

        let outcome = self.run_pipeline(archive, &workspace);
        let cleanup = workspace.close();

        match outcome {
            Ok(description) => {
                self.description = description;
                cleanup?;
                Ok(())
            }
            Err(err) => {
                self.description = WorkflowDescription::default();
                if let Err(cleanup_err) = cleanup {
                    warn!(
                        self.logger,
                        "workspace removal failed after a load error: {}", cleanup_err
                    );
                }
                Err(err)
            }
        }
    }

    fn run_pipeline(
        &self,
        archive: &Path,
        workspace: &Workspace,
    ) -> Result<WorkflowDescription, LoadWorkflowError> {
        debug!(
            self.logger,
            "extracting {} into {}",
            archive.display(),
            workspace.root().display()
        );
        self.extractor.extract(archive, workspace.root())?;

        let document = workspace.root().join(WORKFLOW_DOCUMENT_FILE);
        debug!(self.logger, "parsing {}", document.display());
        let document_root = self
            .parser
            .parse(&document)
            .map_err(WorkflowExtractionError::from)?;

        let description =
            assemble_workflow(&document_root, workspace.root(), self.arrays.as_ref())?;
        debug!(
            self.logger,
            "assembled workflow with {} units and {} properties",
            description.units.len(),
            description.properties.len()
        );
        Ok(description)
    }

    /// A clone of the most recently loaded description, or the empty default.
    pub fn workflow_description(&self) -> WorkflowDescription {
        self.description.clone()
    }

    /// Moves the loaded description out, leaving the empty default behind.
    pub fn take_workflow_description(&mut self) -> WorkflowDescription {
        std::mem::take(&mut self.description)
    }

    /// Renders the loaded workflow's structure, float arrays as shape only.
    pub fn print_workflow_structure(&self) -> String {
        self.description.to_string()
    }
}

pub struct WorkflowLoaderBuilder {
    logger: Option<Logger>,
    extractor: Box<dyn ArchiveExtractor>,
    parser: Box<dyn DocumentParser>,
    arrays: Box<dyn ArrayLoader>,
    workspace_parent: Option<PathBuf>,
}

impl WorkflowLoaderBuilder {
    pub fn new() -> Self {
        Self {
            logger: None,
            extractor: Box::new(TarGzArchiveExtractor),
            parser: Box::new(YamlDocumentParser),
            arrays: Box::new(RawArrayLoader),
            workspace_parent: None,
        }
    }

    pub fn with_logger(self, logger: Logger) -> Self {
        Self {
            logger: Some(logger),
            ..self
        }
    }

    /// Creates per-load workspaces under `dir` instead of the system temp dir.
    pub fn with_workspace_in(self, dir: PathBuf) -> Self {
        Self {
            workspace_parent: Some(dir),
            ..self
        }
    }

    pub fn with_extractor(self, extractor: Box<dyn ArchiveExtractor>) -> Self {
        Self { extractor, ..self }
    }

    pub fn with_document_parser(self, parser: Box<dyn DocumentParser>) -> Self {
        Self { parser, ..self }
    }

    pub fn with_array_loader(self, arrays: Box<dyn ArrayLoader>) -> Self {
        Self { arrays, ..self }
    }

    pub fn build(self) -> WorkflowLoader {
        WorkflowLoader {
            logger: self
                .logger
                .unwrap_or_else(|| Logger::root(slog::Discard, slog::o!())),
            extractor: self.extractor,
            parser: self.parser,
            arrays: self.arrays,
            workspace_parent: self.workspace_parent,
            description: WorkflowDescription::default(),
        }
    }
}

impl Default for WorkflowLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
