use crate::error::document::ParseDocumentError;
use crate::fs;
use std::path::Path;

/// Relative path of the workflow document inside an extracted package.
pub const WORKFLOW_DOCUMENT_FILE: &str = "workflow.yaml";

/// Parses an extracted workflow document into a yaml node tree.
pub trait DocumentParser {
    fn parse(&self, file: &Path) -> Result<serde_yaml::Value, ParseDocumentError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct YamlDocumentParser;

impl DocumentParser for YamlDocumentParser {
    fn parse(&self, file: &Path) -> Result<serde_yaml::Value, ParseDocumentError> {
        let contents = fs::read(file)?;
        serde_yaml::from_slice(&contents).map_err(|err| ParseDocumentError::ParseYamlFailed {
            path: file.to_path_buf(),
            source: err,
        })
    }
}
