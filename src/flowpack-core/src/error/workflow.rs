use crate::error::document::ParseDocumentError;
use crate::error::payload::LoadArrayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolvePropertyError {
    #[error("property key {0:?} is not a string")]
    NonStringKey(serde_yaml::Value),

    #[error("property '{0}' is null")]
    NullProperty(String),

    #[error("property '{0}' carries a yaml tag")]
    TaggedProperty(String),

    #[error("property '{0}' holds a number that cannot be represented as a 64-bit float")]
    UnrepresentableNumber(String),

    #[error("link property '{0}' must name its payload file as a string")]
    LinkTargetNotText(String),

    #[error("property key 'link_to_' is missing a property name after the prefix")]
    EmptyLinkName,

    #[error("link property '{0}' names a payload outside the workspace")]
    LinkEscapesWorkspace(String),

    #[error("failed to load the payload for property '{key}'")]
    LoadArray {
        key: String,
        source: LoadArrayError,
    },

    #[error("duplicate property '{0}'")]
    DuplicateProperty(String),
}

#[derive(Error, Debug)]
pub enum WorkflowExtractionError {
    #[error(transparent)]
    ParseDocument(#[from] ParseDocumentError),

    #[error("workflow document root is not a mapping")]
    RootNotAMapping,

    #[error("workflow document has no 'Units' section")]
    MissingUnitsSection,

    #[error("the 'Units' section is not a sequence")]
    UnitsNotASequence,

    #[error("unit #{0} is not a mapping")]
    UnitNotAMapping(usize),

    #[error("unit #{0} has no 'Name'")]
    UnitMissingName(usize),

    #[error("the 'Name' of unit #{0} is not a string")]
    UnitNameNotText(usize),

    #[error("failed to resolve workflow property")]
    ResolveWorkflowProperty(#[source] ResolvePropertyError),

    #[error("failed to resolve a property of unit '{name}'")]
    ResolveUnitProperty {
        name: String,
        source: ResolvePropertyError,
    },
}
