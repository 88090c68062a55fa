use crate::error::workflow::{ResolvePropertyError, WorkflowExtractionError};
use crate::model::workflow::{PropertiesTable, PropertyValue, UnitDescription, WorkflowDescription};
use crate::payload::ArrayLoader;
use std::path::{Component, Path};

/// Key prefix marking a property whose value names a binary payload file.
const LINK_PREFIX: &str = "link_to_";

/// Reserved top-level key holding the ordered unit sequence.
const UNITS_KEY: &str = "Units";

/// Reserved per-unit key holding the unit's name.
const UNIT_NAME_KEY: &str = "Name";

/// Resolves one yaml mapping into a properties table.
///
/// A key starting with `link_to_` names a payload file (relative to the
/// workspace) in its value; the loaded array is stored under the key with the
/// prefix stripped. Everything else maps per literal form, with sequences and
/// mappings resolved recursively, so link properties nest.
pub fn resolve_table(
    mapping: &serde_yaml::Mapping,
    workspace_root: &Path,
    arrays: &dyn ArrayLoader,
) -> Result<PropertiesTable, ResolvePropertyError> {
    resolve_entries(mapping.iter(), workspace_root, arrays)
}

fn resolve_entries<'a>(
    entries: impl Iterator<Item = (&'a serde_yaml::Value, &'a serde_yaml::Value)>,
    workspace_root: &Path,
    arrays: &dyn ArrayLoader,
) -> Result<PropertiesTable, ResolvePropertyError> {
    let mut table = PropertiesTable::new();
    for (key, value) in entries {
        let key = match key {
            serde_yaml::Value::String(key) => key.as_str(),
            other => return Err(ResolvePropertyError::NonStringKey(other.clone())),
        };
        let (name, resolved) = match key.strip_prefix(LINK_PREFIX) {
            Some(name) => {
                if name.is_empty() {
                    return Err(ResolvePropertyError::EmptyLinkName);
                }
                let file = match value {
                    serde_yaml::Value::String(file) => file,
                    _ => return Err(ResolvePropertyError::LinkTargetNotText(key.to_string())),
                };
                // payloads are addressed relative to the workspace, like the
                // archive entries they arrived as
                let file = Path::new(file);
                if file.is_absolute()
                    || file
                        .components()
                        .any(|component| matches!(component, Component::ParentDir))
                {
                    return Err(ResolvePropertyError::LinkEscapesWorkspace(key.to_string()));
                }
                let array = arrays.load(&workspace_root.join(file)).map_err(|err| {
                    ResolvePropertyError::LoadArray {
                        key: key.to_string(),
                        source: err,
                    }
                })?;
                (name.to_string(), PropertyValue::FloatArray(array))
            }
            None => (
                key.to_string(),
                resolve_value(key, value, workspace_root, arrays)?,
            ),
        };
        if table.insert(name.clone(), resolved).is_some() {
            return Err(ResolvePropertyError::DuplicateProperty(name));
        }
    }
    Ok(table)
}

fn resolve_value(
    key: &str,
    value: &serde_yaml::Value,
    workspace_root: &Path,
    arrays: &dyn ArrayLoader,
) -> Result<PropertyValue, ResolvePropertyError> {
    match value {
        serde_yaml::Value::Null => Err(ResolvePropertyError::NullProperty(key.to_string())),
        serde_yaml::Value::Bool(flag) => Ok(PropertyValue::Boolean(*flag)),
        serde_yaml::Value::Number(number) => number
            .as_f64()
            .map(PropertyValue::Number)
            .ok_or_else(|| ResolvePropertyError::UnrepresentableNumber(key.to_string())),
        serde_yaml::Value::String(text) => Ok(PropertyValue::Text(text.clone())),
        serde_yaml::Value::Sequence(items) => {
            let mut resolved = Vec::with_capacity(items.len());
            for item in items {
                resolved.push(resolve_value(key, item, workspace_root, arrays)?);
            }
            Ok(PropertyValue::List(resolved))
        }
        serde_yaml::Value::Mapping(mapping) => {
            resolve_table(mapping, workspace_root, arrays).map(PropertyValue::Map)
        }
        serde_yaml::Value::Tagged(_) => Err(ResolvePropertyError::TaggedProperty(key.to_string())),
    }
}

/// Assembles a parsed workflow document into a `WorkflowDescription`.
///
/// The document root must be a mapping with a `Units` sequence; every other
/// top-level entry becomes a workflow property. Each unit carries its `Name`
/// plus its own properties, in document order.
pub fn assemble_workflow(
    document_root: &serde_yaml::Value,
    workspace_root: &Path,
    arrays: &dyn ArrayLoader,
) -> Result<WorkflowDescription, WorkflowExtractionError> {
    let root = document_root
        .as_mapping()
        .ok_or(WorkflowExtractionError::RootNotAMapping)?;

    let unit_entries = root
        .get(UNITS_KEY)
        .ok_or(WorkflowExtractionError::MissingUnitsSection)?
        .as_sequence()
        .ok_or(WorkflowExtractionError::UnitsNotASequence)?;

    let properties = resolve_entries(
        root.iter().filter(|(key, _)| key.as_str() != Some(UNITS_KEY)),
        workspace_root,
        arrays,
    )
    .map_err(WorkflowExtractionError::ResolveWorkflowProperty)?;

    let mut units = Vec::with_capacity(unit_entries.len());
    for (index, entry) in unit_entries.iter().enumerate() {
        let mapping = entry
            .as_mapping()
            .ok_or(WorkflowExtractionError::UnitNotAMapping(index))?;
        let name = match mapping.get(UNIT_NAME_KEY) {
            None => return Err(WorkflowExtractionError::UnitMissingName(index)),
            Some(serde_yaml::Value::String(name)) => name.clone(),
            Some(_) => return Err(WorkflowExtractionError::UnitNameNotText(index)),
        };
        let properties = resolve_entries(
            mapping
                .iter()
                .filter(|(key, _)| key.as_str() != Some(UNIT_NAME_KEY)),
            workspace_root,
            arrays,
        )
        .map_err(|err| WorkflowExtractionError::ResolveUnitProperty {
            name: name.clone(),
            source: err,
        })?;
        units.push(UnitDescription { name, properties });
    }

    Ok(WorkflowDescription { properties, units })
}
