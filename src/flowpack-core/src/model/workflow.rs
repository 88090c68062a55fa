use std::collections::BTreeMap;
use std::fmt;

/// A dense block of 32-bit floats loaded from a binary payload file.
///
/// Payloads carry no header: the byte length of the file divided by four is
/// the element count. Arrays render as shape only (`float32[N]`) so that
/// structure dumps and logs stay readable for multi-megabyte weights.
#[derive(Clone, Default, PartialEq)]
pub struct FloatArray(Vec<f32>);

impl FloatArray {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for FloatArray {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}

impl fmt::Display for FloatArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "float32[{}]", self.0.len())
    }
}

impl fmt::Debug for FloatArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// One resolved property value from a workflow document.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    FloatArray(FloatArray),
    List(Vec<PropertyValue>),
    Map(PropertiesTable),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(text) => f.write_str(text),
            PropertyValue::Number(number) => write!(f, "{number}"),
            PropertyValue::Boolean(flag) => write!(f, "{flag}"),
            PropertyValue::FloatArray(array) => write!(f, "{array}"),
            PropertyValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            PropertyValue::Map(table) => {
                f.write_str("{")?;
                for (i, (key, value)) in table.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Properties of a workflow or of a single unit, keyed by property name.
pub type PropertiesTable = BTreeMap<String, PropertyValue>;

/// One processing stage of a workflow: a name plus its resolved properties.
///
/// The name is the unit's identity and never appears in `properties`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitDescription {
    pub name: String,
    pub properties: PropertiesTable,
}

/// A fully loaded workflow: top-level properties and an ordered list of
/// units, exactly as the document declared them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowDescription {
    pub properties: PropertiesTable,
    pub units: Vec<UnitDescription>,
}

impl fmt::Display for WorkflowDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.properties {
            writeln!(f, "{key}: {value}")?;
        }
        for unit in &self.units {
            writeln!(f)?;
            writeln!(f, "Unit name: {}", unit.name)?;
            for (key, value) in &unit.properties {
                writeln!(f, "{key}: {value}")?;
            }
        }
        Ok(())
    }
}
