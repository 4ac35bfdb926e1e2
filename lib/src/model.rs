//! Output data model: folded property values, per-resource records, and
//! the assembled conversion result.

use crate::registry::{PropertyDescriptor, TypeDescriptor};
use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A property value on a resource: a single scalar until a second triple
/// for the same (subject, property) pair arrives, then an ordered list.
/// List order reflects triple stream order, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Single(String),
    List(Vec<String>),
}

impl Value {
    /// The value itself for scalars, the first element for lists. The
    /// label pass only ever consumes one element of a multi-valued
    /// property; this is a documented policy, not an attempt to pick a
    /// best value.
    pub fn first(&self) -> &str {
        match self {
            Value::Single(value) => value,
            Value::List(values) => values.first().map(String::as_str).unwrap_or_default(),
        }
    }

    /// Fold another value in: a scalar becomes a two-element list, a
    /// list grows by one.
    pub(crate) fn push(&mut self, value: String) {
        match self {
            Value::Single(existing) => {
                *self = Value::List(vec![std::mem::take(existing), value]);
            }
            Value::List(values) => values.push(value),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Single(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Single(value)
    }
}

/// One Exhibit item: the shortened subject id, the label resolved in the
/// second pass, and the folded properties keyed by effective short name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    id: String,
    label: Option<String>,
    properties: IndexMap<String, Value>,
}

impl ResourceRecord {
    pub(crate) fn new(id: String) -> Self {
        ResourceRecord {
            id,
            label: None,
            properties: IndexMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The resolved label. `None` only before the label pass has run;
    /// every record in a returned [`crate::ConversionResult`] has one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.properties.get(property)
    }

    pub fn properties(&self) -> &IndexMap<String, Value> {
        &self.properties
    }

    pub(crate) fn push_value(&mut self, property: &str, value: String) {
        match self.properties.get_mut(property) {
            Some(existing) => existing.push(value),
            None => {
                self.properties
                    .insert(property.to_string(), Value::Single(value));
            }
        }
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = Some(label);
    }
}

// Records serialize flat: id, the resolved label, then the remaining
// properties in insertion order. The raw "label" property key is elided
// once a label has been resolved, which replaces it in the output.
impl Serialize for ResourceRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        if let Some(label) = &self.label {
            map.serialize_entry("label", label)?;
        }
        for (key, value) in &self.properties {
            if key == "label" && self.label.is_some() {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The conversion's only externally visible product: the item list plus
/// the two descriptor side tables. Serializes to the Exhibit JSON
/// document shape.
#[derive(Debug, Serialize)]
pub struct ConversionResult {
    pub items: Vec<ResourceRecord>,
    pub types: IndexMap<String, TypeDescriptor>,
    pub properties: IndexMap<String, PropertyDescriptor>,
}

impl ConversionResult {
    /// Look up an item by its shortened id.
    pub fn item(&self, id: &str) -> Option<&ResourceRecord> {
        self.items.iter().find(|record| record.id() == id)
    }
}
