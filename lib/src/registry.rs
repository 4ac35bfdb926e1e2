//! Side-table registries for property and type short names. Each registry
//! owns one namespace mapping short names to canonical URIs, renaming on
//! collision, and accumulates the descriptor table included in the output
//! document.

use crate::consts;
use crate::shorten::rename;
use indexmap::IndexMap;
use oxigraph::model::TermRef;
use serde::Serialize;
use std::collections::HashMap;

/// Exhibit value type hint for a property: either a reference to another
/// item, or an interpretation of the property's literal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Item,
    Number,
    Boolean,
    Date,
    Text,
}

/// Mapping from literal datatype URIs to Exhibit value types. The default
/// table covers the common XSD datatypes; augment as required.
///
/// Plain literals (simple or language-tagged, which RDF 1.1 parsers
/// report with an xsd:string or rdf:langString datatype) never match the
/// table: their properties get no value type and are treated as plain
/// text downstream.
#[derive(Debug, Clone)]
pub struct LiteralTypeMap(HashMap<String, ValueType>);

impl Default for LiteralTypeMap {
    fn default() -> Self {
        let mut map = LiteralTypeMap::empty();
        map.insert(consts::XSD_DECIMAL.as_str(), ValueType::Number);
        map.insert(consts::XSD_INTEGER.as_str(), ValueType::Number);
        map.insert(consts::XSD_BOOLEAN.as_str(), ValueType::Boolean);
        map.insert(consts::XSD_DATETIME.as_str(), ValueType::Date);
        map.insert(consts::XSD_STRING.as_str(), ValueType::Text);
        map
    }
}

impl LiteralTypeMap {
    /// A map with no entries: every literal property ends up untyped.
    pub fn empty() -> Self {
        LiteralTypeMap(HashMap::new())
    }

    pub fn insert(&mut self, datatype: impl Into<String>, value_type: ValueType) {
        self.0.insert(datatype.into(), value_type);
    }

    pub fn get(&self, datatype: &str) -> Option<ValueType> {
        self.0.get(datatype).copied()
    }
}

/// Output side-table entry for a property short name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    pub uri: String,
    #[serde(rename = "valueType", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
}

/// Output side-table entry for a type short name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    pub uri: String,
}

/// Tracks the property short names in use for a conversion, their
/// canonical URIs, and inferred value types.
#[derive(Debug, Default)]
pub struct PropertyRegistry {
    used: HashMap<String, String>,
    descriptors: IndexMap<String, PropertyDescriptor>,
}

impl PropertyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one use of a predicate and return the effective short
    /// name to store the value under.
    ///
    /// If the proposed short name is already claimed by a different URI,
    /// it is renamed exactly once; the renamed name is not re-checked
    /// against a third pre-existing entry. The descriptor for the
    /// effective name is overwritten on every call, so when the same
    /// property is seen with varying object kinds across triples the last
    /// write wins.
    pub fn register(
        &mut self,
        predicate: &str,
        proposed: &str,
        object: TermRef,
        is_item: bool,
        literal_types: &LiteralTypeMap,
    ) -> String {
        let mut name = proposed.to_string();
        if let Some(existing) = self.used.get(&name) {
            if existing != predicate {
                name = rename(&name, predicate);
            }
        }

        let value_type = if is_item {
            Some(ValueType::Item)
        } else {
            literal_value_type(object, literal_types)
        };

        self.used.insert(name.clone(), predicate.to_string());
        self.descriptors.insert(
            name.clone(),
            PropertyDescriptor {
                uri: predicate.to_string(),
                value_type,
            },
        );
        name
    }

    pub fn descriptors(&self) -> &IndexMap<String, PropertyDescriptor> {
        &self.descriptors
    }
}

fn literal_value_type(object: TermRef, literal_types: &LiteralTypeMap) -> Option<ValueType> {
    match object {
        // plain literals carry no declared datatype worth mapping
        TermRef::Literal(lit)
            if lit.language().is_none() && lit.datatype() != consts::XSD_STRING =>
        {
            literal_types.get(lit.datatype().as_str())
        }
        _ => None,
    }
}

/// Tracks the type short names in use for a conversion. Same collision
/// and renaming rules as properties, in a separate namespace, and without
/// value-type inference.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    used: HashMap<String, String>,
    descriptors: IndexMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one use of a type value and return its effective short name.
    pub fn register(&mut self, type_uri: &str, proposed: &str) -> String {
        let mut name = proposed.to_string();
        if let Some(existing) = self.used.get(&name) {
            if existing != type_uri {
                name = rename(&name, type_uri);
            }
        }
        self.used.insert(name.clone(), type_uri.to_string());
        self.descriptors.insert(
            name.clone(),
            TypeDescriptor {
                uri: type_uri.to_string(),
            },
        );
        name
    }

    pub fn descriptors(&self) -> &IndexMap<String, TypeDescriptor> {
        &self.descriptors
    }
}
