//! The conversion driver: one pass over the triple stream assembling
//! resource records, then the label pass over the assembled records.

use crate::consts;
use crate::model::{ConversionResult, ResourceRecord, Value};
use crate::registry::{LiteralTypeMap, PropertyRegistry, TypeRegistry};
use crate::shorten::shorten;
use anyhow::Result;
use indexmap::IndexMap;
use log::debug;
use oxigraph::model::{Graph, NamedOrBlankNodeRef, SubjectRef, TermRef};
use std::collections::HashMap;

/// A label construction function for one resource type: given the fully
/// assembled record, produce a label value. `None` (or an empty result)
/// falls through to the id fallback.
pub type LabelBuilder = Box<dyn Fn(&ResourceRecord) -> Option<Value>>;

/// Table of label builders keyed by type short name.
///
/// ```
/// use rdf_exhibit::{LabelBuilders, Value};
///
/// let builders = LabelBuilders::new()
///     .with("Customer", |r| r.get("name").cloned())
///     .with("Employee", |r| {
///         let last = r.get("lastName")?.first();
///         let first = r.get("firstName")?.first();
///         Some(Value::from(format!("{} {}", last, first)))
///     });
/// ```
#[derive(Default)]
pub struct LabelBuilders(HashMap<String, LabelBuilder>);

impl LabelBuilders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<F>(mut self, type_name: impl Into<String>, builder: F) -> Self
    where
        F: Fn(&ResourceRecord) -> Option<Value> + 'static,
    {
        self.0.insert(type_name.into(), Box::new(builder));
        self
    }

    fn get(&self, type_name: &str) -> Option<&LabelBuilder> {
        self.0.get(type_name)
    }
}

/// Drives the conversion of RDF graphs into Exhibit documents.
///
/// The converter owns the property and type registries, so their scope is
/// explicit: a fresh `Converter` (or the [`convert`] free function)
/// starts with empty side tables, while reusing one converter across
/// several graphs deliberately shares short-name assignments and
/// accumulates descriptors between calls.
pub struct Converter {
    properties: PropertyRegistry,
    types: TypeRegistry,
    label_builders: LabelBuilders,
    literal_types: LiteralTypeMap,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Converter {
            properties: PropertyRegistry::new(),
            types: TypeRegistry::new(),
            label_builders: LabelBuilders::new(),
            literal_types: LiteralTypeMap::default(),
        }
    }

    pub fn with_label_builders(mut self, builders: LabelBuilders) -> Self {
        self.label_builders = builders;
        self
    }

    pub fn with_literal_types(mut self, literal_types: LiteralTypeMap) -> Self {
        self.literal_types = literal_types;
        self
    }

    /// Convert a graph into an Exhibit document.
    ///
    /// Every triple contributes to some record; malformed datatypes only
    /// mean an absent value type. Multi-valued properties fold into lists
    /// in graph iteration order, so the output is byte-identical across
    /// runs for a fixed iteration order.
    pub fn convert(&mut self, graph: &Graph) -> Result<ConversionResult> {
        let mut resources: IndexMap<String, ResourceRecord> = IndexMap::new();

        for triple in graph.iter() {
            let subject_short = subject_key(triple.subject);
            let predicate_short = shorten(triple.predicate.as_str());

            // the object is an item reference iff it is itself described
            // as a subject somewhere in the graph
            let is_item = match object_as_subject(triple.object) {
                Some(node) => graph.triples_for_subject(node).next().is_some(),
                None => false,
            };

            let effective_prop = self.properties.register(
                triple.predicate.as_str(),
                predicate_short,
                triple.object,
                is_item,
                &self.literal_types,
            );

            let record = resources
                .entry(subject_short.clone())
                .or_insert_with(|| ResourceRecord::new(subject_short.clone()));

            let object = object_text(triple.object);
            let value = if triple.predicate == consts::TYPE {
                // types get their own shortening and renaming pass
                self.types.register(&object, shorten(&object))
            } else {
                match triple.object {
                    TermRef::NamedNode(_) => shorten(&object).to_string(),
                    _ => object,
                }
            };

            record.push_value(&effective_prop, value);
        }

        debug!(
            "assembled {} resources, {} properties, {} types",
            resources.len(),
            self.properties.descriptors().len(),
            self.types.descriptors().len()
        );

        // second pass: labels are derived only once records are complete
        for record in resources.values_mut() {
            self.resolve_label(record);
        }

        Ok(ConversionResult {
            items: resources.into_values().collect(),
            types: self.types.descriptors().clone(),
            properties: self.properties.descriptors().clone(),
        })
    }

    /// Derive the label for one assembled record: an existing "label"
    /// property wins, else the builder registered for the record's first
    /// type, else the record's own id. The label key is the short name of
    /// rdfs:label, so any predicate shortening to "label" claims the
    /// first step; that ambiguity is inherited from the short keys.
    fn resolve_label(&self, record: &mut ResourceRecord) {
        let label_key = shorten(consts::LABEL.as_str());
        let label = match record.get(label_key) {
            Some(value) => Some(value.first().to_string()),
            None => record
                .get(shorten(consts::TYPE.as_str()))
                .map(|value| value.first().to_string())
                .and_then(|type_name| self.label_builders.get(&type_name))
                .and_then(|builder| builder(record))
                .map(|value| value.first().to_string()),
        };
        let label = match label {
            Some(label) if !label.is_empty() => label,
            _ => record.id().to_string(),
        };
        record.set_label(label);
    }
}

/// Convert a graph with default settings: no label builders and the
/// default literal type table.
pub fn convert(graph: &Graph) -> Result<ConversionResult> {
    Converter::new().convert(graph)
}

fn subject_key(subject: SubjectRef) -> String {
    match subject {
        SubjectRef::NamedNode(node) => shorten(node.as_str()).to_string(),
        SubjectRef::BlankNode(node) => node.as_str().to_string(),
        other => other.to_string(),
    }
}

fn object_as_subject(object: TermRef) -> Option<NamedOrBlankNodeRef> {
    match object {
        TermRef::NamedNode(node) => Some(NamedOrBlankNodeRef::NamedNode(node)),
        TermRef::BlankNode(node) => Some(NamedOrBlankNodeRef::BlankNode(node)),
        _ => None,
    }
}

fn object_text(object: TermRef) -> String {
    match object {
        TermRef::NamedNode(node) => node.as_str().to_string(),
        TermRef::BlankNode(node) => node.as_str().to_string(),
        TermRef::Literal(literal) => literal.value().to_string(),
        other => other.to_string(),
    }
}
