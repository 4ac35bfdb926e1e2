//! Convert RDF graphs into Exhibit JSON: a flat collection of items with
//! short property names, plus side tables mapping the short names back to
//! their full URIs and inferred value types.
//!
//! The core is [`Converter`]: one pass over the triple stream shortens
//! URIs (renaming deterministically on collision), flags item references,
//! and folds repeated properties into ordered lists; a second pass
//! derives a label for every resource. The result serializes directly to
//! the Exhibit document shape with `serde_json`.
//!
//! ```no_run
//! use rdf_exhibit::{convert, util};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let graph = util::read_file(Path::new("data.ttl"), None)?;
//! let exhibit = convert(&graph)?;
//! println!("{}", serde_json::to_string_pretty(&exhibit)?);
//! # Ok(())
//! # }
//! ```

pub mod consts;
pub mod convert;
pub mod model;
pub mod registry;
pub mod shorten;
pub mod util;

pub use convert::{convert, Converter, LabelBuilder, LabelBuilders};
pub use model::{ConversionResult, ResourceRecord, Value};
pub use registry::{LiteralTypeMap, PropertyDescriptor, TypeDescriptor, ValueType};
