//! Data model for declarative record decoding.
//!
//! This crate holds the passive types shared by the rowcast decoders: field
//! definitions describing how to extract, name, and cast one output field
//! ([`FieldDef`]), the typed values decoding produces ([`Value`]), the decoded
//! record shapes ([`Record`]), and the compact shorthand forms a definition
//! sequence can be written in ([`shorthand`]). It contains no decoding logic;
//! that lives in `rowcast-ingest`.
//!
//! # Example
//!
//! ```
//! use rowcast_model::{FieldDef, Value};
//!
//! // `[[place, to_i], nil, name]` spelled out explicitly:
//! let fields = vec![
//!     FieldDef::indexed("place", 0).unwrap().with_named_cast("to_i"),
//!     FieldDef::skip(1),
//!     FieldDef::indexed("name", 2).unwrap(),
//! ];
//! assert_eq!(fields[0].name(), Some("place"));
//! ```

mod error;
mod field;
mod record;
pub mod shorthand;
mod value;

pub use error::{DefinitionError, Result};
pub use field::{CastError, CastFn, CastRule, Extract, FieldDef};
pub use record::Record;
pub use shorthand::{FieldShorthand, build_fields, normalize_cast_name};
pub use value::Value;
