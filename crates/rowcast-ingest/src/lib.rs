//! Declarative decoding of delimited and fixed-width text records.
//!
//! A caller describes each output field once — where it lives in the raw
//! record, what to call it, and how to cast it — and this crate applies that
//! description uniformly over single records, in-memory blobs, plain files,
//! and gzip-compressed files.
//!
//! # Features
//!
//! - **Delimited mode**: index-addressed extraction over tokenized rows,
//!   with the tokenizer's delimiter and quoting configurable per call
//! - **Fixed-width mode**: 1-based inclusive character ranges with graceful
//!   truncation on short lines
//! - **Casting**: named operations (`to_i`, `to_f`, `to_s`) or custom
//!   callbacks, resolved lazily at decode time
//! - **Sources**: str, file, and gzip adapters with one decoding contract —
//!   identical input yields identical collections from any of them
//!
//! # Example
//!
//! ```
//! use rowcast_ingest::{DelimitedOptions, read_delimited_str};
//! use rowcast_model::{FieldDef, Value};
//!
//! let options = DelimitedOptions::new().with_fields(vec![
//!     FieldDef::indexed("place", 0).unwrap().with_named_cast("to_i"),
//!     FieldDef::skip(1),
//!     FieldDef::indexed("name", 2).unwrap(),
//! ]);
//!
//! let records = read_delimited_str("1,M,Alice\n2,F,Bea\n", &options).unwrap();
//! assert_eq!(records[0].get("place"), Some(&Value::Int(1)));
//! assert_eq!(records[1].get("name"), Some(&Value::Str("Bea".into())));
//! ```
//!
//! Decoding is strict: the first record that fails aborts the whole load and
//! surfaces the originating error with the record's 0-based index attached.

mod cast;
mod delimited;
mod error;
mod fixed;
mod read;

// === Error Types ===
pub use error::{DecodeError, Result};

// === Record Decoding ===
pub use delimited::decode_delimited;
pub use fixed::decode_fixed_width;

// === Bulk Loading ===
pub use read::{
    DelimitedOptions, read_delimited_gzip, read_delimited_path, read_delimited_str,
    read_fixed_width_gzip, read_fixed_width_path, read_fixed_width_str,
};

// === Model Re-exports ===
pub use rowcast_model::{CastError, CastFn, CastRule, Extract, FieldDef, Record, Value};
