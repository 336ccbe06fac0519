//! Decoded record shapes.

use indexmap::IndexMap;
use serde::Serialize;

use crate::value::Value;

/// One decoded record.
///
/// `Fields` is produced when a definition sequence was supplied: keys follow
/// the first-insertion order of field names, and a later definition reusing a
/// name overwrites the value in place. `Raw` is the passthrough shape of
/// delimited decoding without definitions: the trimmed tokens in row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Fields(IndexMap<String, Value>),
    Raw(Vec<String>),
}

impl Record {
    /// Look up a field by name. `Raw` records have no names.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Fields(map) => map.get(name),
            Self::Raw(_) => None,
        }
    }

    /// Number of fields or tokens.
    pub fn len(&self) -> usize {
        match self {
            Self::Fields(map) => map.len(),
            Self::Raw(tokens) => tokens.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
