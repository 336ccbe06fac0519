//! Field definitions: how one output field is extracted, named, and cast.

use std::fmt;
use std::sync::Arc;

use crate::error::{DefinitionError, Result};
use crate::value::Value;

/// Error type custom cast callbacks may return.
pub type CastError = Box<dyn std::error::Error + Send + Sync>;

/// A user-supplied cast callback: trimmed raw text in, typed value out.
pub type CastFn = Arc<dyn Fn(&str) -> std::result::Result<Value, CastError> + Send + Sync>;

/// How a field's raw text is located within a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extract {
    /// Token offset into a delimited record.
    Index(usize),
    /// 1-based inclusive character range into a fixed-width line.
    Range { start: usize, end: usize },
}

/// Conversion applied to the extracted raw text.
///
/// `Named` refers to an operation in the decoder's fixed cast table and is
/// resolved lazily at decode time; `Custom` is invoked directly.
#[derive(Clone)]
pub enum CastRule {
    Named(String),
    Custom(CastFn),
}

impl fmt::Debug for CastRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Declarative description of one output field.
///
/// A definition is immutable once built and reusable across any number of
/// decode calls. Fields are private so the range invariant established at
/// construction (`1 <= start <= end`) holds for the definition's lifetime.
///
/// A nameless definition (built with [`FieldDef::skip`]) occupies a position
/// in a delimited definition sequence but contributes nothing to the output.
#[derive(Debug, Clone)]
pub struct FieldDef {
    name: Option<String>,
    extract: Extract,
    cast: Option<CastRule>,
}

impl FieldDef {
    /// An index-addressed field for delimited records.
    pub fn indexed(name: impl Into<String>, index: usize) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        Ok(Self {
            name: Some(name),
            extract: Extract::Index(index),
            cast: None,
        })
    }

    /// A range-addressed field for fixed-width lines.
    ///
    /// `start` and `end` are 1-based inclusive column numbers.
    pub fn range(name: impl Into<String>, start: usize, end: usize) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        if start < 1 || end < start {
            return Err(DefinitionError::InvalidRange {
                start: start as i64,
                end: end as i64,
            });
        }
        Ok(Self {
            name: Some(name),
            extract: Extract::Range { start, end },
            cast: None,
        })
    }

    /// A placeholder that skips the token at `index` in delimited mode.
    pub fn skip(index: usize) -> Self {
        Self {
            name: None,
            extract: Extract::Index(index),
            cast: None,
        }
    }

    /// Attach a named cast operation (e.g. `"to_i"`), resolved at decode time.
    pub fn with_named_cast(mut self, name: impl Into<String>) -> Self {
        self.cast = Some(CastRule::Named(name.into()));
        self
    }

    /// Attach a custom cast callback.
    pub fn with_cast_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<Value, CastError> + Send + Sync + 'static,
    {
        self.cast = Some(CastRule::Custom(Arc::new(f)));
        self
    }

    /// Attach an already-built cast rule.
    pub fn with_cast(mut self, rule: CastRule) -> Self {
        self.cast = Some(rule);
        self
    }

    /// Output key, or `None` for a skip placeholder.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The extraction rule.
    pub fn extract(&self) -> &Extract {
        &self.extract
    }

    /// The cast rule, if any.
    pub fn cast(&self) -> Option<&CastRule> {
        self.cast.as_ref()
    }
}
