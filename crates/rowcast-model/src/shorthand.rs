//! Compact field definition forms and their normalization.
//!
//! Definition sequences are often written as terse lists — a bare name for an
//! uncast field, a `[name, cast]` pair, `null` for a skipped position, or a
//! map with explicit bounds. This module parses those forms (they deserialize
//! from JSON via serde) and normalizes them into explicit [`FieldDef`]s before
//! any decoding happens, so the decode path only ever sees one shape.
//!
//! Cast-name aliasing (`"integer"` for `"to_i"` and friends) also lives here:
//! it is naming sugar, resolved during normalization, never by the decoder.

use serde::Deserialize;

use crate::error::{DefinitionError, Result};
use crate::field::FieldDef;

/// One compact field definition.
///
/// Wrapped in `Option` within a sequence; `None` (JSON `null`) marks a
/// position to skip.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldShorthand {
    /// `"name"` — uncast field at its list position.
    Name(String),
    /// `["name", "cast"]` — named cast at its list position.
    NameCast(String, String),
    /// `{"field": ..., "index": ..., "cast": ...}` — explicit token index.
    Indexed {
        field: String,
        index: i64,
        #[serde(default)]
        cast: Option<String>,
    },
    /// `{"field": ..., "start": ..., "end": ..., "cast": ...}` — 1-based
    /// inclusive character range for fixed-width lines.
    Fixed {
        field: String,
        start: i64,
        end: i64,
        #[serde(default)]
        cast: Option<String>,
    },
}

/// Canonical name for a cast operation, resolving known aliases.
///
/// Unknown names pass through unchanged: whether a cast operation exists is
/// decided by the decoder's table at decode time, not here.
pub fn normalize_cast_name(name: &str) -> &str {
    match name {
        "int" | "integer" => "to_i",
        "float" | "number" => "to_f",
        "str" | "string" => "to_s",
        other => other,
    }
}

/// Normalize a compact sequence into explicit field definitions.
///
/// List positions become token indexes for the positional forms; map forms
/// carry their own index or range. Signed bounds are validated here, before
/// conversion into the unsigned representation of [`FieldDef`].
pub fn build_fields(shorthands: &[Option<FieldShorthand>]) -> Result<Vec<FieldDef>> {
    let mut fields = Vec::with_capacity(shorthands.len());

    for (position, shorthand) in shorthands.iter().enumerate() {
        let def = match shorthand {
            None => FieldDef::skip(position),
            Some(FieldShorthand::Name(name)) => FieldDef::indexed(name.clone(), position)?,
            Some(FieldShorthand::NameCast(name, cast)) => {
                FieldDef::indexed(name.clone(), position)?
                    .with_named_cast(normalize_cast_name(cast))
            }
            Some(FieldShorthand::Indexed { field, index, cast }) => {
                if *index < 0 {
                    return Err(DefinitionError::NegativeIndex { index: *index });
                }
                let def = FieldDef::indexed(field.clone(), *index as usize)?;
                apply_cast_name(def, cast.as_deref())
            }
            Some(FieldShorthand::Fixed {
                field,
                start,
                end,
                cast,
            }) => {
                if *start < 1 || *end < *start {
                    return Err(DefinitionError::InvalidRange {
                        start: *start,
                        end: *end,
                    });
                }
                let def = FieldDef::range(field.clone(), *start as usize, *end as usize)?;
                apply_cast_name(def, cast.as_deref())
            }
        };
        fields.push(def);
    }

    Ok(fields)
}

fn apply_cast_name(def: FieldDef, cast: Option<&str>) -> FieldDef {
    match cast {
        Some(name) => def.with_named_cast(normalize_cast_name(name)),
        None => def,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{CastRule, Extract};

    #[test]
    fn test_positional_shorthand() {
        let shorthands: Vec<Option<FieldShorthand>> =
            serde_json::from_str(r#"[["place", "to_i"], null, "name"]"#).unwrap();
        let fields = build_fields(&shorthands).unwrap();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].name(), Some("place"));
        assert_eq!(fields[0].extract(), &Extract::Index(0));
        assert!(matches!(fields[0].cast(), Some(CastRule::Named(n)) if n == "to_i"));
        assert_eq!(fields[1].name(), None);
        assert_eq!(fields[2].name(), Some("name"));
        assert_eq!(fields[2].extract(), &Extract::Index(2));
        assert!(fields[2].cast().is_none());
    }

    #[test]
    fn test_fixed_shorthand() {
        let shorthands: Vec<Option<FieldShorthand>> =
            serde_json::from_str(r#"[{"field": "age", "start": 1, "end": 3, "cast": "to_i"}]"#)
                .unwrap();
        let fields = build_fields(&shorthands).unwrap();

        assert_eq!(fields[0].name(), Some("age"));
        assert_eq!(fields[0].extract(), &Extract::Range { start: 1, end: 3 });
    }

    #[test]
    fn test_cast_aliases() {
        let shorthands: Vec<Option<FieldShorthand>> =
            serde_json::from_str(r#"[["a", "integer"], ["b", "number"], ["c", "string"]]"#)
                .unwrap();
        let fields = build_fields(&shorthands).unwrap();

        let named = |def: &FieldDef| match def.cast() {
            Some(CastRule::Named(n)) => n.clone(),
            _ => panic!("expected named cast"),
        };
        assert_eq!(named(&fields[0]), "to_i");
        assert_eq!(named(&fields[1]), "to_f");
        assert_eq!(named(&fields[2]), "to_s");
    }

    #[test]
    fn test_unknown_cast_name_passes_through() {
        // Existence is checked by the decoder, not the builder.
        let shorthands: Vec<Option<FieldShorthand>> =
            serde_json::from_str(r#"[["x", "frobnicate"]]"#).unwrap();
        let fields = build_fields(&shorthands).unwrap();
        assert!(matches!(fields[0].cast(), Some(CastRule::Named(n)) if n == "frobnicate"));
    }

    #[test]
    fn test_negative_index_rejected() {
        let shorthands: Vec<Option<FieldShorthand>> =
            serde_json::from_str(r#"[{"field": "x", "index": -1}]"#).unwrap();
        assert!(matches!(
            build_fields(&shorthands),
            Err(DefinitionError::NegativeIndex { index: -1 })
        ));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let shorthands: Vec<Option<FieldShorthand>> =
            serde_json::from_str(r#"[{"field": "x", "start": 4, "end": 2}]"#).unwrap();
        assert!(matches!(
            build_fields(&shorthands),
            Err(DefinitionError::InvalidRange { start: 4, end: 2 })
        ));
    }
}
