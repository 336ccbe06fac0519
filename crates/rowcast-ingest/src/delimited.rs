//! Decoding of tokenized (delimited) records.

use indexmap::IndexMap;
use rowcast_model::{Extract, FieldDef, Record};

use crate::cast::apply_cast;
use crate::error::{DecodeError, Result};

/// Decode one tokenized record.
///
/// Without definitions the record passes through as its trimmed tokens in row
/// order. With definitions, each index-addressed field extracts its token,
/// trims it, applies its cast, and inserts under the field name; nameless
/// definitions and definitions whose index falls past the end of the row
/// contribute nothing. Duplicate names overwrite in place, keeping the
/// position of the first occurrence.
pub fn decode_delimited<S: AsRef<str>>(tokens: &[S], fields: Option<&[FieldDef]>) -> Result<Record> {
    let Some(fields) = fields else {
        let raw = tokens
            .iter()
            .map(|t| t.as_ref().trim().to_string())
            .collect();
        return Ok(Record::Raw(raw));
    };

    let mut out = IndexMap::new();
    for def in fields {
        let Some(name) = def.name() else {
            continue;
        };
        let index = match def.extract() {
            Extract::Index(i) => *i,
            Extract::Range { .. } => {
                return Err(DecodeError::MissingIndex {
                    field: name.to_string(),
                });
            }
        };
        let Some(token) = tokens.get(index) else {
            continue;
        };
        let raw = token.as_ref().trim();
        let value = apply_cast(name, def.cast(), raw)?;
        out.insert(name.to_string(), value);
    }

    Ok(Record::Fields(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowcast_model::Value;

    #[test]
    fn test_passthrough_without_definitions() {
        let record = decode_delimited(&[" 1 ", "M", " Alice"], None).unwrap();
        assert_eq!(
            record,
            Record::Raw(vec!["1".to_string(), "M".to_string(), "Alice".to_string()])
        );
    }

    #[test]
    fn test_definitions_with_skip_and_cast() {
        // [[place, to_i], nil, name]
        let fields = vec![
            FieldDef::indexed("place", 0).unwrap().with_named_cast("to_i"),
            FieldDef::skip(1),
            FieldDef::indexed("name", 2).unwrap(),
        ];
        let record = decode_delimited(&["1", "M", "Alice"], Some(&fields)).unwrap();

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("place"), Some(&Value::Int(1)));
        assert_eq!(record.get("name"), Some(&Value::Str("Alice".to_string())));
    }

    #[test]
    fn test_more_definitions_than_tokens() {
        let fields = vec![
            FieldDef::indexed("a", 0).unwrap(),
            FieldDef::indexed("b", 1).unwrap(),
            FieldDef::indexed("c", 2).unwrap(),
        ];
        let record = decode_delimited(&["x", "y"], Some(&fields)).unwrap();

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("c"), None);
    }

    #[test]
    fn test_more_tokens_than_definitions() {
        // Extra tokens are dropped silently.
        let fields = vec![FieldDef::indexed("a", 0).unwrap()];
        let record = decode_delimited(&["x", "y", "z"], Some(&fields)).unwrap();
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let fields = vec![
            FieldDef::indexed("v", 0).unwrap(),
            FieldDef::indexed("other", 1).unwrap(),
            FieldDef::indexed("v", 2).unwrap(),
        ];
        let record = decode_delimited(&["first", "mid", "last"], Some(&fields)).unwrap();

        assert_eq!(record.get("v"), Some(&Value::Str("last".to_string())));
        // First-insertion position is retained for iteration.
        match &record {
            Record::Fields(map) => {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["v", "other"]);
            }
            Record::Raw(_) => panic!("expected fields"),
        }
    }

    #[test]
    fn test_range_definition_rejected() {
        let fields = vec![FieldDef::range("age", 1, 3).unwrap()];
        let err = decode_delimited(&["x"], Some(&fields)).unwrap_err();
        assert!(matches!(err, DecodeError::MissingIndex { field } if field == "age"));
    }

    #[test]
    fn test_values_are_trimmed_before_cast() {
        let fields = vec![FieldDef::indexed("n", 0).unwrap().with_named_cast("to_i")];
        let record = decode_delimited(&["  42  "], Some(&fields)).unwrap();
        assert_eq!(record.get("n"), Some(&Value::Int(42)));
    }
}
