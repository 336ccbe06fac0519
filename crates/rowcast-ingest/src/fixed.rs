//! Decoding of fixed-width positional records.

use indexmap::IndexMap;
use rowcast_model::{Extract, FieldDef, Record};

use crate::cast::apply_cast;
use crate::error::{DecodeError, Result};

/// Decode one fixed-width line.
///
/// Each definition carries a 1-based inclusive character range. A range
/// reaching past the end of the line yields whatever substring is available,
/// so short lines truncate gracefully rather than erroring. Extraction counts
/// characters, not bytes. Extracted text is trimmed before casting.
pub fn decode_fixed_width(line: &str, fields: &[FieldDef]) -> Result<Record> {
    let mut out = IndexMap::new();
    for def in fields {
        let Some(name) = def.name() else {
            continue;
        };
        let (start, end) = match def.extract() {
            Extract::Range { start, end } => (*start, *end),
            Extract::Index(_) => {
                return Err(DecodeError::MissingRange {
                    field: name.to_string(),
                });
            }
        };
        let raw = extract_range(line, start, end);
        let value = apply_cast(name, def.cast(), raw.trim())?;
        out.insert(name.to_string(), value);
    }

    Ok(Record::Fields(out))
}

/// Substring for a 1-based inclusive column range, truncated to the line.
fn extract_range(line: &str, start: usize, end: usize) -> String {
    // start >= 1 is guaranteed by FieldDef construction.
    line.chars().skip(start - 1).take(end - start + 1).collect()
}
