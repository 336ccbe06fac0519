//! Cast resolution: turning a cast rule into a typed value.
//!
//! Named operations dispatch through a fixed table; custom callbacks are
//! invoked directly. Resolution is stateless and deterministic, and a named
//! operation is looked up lazily at decode time — defining a field with an
//! unregistered cast name only fails once a record is actually decoded.

use rowcast_model::{CastError, CastRule, Value};

use crate::error::{DecodeError, Result};

type NamedCast = fn(&str) -> std::result::Result<Value, CastError>;

/// Look up a named cast operation.
fn named_cast(name: &str) -> Option<NamedCast> {
    match name {
        "to_i" => Some(cast_int),
        "to_f" => Some(cast_float),
        "to_s" => Some(cast_str),
        _ => None,
    }
}

fn cast_int(raw: &str) -> std::result::Result<Value, CastError> {
    Ok(Value::Int(raw.parse::<i64>()?))
}

fn cast_float(raw: &str) -> std::result::Result<Value, CastError> {
    Ok(Value::Float(raw.parse::<f64>()?))
}

fn cast_str(raw: &str) -> std::result::Result<Value, CastError> {
    Ok(Value::Str(raw.to_string()))
}

/// Apply a field's cast rule to its trimmed raw text.
///
/// No rule returns the text unchanged as a [`Value::Str`]. Failures carry the
/// field name; callback errors propagate unmodified as the error source.
pub(crate) fn apply_cast(field: &str, rule: Option<&CastRule>, raw: &str) -> Result<Value> {
    match rule {
        None => Ok(Value::Str(raw.to_string())),
        Some(CastRule::Named(name)) => match named_cast(name) {
            Some(op) => op(raw).map_err(|source| DecodeError::Cast {
                field: field.to_string(),
                source,
            }),
            None => Err(DecodeError::UnknownCast {
                name: name.clone(),
                field: field.to_string(),
            }),
        },
        Some(CastRule::Custom(callback)) => {
            callback(raw).map_err(|source| DecodeError::Cast {
                field: field.to_string(),
                source,
            })
        }
    }
}
