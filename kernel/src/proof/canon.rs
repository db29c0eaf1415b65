//! Canonical JSON bytes: the one serializer used for hashing and artifacts.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace: `{"a":1,"b":[2,3]}`.
//! 3. Strings are escaped by `serde_json`'s string writer.
//! 4. Numbers must be integers (`i64` or `u64`). Floats are rejected, so
//!    fractional quantities have to be carried as explicit numerator and
//!    denominator fields.
//! 5. Output is always valid UTF-8.

use serde_json::Value;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
    /// `serde_json` refused to write a string.
    #[error("string encoding failed: {detail}")]
    StringEncoding { detail: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    emit(&mut buf, value)?;
    Ok(buf)
}

fn emit(buf: &mut Vec<u8>, value: &Value) -> Result<(), CanonError> {
    match value {
        Value::Null => buf.extend_from_slice(b"null"),
        Value::Bool(true) => buf.extend_from_slice(b"true"),
        Value::Bool(false) => buf.extend_from_slice(b"false"),
        Value::Number(n) => {
            let digits = match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => i.to_string(),
                (None, Some(u)) => u.to_string(),
                (None, None) => {
                    return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
                }
            };
            buf.extend_from_slice(digits.as_bytes());
        }
        Value::String(s) => emit_str(buf, s)?,
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                emit(buf, item)?;
            }
            buf.push(b']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

            buf.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                emit_str(buf, key)?;
                buf.push(b':');
                emit(buf, item)?;
            }
            buf.push(b'}');
        }
    }
    Ok(())
}

fn emit_str(buf: &mut Vec<u8>, s: &str) -> Result<(), CanonError> {
    serde_json::to_writer(&mut *buf, s).map_err(|e| CanonError::StringEncoding {
        detail: e.to_string(),
    })
}
