//! Compact JavaScript literal writing.

use crate::error::Result;
use crate::templates::double_quoted;
use serde_json::Value;

/// Whether `s` can be used as a bare property name or member access.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Write `key:`, quoting the key unless it is an identifier.
pub(crate) fn write_key(out: &mut String, key: &str) {
    if is_identifier(key) {
        out.push_str(key);
    } else {
        out.push_str(&double_quoted(key));
    }
    out.push(':');
}

/// Write a JSON value as a JavaScript literal.
pub(crate) fn write_json(out: &mut String, value: &Value) {
    match value {
        Value::Object(map) => {
            out.push('{');
            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_key(out, key);
                write_json(out, value);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json(out, item);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Write an object literal, delegating each value to `write_value`.
pub(crate) fn write_object<'v, T, I, F>(out: &mut String, entries: I, mut write_value: F) -> Result<()>
where
    T: 'v,
    I: IntoIterator<Item = (&'v String, &'v T)>,
    F: FnMut(&mut String, &'v str, &'v T) -> Result<()>,
{
    out.push('{');
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_key(out, key);
        write_value(out, key, value)?;
    }
    out.push('}');
    Ok(())
}

/// Write an array literal, delegating each item to `write_item`.
pub(crate) fn write_array<'v, T, I, F>(out: &mut String, items: I, mut write_item: F) -> Result<()>
where
    T: 'v,
    I: IntoIterator<Item = &'v T>,
    F: FnMut(&mut String, &'v T) -> Result<()>,
{
    out.push('[');
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_item(out, item)?;
    }
    out.push(']');
    Ok(())
}
