//! JSON document loading.
//!
//! Flattens the string values of a JSON document into one text blob,
//! depth-first in document order, joined with single spaces. An optional field
//! filter restricts extraction to values found under the named object keys at
//! any depth; objects under non-matching keys are skipped entirely.

use std::{fs, path::Path};

use serde_json::Value;

use crate::{Document, error::IngestError};

/// Loads a JSON file and flattens its string content.
///
/// With `text_fields = None`, every string value in the document contributes.
/// Otherwise only values reached through one of the named keys do.
pub(crate) fn load_json(path: &Path, text_fields: Option<&[String]>) -> Result<Document, IngestError> {
    let raw = fs::read_to_string(path).map_err(|source| IngestError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&raw).map_err(|source| IngestError::ParseJson {
        path: path.to_path_buf(),
        source,
    })?;

    let mut parts = Vec::new();
    collect_strings(&value, text_fields, &mut parts);

    Ok(Document {
        text: parts.join(" "),
        path: path.to_path_buf(),
    })
}

/// Recursively collects string values under matching keys.
fn collect_strings<'a>(value: &'a Value, fields: Option<&[String]>, out: &mut Vec<&'a str>) {
    match value {
        Value::Object(map) => {
            for (key, value) in map {
                if fields.is_none_or(|f| f.iter().any(|field| field == key)) {
                    match value {
                        Value::String(s) => out.push(s),
                        Value::Object(_) | Value::Array(_) => {
                            collect_strings(value, fields, out);
                        }
                        _ => {}
                    }
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_strings(item, fields, out);
            }
        }
        Value::String(s) => out.push(s),
        _ => {}
    }
}
