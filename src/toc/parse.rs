//! Decoding raw catalog JSON into [`TocNode`] trees
//!
//! Catalog records are loosely shaped: book records carry `title`/`heTitle`,
//! grouping records carry `category`/`heCategory`, and optional fields are
//! frequently absent or `null`. Absent fields default to empty. Anything that
//! is present but of the wrong JSON type is a shape violation and aborts the
//! whole parse, so callers never see a partially decoded tree.

use super::node::TocNode;
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading a table of contents
#[derive(Debug, Error)]
pub enum TocError {
    #[error("expected {expected} at {location}, found {found}")]
    Shape {
        location: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for table-of-contents operations
pub type TocResult<T> = Result<T, TocError>;

const ENGLISH_LABEL_KEYS: &[&str] = &["title", "category"];
const HEBREW_LABEL_KEYS: &[&str] = &["heTitle", "heCategory", "altTitle"];
const CHILDREN_KEYS: &[&str] = &["contents", "children"];
const BASE_TEXT_KEYS: &[&str] = &["base_text_titles", "baseTextTitles"];
const DESCRIPTION_KEYS: &[&str] = &["enShortDesc", "shortDescription"];

/// Parse a table of contents from an already-decoded JSON value
///
/// The root must be an array of node objects.
pub fn parse_toc(value: &Value) -> TocResult<Vec<TocNode>> {
    parse_node_list(value, "")
}

/// Parse a table of contents from JSON text
pub fn parse_toc_str(json: &str) -> TocResult<Vec<TocNode>> {
    let value: Value = serde_json::from_str(json)?;
    parse_toc(&value)
}

/// Read and parse a table of contents from a JSON file
pub fn load_toc(path: impl AsRef<Path>) -> TocResult<Vec<TocNode>> {
    let raw = std::fs::read_to_string(path)?;
    parse_toc_str(&raw)
}

fn parse_node_list(value: &Value, location: &str) -> TocResult<Vec<TocNode>> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(shape(location, "array of nodes", other)),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_node(item, &format!("{}/{}", location, i)))
        .collect()
}

fn parse_node(value: &Value, location: &str) -> TocResult<TocNode> {
    let record = match value {
        Value::Object(record) => record,
        other => return Err(shape(location, "node object", other)),
    };

    let children = match first_present(record, CHILDREN_KEYS) {
        Some((key, v)) => parse_node_list(v, &format!("{}/{}", location, key))?,
        None => Vec::new(),
    };

    Ok(TocNode {
        title: string_field(record, ENGLISH_LABEL_KEYS, location)?,
        he_title: string_field(record, HEBREW_LABEL_KEYS, location)?,
        categories: string_list_field(record, &["categories"], location)?,
        dependence: optional_string_field(record, &["dependence"], location)?,
        base_text_titles: string_list_field(record, BASE_TEXT_KEYS, location)?,
        short_description: string_field(record, DESCRIPTION_KEYS, location)?,
        children,
    })
}

/// First key (in preference order) whose value is present and not `null`.
fn first_present<'a>(
    record: &'a Map<String, Value>,
    keys: &[&'static str],
) -> Option<(&'static str, &'a Value)> {
    keys.iter().find_map(|key| match record.get(*key) {
        None | Some(Value::Null) => None,
        Some(v) => Some((*key, v)),
    })
}

fn optional_string_field(
    record: &Map<String, Value>,
    keys: &[&'static str],
    location: &str,
) -> TocResult<Option<String>> {
    match first_present(record, keys) {
        None => Ok(None),
        Some((_, Value::String(s))) => Ok(Some(s.clone())),
        Some((key, other)) => Err(shape(&format!("{}/{}", location, key), "string", other)),
    }
}

fn string_field(
    record: &Map<String, Value>,
    keys: &[&'static str],
    location: &str,
) -> TocResult<String> {
    Ok(optional_string_field(record, keys, location)?.unwrap_or_default())
}

fn string_list_field(
    record: &Map<String, Value>,
    keys: &[&'static str],
    location: &str,
) -> TocResult<Vec<String>> {
    let (key, value) = match first_present(record, keys) {
        None => return Ok(Vec::new()),
        Some(found) => found,
    };
    let items = match value {
        Value::Array(items) => items,
        other => return Err(shape(&format!("{}/{}", location, key), "array of strings", other)),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(shape(&format!("{}/{}/{}", location, key, i), "string", other)),
        })
        .collect()
}

fn shape(location: &str, expected: &'static str, found: &Value) -> TocError {
    TocError::Shape {
        location: if location.is_empty() { "/".to_string() } else { location.to_string() },
        expected,
        found: json_type_name(found),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
