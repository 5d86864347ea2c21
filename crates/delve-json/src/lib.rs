//! JSON text bridge over `delve-collection`.
//!
//! Every mutating operation here is one decode → engine call → encode
//! transaction on a JSON document given as text, returning new text; the
//! read operations stop after the engine call. Nothing is retained between
//! calls and no validation happens beyond what [`decode`] and [`encode`]
//! perform.
//!
//! # Example
//!
//! ```
//! use delve_json::{follow, unite, parse_path};
//! use delve_collection::{coll, Value};
//!
//! let doc = r#"{"a":{"a1":100,"a3":300},"b":12}"#;
//! let out = unite(doc, coll! { "a" => coll! { "a3" => "x" }, "b" => 44 }).unwrap();
//! assert_eq!(out, r#"{"a":{"a1":100,"a3":"x"},"b":44}"#);
//!
//! let leaf = follow(doc, &parse_path("a/a1")).unwrap();
//! assert_eq!(leaf, Some(Value::Int(100)));
//! ```

use delve_collection as engine;
use delve_collection::{Collection, Key, Value};
use thiserror::Error;

mod convert;
pub use convert::{collection_to_json, from_json, to_json};

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("INVALID_JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("UNREPRESENTABLE")]
    Unrepresentable,
}

// ── Codec ─────────────────────────────────────────────────────────────────

/// Parse JSON text into a collection.
///
/// A top-level scalar is cast into a single-entry collection.
///
/// # Errors
///
/// [`FormatError::InvalidJson`] when the text is not syntactically valid
/// JSON.
pub fn decode(source: &str) -> Result<Collection, FormatError> {
    let json: serde_json::Value = serde_json::from_str(source)?;
    Ok(engine::cast(convert::from_json(json)))
}

/// Serialize a collection to JSON text.
///
/// # Errors
///
/// [`FormatError::Unrepresentable`] when a value has no JSON form (a
/// non-finite float).
pub fn encode(source: &Collection) -> Result<String, FormatError> {
    let json = convert::collection_to_json(source)?;
    Ok(serde_json::to_string(&json)?)
}

// ── Bridge operations ─────────────────────────────────────────────────────

/// Overlay `addition` onto the end of the document.
pub fn append(source: &str, addition: Collection) -> Result<String, FormatError> {
    encode(&engine::append(decode(source)?, addition))
}

/// Overlay `addition` onto the beginning of the document.
pub fn prepend(source: &str, addition: Collection) -> Result<String, FormatError> {
    encode(&engine::prepend(decode(source)?, addition))
}

/// Remove the entry addressed by `path`.
pub fn erase(source: &str, path: &[Key]) -> Result<String, FormatError> {
    encode(&engine::erase(decode(source)?, path))
}

/// Accumulate `value` at the collection addressed by `path`.
pub fn improve(source: &str, path: &[Key], value: Value) -> Result<String, FormatError> {
    let mut document = decode(source)?;
    engine::improve(&mut document, path, value);
    encode(&document)
}

/// Deep-overwrite the document with `supplier`.
pub fn unite(source: &str, supplier: Collection) -> Result<String, FormatError> {
    encode(&engine::unite(decode(source)?, supplier))
}

/// Descend the document by `path` and return the leaf, if any.
pub fn follow(source: &str, path: &[Key]) -> Result<Option<Value>, FormatError> {
    let document = decode(source)?;
    Ok(engine::follow(&document, path).cloned())
}

/// Single-level lookup into the document.
pub fn get(source: &str, key: &Key) -> Result<Option<Value>, FormatError> {
    let document = decode(source)?;
    Ok(document.get(key).cloned())
}

/// Parse a `/`-separated key path: `"a/g/n1"` → `[a, g, n1]`.
///
/// Empty segments are dropped; canonical integer segments become integer
/// keys.
pub fn parse_path(text: &str) -> Vec<Key> {
    text.split('/')
        .filter(|segment| !segment.is_empty())
        .map(Key::from_text)
        .collect()
}
