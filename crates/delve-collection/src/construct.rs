//! Normalization and construction: turning arbitrary values into
//! collections and building collections from flat sequences.

use crate::collection::Collection;
use crate::merge::flat_merge;
use crate::types::{Key, Value};

/// Whether `value` is already presentable as a collection.
///
/// Foreign containers (`Vec`, iterators, key/value pairs) convert through
/// the `From`/`FromIterator` implementations on [`Collection`] instead;
/// once inside a [`Value`] only a nested collection qualifies.
pub fn castable(value: &Value) -> bool {
    value.is_collection()
}

/// Convert any value into a collection.
///
/// A collection passes through unchanged, `Null` becomes an empty
/// collection, and any scalar becomes a single-entry collection at key 0.
/// Never fails.
///
/// # Example
///
/// ```
/// use delve_collection::{cast, coll, Value};
///
/// assert_eq!(cast(Value::from("x")), coll!["x"]);
/// assert_eq!(cast(Value::Null), coll![]);
/// ```
pub fn cast(value: Value) -> Collection {
    match value {
        Value::Collection(c) => c,
        Value::Null => Collection::new(),
        scalar => {
            let mut c = Collection::with_capacity(1);
            c.insert(Key::Int(0), scalar);
            c
        }
    }
}

/// Merge a mixed sequence of values into one collection.
///
/// Each value is [`cast`] first. String-key collisions resolve to the later
/// value; integer keys are renumbered.
pub fn collect<I>(values: I) -> Collection
where
    I: IntoIterator<Item = Value>,
{
    values
        .into_iter()
        .fold(Collection::new(), |acc, value| flat_merge(acc, cast(value)))
}

/// Deep-flatten values into a flat sequence of scalar leaves.
///
/// Recurses into nested collections, drops `Null` entries, and discards all
/// keys. Idempotent: simplifying an already-flat sequence changes nothing.
///
/// # Example
///
/// ```
/// use delve_collection::{coll, simplify, Value};
///
/// let nested = coll! { "k" => coll![1, 2], "x" => Value::Null };
/// let flat = simplify([Value::from(nested)]);
/// assert_eq!(flat, vec![Value::Int(1), Value::Int(2)]);
/// ```
pub fn simplify<I>(values: I) -> Vec<Value>
where
    I: IntoIterator<Item = Value>,
{
    let mut out = Vec::new();
    for value in values {
        flatten_into(value, &mut out);
    }
    out
}

fn flatten_into(value: Value, out: &mut Vec<Value>) {
    match value {
        Value::Null => {}
        Value::Collection(c) => {
            for (_, nested) in c {
                flatten_into(nested, out);
            }
        }
        leaf => out.push(leaf),
    }
}

/// Build a collection from one sequence of keys and one of values.
///
/// A short value sequence is padded with `default`; extra values are
/// ignored.
pub fn combine<K, V>(keys: K, values: V, default: Value) -> Collection
where
    K: IntoIterator<Item = Key>,
    V: IntoIterator<Item = Value>,
{
    let mut values = values.into_iter();
    let mut out = Collection::new();
    for key in keys {
        let value = values.next().unwrap_or_else(|| default.clone());
        out.insert(key, value);
    }
    out
}

/// Build a collection from an alternating key/value sequence.
///
/// The input is [`simplify`]d first, then even positions become keys and
/// odd positions their values; a trailing key gets `Null`. Scalar keys are
/// coerced: integers stay integers, booleans and floats collapse to
/// integers, anything else becomes a string key.
pub fn compile<I>(values: I) -> Collection
where
    I: IntoIterator<Item = Value>,
{
    let flat = simplify(values);
    let mut keys = Vec::with_capacity(flat.len() / 2 + 1);
    let mut vals = Vec::with_capacity(flat.len() / 2);
    for (position, value) in flat.into_iter().enumerate() {
        if position % 2 == 0 {
            keys.push(key_from_value(value));
        } else {
            vals.push(value);
        }
    }
    combine(keys, vals, Value::Null)
}

// Scalar-to-key coercion for compile. Simplified input holds no nulls or
// collections; the final arm only keeps the match exhaustive.
fn key_from_value(value: Value) -> Key {
    match value {
        Value::Int(i) => Key::Int(i),
        Value::Str(s) => Key::Str(s),
        Value::Bool(b) => Key::Int(i64::from(b)),
        Value::Float(f) => Key::Int(f as i64),
        Value::Null | Value::Collection(_) => Key::Str(String::new()),
    }
}

/// Build a collection from keys and a per-key value function.
pub fn make<I, F>(keys: I, mut handler: F) -> Collection
where
    I: IntoIterator<Item = Key>,
    F: FnMut(&Key) -> Value,
{
    let mut out = Collection::new();
    for key in keys {
        let value = handler(&key);
        out.insert(key, value);
    }
    out
}
