//! Selection, filtering, and slicing.

use crate::collection::Collection;
use crate::types::{Key, Value};

/// Keep only the entries with the given keys, in source order.
pub fn only(source: Collection, keys: &[Key]) -> Collection {
    source
        .into_iter()
        .filter(|(key, _)| keys.contains(key))
        .collect()
}

/// Drop the entries with the given keys, keeping everything else.
pub fn except(source: Collection, keys: &[Key]) -> Collection {
    source
        .into_iter()
        .filter(|(key, _)| !keys.contains(key))
        .collect()
}

/// Keep only the entries whose value is one of the given values.
pub fn select(source: Collection, values: &[Value]) -> Collection {
    source
        .into_iter()
        .filter(|(_, value)| values.contains(value))
        .collect()
}

/// Whether every given key is present. Raw presence: a stored `Null`
/// counts.
pub fn has(source: &Collection, keys: &[Key]) -> bool {
    keys.iter().all(|key| source.contains_key(key))
}

/// Whether the collection's values cover the given values, counted.
///
/// Duplicate-sensitive: the number of source entries whose value is in the
/// requested set must equal the number of requested values.
pub fn contains(source: &Collection, values: &[Value]) -> bool {
    source.values().filter(|value| values.contains(value)).count() == values.len()
}

/// Reorder and filter down to exactly the given keys, in the order given.
///
/// Keys not present are skipped; entries not requested are dropped.
pub fn like(source: Collection, keys: &[Key]) -> Collection {
    let mut source = source;
    let mut out = Collection::with_capacity(keys.len());
    for key in keys {
        if let Some(value) = source.remove(key) {
            out.insert(key.clone(), value);
        }
    }
    out
}

/// Entries at even zero-based positions (0, 2, 4…). Keys are not
/// preserved.
pub fn odd(source: Collection) -> Collection {
    parity(source, 0)
}

/// Entries at odd zero-based positions (1, 3, 5…). Keys are not preserved.
pub fn even(source: Collection) -> Collection {
    parity(source, 1)
}

fn parity(source: Collection, remainder: usize) -> Collection {
    source
        .into_iter()
        .enumerate()
        .filter(|(position, _)| position % 2 == remainder)
        .map(|(_, (_, value))| value)
        .collect()
}

/// The leading entries through the given key, or the whole collection when
/// the key is absent.
pub fn left(source: Collection, to: &Key) -> Collection {
    let end = source.position(to).unwrap_or(source.len().saturating_sub(1));
    sliced(source, 0, end + 1)
}

/// The trailing entries from the given key on, or the whole collection
/// when the key is absent.
pub fn right(source: Collection, from: &Key) -> Collection {
    let start = source.position(from).unwrap_or(0);
    sliced(source, start, usize::MAX)
}

/// The first `length` entries, padded with `default` at fresh integer keys
/// when the collection is shorter.
pub fn take(source: Collection, length: usize, default: Value) -> Collection {
    let mut out = sliced(source, 0, length);
    while out.len() < length {
        out.push(default.clone());
    }
    out
}

/// Drop the last `length` entries, saturating at empty.
pub fn cut(source: Collection, length: usize) -> Collection {
    let keep = source.len().saturating_sub(length);
    sliced(source, 0, keep)
}

// Positional slice [start, end). Integer keys are renumbered, string keys
// kept.
fn sliced(source: Collection, start: usize, end: usize) -> Collection {
    let mut out = Collection::new();
    for (position, (key, value)) in source.into_iter().enumerate() {
        if position >= start && position < end {
            match key {
                Key::Int(_) => out.push(value),
                key => {
                    out.insert(key, value);
                }
            }
        }
    }
    out
}

/// Map every value (or only those at the given keys) through the handler.
///
/// An empty key set means every entry; keys that do not exist are ignored.
pub fn each<F>(mut source: Collection, mut handler: F, keys: &[Key]) -> Collection
where
    F: FnMut(&Key, Value) -> Value,
{
    for (key, slot) in source.iter_mut() {
        if keys.is_empty() || keys.contains(key) {
            let current = std::mem::replace(slot, Value::Null);
            *slot = handler(key, current);
        }
    }
    source
}
