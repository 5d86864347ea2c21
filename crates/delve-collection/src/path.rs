//! Key-path navigation: descent, targeted writes, and removal.
//!
//! A path is an ordered slice of [`Key`]s. Each key but the last must lead
//! to a nested collection (or one is created on the write paths); the last
//! key addresses the leaf. The contracts differ on what happens at an
//! occupied leaf: [`place`] overwrites, [`improve`] accumulates.

use crate::collection::Collection;
use crate::construct::cast;
use crate::merge::flat_merge;
use crate::types::{Key, Value};

/// Descend the collection by each key in turn and return the leaf value.
///
/// A scalar met mid-path behaves as its cast form (a single-entry
/// collection at key 0), so a remaining `Int(0)` step re-yields it. A
/// missing step, a stored `Null`, or an empty path give `None`.
///
/// # Example
///
/// ```
/// use delve_collection::{coll, follow, Key, Value};
///
/// let doc = coll! { "a" => coll! { "g" => coll! { "n2" => "1b" } } };
/// let path = ["a", "g", "n2"].map(Key::from);
/// assert_eq!(follow(&doc, &path), Some(&Value::from("1b")));
/// assert_eq!(follow(&doc, &["a", "z"].map(Key::from)), None);
/// ```
pub fn follow<'a>(source: &'a Collection, path: &[Key]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = source.get(first)?;
    for step in rest {
        current = match current {
            Value::Collection(sub) => sub.get(step)?,
            // a scalar casts to a single-entry collection at key 0
            leaf => {
                if *step == Key::Int(0) {
                    leaf
                } else {
                    return None;
                }
            }
        };
    }
    Some(current)
}

/// Replace the leaf addressed by `path` with `handler(leaf)`.
///
/// A no-op when the final key does not exist or an intermediate step is not
/// a collection.
pub fn apply<F>(mut source: Collection, handler: F, path: &[Key]) -> Collection
where
    F: FnOnce(Value) -> Value,
{
    match path {
        [] => source,
        [last] => {
            if let Some(slot) = source.get_stored_mut(last) {
                let current = std::mem::replace(slot, Value::Null);
                *slot = handler(current);
            }
            source
        }
        [step, rest @ ..] => {
            if let Some(Value::Collection(sub)) = source.get_stored_mut(step) {
                let taken = std::mem::take(sub);
                *sub = apply(taken, handler, rest);
            }
            source
        }
    }
}

/// Set the leaf addressed by `path` to `value`, overwriting whatever was
/// there.
///
/// Intermediate collections are created as needed; an intermediate scalar
/// is cast (wrapped at key 0) before the descent continues. An empty path
/// leaves the collection unchanged.
///
/// # Example
///
/// ```
/// use delve_collection::{coll, place, Key, Value};
///
/// let doc = coll! { "a" => coll! { "e" => 100 } };
/// let out = place(doc, Value::Int(1000), &["a", "f"].map(Key::from));
/// assert_eq!(out, coll! { "a" => coll! { "e" => 100, "f" => 1000 } });
/// ```
pub fn place(mut source: Collection, value: Value, path: &[Key]) -> Collection {
    match path {
        [] => source,
        [last] => {
            source.insert(last.clone(), value);
            source
        }
        [step, rest @ ..] => {
            let sub = cast(source.get(step).cloned().unwrap_or(Value::Null));
            source.insert(step.clone(), place(sub, value, rest));
            source
        }
    }
}

/// Add `value` into the collection addressed by `path`, accumulating.
///
/// Intermediate collections are created as needed; the addressed level is
/// cast to a collection and receives `cast(value)` with flat-merge
/// semantics. An occupied leaf therefore coalesces into a renumbered list
/// instead of being overwritten, the counterpart to [`place`].
///
/// Operates in place on the caller's collection.
///
/// # Example
///
/// ```
/// use delve_collection::{coll, improve, Key, Value};
///
/// let mut doc = coll! { "g" => coll! { "n1" => "1a" } };
/// improve(&mut doc, &["g", "n1"].map(Key::from), Value::from("2b"));
/// assert_eq!(doc, coll! { "g" => coll! { "n1" => coll!["1a", "2b"] } });
/// ```
pub fn improve(source: &mut Collection, path: &[Key], value: Value) {
    match path.split_first() {
        None => {
            let base = std::mem::take(source);
            *source = flat_merge(base, cast(value));
        }
        Some((step, rest)) => {
            let mut sub = cast(source.get(step).cloned().unwrap_or(Value::Null));
            improve(&mut sub, rest, value);
            source.insert(step.clone(), sub);
        }
    }
}

/// Remove the entry addressed by `path`.
///
/// Descends by all but the last key, then removes the final key from that
/// level. The collection is returned unchanged when any step is missing or
/// is not a collection.
///
/// # Example
///
/// ```
/// use delve_collection::{coll, erase, Key};
///
/// let doc = coll! { "g" => coll! { "n1" => "1a", "n2" => "1b" } };
/// let out = erase(doc, &["g", "n1"].map(Key::from));
/// assert_eq!(out, coll! { "g" => coll! { "n2" => "1b" } });
/// ```
pub fn erase(mut source: Collection, path: &[Key]) -> Collection {
    match path {
        [] => source,
        [last] => {
            source.remove(last);
            source
        }
        [step, rest @ ..] => {
            if let Some(Value::Collection(sub)) = source.get_stored_mut(step) {
                let taken = std::mem::take(sub);
                *sub = erase(taken, rest);
            }
            source
        }
    }
}
