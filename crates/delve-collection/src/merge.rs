//! Structural combination: shallow overlays and deep merges.
//!
//! Two families with different collision rules. [`append`]/[`prepend`]
//! overlay one level deep and let the overlaid side win named-key
//! collisions. [`merge`] recurses and accumulates colliding scalars into
//! lists; [`unite`] recurses and overwrites.

use crate::collection::Collection;
use crate::construct::{cast, collect};
use crate::path::improve;
use crate::types::{Key, Value};

/// Concatenate two collections: string keys overwrite in place, integer
/// keys from both sides are renumbered densely in encounter order.
pub(crate) fn flat_merge(target: Collection, addition: Collection) -> Collection {
    let mut out = Collection::with_capacity(target.len() + addition.len());
    for (key, value) in target.into_iter().chain(addition) {
        match key {
            Key::Int(_) => out.push(value),
            key => {
                out.insert(key, value);
            }
        }
    }
    out
}

/// Overlay `addition` onto the end of `source`.
///
/// The result keeps `source`'s integer-keyed entries and the string-keyed
/// entries not present in `addition`, then every entry of `addition`
/// follows; named-key collisions resolve to `addition`, at `addition`'s
/// position. Integer keys are renumbered.
///
/// # Example
///
/// ```
/// use delve_collection::{append, coll};
///
/// let out = append(coll! { "a" => 1, "c" => 2 }, coll! { "c" => 9, "d" => 3 });
/// assert_eq!(out, coll! { "a" => 1, "c" => 9, "d" => 3 });
/// ```
pub fn append(source: Collection, addition: Collection) -> Collection {
    let kept: Collection = source
        .into_iter()
        .filter(|(key, _)| key.is_int() || !addition.contains_key(key))
        .collect();
    flat_merge(kept, addition)
}

/// Mirror of [`append`]: `addition` comes first, `source` contributes its
/// integer keys and the string keys not colliding with `addition`.
pub fn prepend(source: Collection, addition: Collection) -> Collection {
    let kept: Collection = source
        .into_iter()
        .filter(|(key, _)| key.is_int() || !addition.contains_key(key))
        .collect();
    flat_merge(addition, kept)
}

/// Deep recursive merge with accumulate semantics.
///
/// For each entry of `supplier`: a nested collection merges recursively
/// into the (cast) counterpart; an integer-keyed scalar appends at the next
/// integer key; a colliding string-keyed scalar coalesces with the existing
/// value into a list; anything else inserts as new. Integer keys are not
/// preserved.
///
/// # Example
///
/// ```
/// use delve_collection::{coll, merge};
///
/// let out = merge(coll! { "b" => 12 }, coll! { "b" => 44 });
/// assert_eq!(out, coll! { "b" => coll![12, 44] });
/// ```
pub fn merge(source: Collection, supplier: Collection) -> Collection {
    let mut out = source;
    for (key, value) in supplier {
        match value {
            Value::Collection(sub) => {
                let base = cast(out.get(&key).cloned().unwrap_or(Value::Null));
                out.insert(key, merge(base, sub));
            }
            scalar => {
                if key.is_int() {
                    out.push(scalar);
                } else if out.contains_key(&key) {
                    improve(&mut out, std::slice::from_ref(&key), scalar);
                } else {
                    out.insert(key, scalar);
                }
            }
        }
    }
    out
}

/// Deep recursive merge with overwrite semantics.
///
/// Every key in `supplier` replaces the corresponding key in `source`,
/// recursing where the supplier side is a collection (the source side is
/// cast before recursing).
///
/// # Example
///
/// ```
/// use delve_collection::{coll, unite};
///
/// let out = unite(
///     coll! { "a" => coll! { "a1" => 100, "a3" => 300 } },
///     coll! { "a" => coll! { "a3" => "x" } },
/// );
/// assert_eq!(out, coll! { "a" => coll! { "a1" => 100, "a3" => "x" } });
/// ```
pub fn unite(source: Collection, supplier: Collection) -> Collection {
    let mut out = source;
    for (key, value) in supplier {
        match value {
            Value::Collection(sub) => {
                let base = cast(out.get(&key).cloned().unwrap_or(Value::Null));
                out.insert(key, unite(base, sub));
            }
            scalar => {
                out.insert(key, scalar);
            }
        }
    }
    out
}

/// Add values to the end of a collection, at fresh integer keys.
pub fn push<I>(source: Collection, values: I) -> Collection
where
    I: IntoIterator<Item = Value>,
{
    append(source, values.into_iter().collect())
}

/// Add values to the beginning of a collection, at fresh integer keys.
///
/// Values land in reverse argument order, each "unshifted" onto the front
/// in turn.
pub fn unshift<I>(source: Collection, values: I) -> Collection
where
    I: IntoIterator<Item = Value>,
{
    let mut values: Vec<Value> = values.into_iter().collect();
    values.reverse();
    prepend(source, values.into_iter().collect())
}

/// Splice values into the given position.
///
/// Values are [`collect`]ed first; a position at or past the end appends.
pub fn insert<I>(source: Collection, position: usize, values: I) -> Collection
where
    I: IntoIterator<Item = Value>,
{
    let addition = collect(values);
    if position == 0 {
        return prepend(source, addition);
    }
    let mut head = Collection::new();
    let mut tail = Collection::new();
    for (index, (key, value)) in source.into_iter().enumerate() {
        if index < position {
            head.insert(key, value);
        } else {
            tail.insert(key, value);
        }
    }
    flat_merge(flat_merge(head, addition), tail)
}
