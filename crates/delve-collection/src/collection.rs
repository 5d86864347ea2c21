//! The ordered mapping at the heart of the engine.

use indexmap::IndexMap;

use crate::types::{Key, Value};

/// An insertion-ordered mapping from [`Key`]s to [`Value`]s.
///
/// Keys are unique; overwriting an existing key keeps its position, and
/// removal preserves the order of the remaining entries. Equality is
/// order-sensitive: two collections are equal only if their entry sequences
/// are equal. (`IndexMap`'s own equality ignores order, which would make
/// order-changing operations unobservable.)
///
/// Lookups treat a stored [`Value::Null`] as absent: [`get`](Self::get),
/// [`value`](Self::value), [`first`](Self::first) and [`last`](Self::last)
/// return `None` for it, so callers' `unwrap_or` defaults apply. Raw
/// presence is visible through [`contains_key`](Self::contains_key).
///
/// # Example
///
/// ```
/// use delve_collection::{coll, Key, Value};
///
/// let c = coll! { "a" => 1, "b" => Value::Null };
/// assert_eq!(c.get(&Key::from("a")), Some(&Value::Int(1)));
/// assert_eq!(c.get(&Key::from("b")), None);
/// assert!(c.contains_key(&Key::from("b")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Collection {
    entries: IndexMap<Key, Value>,
}

impl Collection {
    pub fn new() -> Collection {
        Collection { entries: IndexMap::new() }
    }

    pub fn with_capacity(capacity: usize) -> Collection {
        Collection { entries: IndexMap::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, returning the previous value for the key.
    ///
    /// An existing key keeps its position.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove an entry, preserving the order of the remainder.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Single-level lookup. A missing key and a stored `Null` both give
    /// `None`.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        match self.entries.get(key) {
            Some(Value::Null) | None => None,
            found => found,
        }
    }

    /// Raw mutable access to a stored value, `Null` included.
    pub(crate) fn get_stored_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Entry at a position, raw.
    pub fn get_index(&self, position: usize) -> Option<(&Key, &Value)> {
        self.entries.get_index(position)
    }

    /// Position of a key.
    pub fn position(&self, key: &Key) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    /// Value at a position. Out of range and stored `Null` both give `None`.
    pub fn value(&self, position: usize) -> Option<&Value> {
        match self.entries.get_index(position) {
            Some((_, Value::Null)) | None => None,
            Some((_, value)) => Some(value),
        }
    }

    /// Key at a position, or `None` out of range.
    pub fn key(&self, position: usize) -> Option<&Key> {
        self.entries.get_index(position).map(|(key, _)| key)
    }

    pub fn first(&self) -> Option<&Value> {
        self.value(0)
    }

    pub fn last(&self) -> Option<&Value> {
        self.len().checked_sub(1).and_then(|position| self.value(position))
    }

    /// Strict-equality reverse lookup: the first key holding `needle`.
    pub fn find(&self, needle: &Value) -> Option<&Key> {
        self.entries
            .iter()
            .find_map(|(key, value)| (value == needle).then_some(key))
    }

    /// The next free integer key: max existing integer key + 1, or 0.
    pub(crate) fn next_index(&self) -> i64 {
        self.entries
            .keys()
            .filter_map(Key::as_int)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }

    /// Append a value at the next integer key.
    pub fn push<V: Into<Value>>(&mut self, value: V) {
        let key = Key::Int(self.next_index());
        self.entries.insert(key, value.into());
    }

    /// Remove and return the final value. Keys are untouched.
    pub fn pop(&mut self) -> Option<Value> {
        self.entries.pop().map(|(_, value)| value)
    }

    /// Remove and return the leading value. Integer keys are renumbered.
    pub fn shift(&mut self) -> Option<Value> {
        let (_, value) = self.entries.shift_remove_index(0)?;
        self.renumber();
        Some(value)
    }

    /// Remove and yield every entry, front to back.
    pub fn drain(&mut self) -> impl Iterator<Item = (Key, Value)> + '_ {
        self.entries.drain(..)
    }

    /// Renumber integer keys densely from 0 in place, keeping string keys.
    fn renumber(&mut self) {
        if self.entries.keys().all(Key::is_str) {
            return;
        }
        let mut next = 0i64;
        let entries = std::mem::take(&mut self.entries);
        for (key, value) in entries {
            match key {
                Key::Int(_) => {
                    self.entries.insert(Key::Int(next), value);
                    next += 1;
                }
                key => {
                    self.entries.insert(key, value);
                }
            }
        }
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Key, Value> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }
}

// Order-sensitive: entry sequences must match.
impl PartialEq for Collection {
    fn eq(&self, other: &Collection) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(Key, Value)> for Collection {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Collection {
        Collection { entries: iter.into_iter().collect() }
    }
}

/// Bare values collect at dense integer keys.
impl FromIterator<Value> for Collection {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Collection {
        iter.into_iter()
            .enumerate()
            .map(|(position, value)| (Key::Int(position as i64), value))
            .collect()
    }
}

impl Extend<(Key, Value)> for Collection {
    fn extend<I: IntoIterator<Item = (Key, Value)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<T: Into<Value>> From<Vec<T>> for Collection {
    fn from(items: Vec<T>) -> Collection {
        items.into_iter().map(Into::into).collect()
    }
}
