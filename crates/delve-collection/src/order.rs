//! Sorting and randomness.

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::collection::Collection;
use crate::types::{Key, Value};

/// Sort by value in natural order. Keys are not preserved.
pub fn sort(source: Collection) -> Collection {
    sort_by(source, |a, b| a.natural_cmp(b))
}

/// Sort by value with a comparator. Keys are not preserved.
pub fn sort_by<F>(source: Collection, mut compare: F) -> Collection
where
    F: FnMut(&Value, &Value) -> Ordering,
{
    let mut values: Vec<Value> = source.into_iter().map(|(_, value)| value).collect();
    values.sort_by(|a, b| compare(a, b));
    values.into_iter().collect()
}

/// Sort by key in natural order (integer keys first, numerically; then
/// string keys, lexicographically). Keys are preserved.
pub fn ksort(source: Collection) -> Collection {
    ksort_by(source, Key::cmp)
}

/// Sort by key with a comparator. Keys are preserved.
pub fn ksort_by<F>(source: Collection, mut compare: F) -> Collection
where
    F: FnMut(&Key, &Key) -> Ordering,
{
    let mut entries: Vec<(Key, Value)> = source.into_iter().collect();
    entries.sort_by(|a, b| compare(&a.0, &b.0));
    entries.into_iter().collect()
}

/// Random permutation of the values. Keys are not preserved.
pub fn shuffle(source: Collection) -> Collection {
    let mut values: Vec<Value> = source.into_iter().map(|(_, value)| value).collect();
    values.shuffle(&mut thread_rng());
    values.into_iter().collect()
}

/// One uniformly random value, or `None` from an empty collection.
pub fn rand(source: &Collection) -> Option<&Value> {
    if source.is_empty() {
        return None;
    }
    let position = thread_rng().gen_range(0..source.len());
    source.get_index(position).map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coll;

    #[test]
    fn sort_natural() {
        let c = coll!["d", "a", "c", "b"];
        assert_eq!(sort(c), coll!["a", "b", "c", "d"]);
    }

    #[test]
    fn sort_discards_keys() {
        let c = coll! { "x" => 3, "y" => 1, "z" => 2 };
        assert_eq!(sort(c), coll![1, 2, 3]);
    }

    #[test]
    fn sort_by_comparator() {
        let c = coll![1, 3, 2];
        let reversed = sort_by(c, |a, b| b.natural_cmp(a));
        assert_eq!(reversed, coll![3, 2, 1]);
    }

    #[test]
    fn ksort_natural() {
        let c = coll! { "d" => "d1", "a" => "a1", "c" => "c1", "b" => "b1" };
        assert_eq!(
            ksort(c),
            coll! { "a" => "a1", "b" => "b1", "c" => "c1", "d" => "d1" }
        );
    }

    #[test]
    fn ksort_integers_before_strings() {
        let c = coll! { "a" => 1, 10 => 2, 2 => 3 };
        assert_eq!(ksort(c), coll! { 2 => 3, 10 => 2, "a" => 1 });
    }

    #[test]
    fn ksort_by_comparator() {
        let c = coll! { "a" => 1, "b" => 2 };
        let reversed = ksort_by(c, |a, b| b.cmp(a));
        assert_eq!(reversed, coll! { "b" => 2, "a" => 1 });
    }

    #[test]
    fn shuffle_permutes_values() {
        let c = coll!["a", "b", "c", "d", "e", "f", "g", "h", "i"];
        let shuffled = shuffle(c.clone());
        assert_eq!(shuffled.len(), c.len());
        assert_eq!(sort(shuffled), sort(c));
    }

    #[test]
    fn rand_picks_a_member() {
        let c = coll!["a", "b", "c"];
        for _ in 0..10 {
            let picked = rand(&c).unwrap();
            assert!(c.find(picked).is_some());
        }
        assert_eq!(rand(&coll![]), None);
    }
}
