//! Ordered keyed collections with path-addressed manipulation.
//!
//! A [`Collection`] is an insertion-ordered mapping from integer or string
//! [`Key`]s to [`Value`]s, where a value may itself be a nested collection.
//! Around it, free functions provide:
//!
//! - normalization and construction: [`castable`], [`cast`], [`collect`],
//!   [`simplify`], [`combine`], [`compile`], [`make`];
//! - key-path navigation: [`follow`], [`apply`], [`place`], [`improve`],
//!   [`erase`];
//! - structural combination: [`append`], [`prepend`], [`merge`], [`unite`],
//!   [`push`], [`unshift`], [`insert`];
//! - selection and ordering: [`only`], [`except`], [`select`], [`has`],
//!   [`contains`], [`like`], [`odd`], [`even`], [`left`], [`right`],
//!   [`take`], [`cut`], [`each`], [`sort`], [`ksort`], [`shuffle`],
//!   [`rand`];
//! - a reversible flat string encoding: [`pack`] / [`unpack`].
//!
//! Everything is stateless and synchronous; operations take collections by
//! value and return new ones unless documented as in-place.
//!
//! # Example
//!
//! ```
//! use delve_collection::{coll, erase, follow, improve, place, Key, Value};
//!
//! let doc = coll! {
//!     "a" => coll! { "e" => 100, "g" => coll! { "n1" => "1a" } },
//!     "b" => 12,
//! };
//!
//! let path = ["a", "g", "n1"].map(Key::from);
//! assert_eq!(follow(&doc, &path), Some(&Value::from("1a")));
//!
//! // place overwrites...
//! let placed = place(doc.clone(), Value::from("2b"), &path);
//! assert_eq!(follow(&placed, &path), Some(&Value::from("2b")));
//!
//! // ...improve accumulates...
//! let mut improved = doc.clone();
//! improve(&mut improved, &path, Value::from("2b"));
//! assert_eq!(follow(&improved, &path), Some(&Value::from(coll!["1a", "2b"])));
//!
//! // ...and erase removes.
//! let erased = erase(doc, &path);
//! assert_eq!(follow(&erased, &path), None);
//! ```

pub mod collection;
pub mod construct;
mod macros;
pub mod merge;
pub mod order;
pub mod pack;
pub mod path;
pub mod select;
pub mod types;

pub use collection::Collection;
pub use construct::{cast, castable, collect, combine, compile, make, simplify};
pub use merge::{append, insert, merge, prepend, push, unite, unshift};
pub use order::{ksort, ksort_by, rand, shuffle, sort, sort_by};
pub use pack::{pack, unpack};
pub use path::{apply, erase, follow, improve, place};
pub use select::{
    contains, cut, each, even, except, has, left, like, odd, only, right, select, take,
};
pub use types::{Key, TypeConversionError, Value};
