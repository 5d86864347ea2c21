//! Collection construction macro.

/// Build a [`Collection`](crate::Collection) from literals.
///
/// Two forms: `key => value` pairs, or bare values at dense integer keys.
/// Keys and values go through [`Key::from`](crate::Key) and
/// [`Value::from`](crate::Value), so nested `coll!` calls work directly.
///
/// # Example
///
/// ```
/// use delve_collection::{coll, Key, Value};
///
/// let doc = coll! {
///     "a" => coll! { "e" => 100 },
///     "b" => 12,
/// };
/// assert_eq!(doc.len(), 2);
///
/// let list = coll!["x", "y"];
/// assert_eq!(list.key(1), Some(&Key::Int(1)));
/// ```
#[macro_export]
macro_rules! coll {
    () => {
        $crate::Collection::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut collection = $crate::Collection::new();
        $(collection.insert($crate::Key::from($key), $crate::Value::from($value));)+
        collection
    }};
    ($($value:expr),+ $(,)?) => {{
        let mut collection = $crate::Collection::new();
        $(collection.push($crate::Value::from($value));)+
        collection
    }};
}
