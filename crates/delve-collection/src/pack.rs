//! Reversible flat `key<delimiter>value` string encoding.

use crate::collection::Collection;
use crate::construct::compile;
use crate::types::{Key, TypeConversionError, Value};

/// Encode each entry as `"{key}{delimiter}{value}"`.
///
/// The key is stringified with anything from the first delimiter occurrence
/// onward stripped, so the delimiter never appears inside the key part.
/// Original keys are discarded from the result's structure.
///
/// # Errors
///
/// [`TypeConversionError`] if any value is a nested collection.
///
/// # Example
///
/// ```
/// use delve_collection::{coll, pack};
///
/// let c = coll! { "a" => "lt_a", "b=1" => "lt_b" };
/// assert_eq!(pack(&c, "=").unwrap(), vec!["a=lt_a", "b=lt_b"]);
/// ```
pub fn pack(source: &Collection, delimiter: &str) -> Result<Vec<String>, TypeConversionError> {
    let mut out = Vec::with_capacity(source.len());
    for (key, value) in source.iter() {
        let mut name = key.to_string();
        if let Some(at) = name.find(delimiter) {
            name.truncate(at);
        }
        let text = value.coerce_string()?;
        out.push(format!("{name}{delimiter}{text}"));
    }
    Ok(out)
}

/// Decode a packed sequence back into a collection.
///
/// Each string splits on the first delimiter occurrence into a key part and
/// a value part (no delimiter: the whole string is the key and the value is
/// empty); both sides are trimmed, then the alternating key/value sequence
/// is [`compile`]d. Canonical integer key texts become integer keys.
/// Round-trips with [`pack`] for delimiter-free trimmed string keys and
/// values.
///
/// # Example
///
/// ```
/// use delve_collection::{coll, unpack};
///
/// let lines = ["a=lt_a", "b = lt_b"].map(String::from);
/// assert_eq!(unpack(lines, "="), coll! { "a" => "lt_a", "b" => "lt_b" });
/// ```
pub fn unpack<I>(source: I, delimiter: &str) -> Collection
where
    I: IntoIterator<Item = String>,
{
    let mut flat = Vec::new();
    for line in source {
        let (name, text) = match line.find(delimiter) {
            Some(at) if !delimiter.is_empty() => {
                let text = line[at + delimiter.len()..].to_string();
                let mut name = line;
                name.truncate(at);
                (name, text)
            }
            _ => (line, String::new()),
        };
        flat.push(Value::from(Key::from_text(name.trim())));
        flat.push(Value::Str(text.trim().to_string()));
    }
    compile(flat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coll;

    #[test]
    fn pack_joins_entries() {
        let c = coll! { "a" => "lt_a", "b" => "lt_b", "c" => "lt_c" };
        assert_eq!(pack(&c, "=").unwrap(), vec!["a=lt_a", "b=lt_b", "c=lt_c"]);
    }

    #[test]
    fn pack_strips_delimiter_from_keys() {
        let c = coll! { "a" => "lt_a", "b=1" => "lt_b" };
        assert_eq!(pack(&c, "=").unwrap(), vec!["a=lt_a", "b=lt_b"]);
    }

    #[test]
    fn pack_coerces_scalars() {
        let c = coll! { 0 => 12, "f" => 2.5, "t" => true, "n" => Value::Null };
        assert_eq!(pack(&c, ":").unwrap(), vec!["0:12", "f:2.5", "t:true", "n:"]);
    }

    #[test]
    fn pack_rejects_nested_collections() {
        let c = coll! { "a" => coll![1] };
        assert_eq!(pack(&c, "="), Err(TypeConversionError));
    }

    #[test]
    fn unpack_splits_and_trims() {
        let lines = [
            "lt_a", "b=lt_b", "c=lt_c", " d = lt_d ", "=lt_h", "=lt_i",
        ]
        .map(String::from);

        assert_eq!(
            unpack(lines, "="),
            coll! {
                "lt_a" => "",
                "b" => "lt_b",
                "c" => "lt_c",
                "d" => "lt_d",
                "" => "lt_i",
            }
        );
    }

    #[test]
    fn unpack_splits_on_first_occurrence_only() {
        let lines = ["k=a=b"].map(String::from);
        assert_eq!(unpack(lines, "="), coll! { "k" => "a=b" });
    }

    #[test]
    fn unpack_restores_integer_keys() {
        let lines = ["3=x", "name=y"].map(String::from);
        assert_eq!(unpack(lines, "="), coll! { 3 => "x", "name" => "y" });
    }

    #[test]
    fn pack_unpack_roundtrip() {
        let c = coll! { "a" => "lt_a", "b" => "lt_b", 7 => "lt_c" };
        let packed = pack(&c, "|").unwrap();
        assert_eq!(unpack(packed, "|"), c);
    }
}
