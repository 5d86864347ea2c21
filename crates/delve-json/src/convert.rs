//! Conversion between engine values and `serde_json` values.

use delve_collection::{Collection, Key, Value};
use serde_json::Value as Json;

use crate::FormatError;

/// Convert parsed JSON into an engine value.
///
/// Arrays become densely integer-keyed collections. Object member names
/// that are canonical base-10 integers become integer keys. Integral
/// numbers in `i64` range become `Int`, everything else `Float`.
pub fn from_json(json: Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        Json::String(s) => Value::Str(s),
        Json::Array(items) => {
            let collection: Collection = items.into_iter().map(from_json).collect();
            Value::Collection(collection)
        }
        Json::Object(members) => {
            let mut collection = Collection::with_capacity(members.len());
            for (name, value) in members {
                collection.insert(Key::from_text(&name), from_json(value));
            }
            Value::Collection(collection)
        }
    }
}

/// Convert an engine value into JSON.
///
/// # Errors
///
/// [`FormatError::Unrepresentable`] for a non-finite float.
pub fn to_json(value: &Value) -> Result<Json, FormatError> {
    match value {
        Value::Null => Ok(Json::Null),
        Value::Bool(b) => Ok(Json::Bool(*b)),
        Value::Int(i) => Ok(Json::from(*i)),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(Json::Number)
            .ok_or(FormatError::Unrepresentable),
        Value::Str(s) => Ok(Json::String(s.clone())),
        Value::Collection(c) => collection_to_json(c),
    }
}

/// Convert a collection into JSON: an array when its keys are exactly
/// `0..len` in order, otherwise an object with stringified keys.
pub fn collection_to_json(source: &Collection) -> Result<Json, FormatError> {
    if is_list(source) {
        let mut items = Vec::with_capacity(source.len());
        for (_, value) in source.iter() {
            items.push(to_json(value)?);
        }
        Ok(Json::Array(items))
    } else {
        let mut members = serde_json::Map::with_capacity(source.len());
        for (key, value) in source.iter() {
            members.insert(key.to_string(), to_json(value)?);
        }
        Ok(Json::Object(members))
    }
}

fn is_list(source: &Collection) -> bool {
    source
        .iter()
        .enumerate()
        .all(|(position, (key, _))| *key == Key::Int(position as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_collection::coll;
    use serde_json::json;

    #[test]
    fn from_json_scalars() {
        assert_eq!(from_json(json!(null)), Value::Null);
        assert_eq!(from_json(json!(true)), Value::Bool(true));
        assert_eq!(from_json(json!(12)), Value::Int(12));
        assert_eq!(from_json(json!(2.5)), Value::Float(2.5));
        assert_eq!(from_json(json!("x")), Value::Str("x".to_string()));
    }

    #[test]
    fn from_json_array_gets_dense_keys() {
        assert_eq!(from_json(json!([1, "a"])), Value::from(coll![1, "a"]));
    }

    #[test]
    fn from_json_integer_member_names() {
        let value = from_json(json!({"222": "x", "name": "y", "007": "z"}));
        assert_eq!(
            value,
            Value::from(coll! { 222 => "x", "name" => "y", "007" => "z" })
        );
    }

    #[test]
    fn to_json_list_detection() {
        assert_eq!(collection_to_json(&coll![1, 2]).unwrap(), json!([1, 2]));
        // a hole breaks the list shape
        assert_eq!(
            collection_to_json(&coll! { 0 => 1, 2 => 2 }).unwrap(),
            json!({"0": 1, "2": 2})
        );
        // so does order
        assert_eq!(
            collection_to_json(&coll! { 1 => "b", 0 => "a" }).unwrap(),
            json!({"1": "b", "0": "a"})
        );
        assert_eq!(collection_to_json(&coll![]).unwrap(), json!([]));
    }

    #[test]
    fn to_json_mixed_keys_become_an_object() {
        let c = coll! { 0 => "a", "k" => "b" };
        assert_eq!(collection_to_json(&c).unwrap(), json!({"0": "a", "k": "b"}));
    }

    #[test]
    fn to_json_rejects_non_finite_floats() {
        let c = coll! { "f" => f64::NAN };
        assert!(matches!(
            collection_to_json(&c),
            Err(FormatError::Unrepresentable)
        ));
    }
}
