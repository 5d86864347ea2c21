//! Path-addressed operations exercised together on one nested document.

use delve_collection::{
    apply, coll, erase, follow, improve, place, Collection, Key, Value,
};

fn document() -> Collection {
    coll! {
        "a" => coll! {
            "e" => 100,
            "g" => coll! { "n1" => "1a", "n2" => "1b" },
        },
        "b" => 12,
    }
}

fn path(steps: &[&str]) -> Vec<Key> {
    steps.iter().map(|step| Key::from(*step)).collect()
}

#[test]
fn erase_removes_a_deep_leaf() {
    assert_eq!(
        erase(document(), &path(&["a", "g", "n1"])),
        coll! {
            "a" => coll! { "e" => 100, "g" => coll! { "n2" => "1b" } },
            "b" => 12,
        }
    );
}

#[test]
fn place_overwrites_where_improve_accumulates() {
    let at = path(&["a", "g", "n2"]);

    let placed = place(document(), Value::from("2b"), &at);
    assert_eq!(follow(&placed, &at), Some(&Value::from("2b")));

    let mut improved = document();
    improve(&mut improved, &at, Value::from("2b"));
    assert_eq!(follow(&improved, &at), Some(&Value::from(coll!["1b", "2b"])));

    // the two must differ for any occupied leaf
    assert_ne!(follow(&placed, &at), follow(&improved, &at));
}

#[test]
fn place_autovivifies_a_whole_branch() {
    let at = path(&["x", "y", "z"]);
    let out = place(document(), Value::Int(1), &at);
    assert_eq!(follow(&out, &at), Some(&Value::Int(1)));
    // untouched branches survive
    assert_eq!(follow(&out, &path(&["a", "e"])), Some(&Value::Int(100)));
}

#[test]
fn improve_autovivifies_a_whole_branch() {
    let mut doc = document();
    improve(&mut doc, &path(&["x", "y"]), Value::Int(1));
    assert_eq!(
        follow(&doc, &path(&["x", "y"])),
        Some(&Value::from(coll![1]))
    );
}

#[test]
fn follow_returns_subsets_and_leaves() {
    let doc = document();
    assert_eq!(
        follow(&doc, &path(&["a", "g"])),
        Some(&Value::from(coll! { "n1" => "1a", "n2" => "1b" }))
    );
    assert_eq!(follow(&doc, &path(&["b"])), Some(&Value::Int(12)));
    assert_eq!(follow(&doc, &path(&["a", "g", "n9"])), None);
    assert_eq!(follow(&doc, &[]), None);
}

#[test]
fn apply_increments_a_numeric_leaf() {
    let at = path(&["a", "e"]);
    let out = apply(
        document(),
        |v| Value::Int(v.as_i64().unwrap_or_default() + 1),
        &at,
    );
    assert_eq!(follow(&out, &at), Some(&Value::Int(101)));
}

#[test]
fn apply_on_a_missing_leaf_changes_nothing() {
    let out = apply(document(), |_| Value::Int(0), &path(&["a", "z"]));
    assert_eq!(out, document());
}

#[test]
fn integer_keys_address_positional_entries() {
    let doc = coll! { 3 => coll!["a", "b", "c"] };
    let at = [Key::Int(3), Key::Int(1)];
    assert_eq!(follow(&doc, &at), Some(&Value::from("b")));

    let out = erase(doc, &at);
    assert_eq!(out, coll! { 3 => coll! { 0 => "a", 2 => "c" } });
}

#[test]
fn erase_keeps_sibling_order() {
    let doc = coll! { "a" => 1, "b" => 2, "c" => 3, "d" => 4 };
    let out = erase(doc, &path(&["b"]));
    let keys: Vec<String> = out.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, ["a", "c", "d"]);
}
