use anyhow::Result;

use crate::Value;

use super::fixture;

#[test]
fn lookup() -> Result<()> {
    let doc = fixture();
    let root = doc.as_ref();

    assert_eq!(root.lookup(["a", "b", "c"]), Some(&Value::from("d")));
    assert_eq!(root.lookup(["a", "e"]), Some(&Value::from("f")));
    assert_eq!(root.lookup(["a", "x", "y"]), None);
    assert_eq!(root.lookup(["x"]), None);
    Ok(())
}

#[test]
fn lookup_owned_keys() {
    let doc = fixture();
    let path = vec![String::from("a"), String::from("b"), String::from("c")];
    assert_eq!(doc.as_ref().lookup(&path), Some(&Value::from("d")));
}

#[test]
fn lookup_is_not_wrapped() {
    let doc = fixture();
    let b = doc.as_ref().lookup(["a", "b"]);
    assert_eq!(b.and_then(Value::as_mapping).map(|m| m.len()), Some(1));
}

#[test]
fn lookup_through_scalar() {
    let doc = fixture();
    assert_eq!(doc.as_ref().lookup(["a", "e", "g"]), None);
}

#[test]
fn lookup_empty() {
    let doc = fixture();
    assert_eq!(doc.as_ref().lookup::<[&str; 0]>([]), None);
}
