use anyhow::{Context, Result};

use crate::{Document, Mapping, Value};

use super::fixture;

#[test]
fn views_render_their_level() -> Result<()> {
    let doc = fixture();
    let root = doc.as_ref();

    assert_eq!(root.to_string(), "{a: {b: {c: d}, e: f}}");

    let a = root.item("a")?.into_nested().context("expected mapping")?;
    assert_eq!(a.to_string(), "{b: {c: d}, e: f}");
    Ok(())
}

#[test]
fn scalars() {
    let mut raw = Mapping::new();
    raw.insert("null", Value::Null);
    raw.insert("bool", true);
    raw.insert("int", -42);
    raw.insert("float", 1.5);
    raw.insert("whole", 2.0);
    raw.insert("not-a-number", f64::NAN);
    raw.insert("negative", f64::NEG_INFINITY);
    raw.insert("list", vec![Value::from(1), Value::from("two")]);
    raw.insert("empty", Mapping::new());

    assert_eq!(
        Document::new(raw).to_string(),
        r#"{"null": null, bool: true, int: -42, float: 1.5, whole: 2.0, not-a-number: .nan, negative: -.inf, list: [1, two], empty: {}}"#
    );
}

#[test]
fn quoting() {
    let mut raw = Mapping::new();
    raw.insert("", "yes");
    raw.insert("a b", "tab\there");
    raw.insert("say", "\"hi\"");

    assert_eq!(
        raw.to_string(),
        r#"{"": "yes", a b: "tab\there", say: "\"hi\""}"#
    );
}
