use anyhow::{Context, Result};

use crate::{Document, ErrorKind, Mapping, Value};

use super::fixture;

#[test]
fn set_attr_creates_levels() -> Result<()> {
    let mut doc = Document::default();
    let mut root = doc.as_mut();

    root.set_attr("a.b.c", "d")?;
    root.set_attr("a.e", "f")?;
    root.set_attr("top", 1)?;

    assert_eq!(doc.to_string(), "{a: {b: {c: d}, e: f}, top: 1}");
    assert_eq!(doc, fixture_with_top());
    Ok(())
}

fn fixture_with_top() -> Document {
    let mut doc = fixture();
    doc.raw_mut().insert("top", 1);
    doc
}

#[test]
fn set_attr_through_scalar() -> Result<()> {
    let mut doc = fixture();
    let mut root = doc.as_mut();

    let error = root.set_attr("a.e.g.h", "x").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ExpectedMapping);
    assert_eq!(error.key(), "e");
    assert_eq!(error.to_string(), "expected mapping: e");

    root.set_attr("n", Value::Null)?;
    let error = root.set_attr("n.m", 1).unwrap_err();
    assert_eq!(error.key(), "n");

    assert_eq!(doc.to_string(), "{a: {b: {c: d}, e: f}, n: null}");
    Ok(())
}

#[test]
fn set_attr_replaces_leaf() -> Result<()> {
    let mut doc = fixture();
    let mut root = doc.as_mut();

    root.set_attr("a.b", "x")?;
    root.set_attr("a.e.g", "h").unwrap_err();
    root.set_attr("a.e", [("g", "h")].into_iter().collect::<Mapping>())?;

    assert_eq!(doc.to_string(), "{a: {b: x, e: {g: h}}}");
    Ok(())
}

#[test]
fn write_through_views() -> Result<()> {
    let mut doc = fixture();

    {
        let mut root = doc.as_mut();
        let mut a = root.item_mut("a")?.into_nested_mut().context("expected mapping")?;
        a.insert("g", "h");

        let e = a.item_mut("e")?.into_scalar_mut().context("expected scalar")?;
        *e = Value::from("x");
    }

    let a = doc.raw().get("a").and_then(Value::as_mapping).context("expected mapping")?;
    assert_eq!(a.get("g"), Some(&Value::from("h")));
    assert_eq!(a.get("e"), Some(&Value::from("x")));
    Ok(())
}

#[test]
fn insert_replaces() -> Result<()> {
    let mut doc = fixture();
    let mut root = doc.as_mut();
    let mut a = root.get_mut("a").and_then(|a| a.into_nested_mut()).context("expected mapping")?;

    assert_eq!(a.insert("e", "x"), Some(Value::from("f")));
    assert_eq!(a.insert("new", "y"), None);
    assert_eq!(a.to_string(), "{b: {c: d}, e: x, new: y}");
    Ok(())
}

#[test]
fn delete() -> Result<()> {
    let mut doc = fixture();
    let root = doc.as_mut();
    let mut a = root.into_item_mut("a")?.into_nested_mut().context("expected mapping")?;

    let b = a.delete("b")?;
    assert_eq!(b, Value::from([("c", "d")].into_iter().collect::<Mapping>()));
    assert!(!a.has("b"));
    assert_eq!(a.len(), 1);

    let error = a.delete("b").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::KeyNotFound);

    assert_eq!(doc.to_string(), "{a: {e: f}}");
    Ok(())
}

#[test]
fn missing_mutable_access() {
    let mut doc = fixture();
    let mut root = doc.as_mut();

    assert!(root.get_mut("x").is_none());
    assert_eq!(root.item_mut("x").unwrap_err().kind(), ErrorKind::KeyNotFound);
    assert_eq!(root.item_path_mut("a.e.x").unwrap_err().kind(), ErrorKind::ExpectedMapping);
    assert_eq!(root.item_path_mut("a.x").unwrap_err().kind(), ErrorKind::KeyNotFound);
}

#[test]
fn raw_mut_is_identity() -> Result<()> {
    let mut doc = fixture();

    let mut root = doc.as_mut();
    let a = root.item_mut("a")?.into_nested_mut().context("expected mapping")?;
    a.into_raw_mut().insert("g", "h");
    assert_eq!(doc.as_ref().item_path("a.g")?, "h");

    doc.as_mut().raw_mut().remove("a");
    assert!(doc.raw().is_empty());
    Ok(())
}
