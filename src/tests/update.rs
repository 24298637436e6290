use anyhow::{Context, Result};

use crate::{Document, Mapping, Value};

use super::fixture;

fn single(path: &str, value: impl Into<Value>) -> Result<Mapping> {
    let mut doc = Document::default();
    doc.as_mut().set_attr(path, value)?;
    Ok(doc.into_inner())
}

#[test]
fn sequential_updates() -> Result<()> {
    let mut doc = fixture();

    doc.as_mut().update(single("a.b.i", "j")?);
    doc.as_mut().update(single("a.b.c", "x")?);
    doc.as_mut().update(single("a.g", "h")?);

    assert_eq!(doc.to_string(), "{a: {b: {c: x, i: j}, e: f, g: h}}");
    Ok(())
}

#[test]
fn update_nested_view() -> Result<()> {
    let mut doc = fixture();
    let mut root = doc.as_mut();
    let mut b = root.item_path_mut("a.b")?.into_nested_mut().context("expected mapping")?;

    b.update([("c", "x"), ("i", "j")].into_iter().collect::<Mapping>());

    assert_eq!(doc.to_string(), "{a: {b: {c: x, i: j}, e: f}}");
    Ok(())
}

#[test]
fn scalar_replaces_mapping() -> Result<()> {
    let mut doc = fixture();
    doc.as_mut().update(single("a.b", 1)?);
    assert_eq!(doc.to_string(), "{a: {b: 1, e: f}}");
    Ok(())
}

#[test]
fn mapping_replaces_scalar() -> Result<()> {
    let mut doc = fixture();
    doc.as_mut().update(single("a.e.g", "h")?);
    assert_eq!(doc.to_string(), "{a: {b: {c: d}, e: {g: h}}}");
    Ok(())
}

#[test]
fn empty_update_is_identity() {
    let mut doc = fixture();
    doc.as_mut().update(Mapping::new());
    assert_eq!(doc, fixture());
}

#[test]
fn self_update_is_identity() {
    let mut doc = fixture();
    let copy = doc.raw().clone();
    doc.as_mut().update(copy);
    assert_eq!(doc, fixture());
}

#[test]
fn update_from_view() -> Result<()> {
    let source = fixture();
    let b = source.as_ref().item_path("a.b")?.into_nested().context("expected mapping")?;

    let mut doc = Document::default();
    doc.as_mut().update(b);

    assert_eq!(doc.to_string(), "{c: d}");
    assert_eq!(source.to_string(), "{a: {b: {c: d}, e: f}}");
    Ok(())
}

#[test]
fn right_biased() -> Result<()> {
    let mut left = Document::new(single("a.b", 1)?);
    let right = single("a.b", 2)?;

    left.as_mut().update(right.clone());
    left.as_mut().update(right);

    assert_eq!(left.as_ref().item_path("a.b")?.as_scalar(), Some(&Value::from(2)));
    Ok(())
}

#[test]
fn disjoint_keys_are_added() -> Result<()> {
    let mut doc = Document::new(single("x", 1)?);
    doc.as_mut().update(fixture().into_inner());

    assert_eq!(doc.to_string(), "{x: 1, a: {b: {c: d}, e: f}}");
    Ok(())
}
