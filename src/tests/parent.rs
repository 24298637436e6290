use anyhow::{Context, Result};

use crate::{Document, ErrorKind, Mapping, Nested, Value};

use super::fixture;

#[test]
fn parent_chain() -> Result<()> {
    let doc = fixture();
    let root = doc.as_ref();

    assert!(root.parent().is_none());

    let b = root.item_path("a.b")?.into_nested().context("expected mapping")?;
    let a = b.parent().context("missing parent of b")?;
    assert_eq!(a.item("e")?, "f");

    let top = a.parent().context("missing parent of a")?;
    assert_eq!(top, root);
    assert!(top.parent().is_none());
    Ok(())
}

#[test]
fn parent_key_is_data() -> Result<()> {
    let mut raw = Mapping::new();
    raw.insert("a", [("parent", "inner")].into_iter().collect::<Mapping>());
    raw.insert("parent", "foo");

    let root = Nested::new(&raw);
    assert!(root.has("parent"));
    assert_eq!(root.item("parent")?, "foo");
    assert!(root.parent().is_none());

    let a = root.item("a")?.into_nested().context("expected mapping")?;
    assert_eq!(a.item("parent")?, "inner");
    assert_eq!(a.parent(), Some(root));
    Ok(())
}

#[test]
fn into_parent_mut() -> Result<()> {
    let mut doc = fixture();
    assert!(doc.as_mut().into_parent_mut().is_none());

    let mut root = doc.as_mut();
    let mut b = root.item_path_mut("a.b")?.into_nested_mut().context("expected mapping")?;
    b.insert("i", "j");

    let mut a = b.into_parent_mut().context("missing parent")?;
    a.insert("g", "h");

    let mut top = a.into_parent_mut().context("missing root")?;
    top.insert("k", "l");
    assert!(top.into_parent_mut().is_none());

    assert_eq!(doc.to_string(), "{a: {b: {c: d, i: j}, e: f, g: h}, k: l}");
    Ok(())
}

#[test]
fn mutate_through_parent_then_reaccess() -> Result<()> {
    let mut doc = fixture();
    let root = doc.as_mut();

    let a = root.into_item_mut("a")?.into_nested_mut().context("expected mapping")?;
    let mut root = a.into_parent_mut().context("missing parent")?;
    root.delete("a")?;

    assert_eq!(root.item_mut("a").unwrap_err().kind(), ErrorKind::KeyNotFound);
    assert!(root.get_mut("a").is_none());

    root.insert("a", "scalar");
    assert!(root.item_mut("a")?.into_nested_mut().is_none());

    root.set_attr("a", Mapping::new())?;
    let mut a = root.into_item_mut("a")?.into_nested_mut().context("expected mapping")?;
    a.insert("e", "x");
    assert!(a.has("e"));
    assert_eq!(a.len(), 1);

    assert_eq!(doc.to_string(), "{a: {e: x}}");
    Ok(())
}

#[test]
fn replace_child_through_parent() -> Result<()> {
    let mut doc = fixture();
    let mut root = doc.as_mut();

    let b = root.item_path_mut("a.b")?.into_nested_mut().context("expected mapping")?;
    let mut a = b.into_parent_mut().context("missing parent")?;
    a.insert("b", 1);

    let b = a.item_mut("b")?;
    assert!(b.into_nested_mut().is_none());
    assert_eq!(a.item_mut("b")?.as_ref(), crate::Any::Scalar(&Value::from(1)));

    assert_eq!(doc.to_string(), "{a: {b: 1, e: f}}");
    Ok(())
}

#[test]
fn parent_of_mutable_as_ref() -> Result<()> {
    let mut doc = Document::default();
    doc.as_mut().set_attr("a.b.c", 1)?;

    let mut root = doc.as_mut();
    let b = root.item_path_mut("a.b")?.into_nested_mut().context("expected mapping")?;
    let b = b.into_ref();

    let a = b.parent().context("missing parent")?;
    assert!(a.has("b"));
    assert!(a.parent().context("missing root")?.has("a"));
    Ok(())
}
