use anyhow::{Context, Result};

use crate::{Any, ErrorKind, Mapping, Nested, Value};

use super::fixture;

#[test]
fn item_wraps_mappings() -> Result<()> {
    let doc = fixture();
    let root = doc.as_ref();

    let a = root.item("a")?;
    assert!(a.is_nested());

    let a = a.into_nested().context("expected mapping")?;
    assert_eq!(a.item("e")?, "f");
    assert!(!a.item("e")?.is_nested());

    let b = a.item("b")?.into_nested().context("expected mapping")?;
    assert_eq!(b.item("c")?.as_scalar(), Some(&Value::from("d")));
    Ok(())
}

#[test]
fn item_missing() {
    let doc = fixture();
    let root = doc.as_ref();

    let error = root.item("x").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::KeyNotFound);
    assert_eq!(error.key(), "x");
    assert_eq!(error.to_string(), "key not found: x");
}

#[test]
fn attr_matches_item() -> Result<()> {
    let mut raw = Mapping::new();
    raw.insert("a.b", "x");
    raw.insert("a", [("b", "y")].into_iter().collect::<Mapping>());
    let root = Nested::new(&raw);

    for key in ["a.b", "a", "missing", "a.missing"] {
        assert_eq!(root.attr(key), root.item(key));
    }

    assert_eq!(root.attr("a.b")?, "x");
    assert_eq!(root.item_path("a.b")?, "y");
    Ok(())
}

#[test]
fn item_path_chains_item() -> Result<()> {
    let doc = fixture();
    let root = doc.as_ref();

    assert_eq!(root.item_path("a")?, root.item("a")?);
    assert_eq!(root.item_path("a.e")?, "f");
    assert_eq!(root.item_path("a.b.c")?, "d");

    let b = root.item_path("a.b")?.into_nested().context("expected mapping")?;
    let a = b.parent().context("missing parent")?;
    assert_eq!(a.item("e")?, "f");
    Ok(())
}

#[test]
fn item_path_errors() {
    let doc = fixture();
    let root = doc.as_ref();

    let error = root.item_path("a.x.c").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::KeyNotFound);
    assert_eq!(error.key(), "x");

    let error = root.item_path("a.e.g").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ExpectedMapping);
    assert_eq!(error.key(), "e");
}

#[test]
fn get_and_defaults() -> Result<()> {
    let doc = fixture();
    let root = doc.as_ref();
    let a = root.item("a")?.into_nested().context("expected mapping")?;

    assert!(a.get("x").is_none());
    assert_eq!(a.get("e").and_then(|v| v.as_str()), Some("f"));

    assert_eq!(a.get_or("x", &Value::from("y")), "y");
    assert_eq!(a.get_or("e", &Value::from("y")), "f");

    // Defaults are never wrapped, even when they are mappings.
    let default = Value::from(Mapping::new());
    assert!(matches!(a.get_or("x", &default), Any::Scalar(..)));
    assert!(a.get_or("b", &default).is_nested());
    Ok(())
}

#[test]
fn membership() -> Result<()> {
    let doc = fixture();
    let root = doc.as_ref();
    let a = root.item("a")?.into_nested().context("expected mapping")?;

    assert!(a.has("e"));
    assert!(a.contains_key("b"));
    assert!(!a.has("x"));
    assert!(!a.has("c"));
    assert!(!a.has("parent"));
    assert_eq!(a.len(), 2);
    assert!(!a.is_empty());
    Ok(())
}

#[test]
fn raw_is_identity() -> Result<()> {
    let doc = fixture();
    let root = doc.as_ref();

    assert!(std::ptr::eq(root.raw(), doc.raw()));

    let a = root.item("a")?.into_nested().context("expected mapping")?;
    let expected = doc.raw().get("a").and_then(Value::as_mapping);
    assert!(expected.map_or(false, |m| std::ptr::eq(a.raw(), m)));
    Ok(())
}

#[test]
fn iteration_is_raw() -> Result<()> {
    let doc = fixture();
    let a = doc.as_ref().attr("a")?.into_nested().context("expected mapping")?;

    let keys = a.iter().map(|(key, _)| key).collect::<Vec<_>>();
    assert_eq!(keys, ["b", "e"]);

    let (_, b) = a.iter().next().context("missing entry")?;
    assert!(b.is_mapping());

    let mut count = 0;

    for (_, value) in &a {
        assert!(matches!(value, Value::Mapping(..) | Value::String(..)));
        count += 1;
    }

    assert_eq!(count, 2);
    Ok(())
}

#[test]
fn iteration_is_restartable() -> Result<()> {
    let doc = fixture();
    let a = doc.as_ref().attr("a")?.into_nested().context("expected mapping")?;

    let first = a.iter().collect::<Vec<_>>();
    let second = a.iter().collect::<Vec<_>>();
    assert_eq!(first, second);
    assert_eq!(a.iter().len(), 2);
    Ok(())
}

#[test]
fn get_or_with_short_lived_default() -> Result<()> {
    let doc = fixture();
    let a = doc.as_ref().attr("a")?.into_nested().context("expected mapping")?;

    let found;

    {
        let default = Value::from("y");
        assert_eq!(a.get_or("x", &default), "y");
        found = a.get_or("e", &default).as_str().map(str::to_owned);
    }

    assert_eq!(found.as_deref(), Some("f"));
    assert_eq!(a.item("e")?, "f");
    Ok(())
}
