//! Views over a nested [`Mapping`][crate::Mapping].
//!
//! A [`Nested`] view wraps a borrowed mapping and hands out further
//! [`Nested`] views whenever a nested mapping is accessed through it, each of
//! which remembers the view it was produced by. [`NestedMut`] is the mutable
//! counterpart, which holds exclusive access to the underlying data for as
//! long as it lives.
//!
//! # Examples
//!
//! ```
//! use anyhow::Context;
//! use nested_mapping::Document;
//!
//! let mut doc = Document::default();
//! doc.as_mut().set_attr("a.b.c", "d")?;
//!
//! let root = doc.as_ref();
//! let b = root.item_path("a.b")?.into_nested().context("expected mapping")?;
//! assert_eq!(b.item("c")?.as_str(), Some("d"));
//!
//! let a = b.parent().context("missing parent")?;
//! assert!(a.has("b"));
//! assert_eq!(a.parent(), Some(root));
//! # Ok::<_, anyhow::Error>(())
//! ```

mod nested;
pub use self::nested::Nested;

mod nested_mut;
pub use self::nested_mut::NestedMut;
