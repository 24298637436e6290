//! [<img alt="github" src="https://img.shields.io/badge/github-udoprog/nested--mapping-8da0cb?style=for-the-badge&logo=github" height="20">](https://github.com/udoprog/nested-mapping)
//! [<img alt="crates.io" src="https://img.shields.io/crates/v/nested-mapping.svg?style=for-the-badge&color=fc8d62&logo=rust" height="20">](https://crates.io/crates/nested-mapping)
//! [<img alt="docs.rs" src="https://img.shields.io/badge/docs.rs-nested--mapping-66c2a5?style=for-the-badge&logoColor=white" height="20">](https://docs.rs/nested-mapping)
//!
//! Path and attribute style access over nested key-value mappings, such as
//! the ones produced when decoding configuration files.
//!
//! Data is stored in a raw [`Mapping`] of [`Value`]s, which is what decoders
//! produce. Instead of traversing it by hand it is accessed through views:
//! [`Nested`] for reading and [`NestedMut`] for mutation. Accessing a nested
//! mapping through a view produces another view which remembers the one it
//! was accessed through, while every other value is handed out as-is.
//!
//! <br>
//!
//! ## Working with views
//!
//! Views borrow the data they wrap. Any number of [`Nested`] views can exist
//! at the same time, while a [`NestedMut`] holds exclusive access to the data
//! for as long as it lives. Mutations write through to the underlying data,
//! so any view constructed afterwards observes them.
//!
//! Like most accessors of borrowed data, each method which provides mutable
//! access comes in two variations: `<something>_mut` and
//! `into_<something>_mut`. If we look at [`NestedMut::item_mut`] and
//! [`NestedMut::into_item_mut`] the difference is that the latter consumes
//! `self` and returns a value with its associated lifetime.
//!
//! <br>
//!
//! ```
//! use anyhow::Context;
//! use nested_mapping::{Document, Value};
//!
//! let mut doc = Document::default();
//!
//! // Mutation through the document:
//! let mut root = doc.as_mut();
//! root.set_attr("a.b.c", "d")?;
//! root.set_attr("a.e", "f")?;
//!
//! // Access through the document:
//! let root = doc.as_ref();
//! let a = root.item("a")?.into_nested().context("expected mapping")?;
//! assert_eq!(a.item("e")?, "f");
//! assert_eq!(root.item_path("a.b.c")?, "d");
//! assert_eq!(root.lookup(["a", "b", "c"]), Some(&Value::from("d")));
//! assert_eq!(a.parent(), Some(root));
//! # Ok::<_, anyhow::Error>(())
//! ```
//!
//! <br>
//!
//! ## Merging
//!
//! Mappings are merged recursively through [`NestedMut::update`]. Where both
//! sides hold a mapping under the same key they are merged, otherwise the
//! incoming value replaces the existing one. This makes it possible to apply
//! partial overrides without losing unrelated settings.
//!
//! ```
//! use nested_mapping::Document;
//!
//! let mut doc = Document::default();
//! doc.as_mut().set_attr("server.host", "localhost")?;
//! doc.as_mut().set_attr("server.port", 80)?;
//!
//! let mut overrides = Document::default();
//! overrides.as_mut().set_attr("server.port", 8080)?;
//!
//! doc.as_mut().update(overrides.into_inner());
//! assert_eq!(doc.to_string(), "{server: {host: localhost, port: 8080}}");
//! # Ok::<_, anyhow::Error>(())
//! ```
//!
//! <br>
//!
//! ## Serde support
//!
//! Decoded data can be produced and consumed through [`serde`] with the
//! `serde` feature, see the [`serde` module][crate::serde] for
//! documentation.
//!
//! [`serde`]: https://docs.rs/serde

#![deny(missing_docs)]
#![allow(clippy::module_inception)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]


mod any;
pub use self::any::Any;

mod any_mut;
pub use self::any_mut::AnyMut;

mod display;

mod document;
pub use self::document::Document;

mod error;
pub use self::error::{Error, ErrorKind};

pub mod mapping;
#[doc(inline)]
pub use self::mapping::Mapping;

mod merge;

pub mod nested;
#[doc(inline)]
pub use self::nested::{Nested, NestedMut};

mod path;

mod value;
pub use self::value::Value;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde;
