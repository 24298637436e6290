//! Serde support for raw values and nested views.
//!
//! With the `serde` feature enabled, [`Value`], [`Mapping`] and [`Document`]
//! implement [`Serialize`] and [`Deserialize`], so any serde format can be
//! used to produce the raw data which views wrap. [`Nested`] views and raw
//! values also implement [`IntoDeserializer`], allowing a typed structure to
//! be deserialized straight out of any level of a document.
//!
//! Mapping keys which are not strings, such as numbers or booleans, are
//! converted into their string form when deserialized.
//!
//! [`Serialize`]: serde::Serialize
//! [`Deserialize`]: serde::Deserialize
//! [`IntoDeserializer`]: serde::de::IntoDeserializer
//! [`Value`]: crate::Value
//! [`Mapping`]: crate::Mapping
//! [`Document`]: crate::Document
//! [`Nested`]: crate::Nested
//!
//! ```
//! use anyhow::Context;
//! use nested_mapping::{Document, Mapping};
//! use serde::Deserialize;
//! use serde::de::IntoDeserializer;
//!
//! const SOURCE: &str = r#"
//! name: Descartes
//! server:
//!   host: example.com
//!   port: 8080
//! "#;
//!
//! let raw: Mapping = serde_yaml::from_str(SOURCE)?;
//! let mut doc = Document::new(raw);
//!
//! let overrides: Mapping = serde_yaml::from_str("server: {port: 9090}")?;
//! doc.as_mut().update(overrides);
//!
//! #[derive(Deserialize)]
//! struct Server<'a> {
//!     host: &'a str,
//!     port: u16,
//! }
//!
//! let root = doc.as_ref();
//! let server = root.item("server")?.into_nested().context("expected mapping")?;
//! let server = Server::deserialize(server.into_deserializer())?;
//!
//! assert_eq!(server.host, "example.com");
//! assert_eq!(server.port, 9090);
//!
//! let string = serde_yaml::to_string(&root)?;
//! assert_eq!(string.trim(), "name: Descartes\nserver:\n  host: example.com\n  port: 9090");
//! # Ok::<_, anyhow::Error>(())
//! ```

mod de;
mod error;
mod ser;

pub use self::error::Error;
