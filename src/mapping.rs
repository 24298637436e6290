//! The raw [`Mapping`] which nested views operate over.
//!
//! # Examples
//!
//! ```
//! use nested_mapping::{Mapping, Value};
//!
//! let mut inner = Mapping::new();
//! inner.insert("c", "d");
//!
//! let mut root = Mapping::new();
//! root.insert("b", inner);
//! root.insert("e", "f");
//!
//! assert_eq!(root.len(), 2);
//! assert!(root.get("b").map_or(false, Value::is_mapping));
//! assert_eq!(root.get("e").and_then(Value::as_str), Some("f"));
//! assert!(root.keys().eq(["b", "e"]));
//! ```

mod iter;
pub use self::iter::{IntoIter, Iter, IterMut};

mod mapping;
pub use self::mapping::Mapping;
