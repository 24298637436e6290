use core::fmt;
use std::rc::Rc;

use crate::mapping::Iter;
use crate::path::Segments;
use crate::{Any, Error, Mapping, Value};

/// Accessor for a nested mapping.
///
/// Nested mappings accessed through this view are wrapped in a new [`Nested`]
/// whose [parent][Nested::parent] is this view. Every other value is returned
/// as the raw [`Value`] it is.
///
/// Views never copy the data they wrap, and the parent link only keeps the
/// producing view alive, not the data.
///
/// # Examples
///
/// ```
/// use anyhow::Context;
/// use nested_mapping::{Mapping, Nested};
///
/// let mut b = Mapping::new();
/// b.insert("c", "d");
///
/// let mut a = Mapping::new();
/// a.insert("b", b);
/// a.insert("e", "f");
///
/// let mut raw = Mapping::new();
/// raw.insert("a", a);
///
/// let nd = Nested::new(&raw);
///
/// let a = nd.item("a")?.into_nested().context("expected mapping")?;
/// assert_eq!(a.item("e")?, "f");
///
/// let b = a.item("b")?.into_nested().context("expected mapping")?;
/// assert_eq!(b.item("c")?, "d");
///
/// assert_eq!(nd.item_path("a.b.c")?, "d");
/// assert_eq!(nd.attr("a")?, nd.item("a")?);
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Clone)]
pub struct Nested<'a> {
    mapping: &'a Mapping,
    parent: Option<Rc<Nested<'a>>>,
}

impl<'a> Nested<'a> {
    /// Construct a root view over a raw mapping.
    ///
    /// The returned view has no parent.
    #[must_use]
    #[inline]
    pub fn new(mapping: &'a Mapping) -> Self {
        Self {
            mapping,
            parent: None,
        }
    }

    /// Wrap a value accessed through this view.
    fn wrap(&self, value: &'a Value) -> Any<'a> {
        match value {
            Value::Mapping(mapping) => Any::Nested(Nested {
                mapping,
                parent: Some(Rc::new(self.clone())),
            }),
            value => Any::Scalar(value),
        }
    }

    /// Get the value at `key`.
    ///
    /// Nested mappings are returned as [`Any::Nested`] with this view as
    /// their parent, anything else as [`Any::Scalar`].
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::KeyNotFound`] if `key` is not present at this
    /// level.
    ///
    /// [`ErrorKind::KeyNotFound`]: crate::ErrorKind::KeyNotFound
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{ErrorKind, Mapping, Nested};
    ///
    /// let raw: Mapping = [("e", "f")].into_iter().collect();
    /// let nd = Nested::new(&raw);
    ///
    /// assert_eq!(nd.item("e")?.as_str(), Some("f"));
    /// assert_eq!(nd.item("x").unwrap_err().kind(), ErrorKind::KeyNotFound);
    /// # Ok::<_, nested_mapping::Error>(())
    /// ```
    pub fn item(&self, key: &str) -> Result<Any<'a>, Error> {
        match self.mapping.get(key) {
            Some(value) => Ok(self.wrap(value)),
            None => Err(Error::key_not_found(key)),
        }
    }

    /// Attribute-style access to `key`.
    ///
    /// This is the same as [`Nested::item`] for every key, including keys
    /// which contain a `.`. Use [`Nested::item_path`] to walk a dotted path.
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::KeyNotFound`] if `key` is not present at this
    /// level.
    ///
    /// [`ErrorKind::KeyNotFound`]: crate::ErrorKind::KeyNotFound
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Mapping, Nested};
    ///
    /// let raw: Mapping = [("a.b", "x"), ("e", "f")].into_iter().collect();
    /// let nd = Nested::new(&raw);
    ///
    /// assert_eq!(nd.attr("e")?, nd.item("e")?);
    /// assert_eq!(nd.attr("a.b")?, "x");
    /// # Ok::<_, nested_mapping::Error>(())
    /// ```
    #[inline]
    pub fn attr(&self, key: &str) -> Result<Any<'a>, Error> {
        self.item(key)
    }

    /// Access through a dotted path such as `a.b.c`.
    ///
    /// This is equivalent to chaining [`Nested::item`] for each segment.
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::KeyNotFound`] if a segment is missing, or
    /// with [`ErrorKind::ExpectedMapping`] if a leading segment is not a
    /// mapping.
    ///
    /// [`ErrorKind::KeyNotFound`]: crate::ErrorKind::KeyNotFound
    /// [`ErrorKind::ExpectedMapping`]: crate::ErrorKind::ExpectedMapping
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Document, ErrorKind};
    ///
    /// let mut doc = Document::default();
    /// doc.as_mut().set_attr("a.b.c", "d")?;
    /// doc.as_mut().set_attr("a.e", "f")?;
    ///
    /// let nd = doc.as_ref();
    /// assert_eq!(nd.item_path("a.b.c")?, "d");
    /// assert_eq!(nd.item_path("a.e")?, "f");
    /// assert_eq!(nd.item_path("a.x").unwrap_err().kind(), ErrorKind::KeyNotFound);
    /// assert_eq!(nd.item_path("a.e.x").unwrap_err().kind(), ErrorKind::ExpectedMapping);
    /// # Ok::<_, nested_mapping::Error>(())
    /// ```
    pub fn item_path(&self, path: &str) -> Result<Any<'a>, Error> {
        let (head, last) = Segments::split_last(path);
        let mut current = self.clone();

        for key in head {
            current = match current.item(key)? {
                Any::Nested(nested) => nested,
                Any::Scalar(..) => return Err(Error::expected_mapping(key)),
            };
        }

        current.item(last)
    }

    /// Get the value at `key`, or `None` if it is missing.
    ///
    /// Wraps values the same way as [`Nested::item`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Mapping, Nested};
    ///
    /// let raw: Mapping = [("e", "f")].into_iter().collect();
    /// let nd = Nested::new(&raw);
    ///
    /// assert_eq!(nd.get("e").and_then(|v| v.as_str()), Some("f"));
    /// assert!(nd.get("x").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Any<'a>> {
        Some(self.wrap(self.mapping.get(key)?))
    }

    /// Get the value at `key`, or the unwrapped `default` if it is missing.
    ///
    /// The default only needs to live as long as the returned value.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Mapping, Nested, Value};
    ///
    /// let raw: Mapping = [("e", "f")].into_iter().collect();
    /// let nd = Nested::new(&raw);
    ///
    /// assert_eq!(nd.get_or("x", &Value::from("y")), "y");
    /// assert_eq!(nd.get_or("e", &Value::from("y")), "f");
    /// ```
    #[must_use]
    pub fn get_or<'b>(&self, key: &str, default: &'b Value) -> Any<'b>
    where
        'a: 'b,
    {
        match self.mapping.get(key) {
            Some(value) => self.wrap(value),
            None => Any::Scalar(default),
        }
    }

    /// Test if `key` is present at this level.
    ///
    /// Nested levels are not searched, and the name `parent` has no special
    /// meaning.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Mapping, Nested};
    ///
    /// let mut raw = Mapping::new();
    /// raw.insert("a", [("b", 1)].into_iter().collect::<Mapping>());
    /// let nd = Nested::new(&raw);
    ///
    /// assert!(nd.has("a"));
    /// assert!(!nd.has("b"));
    /// assert!(!nd.has("parent"));
    /// ```
    #[must_use]
    #[inline]
    pub fn has(&self, key: &str) -> bool {
        self.mapping.contains_key(key)
    }

    /// Membership test, equivalent to [`Nested::has`].
    #[must_use]
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.has(key)
    }

    /// Look up a raw value by walking `path` one key at a time.
    ///
    /// Returns `None` as soon as a key is missing or a value along the way is
    /// not a mapping, and for an empty path. Unlike [`Nested::item`] the
    /// result is never wrapped, a mapping is returned as the raw
    /// [`Value::Mapping`] it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Document, Value};
    ///
    /// let mut doc = Document::default();
    /// doc.as_mut().set_attr("a.b.c", "d")?;
    ///
    /// let nd = doc.as_ref();
    /// assert_eq!(nd.lookup(["a", "b", "c"]), Some(&Value::from("d")));
    /// assert_eq!(nd.lookup(["a", "x", "y"]), None);
    /// assert!(nd.lookup(["a"]).map_or(false, Value::is_mapping));
    /// # Ok::<_, nested_mapping::Error>(())
    /// ```
    #[must_use]
    pub fn lookup<I>(&self, path: I) -> Option<&'a Value>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut path = path.into_iter();
        let mut current = self.mapping.get(path.next()?.as_ref())?;

        for key in path {
            current = current.as_mapping()?.get(key.as_ref())?;
        }

        Some(current)
    }

    /// Get the view this view was accessed through.
    ///
    /// A view constructed directly over raw data has no parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use nested_mapping::{Mapping, Nested};
    ///
    /// let mut raw = Mapping::new();
    /// raw.insert("a", [("e", "f")].into_iter().collect::<Mapping>());
    /// raw.insert("parent", "foo");
    /// let nd = Nested::new(&raw);
    ///
    /// assert!(nd.parent().is_none());
    /// assert_eq!(nd.item("parent")?, "foo");
    ///
    /// let a = nd.item("a")?.into_nested().context("expected mapping")?;
    /// assert_eq!(a.parent(), Some(nd));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn parent(&self) -> Option<Nested<'a>> {
        self.parent.as_deref().cloned()
    }

    /// Get the raw mapping wrapped by this view.
    ///
    /// This is the wrapped data itself, not a copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Mapping, Nested};
    ///
    /// let raw: Mapping = [("e", "f")].into_iter().collect();
    /// let nd = Nested::new(&raw);
    ///
    /// assert!(std::ptr::eq(nd.raw(), &raw));
    /// ```
    #[must_use]
    #[inline]
    pub fn raw(&self) -> &'a Mapping {
        self.mapping
    }

    /// Get the number of entries at this level.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Test if this level is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Iterate over the raw entries at this level.
    ///
    /// Values are not wrapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Mapping, Nested, Value};
    ///
    /// let mut raw = Mapping::new();
    /// raw.insert("a", Mapping::new());
    /// raw.insert("e", "f");
    /// let nd = Nested::new(&raw);
    ///
    /// let mut it = nd.iter();
    /// assert_eq!(it.next(), Some(("a", &Value::from(Mapping::new()))));
    /// assert_eq!(it.next(), Some(("e", &Value::from("f"))));
    /// assert_eq!(it.next(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn iter(&self) -> Iter<'a> {
        self.mapping.iter()
    }
}

impl PartialEq for Nested<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.mapping == other.mapping
    }
}

impl fmt::Display for Nested<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.mapping, f)
    }
}

impl fmt::Debug for Nested<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl From<&Nested<'_>> for Mapping {
    #[inline]
    fn from(nested: &Nested<'_>) -> Self {
        nested.mapping.clone()
    }
}

impl From<Nested<'_>> for Mapping {
    #[inline]
    fn from(nested: Nested<'_>) -> Self {
        nested.mapping.clone()
    }
}

impl<'a> IntoIterator for Nested<'a> {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Nested<'a> {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
