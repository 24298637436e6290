use core::fmt;

use crate::mapping::Iter;
use crate::path::Segments;
use crate::{AnyMut, Error, Mapping, Nested, Value};

/// Mutator for a nested mapping.
///
/// A mutable view holds exclusive access to the data it was constructed
/// over, together with the keys leading from there to the mapping it wraps.
/// This is what allows it to navigate back to its
/// [parent][Self::into_parent_mut].
///
/// All mutations write through to the underlying data and are observed by
/// every view constructed afterwards.
///
/// # Examples
///
/// ```
/// use anyhow::Context;
/// use nested_mapping::{Document, Mapping};
///
/// let mut doc = Document::default();
/// let mut root = doc.as_mut();
///
/// root.set_attr("a.b.c", "d")?;
///
/// let mut a = root.item_mut("a")?.into_nested_mut().context("expected mapping")?;
/// a.insert("e", "f");
///
/// let mut root = a.into_parent_mut().context("missing parent")?;
/// root.update([("a", [("g", "h")].into_iter().collect::<Mapping>())].into_iter().collect::<Mapping>());
///
/// assert_eq!(doc.to_string(), "{a: {b: {c: d}, e: f, g: h}}");
/// # Ok::<_, anyhow::Error>(())
/// ```
pub struct NestedMut<'a> {
    root: &'a mut Mapping,
    path: Vec<Box<str>>,
}

impl<'a> NestedMut<'a> {
    /// Construct a root mutable view over a raw mapping.
    ///
    /// The returned view has no parent.
    #[must_use]
    #[inline]
    pub fn new(root: &'a mut Mapping) -> Self {
        Self {
            root,
            path: Vec::new(),
        }
    }

    /// Get the mapping wrapped by this view.
    #[inline]
    fn mapping(&self) -> &Mapping {
        resolve(self.root, &self.path)
    }

    /// Get the mapping wrapped by this view mutably.
    #[inline]
    fn mapping_mut(&mut self) -> &mut Mapping {
        resolve_mut(self.root, &self.path)
    }

    /// Coerce a mutable view as an immutable [`Nested`].
    ///
    /// The parent chain of the returned view mirrors this view.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use nested_mapping::Document;
    ///
    /// let mut doc = Document::default();
    /// let mut root = doc.as_mut();
    /// root.set_attr("a.b", 1)?;
    ///
    /// let a = root.item_mut("a")?.into_nested_mut().context("expected mapping")?;
    /// let a = a.as_ref();
    ///
    /// assert!(a.has("b"));
    /// assert!(a.parent().map_or(false, |p| p.has("a")));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn as_ref(&self) -> Nested<'_> {
        view(self.root, &self.path)
    }

    /// Coerce a mutable view into an immutable [`Nested`] with the lifetime
    /// of the current reference.
    #[must_use]
    #[inline]
    pub fn into_ref(self) -> Nested<'a> {
        let NestedMut { root, path } = self;
        view(root, &path)
    }

    /// Get the value at `key` mutably.
    ///
    /// Nested mappings are returned as [`AnyMut::Nested`] with this view as
    /// their parent.
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::KeyNotFound`] if `key` is not present at this
    /// level.
    ///
    /// [`ErrorKind::KeyNotFound`]: crate::ErrorKind::KeyNotFound
    pub fn item_mut(&mut self, key: &str) -> Result<AnyMut<'_>, Error> {
        wrap_mut(&mut *self.root, self.path.clone(), key)
    }

    /// Get the value at `key` mutably with the lifetime of the current
    /// reference.
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::KeyNotFound`] if `key` is not present at this
    /// level.
    ///
    /// [`ErrorKind::KeyNotFound`]: crate::ErrorKind::KeyNotFound
    pub fn into_item_mut(self, key: &str) -> Result<AnyMut<'a>, Error> {
        wrap_mut(self.root, self.path, key)
    }

    /// Get the value at `key` mutably, or `None` if it is missing.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<AnyMut<'_>> {
        if !self.has(key) {
            return None;
        }

        self.item_mut(key).ok()
    }

    /// Get the value at `key` mutably with the lifetime of the current
    /// reference, or `None` if it is missing.
    #[must_use]
    pub fn into_get_mut(self, key: &str) -> Option<AnyMut<'a>> {
        if !self.has(key) {
            return None;
        }

        self.into_item_mut(key).ok()
    }

    /// Mutable attribute-style access to `key`.
    ///
    /// This is the same as [`NestedMut::item_mut`] for every key, including
    /// keys which contain a `.`.
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::KeyNotFound`] if `key` is not present at this
    /// level.
    ///
    /// [`ErrorKind::KeyNotFound`]: crate::ErrorKind::KeyNotFound
    #[inline]
    pub fn attr_mut(&mut self, key: &str) -> Result<AnyMut<'_>, Error> {
        self.item_mut(key)
    }

    /// Mutable access through a dotted path such as `a.b.c`.
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
    /// use anyhow::Context;
    /// use nested_mapping::{Document, Value};
    ///
    /// let mut doc = Document::default();
    /// let mut root = doc.as_mut();
    /// root.set_attr("server.port", 80)?;
    ///
    /// let port = root.item_path_mut("server.port")?.into_scalar_mut().context("expected scalar")?;
    /// *port = Value::from(8080);
    ///
    /// assert_eq!(doc.as_ref().item_path("server.port")?.as_scalar(), Some(&Value::from(8080)));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    pub fn item_path_mut(&mut self, path: &str) -> Result<AnyMut<'_>, Error> {
        let (head, last) = Segments::split_last(path);
        let mut keys = self.path.clone();
        let mut current = self.mapping();

        for key in head {
            current = match current.get(key) {
                Some(Value::Mapping(mapping)) => mapping,
                Some(..) => return Err(Error::expected_mapping(key)),
                None => return Err(Error::key_not_found(key)),
            };

            keys.push(key.into());
        }

        wrap_mut(&mut *self.root, keys, last)
    }

    /// Set a value through a dotted path such as `a.b.c`.
    ///
    /// Missing mappings along the path are created.
    ///
    /// # Errors
    ///
    /// Errors with [`ErrorKind::ExpectedMapping`] if a leading segment
    /// already holds something which is not a mapping. Mappings created
    /// before that segment are kept.
    ///
    /// [`ErrorKind::ExpectedMapping`]: crate::ErrorKind::ExpectedMapping
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Document, ErrorKind};
    ///
    /// let mut doc = Document::default();
    /// let mut root = doc.as_mut();
    ///
    /// root.set_attr("a.b.c", "d")?;
    /// root.set_attr("a.e", "f")?;
    /// assert_eq!(root.set_attr("a.e.g", "h").unwrap_err().kind(), ErrorKind::ExpectedMapping);
    ///
    /// assert_eq!(doc.to_string(), "{a: {b: {c: d}, e: f}}");
    /// # Ok::<_, nested_mapping::Error>(())
    /// ```
    pub fn set_attr<V>(&mut self, path: &str, value: V) -> Result<(), Error>
    where
        V: Into<Value>,
    {
        let (head, last) = Segments::split_last(path);
        let mut current = self.mapping_mut();

        for key in head {
            current = match current.mapping_or_insert(key) {
                Some(mapping) => mapping,
                None => return Err(Error::expected_mapping(key)),
            };
        }

        current.insert(last, value);
        Ok(())
    }

    /// Insert a value at this level, returning the value it replaced.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.mapping_mut().insert(key, value)
    }

    /// Recursively merge `other` into the mapping wrapped by this view.
    ///
    /// Where both sides hold a mapping under the same key they are merged,
    /// otherwise the incoming value replaces the existing one. Keys which
    /// are only present here are never dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Document, Mapping};
    ///
    /// let mut updates = Vec::new();
    ///
    /// for (path, value) in [("a.b.i", "j"), ("a.b.c", "x"), ("a.g", "h")] {
    ///     let mut doc = Document::default();
    ///     doc.as_mut().set_attr(path, value)?;
    ///     updates.push(doc.into_inner());
    /// }
    ///
    /// let mut doc = Document::default();
    ///
    /// for update in updates {
    ///     doc.as_mut().update(update);
    /// }
    ///
    /// assert_eq!(doc.to_string(), "{a: {b: {i: j, c: x}, g: h}}");
    /// # Ok::<_, nested_mapping::Error>(())
    /// ```
    #[inline]
    pub fn update<M>(&mut self, other: M)
    where
        M: Into<Mapping>,
    {
        self.mapping_mut().update(other.into());
    }

    /// Delete `key` from this level, returning the removed value.
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
    /// use nested_mapping::{Document, ErrorKind, Value};
    ///
    /// let mut doc = Document::default();
    /// let mut root = doc.as_mut();
    /// root.insert("e", "f");
    ///
    /// assert_eq!(root.delete("e")?, Value::from("f"));
    /// assert!(!root.has("e"));
    /// assert_eq!(root.delete("e").unwrap_err().kind(), ErrorKind::KeyNotFound);
    /// # Ok::<_, nested_mapping::Error>(())
    /// ```
    pub fn delete(&mut self, key: &str) -> Result<Value, Error> {
        match self.mapping_mut().remove(key) {
            Some(value) => Ok(value),
            None => Err(Error::key_not_found(key)),
        }
    }

    /// Test if `key` is present at this level.
    #[must_use]
    #[inline]
    pub fn has(&self, key: &str) -> bool {
        self.mapping().contains_key(key)
    }

    /// Membership test, equivalent to [`NestedMut::has`].
    #[must_use]
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.has(key)
    }

    /// Get the number of entries at this level.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.mapping().len()
    }

    /// Test if this level is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mapping().is_empty()
    }

    /// Iterate over the raw entries at this level.
    #[must_use]
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        self.mapping().iter()
    }

    /// Convert into the view this view was accessed through.
    ///
    /// A view constructed directly over raw data has no parent. The child
    /// view is consumed, so mutations made through the parent can never
    /// leave it dangling.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use nested_mapping::{Document, ErrorKind};
    ///
    /// let mut doc = Document::default();
    /// doc.as_mut().set_attr("a.e", "f")?;
    ///
    /// assert!(doc.as_mut().into_parent_mut().is_none());
    ///
    /// let mut root = doc.as_mut();
    /// let a = root.item_mut("a")?.into_nested_mut().context("expected mapping")?;
    /// let mut root = a.into_parent_mut().context("missing parent")?;
    /// root.delete("a")?;
    ///
    /// assert_eq!(root.item_mut("a").unwrap_err().kind(), ErrorKind::KeyNotFound);
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    ///
    /// The child can not be used after its parent has been taken:
    ///
    /// ```compile_fail
    /// use nested_mapping::Document;
    ///
    /// let mut doc = Document::default();
    /// doc.as_mut().set_attr("a.e", "f").unwrap();
    ///
    /// let mut root = doc.as_mut();
    /// let a = root.item_mut("a").unwrap().into_nested_mut().unwrap();
    /// let mut parent = a.into_parent_mut().unwrap();
    /// parent.delete("a").unwrap();
    /// a.has("e");
    /// ```
    #[must_use]
    pub fn into_parent_mut(mut self) -> Option<NestedMut<'a>> {
        self.path.pop()?;
        Some(self)
    }

    /// Get the raw mapping wrapped by this view.
    ///
    /// This is the wrapped data itself, not a copy.
    #[must_use]
    #[inline]
    pub fn raw_mut(&mut self) -> &mut Mapping {
        self.mapping_mut()
    }

    /// Get the raw mapping wrapped by this view with the lifetime of the
    /// current reference.
    #[must_use]
    #[inline]
    pub fn into_raw_mut(self) -> &'a mut Mapping {
        let NestedMut { root, path } = self;
        resolve_mut(root, &path)
    }
}

impl fmt::Display for NestedMut<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.mapping(), f)
    }
}

impl fmt::Debug for NestedMut<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

fn resolve<'a>(root: &'a Mapping, path: &[Box<str>]) -> &'a Mapping {
    let mut current = root;

    for key in path {
        let Some(Value::Mapping(mapping)) = current.get(key) else {
            panic!("expected mapping at `{key}`");
        };

        current = mapping;
    }

    current
}

fn resolve_mut<'a>(root: &'a mut Mapping, path: &[Box<str>]) -> &'a mut Mapping {
    let mut current = root;

    for key in path {
        let Some(Value::Mapping(mapping)) = current.get_mut(key) else {
            panic!("expected mapping at `{key}`");
        };

        current = mapping;
    }

    current
}

/// Build an immutable view with a parent chain matching `path`.
fn view<'a>(root: &'a Mapping, path: &[Box<str>]) -> Nested<'a> {
    let mut current = Nested::new(root);

    for key in path {
        let Some(nested) = current.get(key).and_then(|any| any.into_nested()) else {
            panic!("expected mapping at `{key}`");
        };

        current = nested;
    }

    current
}

fn wrap_mut<'a>(
    root: &'a mut Mapping,
    mut path: Vec<Box<str>>,
    key: &str,
) -> Result<AnyMut<'a>, Error> {
    let is_mapping = match resolve(root, &path).get(key) {
        Some(value) => value.is_mapping(),
        None => return Err(Error::key_not_found(key)),
    };

    if is_mapping {
        path.push(key.into());
        return Ok(AnyMut::Nested(NestedMut { root, path }));
    }

    match resolve_mut(root, &path).get_mut(key) {
        Some(value) => Ok(AnyMut::Scalar(value)),
        None => Err(Error::key_not_found(key)),
    }
}
