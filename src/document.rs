use core::fmt;

use crate::{Mapping, Nested, NestedMut};

/// An owned nested mapping, the root which views are constructed from.
///
/// # Examples
///
/// ```
/// use nested_mapping::{Document, Mapping};
///
/// let raw: Mapping = [("e", "f")].into_iter().collect();
/// let doc = Document::new(raw.clone());
///
/// assert!(doc.as_ref().parent().is_none());
/// assert_eq!(doc.as_ref().raw(), &raw);
/// assert_eq!(doc.into_inner(), raw);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Mapping,
}

impl Document {
    /// Construct a new document around a raw mapping.
    #[must_use]
    #[inline]
    pub fn new(root: Mapping) -> Self {
        Self { root }
    }

    /// Get the root view of the document.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Document, Mapping};
    ///
    /// let doc = Document::new([("a", 1)].into_iter().collect::<Mapping>());
    /// assert!(doc.as_ref().has("a"));
    /// ```
    #[must_use]
    #[inline]
    pub fn as_ref(&self) -> Nested<'_> {
        Nested::new(&self.root)
    }

    /// Get the root view of the document mutably.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::Document;
    ///
    /// let mut doc = Document::default();
    /// doc.as_mut().set_attr("a.b.c", "d")?;
    /// assert_eq!(doc.to_string(), "{a: {b: {c: d}}}");
    /// # Ok::<_, nested_mapping::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn as_mut(&mut self) -> NestedMut<'_> {
        NestedMut::new(&mut self.root)
    }

    /// Get the raw root mapping.
    #[must_use]
    #[inline]
    pub fn raw(&self) -> &Mapping {
        &self.root
    }

    /// Get the raw root mapping mutably.
    #[must_use]
    #[inline]
    pub fn raw_mut(&mut self) -> &mut Mapping {
        &mut self.root
    }

    /// Convert the document into its raw root mapping.
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> Mapping {
        self.root
    }
}

impl From<Mapping> for Document {
    #[inline]
    fn from(root: Mapping) -> Self {
        Self::new(root)
    }
}

impl fmt::Display for Document {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
