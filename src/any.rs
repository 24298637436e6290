use crate::{Nested, Value};

/// The result of accessing a key through a [`Nested`] view.
///
/// Mappings are wrapped in a new [`Nested`] view whose parent is the view
/// they were accessed through, while every other value is handed out as-is.
///
/// See [`Nested::item`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Any<'a> {
    /// The value is a scalar.
    Scalar(&'a Value),
    /// The value is a nested mapping.
    Nested(Nested<'a>),
}

impl<'a> Any<'a> {
    /// Test if the accessed value is a nested mapping.
    #[must_use]
    #[inline]
    pub fn is_nested(&self) -> bool {
        matches!(self, Any::Nested(..))
    }

    /// Get the accessed value as a scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Mapping, Nested, Value};
    ///
    /// let mapping: Mapping = [("e", "f")].into_iter().collect();
    /// let nested = Nested::new(&mapping);
    ///
    /// let e = nested.item("e")?;
    /// assert_eq!(e.as_scalar(), Some(&Value::from("f")));
    /// # Ok::<_, nested_mapping::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn as_scalar(&self) -> Option<&'a Value> {
        match self {
            Any::Scalar(value) => Some(*value),
            Any::Nested(..) => None,
        }
    }

    /// Get the accessed value as a string, if it is a string scalar.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        self.as_scalar()?.as_str()
    }

    /// Get the accessed value as a nested view.
    #[must_use]
    #[inline]
    pub fn as_nested(&self) -> Option<&Nested<'a>> {
        match self {
            Any::Nested(nested) => Some(nested),
            Any::Scalar(..) => None,
        }
    }

    /// Convert into a nested view.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use nested_mapping::{Mapping, Nested};
    ///
    /// let mut root = Mapping::new();
    /// root.insert("a", [("e", "f")].into_iter().collect::<Mapping>());
    /// let root = Nested::new(&root);
    ///
    /// let a = root.item("a")?.into_nested().context("expected mapping")?;
    /// assert_eq!(a.item("e")?.as_str(), Some("f"));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn into_nested(self) -> Option<Nested<'a>> {
        match self {
            Any::Nested(nested) => Some(nested),
            Any::Scalar(..) => None,
        }
    }
}

impl PartialEq<&str> for Any<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
