use crate::{Any, NestedMut, Value};

/// The result of mutably accessing a key through a [`NestedMut`] view.
///
/// See [`NestedMut::item_mut`].
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyMut<'a> {
    /// The value is a scalar.
    Scalar(&'a mut Value),
    /// The value is a nested mapping.
    Nested(NestedMut<'a>),
}

impl<'a> AnyMut<'a> {
    /// Coerce into an immutable [`Any`].
    #[must_use]
    pub fn as_ref(&self) -> Any<'_> {
        match self {
            AnyMut::Scalar(value) => Any::Scalar(&**value),
            AnyMut::Nested(nested) => Any::Nested(nested.as_ref()),
        }
    }

    /// Convert into a mutable scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyhow::Context;
    /// use nested_mapping::{Document, Mapping, Value};
    ///
    /// let mut doc = Document::new([("name", "Descartes")].into_iter().collect::<Mapping>());
    ///
    /// let mut root = doc.as_mut();
    /// let name = root.item_mut("name")?.into_scalar_mut().context("expected scalar")?;
    /// *name = Value::from("Plato");
    ///
    /// assert_eq!(doc.as_ref().item("name")?.as_str(), Some("Plato"));
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn into_scalar_mut(self) -> Option<&'a mut Value> {
        match self {
            AnyMut::Scalar(value) => Some(value),
            AnyMut::Nested(..) => None,
        }
    }

    /// Convert into a mutable nested view.
    #[must_use]
    #[inline]
    pub fn into_nested_mut(self) -> Option<NestedMut<'a>> {
        match self {
            AnyMut::Nested(nested) => Some(nested),
            AnyMut::Scalar(..) => None,
        }
    }
}
