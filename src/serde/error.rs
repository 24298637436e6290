use core::fmt;

use serde::de;

/// An error raised when a typed value can not be deserialized out of a
/// [`Nested`] view or a raw [`Value`].
///
/// The message is whatever the type being deserialized reported, such as an
/// unexpected type or a missing field.
///
/// [`Nested`]: crate::Nested
/// [`Value`]: crate::Value
#[derive(Debug)]
pub struct Error {
    message: Box<str>,
}

impl Error {
    /// Get the message of the error.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl de::Error for Error {
    #[inline]
    fn custom<T>(message: T) -> Self
    where
        T: fmt::Display,
    {
        Self {
            message: message.to_string().into(),
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
