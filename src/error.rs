use core::fmt;

/// An error raised when accessing a nested mapping.
///
/// # Examples
///
/// ```
/// use nested_mapping::{Document, ErrorKind, Mapping};
///
/// let doc = Document::new(Mapping::new());
/// let error = doc.as_ref().item("missing").unwrap_err();
/// assert_eq!(error.key(), "missing");
/// assert_eq!(error.kind(), ErrorKind::KeyNotFound);
/// assert_eq!(error.to_string(), "key not found: missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    key: Box<str>,
    kind: ErrorKind,
}

impl Error {
    /// Construct a new error.
    #[inline]
    pub(crate) fn new(key: &str, kind: ErrorKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    #[inline]
    pub(crate) fn key_not_found(key: &str) -> Self {
        Self::new(key, ErrorKind::KeyNotFound)
    }

    #[inline]
    pub(crate) fn expected_mapping(key: &str) -> Self {
        Self::new(key, ErrorKind::ExpectedMapping)
    }

    /// Get the key which caused the error.
    #[must_use]
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the kind of the error.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.key)
    }
}

impl std::error::Error for Error {}

/// The kind of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The requested key does not exist at the accessed level.
    KeyNotFound,
    /// A dotted path tried to descend through a value which is not a
    /// mapping.
    ExpectedMapping,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::KeyNotFound => write!(f, "key not found"),
            ErrorKind::ExpectedMapping => write!(f, "expected mapping"),
        }
    }
}
