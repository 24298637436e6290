use crate::Mapping;

/// A raw value stored inside of a [`Mapping`].
///
/// Only [`Value::Mapping`] is considered to be nested. Every other variant,
/// including sequences and null, is a scalar and is handed out as-is when
/// accessed through a [`Nested`] view.
///
/// [`Nested`]: crate::Nested
///
/// # Examples
///
/// ```
/// use nested_mapping::{Mapping, Value};
///
/// let value = Value::from("hello");
/// assert_eq!(value.as_str(), Some("hello"));
/// assert!(!value.is_mapping());
///
/// let value = Value::from(Mapping::new());
/// assert!(value.is_mapping());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub enum Value {
    /// A null value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// A sequence of values.
    Sequence(Vec<Value>),
    /// A nested mapping.
    Mapping(Mapping),
}

macro_rules! as_number {
    ($name:ident, $ty:ty, $doc:literal, $lit:literal) => {
        #[doc = concat!("Try and get the value as a ", $doc, ".")]
        ///
        /// Returns `None` if the value is not an integer, or if it does not
        /// fit in the requested type.
        ///
        /// # Examples
        ///
        /// ```
        /// use nested_mapping::Value;
        ///
        #[doc = concat!("let value = Value::from(", stringify!($lit), "i64);")]
        #[doc = concat!("assert_eq!(value.", stringify!($name), "(), Some(", stringify!($lit), "));")]
        /// assert_eq!(Value::from("string").as_u32(), None);
        /// ```
        #[must_use]
        #[inline]
        pub fn $name(&self) -> Option<$ty> {
            match self {
                Value::Integer(n) => <$ty>::try_from(*n).ok(),
                _ => None,
            }
        }
    };
}

impl Value {
    /// Test if the value is null.
    #[must_use]
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Test if the value is a nested mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Mapping, Value};
    ///
    /// assert!(Value::from(Mapping::new()).is_mapping());
    /// assert!(!Value::from(vec![Value::Null]).is_mapping());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(..))
    }

    /// Try and get the value as a string.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string.as_str()),
            _ => None,
        }
    }

    /// Try and get the value as a boolean.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::Value;
    ///
    /// assert_eq!(Value::from(true).as_bool(), Some(true));
    /// assert_eq!(Value::from("true").as_bool(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    as_number!(as_u8, u8, "8-bit unsigned integer", 42);
    as_number!(as_i8, i8, "8-bit signed integer", -42);
    as_number!(as_u16, u16, "16-bit unsigned integer", 42);
    as_number!(as_i16, i16, "16-bit signed integer", -42);
    as_number!(as_u32, u32, "32-bit unsigned integer", 42);
    as_number!(as_i32, i32, "32-bit signed integer", -42);
    as_number!(as_u64, u64, "64-bit unsigned integer", 42);
    as_number!(as_i64, i64, "64-bit signed integer", -42);

    /// Try and get the value as a 32-bit float.
    ///
    /// Integers are converted.
    #[must_use]
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(n) => Some(*n as f32),
            Value::Integer(n) => Some(*n as f32),
            _ => None,
        }
    }

    /// Try and get the value as a 64-bit float.
    ///
    /// Integers are converted.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::Value;
    ///
    /// assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
    /// assert_eq!(Value::from(2i64).as_f64(), Some(2.0));
    /// ```
    #[must_use]
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try and get the value as a sequence.
    #[must_use]
    #[inline]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// Try and get the value as a raw mapping.
    #[must_use]
    #[inline]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Try and get the value as a mutable raw mapping.
    #[must_use]
    #[inline]
    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Mapping> for Value {
    #[inline]
    fn from(value: Mapping) -> Self {
        Value::Mapping(value)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl PartialEq<str> for Value {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
