use core::fmt;
use core::mem;

use crate::mapping::{IntoIter, Iter, IterMut};
use crate::{merge, Value};

/// An insertion-ordered mapping from string keys to raw [`Value`]s.
///
/// Replacing the value of an existing key keeps it in place, and removing a
/// key preserves the order of the remaining entries. Equality does not take
/// order into account.
///
/// # Examples
///
/// ```
/// use nested_mapping::Mapping;
///
/// let a: Mapping = [("one", 1), ("two", 2)].into_iter().collect();
/// let b: Mapping = [("two", 2), ("one", 1)].into_iter().collect();
///
/// assert_eq!(a, b);
/// assert!(a.keys().eq(["one", "two"]));
/// assert!(b.keys().eq(["two", "one"]));
/// ```
#[derive(Clone, Default)]
pub struct Mapping {
    entries: Vec<(String, Value)>,
}

impl Mapping {
    /// Construct a new empty mapping.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Construct a new empty mapping with the given capacity.
    #[must_use]
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of entries in the mapping.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if the mapping is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Test if the mapping contains the given key.
    ///
    /// Only this level is considered, nested mappings are not searched.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::Mapping;
    ///
    /// let mut inner = Mapping::new();
    /// inner.insert("b", 1);
    ///
    /// let mut mapping = Mapping::new();
    /// mapping.insert("a", inner);
    ///
    /// assert!(mapping.contains_key("a"));
    /// assert!(!mapping.contains_key("b"));
    /// ```
    #[must_use]
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Get a value by its key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Get a value mutably by its key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Insert a value into the mapping, returning the value it replaced.
    ///
    /// An existing key keeps its position.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Mapping, Value};
    ///
    /// let mut mapping = Mapping::new();
    /// assert_eq!(mapping.insert("a", 1), None);
    /// mapping.insert("b", 2);
    /// assert_eq!(mapping.insert("a", 3), Some(Value::from(1)));
    /// assert!(mapping.keys().eq(["a", "b"]));
    /// ```
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let key = key.into();
        let value = value.into();

        if let Some(index) = self.position(&key) {
            if let Some((_, existing)) = self.entries.get_mut(index) {
                return Some(mem::replace(existing, value));
            }
        }

        self.entries.push((key, value));
        None
    }

    /// Remove a key from the mapping, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Mapping, Value};
    ///
    /// let mut mapping: Mapping = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    /// assert_eq!(mapping.remove("b"), Some(Value::from(2)));
    /// assert_eq!(mapping.remove("b"), None);
    /// assert!(mapping.keys().eq(["a", "c"]));
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.position(key)?;
        Some(self.entries.remove(index).1)
    }

    /// Get the mapping stored at `key`, inserting an empty one if the key is
    /// missing.
    ///
    /// Returns `None` if the key holds something which is not a mapping.
    pub(crate) fn mapping_or_insert(&mut self, key: &str) -> Option<&mut Mapping> {
        let index = match self.position(key) {
            Some(index) => index,
            None => {
                self.entries
                    .push((key.to_owned(), Value::Mapping(Mapping::new())));
                self.entries.len() - 1
            }
        };

        self.entries.get_mut(index)?.1.as_mapping_mut()
    }

    /// Recursively merge `other` into this mapping.
    ///
    /// Where both sides hold a mapping under the same key they are merged,
    /// otherwise the incoming value replaces the existing one. Keys only
    /// present in `self` are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_mapping::{Mapping, Value};
    ///
    /// let mut base = Mapping::new();
    /// base.insert("a", [("b", 1), ("c", 2)].into_iter().collect::<Mapping>());
    ///
    /// let mut overlay = Mapping::new();
    /// overlay.insert("a", [("c", 3)].into_iter().collect::<Mapping>());
    ///
    /// base.update(overlay);
    ///
    /// let a = base.get("a").and_then(Value::as_mapping).expect("a mapping");
    /// assert_eq!(a.get("b"), Some(&Value::from(1)));
    /// assert_eq!(a.get("c"), Some(&Value::from(3)));
    /// ```
    #[inline]
    pub fn update(&mut self, other: Mapping) {
        merge::merge(self, other);
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterate over entries in insertion order.
    #[must_use]
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.entries)
    }

    /// Iterate mutably over entries in insertion order.
    #[must_use]
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(&mut self.entries)
    }
}

impl fmt::Debug for Mapping {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).map_or(false, |v| v == value))
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut mapping = Mapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K, V> Extend<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries)
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Mapping {
    type Item = (&'a str, &'a mut Value);
    type IntoIter = IterMut<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
