/// The separator used between levels in a dotted path.
pub(crate) const SEPARATOR: u8 = b'.';

/// Iterator over the segments of a dotted path such as `a.b.c`.
///
/// Empty segments are preserved, so `a..b` yields `a`, an empty key and `b`.
#[derive(Clone)]
pub(crate) struct Segments<'a> {
    rest: Option<&'a str>,
}

impl<'a> Segments<'a> {
    #[inline]
    pub(crate) fn new(path: &'a str) -> Self {
        Self { rest: Some(path) }
    }

    /// Split off the last segment, returning the leading segments and the
    /// last one.
    pub(crate) fn split_last(path: &'a str) -> (Self, &'a str) {
        match memchr::memrchr(SEPARATOR, path.as_bytes()) {
            Some(n) => (Self::new(&path[..n]), &path[n + 1..]),
            None => (Self { rest: None }, path),
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;

        match memchr::memchr(SEPARATOR, rest.as_bytes()) {
            Some(n) => {
                self.rest = Some(&rest[n + 1..]);
                Some(&rest[..n])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Segments;

    #[test]
    fn segments() {
        assert!(Segments::new("a.b.c").eq(["a", "b", "c"]));
        assert!(Segments::new("a").eq(["a"]));
        assert!(Segments::new("a..b").eq(["a", "", "b"]));
        assert!(Segments::new("").eq([""]));
    }

    #[test]
    fn split_last() {
        let (head, last) = Segments::split_last("a.b.c");
        assert!(head.eq(["a", "b"]));
        assert_eq!(last, "c");

        let (head, last) = Segments::split_last("a");
        assert_eq!(head.count(), 0);
        assert_eq!(last, "a");
    }
}
