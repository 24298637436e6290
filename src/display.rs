//! Flow-style rendering of raw values, such as `{a: {b: c}, e: [1, 2]}`.

use core::fmt::{self, Write};

use crate::{Mapping, Value};

/// Words which would be read back as something other than a string.
const RESERVED: &[&str] = &[
    "null", "~", "true", "false", "yes", "no", "on", "off", "y", "n",
];

/// Characters which may not start a bare string.
const INDICATORS: &[char] = &[
    '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`',
];

/// Test if a string can be written without quotes.
fn is_bare(string: &str) -> bool {
    let Some(first) = string.chars().next() else {
        return false;
    };

    if INDICATORS.contains(&first) || first.is_whitespace() {
        return false;
    }

    if string.ends_with(char::is_whitespace) {
        return false;
    }

    if RESERVED.iter().any(|w| w.eq_ignore_ascii_case(string)) {
        return false;
    }

    if string.parse::<f64>().is_ok() || string.starts_with(|c: char| c.is_ascii_digit()) {
        return false;
    }

    if string.contains(": ") || string.contains(" #") || string.ends_with(':') {
        return false;
    }

    !string
        .chars()
        .any(|c| c.is_control() || matches!(c, ',' | '[' | ']' | '{' | '}'))
}

fn string(string: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if is_bare(string) {
        return f.write_str(string);
    }

    f.write_char('"')?;

    for c in string.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }

    f.write_char('"')
}

fn float(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        return f.write_str(".nan");
    }

    if value.is_infinite() {
        return f.write_str(if value.is_sign_positive() { ".inf" } else { "-.inf" });
    }

    let mut buffer = ryu::Buffer::new();
    f.write_str(buffer.format_finite(value))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(value) => f.write_str(if *value { "true" } else { "false" }),
            Value::Integer(value) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(*value))
            }
            Value::Float(value) => float(*value, f),
            Value::String(value) => string(value, f),
            Value::Sequence(values) => {
                f.write_char('[')?;

                let mut it = values.iter().peekable();

                while let Some(value) = it.next() {
                    fmt::Display::fmt(value, f)?;

                    if it.peek().is_some() {
                        f.write_str(", ")?;
                    }
                }

                f.write_char(']')
            }
            Value::Mapping(mapping) => fmt::Display::fmt(mapping, f),
        }
    }
}

/// Renders the mapping in flow style.
///
/// # Examples
///
/// ```
/// use nested_mapping::{Mapping, Value};
///
/// let mut inner = Mapping::new();
/// inner.insert("c", "d");
/// inner.insert("list", vec![1, 2]);
///
/// let mut root = Mapping::new();
/// root.insert("a", inner);
/// root.insert("quoted", "needs: quotes");
/// root.insert("number-like", "42");
/// root.insert("empty", Value::Null);
///
/// assert_eq!(
///     root.to_string(),
///     r#"{a: {c: d, list: [1, 2]}, quoted: "needs: quotes", number-like: "42", empty: null}"#
/// );
/// ```
impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;

        let mut it = self.iter().peekable();

        while let Some((key, value)) = it.next() {
            string(key, f)?;
            f.write_str(": ")?;
            fmt::Display::fmt(value, f)?;

            if it.peek().is_some() {
                f.write_str(", ")?;
            }
        }

        f.write_char('}')
    }
}
