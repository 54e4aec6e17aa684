use std::fmt::{self, Write};

use im::HashMap;
use serde::{Deserialize, Serialize};

/// A parsed JSON value.
///
/// Objects use a persistent map whose `insert` replaces existing entries,
/// which is exactly the duplicate-key rule the grammar needs: the last
/// occurrence of a key wins.
///
/// # Examples
///
/// ```rust
/// use tantra::Value;
/// let n = Value::Number(3.14);
/// assert_eq!(n.type_name(), "Number");
/// let s = Value::String("hello".to_string());
/// assert_eq!(s.type_name(), "String");
/// let null = Value::default();
/// assert!(null.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(HashMap<String, Value>),
}

impl Value {
    /// Returns the type name of the value as a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tantra::Value;
    /// let v = Value::Bool(true);
    /// assert_eq!(v.type_name(), "Bool");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    /// Returns true if the value is Null.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tantra::Value;
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Number(1.0).is_null());
    /// ```
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the contained bool if this is a Bool value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tantra::Value;
    /// let v = Value::Bool(false);
    /// assert_eq!(v.as_bool(), Some(false));
    /// assert_eq!(Value::Null.as_bool(), None);
    /// ```
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the contained number if this is a Number value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tantra::Value;
    /// let v = Value::Number(2.0);
    /// assert_eq!(v.as_number(), Some(2.0));
    /// let v2 = Value::String("nope".to_string());
    /// assert_eq!(v2.as_number(), None);
    /// ```
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contained string if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained elements if this is an Array value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the contained members if this is an Object value.
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Renders the value as indented, multi-line JSON text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tantra::Value;
    /// let v = Value::Array(vec![Value::Bool(true), Value::Null]);
    /// assert_eq!(v.pretty(), "[\n  true,\n  null\n]");
    /// ```
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.render_pretty(&mut out, 0);
        out
    }

    fn render_pretty(&self, out: &mut String, depth: usize) {
        match self {
            Value::Array(items) if !items.is_empty() => {
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(",\n");
                    }
                    out.push_str(&"  ".repeat(depth + 1));
                    item.render_pretty(out, depth + 1);
                }
                out.push('\n');
                out.push_str(&"  ".repeat(depth));
                out.push(']');
            }
            Value::Object(members) if !members.is_empty() => {
                out.push_str("{\n");
                let mut first = true;
                for (key, value) in members.iter() {
                    if !first {
                        out.push_str(",\n");
                    }
                    first = false;
                    out.push_str(&"  ".repeat(depth + 1));
                    out.push_str(&quote(key));
                    out.push_str(": ");
                    value.render_pretty(out, depth + 1);
                }
                out.push('\n');
                out.push_str(&"  ".repeat(depth));
                out.push('}');
            }
            other => out.push_str(&other.to_string()),
        }
    }

    // ------------------------------------------------------------------------
    // Display formatting helpers
    // ------------------------------------------------------------------------

    /// Helper for formatting numbers: whole values print as integers, and
    /// non-finite values (which JSON cannot spell) print as null.
    fn fmt_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
        if !n.is_finite() {
            write!(f, "null")
        } else if n.fract() == 0.0 && n.abs() < 9.0e15 {
            write!(f, "{}", n as i64)
        } else {
            write!(f, "{}", n)
        }
    }

    /// Helper for formatting array values
    fn fmt_array(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }

    /// Helper for formatting object values
    fn fmt_object(f: &mut fmt::Formatter<'_>, members: &HashMap<String, Value>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in members.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}:{}", quote(key), value)?;
            first = false;
        }
        write!(f, "}}")
    }
}

/// Quotes and escapes a string for JSON output. The inverse of the
/// grammar's escape decoding, so rendered text reparses to the same value.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if c < ' ' => {
                // Remaining control characters have no short escape.
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Renders compact, valid JSON text.
///
/// # Examples
///
/// ```rust
/// use tantra::Value;
/// let v = Value::Array(vec![Value::Number(1.0), Value::String("a\"b".into())]);
/// assert_eq!(v.to_string(), r#"[1,"a\"b"]"#);
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => Value::fmt_number(f, *n),
            Value::String(s) => write!(f, "{}", quote(s)),
            Value::Array(items) => Value::fmt_array(f, items),
            Value::Object(members) => Value::fmt_object(f, members),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
        assert_eq!(Value::Number(-50.0).to_string(), "-50");
        assert_eq!(Value::String("hi".into()).to_string(), "\"hi\"");
    }

    #[test]
    fn test_display_escapes_control_characters() {
        let v = Value::String("line\nbreak \u{0001} \"q\" \\".into());
        assert_eq!(v.to_string(), r#""line\nbreak \u0001 \"q\" \\""#);
    }

    #[test]
    fn test_display_empty_collections() {
        assert_eq!(Value::Array(vec![]).to_string(), "[]");
        assert_eq!(Value::Object(HashMap::new()).to_string(), "{}");
    }

    #[test]
    fn test_display_object_member() {
        let mut members = HashMap::new();
        members.insert("a".to_string(), Value::Number(1.0));
        assert_eq!(Value::Object(members).to_string(), "{\"a\":1}");
    }

    #[test]
    fn test_non_finite_numbers_render_as_null() {
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "null");
        assert_eq!(Value::Number(f64::NAN).to_string(), "null");
    }

    #[test]
    fn test_large_whole_numbers_keep_float_formatting() {
        // Past the exact-integer range of f64 the integer shortcut would lie.
        let text = Value::Number(1.0e300).to_string();
        assert_eq!(text.parse::<f64>().unwrap(), 1.0e300);
    }

    #[test]
    fn test_pretty_nested() {
        let v = Value::Array(vec![
            Value::Array(vec![Value::Number(1.0)]),
            Value::Object(HashMap::new()),
        ]);
        assert_eq!(v.pretty(), "[\n  [\n    1\n  ],\n  {}\n]");
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        let v = Value::Array(vec![Value::Null]);
        assert_eq!(v.as_number(), None);
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.as_str(), None);
        assert_eq!(v.as_object(), None);
        assert_eq!(v.as_array().map(|items| items.len()), Some(1));
    }
}
