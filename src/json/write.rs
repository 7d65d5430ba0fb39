//! JSON text output.
//!
//! Serialization is the [`Display`](fmt::Display) impl of each value type,
//! recursing structurally through the tree. The output format is fixed and
//! deliberately differs from common JSON writers in two places:
//!
//! - `/` is always escaped as `\/`.
//! - Array elements are separated by `", "`, object entries by `","`.
//!
//! Floats are written in plain decimal notation, never with an exponent,
//! and always contain a `.` so they read back as floats.
//!
//! Only [`Node`], [`Object`] and [`Array`] implement [`JsonValue`], so
//! [`stringify`](super::stringify) cannot be handed arbitrary `Display`
//! types:
//!
//! ```compile_fail
//! use json_lite::json::stringify;
//!
//! stringify(&String::from("a/b"));
//! ```

use std::fmt::{self, Display, Formatter, Write};

use super::array::Array;
use super::object::Object;
use super::types::Node;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Node {}
    impl Sealed for super::Object {}
    impl Sealed for super::Array {}
}

/// A value tree that serializes to JSON text.
///
/// Sealed: implemented for [`Node`], [`Object`] and [`Array`] only.
pub trait JsonValue: Display + sealed::Sealed {}

impl JsonValue for Node {}
impl JsonValue for Object {}
impl JsonValue for Array {}

/// Write `value` with surrounding quotes and this crate's escaping policy.
fn write_string(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in value.chars() {
        match ch {
            '\x0C' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\\' | '"' | '/' => {
                f.write_char('\\')?;
                f.write_char(ch)?;
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Write a float in the shortest decimal form that reads back exactly.
fn write_float(f: &mut Formatter<'_>, value: f32) -> fmt::Result {
    if !value.is_finite() {
        return f.write_str("null");
    }
    let text = value.to_string();
    f.write_str(&text)?;
    if !text.contains('.') {
        f.write_str(".0")?;
    }
    Ok(())
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => f.write_str("null"),
            Node::Bool(true) => f.write_str("true"),
            Node::Bool(false) => f.write_str("false"),
            Node::Int(n) => write!(f, "{}", n),
            Node::Float(x) => write_float(f, *x),
            Node::Str(s) => write_string(f, s),
            Node::Array(a) => a.fmt(f),
            Node::Object(o) => o.fmt(f),
        }
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            value.fmt(f)?;
        }
        f.write_char(']')
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write_string(f, key)?;
            f.write_char(':')?;
            value.fmt(f)?;
        }
        f.write_char('}')
    }
}
