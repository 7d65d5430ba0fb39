//! JSON value types.
//!
//! A parsed document is a strict tree of [`Node`]s: every [`Array`] and
//! [`Object`] owns its children and nothing is shared.
//!
//! Typed accessors are strict. Each one returns the payload when the node
//! holds the matching variant and a [`JsonError::WrongType`] otherwise,
//! including for null nodes. Use [`Node::is_null`] to test for null.

use super::array::Array;
use super::object::Object;
use crate::error::{JsonError, JsonResult};

/// A JSON value.
///
/// Numbers are limited to 32 bits: integers without a decimal point become
/// [`Node::Int`], anything with one becomes [`Node::Float`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// JSON null literal
    #[default]
    Null,
    /// JSON boolean (true/false)
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit float
    Float(f32),
    /// JSON string
    Str(String),
    /// Ordered sequence of values
    Array(Array),
    /// Insertion-ordered key/value mapping
    Object(Object),
}

/// Numeric payload of a [`Node`], as returned by [`Node::as_number`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit float
    Float(f32),
}

impl Number {
    /// Widen to f64. Exact for both variants.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => f64::from(n),
            Number::Float(f) => f64::from(f),
        }
    }
}

impl Node {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Node::Bool(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Node::Str(_))
    }

    /// Returns true for integers and floats.
    pub fn is_number(&self) -> bool {
        matches!(self, Node::Int(_) | Node::Float(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_integer(&self) -> bool {
        matches!(self, Node::Int(_))
    }

    /// Returns true if this is a float value.
    pub fn is_float(&self) -> bool {
        matches!(self, Node::Float(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Int(_) => "integer",
            Node::Float(_) => "float",
            Node::Str(_) => "string",
            Node::Array(_) => "array",
            Node::Object(_) => "object",
        }
    }

    fn wrong_type(&self, expected: &'static str) -> JsonError {
        JsonError::WrongType {
            expected,
            found: self.type_name(),
        }
    }

    /// The boolean payload.
    pub fn as_bool(&self) -> JsonResult<bool> {
        match self {
            Node::Bool(b) => Ok(*b),
            _ => Err(self.wrong_type("boolean")),
        }
    }

    /// The string payload.
    pub fn as_str(&self) -> JsonResult<&str> {
        match self {
            Node::Str(s) => Ok(s),
            _ => Err(self.wrong_type("string")),
        }
    }

    /// The numeric payload, integer or float.
    pub fn as_number(&self) -> JsonResult<Number> {
        match self {
            Node::Int(n) => Ok(Number::Int(*n)),
            Node::Float(f) => Ok(Number::Float(*f)),
            _ => Err(self.wrong_type("number")),
        }
    }

    /// The integer payload. Floats are not converted.
    pub fn as_i32(&self) -> JsonResult<i32> {
        match self {
            Node::Int(n) => Ok(*n),
            _ => Err(self.wrong_type("integer")),
        }
    }

    /// The float payload. Integers are not converted.
    pub fn as_f32(&self) -> JsonResult<f32> {
        match self {
            Node::Float(f) => Ok(*f),
            _ => Err(self.wrong_type("float")),
        }
    }

    /// The array payload.
    pub fn as_array(&self) -> JsonResult<&Array> {
        match self {
            Node::Array(a) => Ok(a),
            _ => Err(self.wrong_type("array")),
        }
    }

    /// The object payload.
    pub fn as_object(&self) -> JsonResult<&Object> {
        match self {
            Node::Object(o) => Ok(o),
            _ => Err(self.wrong_type("object")),
        }
    }

    /// Take the string payload.
    pub fn into_string(self) -> JsonResult<String> {
        match self {
            Node::Str(s) => Ok(s),
            other => Err(other.wrong_type("string")),
        }
    }

    /// Take the array payload.
    pub fn into_array(self) -> JsonResult<Array> {
        match self {
            Node::Array(a) => Ok(a),
            other => Err(other.wrong_type("array")),
        }
    }

    /// Take the object payload.
    pub fn into_object(self) -> JsonResult<Object> {
        match self {
            Node::Object(o) => Ok(o),
            other => Err(other.wrong_type("object")),
        }
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Int(value)
    }
}

impl From<f32> for Node {
    fn from(value: f32) -> Self {
        Node::Float(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Str(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Str(value.to_string())
    }
}

impl From<Array> for Node {
    fn from(value: Array) -> Self {
        Node::Array(value)
    }
}

impl From<Object> for Node {
    fn from(value: Object) -> Self {
        Node::Object(value)
    }
}

impl From<Number> for Node {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(n) => Node::Int(n),
            Number::Float(f) => Node::Float(f),
        }
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Null, Into::into)
    }
}
