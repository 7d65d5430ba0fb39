//! `serde::Serialize` support.
//!
//! Lets a tree be handed to any serde serializer. The target format
//! decides separators and escaping; the quirks of [`stringify`](super::stringify)
//! do not carry over. Object entries keep insertion order.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::array::Array;
use super::object::Object;
use super::types::Node;

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Int(n) => serializer.serialize_i32(*n),
            Node::Float(x) => serializer.serialize_f32(*x),
            Node::Str(s) => serializer.serialize_str(s),
            Node::Array(a) => a.serialize(serializer),
            Node::Object(o) => o.serialize(serializer),
        }
    }
}

impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
