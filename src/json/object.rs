//! Insertion-ordered JSON object.

use indexmap::map::{IntoIter, Iter, Keys};
use indexmap::IndexMap;

use super::types::Node;

static NULL: Node = Node::Null;

/// An ordered mapping from string keys to [`Node`]s.
///
/// Iteration and serialization follow insertion order. Re-inserting an
/// existing key replaces its value in place without moving it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    properties: IndexMap<String, Node>,
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`, returning `self` for chaining.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Node>) -> &mut Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// By-value form of [`Object::put`] for building nested literals.
    ///
    /// ```
    /// use json_lite::json::{stringify, Object};
    ///
    /// let response = Object::new()
    ///     .with("status", 200)
    ///     .with("headers", Object::new().with("X-Generated-By", "json-lite"));
    /// assert_eq!(
    ///     stringify(&response),
    ///     r#"{"status":200,"headers":{"X-Generated-By":"json-lite"}}"#
    /// );
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.put(key, value);
        self
    }

    /// Look up `key`. An absent key yields a null node.
    ///
    /// Use [`Object::contains_key`] to tell "absent" from "present and null".
    pub fn get(&self, key: &str) -> &Node {
        self.properties.get(key).unwrap_or(&NULL)
    }

    /// Returns true if `key` has been inserted.
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> Keys<'_, String, Node> {
        self.properties.keys()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Read-only view of the underlying map.
    pub fn as_map(&self) -> &IndexMap<String, Node> {
        &self.properties
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Node> {
        self.properties.iter()
    }

    /// Wrap this object in a [`Node`].
    pub fn into_node(self) -> Node {
        Node::Object(self)
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        object.extend(iter);
        object
    }
}

impl<K: Into<String>, V: Into<Node>> Extend<(K, V)> for Object {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl IntoIterator for Object {
    type Item = (String, Node);
    type IntoIter = IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Node);
    type IntoIter = Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
