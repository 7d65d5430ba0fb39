//! Ordered JSON array.

use std::slice::Iter;
use std::vec::IntoIter;

use super::types::Node;

/// An ordered, index-addressable sequence of [`Node`]s.
///
/// Elements can only be appended; existing elements are never replaced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    values: Vec<Node>,
}

impl Array {
    /// Create an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value`, returning `self` for chaining.
    pub fn add(&mut self, value: impl Into<Node>) -> &mut Self {
        self.values.push(value.into());
        self
    }

    /// By-value form of [`Array::add`].
    pub fn with(mut self, value: impl Into<Node>) -> Self {
        self.add(value);
        self
    }

    /// Element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.values.get(index)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the elements.
    pub fn values(&self) -> &[Node] {
        &self.values
    }

    /// Elements in order.
    pub fn iter(&self) -> Iter<'_, Node> {
        self.values.iter()
    }

    /// Wrap this array in a [`Node`].
    pub fn into_node(self) -> Node {
        Node::Array(self)
    }
}

impl<V: Into<Node>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Node>> Extend<V> for Array {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.values.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Array {
    type Item = Node;
    type IntoIter = IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Node;
    type IntoIter = Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
