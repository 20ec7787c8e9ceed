//! Untyped tree produced by the section parser.
//!
//! A [`RawNode`] is either an inline string value or a nested section of
//! further nodes. It only lives between parsing and normalization.

use indexmap::IndexMap;

/// Fields of one section, in document order.
pub type RawSection = IndexMap<String, RawNode>;

/// One parsed field value, before typing.
#[derive(Clone, Debug, PartialEq)]
pub enum RawNode {
    Leaf(String),
    Section(RawSection),
}

impl RawNode {
    /// Returns the inline value if this is a leaf.
    #[inline]
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            RawNode::Leaf(s) => Some(s),
            RawNode::Section(_) => None,
        }
    }

    /// Returns the children if this is a section.
    #[inline]
    #[must_use]
    pub fn as_section(&self) -> Option<&RawSection> {
        match self {
            RawNode::Leaf(_) => None,
            RawNode::Section(section) => Some(section),
        }
    }
}

impl From<&str> for RawNode {
    fn from(value: &str) -> Self {
        RawNode::Leaf(value.to_string())
    }
}

impl From<RawSection> for RawNode {
    fn from(section: RawSection) -> Self {
        RawNode::Section(section)
    }
}
