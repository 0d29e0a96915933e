//! DOM tree for the Wren layout engine.
//!
//! The tree is built once by the HTML parser and never mutated afterwards.
//!
//! # Design
//!
//! Each [`Node`] exclusively owns its children. There are no parent or
//! sibling links: every later stage (cascade, box generation, layout) walks
//! the tree top-down and passes any context it needs as arguments.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// A node in the document tree together with its owned children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "A node has an associated list of children"
    pub children: Vec<Node>,
}

/// The kind of a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    /// "Element nodes are simply known as elements."
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    /// "Text nodes are known as text."
    Text(String),
}

/// Element-specific data.
///
/// NOTE: We only store the tag name (local name) and attributes.
/// Namespaces and custom elements are out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id").map(String::as_str)
    }

    /// Returns the set of class names from the class attribute.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The class attribute, if specified, must have a value that is a set of
    /// space-separated tokens representing the various classes that the element belongs to."
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        self.attrs
            .get("class")
            .map(|classlist| classlist.split_whitespace().collect())
            .unwrap_or_default()
    }
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(data: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::Text(data.into()),
            children: Vec::new(),
        }
    }

    /// Create an element node with the given attributes and children.
    #[must_use]
    pub fn element(tag_name: impl Into<String>, attrs: AttributesMap, children: Vec<Self>) -> Self {
        Self {
            node_type: NodeType::Element(ElementData {
                tag_name: tag_name.into(),
                attrs,
            }),
            children,
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementData> {
        match &self.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Text(_) => None,
        }
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            NodeType::Element(_) => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let prefix = "  ".repeat(depth);
        match &self.node_type {
            NodeType::Element(data) => {
                if data.attrs.is_empty() {
                    writeln!(f, "{prefix}<{}>", data.tag_name)?;
                } else {
                    let mut attrs: Vec<_> = data.attrs.iter().collect();
                    attrs.sort();
                    let attrs: Vec<String> =
                        attrs.iter().map(|(k, v)| format!("{k}=\"{v}\"")).collect();
                    writeln!(f, "{prefix}<{} {}>", data.tag_name, attrs.join(" "))?;
                }
            }
            NodeType::Text(data) => {
                let display = data.replace('\n', "\\n");
                writeln!(f, "{prefix}\"{display}\"")?;
            }
        }
        for child in &self.children {
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented tree dump, two spaces per level.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
