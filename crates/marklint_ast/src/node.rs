//! TxtNode definition.

use crate::{Location, NodeType};

/// A node in the document tree.
///
/// Nodes are allocated in an [`AstArena`](crate::AstArena); `children` and
/// `value` borrow from the same arena.
///
/// A node whose `loc` is `None` is *generated*: it was synthesized rather than
/// read from the source and has no meaningful position.
///
/// # Example
///
/// ```rust
/// use marklint_ast::{AstArena, Location, NodeType, TxtNode};
///
/// let arena = AstArena::new();
///
/// let text = TxtNode::new_text(NodeType::Str, "Hello")
///     .with_location(Location::from_coords((1, 3), (1, 8)));
/// let children = arena.alloc_slice_copy(&[text]);
/// let quote = TxtNode::new_parent(NodeType::BlockQuote, children)
///     .with_location(Location::from_coords((1, 1), (1, 8)));
///
/// assert!(!quote.is_generated());
/// assert_eq!(quote.children[0].text(), Some("Hello"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TxtNode<'a> {
    /// The type of this node.
    pub node_type: NodeType,

    /// Line/column location, absent for generated nodes.
    pub loc: Option<Location>,

    /// Child nodes (for parent nodes).
    pub children: &'a [TxtNode<'a>],

    /// Text value (text, inline code, code blocks, html).
    pub value: Option<&'a str>,
}

impl<'a> TxtNode<'a> {
    /// Creates a new parent node with children.
    #[inline]
    pub const fn new_parent(node_type: NodeType, children: &'a [TxtNode<'a>]) -> Self {
        Self {
            node_type,
            loc: None,
            children,
            value: None,
        }
    }

    /// Creates a new text node with a value.
    #[inline]
    pub const fn new_text(node_type: NodeType, value: &'a str) -> Self {
        Self {
            node_type,
            loc: None,
            children: &[],
            value: Some(value),
        }
    }

    /// Creates a new leaf node (no children, no value).
    #[inline]
    pub const fn new_leaf(node_type: NodeType) -> Self {
        Self {
            node_type,
            loc: None,
            children: &[],
            value: None,
        }
    }

    /// Attaches a source location.
    #[inline]
    pub const fn with_location(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }

    /// Returns true if this node has no source location.
    #[inline]
    pub const fn is_generated(&self) -> bool {
        self.loc.is_none()
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the text value of this node, if it carries one.
    #[inline]
    pub const fn text(&self) -> Option<&'a str> {
        self.value
    }
}
