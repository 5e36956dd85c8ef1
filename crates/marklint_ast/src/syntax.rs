//! The read-only view rules take of a document tree.
//!
//! Rules are written against [`SyntaxNode`] rather than [`TxtNode`] so they
//! only depend on the handful of accessors they need.

use crate::{Location, NodeType, PositionError, TxtNode};

/// Accessors a rule needs from a tree node.
pub trait SyntaxNode: Sized {
    /// Kind of this node.
    fn node_type(&self) -> NodeType;

    /// Ordered children of this node.
    fn children(&self) -> &[Self];

    /// Raw source location, `None` for generated nodes.
    fn location(&self) -> Option<Location>;

    /// Literal value of text-bearing nodes.
    fn value(&self) -> Option<&str>;

    /// Returns true if the node has no source location.
    fn is_generated(&self) -> bool {
        self.location().is_none()
    }

    /// Returns the node's location after validating it.
    ///
    /// `Ok(None)` means the node is generated. A location that is present but
    /// unusable is an error.
    fn position(&self) -> Result<Option<Location>, PositionError> {
        match self.location() {
            None => Ok(None),
            Some(location) if location.is_valid() => Ok(Some(location)),
            Some(location) => Err(PositionError::Malformed {
                node_type: self.node_type(),
                location,
            }),
        }
    }

    /// Concatenated values of this node and all of its descendants.
    fn text_content(&self) -> String {
        let mut text = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let Some(value) = node.value() {
                text.push_str(value);
            }
            stack.extend(node.children().iter().rev());
        }
        text
    }
}

impl<'a> SyntaxNode for TxtNode<'a> {
    #[inline]
    fn node_type(&self) -> NodeType {
        self.node_type
    }

    #[inline]
    fn children(&self) -> &[Self] {
        self.children
    }

    #[inline]
    fn location(&self) -> Option<Location> {
        self.loc
    }

    #[inline]
    fn value(&self) -> Option<&str> {
        self.value
    }
}
