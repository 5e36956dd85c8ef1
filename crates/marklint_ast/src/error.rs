//! Errors raised while reading node positions.

use thiserror::Error;

use crate::{Location, NodeType};

/// A node carries position data that cannot be reasoned about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// The location has a zero coordinate or ends before it starts.
    #[error(
        "malformed position on {node_type} node: {}:{}-{}:{}",
        .location.start.line,
        .location.start.column,
        .location.end.line,
        .location.end.column
    )]
    Malformed {
        /// Kind of the offending node.
        node_type: NodeType,
        /// The rejected location.
        location: Location,
    },
}
