//! # marklint_ast
//!
//! Document tree definitions for marklint.
//!
//! The tree follows mdast: typed nodes with ordered children, literal values
//! on text-bearing nodes, and 1-indexed line/column locations. Nodes without
//! a location are *generated* and have no position rules can reason about.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for arena allocation: one arena per parsed document
//! - [`TxtNode`] is `Copy` and borrows children and text from the arena
//! - Rules read trees through the [`SyntaxNode`] trait and [`visitor::walk`]
//!
//! ## Example
//!
//! ```rust
//! use marklint_ast::{AstArena, Location, NodeType, SyntaxNode, TxtNode};
//!
//! let arena = AstArena::new();
//! let text = TxtNode::new_text(NodeType::Str, "Hello")
//!     .with_location(Location::from_coords((1, 1), (1, 6)));
//! let children = arena.alloc_slice_copy(&[text]);
//! let doc = TxtNode::new_parent(NodeType::Document, children);
//!
//! assert_eq!(doc.text_content(), "Hello");
//! assert!(doc.is_generated());
//! ```

mod arena;
mod error;
mod node;
mod node_type;
mod span;
mod syntax;
pub mod visitor;

pub use arena::AstArena;
pub use error::PositionError;
pub use node::TxtNode;
pub use node_type::NodeType;
pub use span::{Location, Position};
pub use syntax::SyntaxNode;
