//! Tree traversal.
//!
//! Rules walk the tree with [`walk`] or its filtered form [`walk_types`].
//! Both are pre-order, hand the callback the parent and index of every node,
//! and stop at the first error the callback returns.
//!
//! # Example
//!
//! ```rust
//! use std::convert::Infallible;
//! use marklint_ast::{AstArena, NodeType, TxtNode};
//! use marklint_ast::visitor::walk_types;
//!
//! let arena = AstArena::new();
//! let text = TxtNode::new_text(NodeType::Str, "hello");
//! let children = arena.alloc_slice_copy(&[text]);
//! let doc = TxtNode::new_parent(NodeType::Document, children);
//!
//! let mut texts = Vec::new();
//! walk_types(&doc, &[NodeType::Str], &mut |visit| {
//!     texts.extend(visit.node.value);
//!     Ok::<_, Infallible>(())
//! })
//! .unwrap();
//! assert_eq!(texts, vec!["hello"]);
//! ```

mod walk;

pub use walk::{Visit, walk, walk_types};
