//! Pre-order traversal over any [`SyntaxNode`] tree.

use crate::{NodeType, SyntaxNode};

/// A node reached during a walk, together with where it sits in its parent.
#[derive(Debug)]
pub struct Visit<'n, N> {
    /// The visited node.
    pub node: &'n N,
    /// The parent, `None` for the root.
    pub parent: Option<&'n N>,
    /// Index of `node` in `parent.children()`, 0 for the root.
    pub index: usize,
}

impl<'n, N> Clone for Visit<'n, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'n, N> Copy for Visit<'n, N> {}

impl<'n, N: SyntaxNode> Visit<'n, N> {
    /// The sibling immediately after this node, if any.
    pub fn next_sibling(&self) -> Option<&'n N> {
        self.parent
            .and_then(|parent| parent.children().get(self.index + 1))
    }
}

/// Walks `root` depth-first, calling `f` on every node before its children.
///
/// Every reachable node is visited exactly once. The first error returned by
/// `f` stops the walk and is returned.
pub fn walk<'n, N, E, F>(root: &'n N, f: &mut F) -> Result<(), E>
where
    N: SyntaxNode,
    F: FnMut(Visit<'n, N>) -> Result<(), E>,
{
    walk_inner(
        Visit {
            node: root,
            parent: None,
            index: 0,
        },
        f,
    )
}

fn walk_inner<'n, N, E, F>(visit: Visit<'n, N>, f: &mut F) -> Result<(), E>
where
    N: SyntaxNode,
    F: FnMut(Visit<'n, N>) -> Result<(), E>,
{
    f(visit)?;

    let node = visit.node;
    for (index, child) in node.children().iter().enumerate() {
        walk_inner(
            Visit {
                node: child,
                parent: Some(node),
                index,
            },
            f,
        )?;
    }
    Ok(())
}

/// Like [`walk`], but only calls `f` for nodes whose type is in `types`.
///
/// Non-matching nodes are still descended into.
pub fn walk_types<'n, N, E, F>(root: &'n N, types: &[NodeType], f: &mut F) -> Result<(), E>
where
    N: SyntaxNode,
    F: FnMut(Visit<'n, N>) -> Result<(), E>,
{
    walk(root, &mut |visit: Visit<'n, N>| {
        if types.contains(&visit.node.node_type()) {
            f(visit)
        } else {
            Ok(())
        }
    })
}
