//! Tree builders for rule tests.

use marklint_ast::{AstArena, Location, NodeType, TxtNode};
use marklint_parser::{MarkdownParser, Parser};

pub fn loc(start: (u32, u32), end: (u32, u32)) -> Location {
    Location::from_coords(start, end)
}

/// A generated node with no children and no value.
pub fn leaf(node_type: NodeType) -> TxtNode<'static> {
    TxtNode::new_leaf(node_type)
}

/// A generated `Str` node.
pub fn text(value: &'static str) -> TxtNode<'static> {
    TxtNode::new_text(NodeType::Str, value)
}

pub fn located<'a>(node: TxtNode<'a>, location: Location) -> TxtNode<'a> {
    node.with_location(location)
}

/// A located parent node whose children are copied into `arena`.
pub fn parent<'a>(
    arena: &'a AstArena,
    node_type: NodeType,
    location: Location,
    children: &[TxtNode<'a>],
) -> TxtNode<'a> {
    TxtNode::new_parent(node_type, arena.alloc_slice_copy(children))
        .with_location(location)
}

pub fn parse_markdown<'a>(arena: &'a AstArena, source: &str) -> TxtNode<'a> {
    MarkdownParser::new().parse(arena, source).unwrap()
}
