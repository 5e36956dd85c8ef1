//! Markdown parser using markdown-rs (wooorm/markdown-rs).
//!
//! The `markdown` crate produces mdast with unist positions; this module
//! copies that tree into the arena as [`TxtNode`]s with line/column
//! locations. mdast nodes without a position become generated nodes.
//!
//! markdown-rs reports columns in bytes; they are converted to character
//! columns so positions agree with line lengths measured in characters.

use markdown::mdast::Node;
use markdown::unist::Point;
use markdown::{ParseOptions, to_mdast};
use tracing::debug;

use marklint_ast::{AstArena, Location, NodeType, Position, TxtNode};

use crate::{ParseError, Parser};

/// Markdown parser (CommonMark + GFM).
pub struct MarkdownParser;

impl MarkdownParser {
    /// Creates a new Markdown parser.
    pub fn new() -> Self {
        Self
    }

    /// Gets default parse options (GFM).
    fn default_options() -> ParseOptions {
        ParseOptions::gfm()
    }

    fn convert_node<'a>(&self, arena: &'a AstArena, source: &str, node: &Node) -> TxtNode<'a> {
        let children: &'a [TxtNode<'a>] = match node.children() {
            Some(children) => arena.alloc_slice_fill_iter(
                children
                    .iter()
                    .map(|child| self.convert_node(arena, source, child)),
            ),
            None => &[],
        };

        let mut txt = TxtNode::new_parent(Self::node_type(node), children);
        txt.value = Self::value(node).map(|value| arena.alloc_str(value));
        txt.loc = Self::location(source, node);
        txt
    }

    fn node_type(node: &Node) -> NodeType {
        match node {
            Node::Root(_) => NodeType::Document,
            Node::Paragraph(_) => NodeType::Paragraph,
            Node::Heading(_) => NodeType::Header,
            Node::Blockquote(_) => NodeType::BlockQuote,
            Node::List(_) => NodeType::List,
            Node::ListItem(_) => NodeType::ListItem,
            Node::Code(_) => NodeType::CodeBlock,
            Node::ThematicBreak(_) => NodeType::HorizontalRule,
            Node::Html(_) => NodeType::Html,
            Node::Text(_) => NodeType::Str,
            Node::Break(_) => NodeType::Break,
            Node::Emphasis(_) => NodeType::Emphasis,
            Node::Strong(_) => NodeType::Strong,
            Node::Delete(_) => NodeType::Delete,
            Node::InlineCode(_) => NodeType::Code,
            Node::Link(_) => NodeType::Link,
            Node::Image(_) => NodeType::Image,
            Node::LinkReference(_) => NodeType::LinkReference,
            Node::ImageReference(_) => NodeType::ImageReference,
            Node::Definition(_) => NodeType::Definition,
            Node::Table(_) => NodeType::Table,
            Node::TableRow(_) => NodeType::TableRow,
            Node::TableCell(_) => NodeType::TableCell,
            Node::FootnoteDefinition(_) => NodeType::FootnoteDefinition,
            Node::FootnoteReference(_) => NodeType::FootnoteReference,
            _ => NodeType::Unknown,
        }
    }

    fn value(node: &Node) -> Option<&str> {
        match node {
            Node::Text(text) => Some(&text.value),
            Node::InlineCode(code) => Some(&code.value),
            Node::Code(code) => Some(&code.value),
            Node::Html(html) => Some(&html.value),
            _ => None,
        }
    }

    fn location(source: &str, node: &Node) -> Option<Location> {
        node.position().map(|pos| {
            Location::new(
                Self::position(source, &pos.start),
                Self::position(source, &pos.end),
            )
        })
    }

    /// Converts a markdown-rs point to a character column.
    ///
    /// Falls back to the byte column if the offset is not a character
    /// boundary of `source`.
    fn position(source: &str, point: &Point) -> Position {
        let column = source
            .get(..point.offset)
            .map(|before| {
                let line_start = before.rfind(['\n', '\r']).map_or(0, |index| index + 1);
                before[line_start..].chars().count() + 1
            })
            .unwrap_or(point.column);
        Position::new(point.line as u32, column as u32)
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for MarkdownParser {
    fn name(&self) -> &str {
        "markdown"
    }

    fn extensions(&self) -> &[&str] {
        &["md", "markdown", "mdown", "mkdn", "mkd"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError> {
        ParseError::check_size(source)?;

        let options = Self::default_options();
        let mdast =
            to_mdast(source, &options).map_err(|e| ParseError::invalid_source(e.to_string()))?;
        let root = self.convert_node(arena, source, &mdast);

        debug!(
            "Parsed markdown: {} bytes, {} top-level nodes",
            source.len(),
            root.children.len()
        );
        Ok(root)
    }
}
