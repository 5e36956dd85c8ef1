//! Plain text parser.
//!
//! Plain text has no structure beyond paragraphs: each run of non-blank
//! lines becomes a `Paragraph` holding a single `Str` node.

use marklint_ast::{AstArena, Location, NodeType, TxtNode};

use crate::{ParseError, Parser};

/// Plain text parser implementation.
pub struct PlainTextParser;

impl PlainTextParser {
    /// Creates a new plain text parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextParser {
    fn default() -> Self {
        Self::new()
    }
}

/// A run of non-blank lines being collected.
struct Block {
    start_offset: usize,
    start_line: u32,
    end_offset: usize,
    end_line: u32,
    end_column: u32,
}

impl Block {
    fn into_node<'a>(self, arena: &'a AstArena, source: &str) -> TxtNode<'a> {
        let loc = Location::from_coords((self.start_line, 1), (self.end_line, self.end_column));
        let value = arena.alloc_str(&source[self.start_offset..self.end_offset]);

        let text = TxtNode::new_text(NodeType::Str, value).with_location(loc);
        let children = arena.alloc_slice_copy(&[text]);
        TxtNode::new_parent(NodeType::Paragraph, children).with_location(loc)
    }
}

impl Parser for PlainTextParser {
    fn name(&self) -> &str {
        "text"
    }

    fn extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError> {
        ParseError::check_size(source)?;

        let mut paragraphs: Vec<TxtNode<'a>> = Vec::new();
        let mut current: Option<Block> = None;
        let mut offset = 0usize;
        let mut last_line = 1u32;
        let mut last_column = 1u32;

        for (idx, raw) in source.split('\n').enumerate() {
            let line_number = idx as u32 + 1;
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            let column = line.chars().count() as u32 + 1;
            last_line = line_number;
            last_column = column;

            if line.trim().is_empty() {
                if let Some(block) = current.take() {
                    paragraphs.push(block.into_node(arena, source));
                }
            } else {
                let block = current.get_or_insert(Block {
                    start_offset: offset,
                    start_line: line_number,
                    end_offset: offset,
                    end_line: line_number,
                    end_column: column,
                });
                block.end_offset = offset + line.len();
                block.end_line = line_number;
                block.end_column = column;
            }

            offset += raw.len() + 1;
        }

        if let Some(block) = current.take() {
            paragraphs.push(block.into_node(arena, source));
        }

        let children = arena.alloc_slice_copy(&paragraphs);
        Ok(
            TxtNode::new_parent(NodeType::Document, children)
                .with_location(Location::from_coords((1, 1), (last_line, last_column))),
        )
    }
}
