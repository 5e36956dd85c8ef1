//! # marklint_parser
//!
//! Parser abstraction layer for marklint.
//!
//! This crate provides:
//! - A `Parser` trait for turning source text into a located tree
//! - A Markdown parser built on `markdown-rs` (CommonMark + GFM)
//! - A plain text parser
//!
//! ## Example
//!
//! ```rust
//! use marklint_ast::AstArena;
//! use marklint_parser::{MarkdownParser, Parser};
//!
//! let arena = AstArena::new();
//! let parser = MarkdownParser::new();
//!
//! let ast = parser.parse(&arena, "# Hello\n\n> quoted").unwrap();
//! assert_eq!(ast.children.len(), 2);
//! ```

mod error;
mod markdown;
mod text;
mod traits;

pub use error::ParseError;
pub use markdown::MarkdownParser;
pub use text::PlainTextParser;
pub use traits::Parser;

/// Returns the parser for a file extension, falling back to plain text.
pub fn parser_for_extension(extension: &str) -> Box<dyn Parser> {
    let markdown = MarkdownParser::new();
    if markdown.can_parse(extension) {
        Box::new(markdown)
    } else {
        Box::new(PlainTextParser::new())
    }
}
