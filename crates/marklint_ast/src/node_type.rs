//! Node kinds understood by marklint.
//!
//! The set mirrors mdast as produced by the Markdown parser (CommonMark +
//! GFM). Anything else the parser may emit is folded into [`NodeType::Unknown`].

/// Kind of a [`TxtNode`](crate::TxtNode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    // Document structure
    /// Root document node.
    Document,

    // Block elements
    /// Paragraph containing inline content.
    Paragraph,
    /// ATX or setext heading (H1-H6).
    Header,
    /// Block quote.
    BlockQuote,
    /// Ordered or unordered list.
    List,
    /// Item in a list.
    ListItem,
    /// Fenced or indented code block.
    CodeBlock,
    /// Thematic break.
    HorizontalRule,
    /// Raw HTML.
    Html,

    // Inline elements
    /// Plain text.
    Str,
    /// Hard line break.
    Break,
    /// Emphasis (italic).
    Emphasis,
    /// Strong emphasis (bold).
    Strong,
    /// Strikethrough text.
    Delete,
    /// Inline code span.
    Code,
    /// Hyperlink.
    Link,
    /// Image.
    Image,

    // References
    /// Link reference.
    LinkReference,
    /// Image reference.
    ImageReference,
    /// Reference definition.
    Definition,

    // GFM
    /// Table.
    Table,
    /// Table row.
    TableRow,
    /// Table cell.
    TableCell,
    /// Footnote definition.
    FootnoteDefinition,
    /// Footnote reference.
    FootnoteReference,

    /// Parser output no rule inspects (front matter, math, MDX, ...).
    Unknown,
}

impl NodeType {
    /// Returns true for content that cannot be reflowed to a shorter width:
    /// headings, tables and code blocks.
    #[inline]
    pub const fn is_unwrappable(&self) -> bool {
        matches!(self, NodeType::Header | NodeType::Table | NodeType::CodeBlock)
    }

    /// Returns true for inline links and images.
    #[inline]
    pub const fn is_link_like(&self) -> bool {
        matches!(self, NodeType::Link | NodeType::Image)
    }

    /// Returns the mdast name of this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeType::Document => "root",
            NodeType::Paragraph => "paragraph",
            NodeType::Header => "heading",
            NodeType::BlockQuote => "blockquote",
            NodeType::List => "list",
            NodeType::ListItem => "listItem",
            NodeType::CodeBlock => "code",
            NodeType::HorizontalRule => "thematicBreak",
            NodeType::Html => "html",
            NodeType::Str => "text",
            NodeType::Break => "break",
            NodeType::Emphasis => "emphasis",
            NodeType::Strong => "strong",
            NodeType::Delete => "delete",
            NodeType::Code => "inlineCode",
            NodeType::Link => "link",
            NodeType::Image => "image",
            NodeType::LinkReference => "linkReference",
            NodeType::ImageReference => "imageReference",
            NodeType::Definition => "definition",
            NodeType::Table => "table",
            NodeType::TableRow => "tableRow",
            NodeType::TableCell => "tableCell",
            NodeType::FootnoteDefinition => "footnoteDefinition",
            NodeType::FootnoteReference => "footnoteReference",
            NodeType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
