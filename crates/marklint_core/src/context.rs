//! Lint context shared by every rule run on one document.

/// Source text of a document and its raw lines.
///
/// Lines are split on `\n`; a trailing `\r` is dropped so CRLF documents
/// measure the same as LF documents. Line numbers are 1-indexed.
#[derive(Debug)]
pub struct LintContext<'s> {
    source: &'s str,
    lines: Vec<&'s str>,
}

impl<'s> LintContext<'s> {
    /// Creates a context for `source`.
    pub fn new(source: &'s str) -> Self {
        let lines = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self { source, lines }
    }

    /// The full source text.
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Number of lines. An empty document has one empty line.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of a 1-indexed line, without its line ending.
    pub fn line_text(&self, line: u32) -> Option<&'s str> {
        let index = (line as usize).checked_sub(1)?;
        self.lines.get(index).copied()
    }

    /// Iterates `(line_number, text)` pairs in ascending order.
    pub fn lines(&self) -> impl Iterator<Item = (u32, &'s str)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(index, text)| (index as u32 + 1, *text))
    }
}
