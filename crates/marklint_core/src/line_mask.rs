//! Lines exempt from the line length check.
//!
//! Headings, tables and code blocks cannot be wrapped, so every line they
//! cover is masked. A link or image is masked too when it straddles the
//! threshold column and nothing breakable follows it on the same line.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use marklint_ast::visitor::{Visit, walk};
use marklint_ast::{Location, SyntaxNode};

use crate::RuleError;

/// A set of 1-indexed line numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMask {
    lines: BTreeSet<u32>,
}

impl LineMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Masks every line in `lines`.
    pub fn insert(&mut self, lines: RangeInclusive<u32>) {
        self.lines.extend(lines);
    }

    pub fn contains(&self, line: u32) -> bool {
        self.lines.contains(&line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Masked lines in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.lines.iter().copied()
    }
}

/// Builds the mask for `root` at the given threshold column.
///
/// Generated nodes never mask anything. A malformed position aborts the
/// build.
pub fn build_line_mask<N: SyntaxNode>(root: &N, threshold: u32) -> Result<LineMask, RuleError> {
    let mut mask = LineMask::new();

    walk(root, &mut |visit: Visit<'_, N>| -> Result<(), RuleError> {
        let node_type = visit.node.node_type();
        if node_type.is_unwrappable() {
            if let Some(location) = visit.node.position()? {
                mask.insert(location.lines());
            }
        } else if node_type.is_link_like()
            && let Some(location) = visit.node.position()?
            && link_is_exempt(&visit, location, threshold)?
        {
            mask.insert(location.lines());
        }
        Ok(())
    })?;

    Ok(mask)
}

fn link_is_exempt<N: SyntaxNode>(
    visit: &Visit<'_, N>,
    location: Location,
    threshold: u32,
) -> Result<bool, RuleError> {
    if location.start.column > threshold || location.end.column < threshold {
        return Ok(false);
    }

    let Some(next) = visit.next_sibling() else {
        return Ok(true);
    };
    let Some(next_location) = next.position()? else {
        return Ok(true);
    };
    if next_location.start.line != location.start.line {
        return Ok(true);
    }

    let breakable = match next.value() {
        None | Some("") => true,
        Some(value) => has_inner_whitespace(value),
    };
    Ok(!breakable)
}

/// True if the first line of `value` has a space or tab after its first
/// character with more text after it.
fn has_inner_whitespace(value: &str) -> bool {
    let first_line = value.split(['\n', '\r']).next().unwrap_or_default();
    let chars: Vec<char> = first_line.chars().collect();
    chars
        .iter()
        .enumerate()
        .skip(1)
        .any(|(index, c)| matches!(c, ' ' | '\t') && index + 1 < chars.len())
}
