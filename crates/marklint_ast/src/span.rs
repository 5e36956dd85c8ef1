//! Position types for source locations.
//!
//! Lines and columns are 1-indexed, matching unist/mdast points. Columns
//! count characters, not bytes.

use serde::{Deserialize, Serialize};

/// A point in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns true if both coordinates are 1-indexed values.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.line >= 1 && self.column >= 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start and end points of a node.
///
/// The end point is the position just after the node's last character,
/// as in mdast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Start position.
    pub start: Position,
    /// End position.
    pub end: Position,
}

impl Location {
    /// Creates a new location.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Creates a location from raw `(line, column)` pairs.
    #[inline]
    pub const fn from_coords(start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            start: Position::new(start.0, start.1),
            end: Position::new(end.0, end.1),
        }
    }

    /// Returns true if both points are valid and the end does not precede
    /// the start.
    pub fn is_valid(&self) -> bool {
        self.start.is_valid() && self.end.is_valid() && self.end >= self.start
    }

    /// Returns the inclusive range of lines covered by this location.
    #[inline]
    pub fn lines(&self) -> std::ops::RangeInclusive<u32> {
        self.start.line..=self.end.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_position() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert!(pos.is_valid());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(4, 16).to_string(), "4:16");
    }

    #[test]
    fn test_position_ordering_is_line_major() {
        assert!(Position::new(1, 80) < Position::new(2, 1));
        assert!(Position::new(2, 3) < Position::new(2, 4));
    }

    #[rstest]
    #[case::single_line((1, 1), (1, 10), true)]
    #[case::multi_line((2, 5), (4, 1), true)]
    #[case::empty((3, 3), (3, 3), true)]
    #[case::zero_line((0, 1), (1, 1), false)]
    #[case::zero_column((1, 0), (1, 4), false)]
    #[case::end_before_start((5, 1), (4, 9), false)]
    #[case::end_column_before_start((5, 9), (5, 2), false)]
    fn test_location_validity(
        #[case] start: (u32, u32),
        #[case] end: (u32, u32),
        #[case] expected: bool,
    ) {
        assert_eq!(Location::from_coords(start, end).is_valid(), expected);
    }

    #[test]
    fn test_location_lines() {
        let loc = Location::from_coords((3, 1), (5, 4));
        assert_eq!(loc.lines().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_location_serialization() {
        let loc = Location::from_coords((1, 1), (1, 10));
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(
            json,
            r#"{"start":{"line":1,"column":1},"end":{"line":1,"column":10}}"#
        );
    }

    #[test]
    fn test_position_deserialization() {
        let pos: Position = serde_json::from_str(r#"{"line": 4, "column": 16}"#).unwrap();
        assert_eq!(pos, Position::new(4, 16));
    }
}
