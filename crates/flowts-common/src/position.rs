//! Line/column source locations attached to nodes by the parser.
//!
//! Positions follow the parser's convention: `line` is 1-based and `column`
//! is a 0-based offset into the line. Diagnostics report both 1-based.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column offset (0-based)
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Column as reported to users (1-based).
    #[must_use]
    pub const fn display_column(&self) -> u32 {
        self.column + 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.display_column())
    }
}

/// Start and end positions of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

impl SourceLocation {
    pub const fn new(start: Position, end: Position) -> Self {
        SourceLocation { start, end }
    }

    /// Location spanning a single line.
    #[must_use]
    pub const fn on_line(line: u32, start_column: u32, end_column: u32) -> Self {
        SourceLocation {
            start: Position::new(line, start_column),
            end: Position::new(line, end_column),
        }
    }
}

/// Optional location of an offending node, for error messages.
///
/// Renders as `line L, column C`, or `unknown position` when the parser did
/// not record one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct At(pub Option<Position>);

impl From<Option<&SourceLocation>> for At {
    fn from(loc: Option<&SourceLocation>) -> Self {
        At(loc.map(|loc| loc.start))
    }
}

impl fmt::Display for At {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(position) => position.fmt(f),
            None => f.write_str("unknown position"),
        }
    }
}
