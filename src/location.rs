//! Locations: a document path plus a cursor position within it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A cursor position within a document (0-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A recorded point in the workspace: which document, and where in it.
///
/// Two locations are equal when they name the same document path and the
/// same line/column. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Stable identity of the document (its path)
    pub doc: PathBuf,
    /// Position of the cursor within the document
    pub pos: Position,
}

impl Location {
    pub fn new(doc: impl Into<PathBuf>, pos: Position) -> Self {
        Self {
            doc: doc.into(),
            pos,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.doc.display(), self.pos)
    }
}
