use crate::lang::{Color, LineIndex};

/// A pixel color arriving at a line. Two walks that reach the same
/// branch behave the same from there on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Branch {
    pub color: Color,
    pub line: LineIndex,
}

impl Branch {
    pub fn new(color: Color, line: LineIndex) -> Branch {
        Branch { color, line }
    }
}
