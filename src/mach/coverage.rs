use crate::lang::ast::{Instruction, Kind, Slot};
use crate::lang::LineIndex;

/// How much of a line ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Never,
    Half,
    Entirely,
}

/// Which branches of each line have run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    white: Vec<bool>,
    color: Vec<bool>,
}

impl Coverage {
    pub fn new(lines: usize) -> Coverage {
        Coverage {
            white: vec![false; lines],
            color: vec![false; lines],
        }
    }

    pub fn clear(&mut self) {
        self.white.iter_mut().for_each(|b| *b = false);
        self.color.iter_mut().for_each(|b| *b = false);
    }

    pub fn cover(&mut self, line: LineIndex, slot: Slot) {
        let branches = match slot {
            Slot::White => &mut self.white,
            Slot::Color => &mut self.color,
        };
        if let Some(b) = branches.get_mut(line) {
            *b = true;
        }
    }

    pub fn is_covered(&self, line: LineIndex, slot: Slot) -> bool {
        let branches = match slot {
            Slot::White => &self.white,
            Slot::Color => &self.color,
        };
        branches.get(line).copied().unwrap_or(false)
    }

    /// Covered branches of a line out of two. A line that does not
    /// branch counts both once either ran.
    fn covered(&self, line: LineIndex, kind: Kind) -> usize {
        let white = self.is_covered(line, Slot::White);
        let color = self.is_covered(line, Slot::Color);
        match kind {
            Kind::Conditional => white as usize + color as usize,
            _ if white || color => 2,
            _ => 0,
        }
    }

    pub fn mark(&self, line: LineIndex, kind: Kind) -> Mark {
        match self.covered(line, kind) {
            0 => Mark::Never,
            1 => Mark::Half,
            _ => Mark::Entirely,
        }
    }

    /// Whole percent of branches that ran, counting only lines that
    /// hold an instruction. 100 when there are none.
    pub fn percentage(&self, instructions: &[Instruction]) -> usize {
        let mut lines = 0;
        let mut covered = 0;
        for (line, instruction) in instructions.iter().enumerate() {
            if instruction.kind == Kind::Nothing {
                continue;
            }
            lines += 1;
            covered += self.covered(line, instruction.kind);
        }
        if lines == 0 {
            100
        } else {
            100 * covered / (2 * lines)
        }
    }

    /// Combine with coverage of the same program from another run.
    pub fn merge(&mut self, other: &Coverage) {
        for (a, b) in self.white.iter_mut().zip(other.white.iter()) {
            *a |= *b;
        }
        for (a, b) in self.color.iter_mut().zip(other.color.iter()) {
            *a |= *b;
        }
    }
}
