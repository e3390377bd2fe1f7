use super::Program;
use crate::lang::ast::Kind;
use crate::lang::LineIndex;
use std::collections::BTreeMap;

/// Compiled program as text, one numbered line per source line.
///
/// ```text
///    1 start: write black right goto 1
///    2 if white up goto 1 else exit 0
///    3 -
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    program: &'a Program,
}

impl<'a> Listing<'a> {
    pub fn new(program: &'a Program) -> Listing<'a> {
        Listing { program }
    }

    pub fn line(&self, line: LineIndex) -> Option<String> {
        let labels = self.labels_by_line();
        self.program
            .instructions()
            .get(line)
            .map(|_| self.render(line, &labels))
    }

    fn labels_by_line(&self) -> BTreeMap<LineIndex, &'a str> {
        self.program
            .labels()
            .iter()
            .map(|(label, line)| (*line, label.as_str()))
            .collect()
    }

    fn render(&self, line: LineIndex, labels: &BTreeMap<LineIndex, &str>) -> String {
        let instruction = &self.program.instructions()[line];
        let mut s = format!("{:>4} ", line + 1);
        if let Some(label) = labels.get(&line) {
            s.push_str(label);
            s.push_str(": ");
        }
        match instruction.kind {
            Kind::Nothing => s.push('-'),
            // folding can split an unconditional line in two
            Kind::Unconditional if instruction.white == instruction.color => {
                s.push_str(&instruction.white.to_string())
            }
            Kind::Unconditional | Kind::Conditional => {
                s.push_str(&format!(
                    "if white {} else {}",
                    instruction.white, instruction.color
                ));
            }
        }
        s
    }
}

impl<'a> std::fmt::Display for Listing<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let labels = self.labels_by_line();
        for line in 0..self.program.len() {
            writeln!(f, "{}", self.render(line, &labels))?;
        }
        Ok(())
    }
}
