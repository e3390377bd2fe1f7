use super::{collapse, fold, link};
use crate::lang::ast::{Instruction, Kind, Target};
use crate::lang::{parse, Dialect, Error, LineIndex, Strictness};
use log::debug;
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// Compiler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub dialect: Dialect,
    /// Run the folding pass.
    pub optimize: bool,
    /// Defaults to the dialect's own strictness.
    pub strictness: Option<Strictness>,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            dialect: Dialect::default(),
            optimize: true,
            strictness: None,
        }
    }
}

impl Options {
    pub fn new(dialect: Dialect) -> Options {
        Options {
            dialect,
            ..Options::default()
        }
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
            .unwrap_or_else(|| self.dialect.vocabulary().strictness())
    }
}

/// A compiled program. Never changes once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    labels: BTreeMap<String, LineIndex>,
    instruction_count: usize,
    dialect: Dialect,
}

impl Program {
    pub fn compile(source: &str, options: &Options) -> Result<Program> {
        let parsed = parse(source, options.dialect.vocabulary())?;
        let instruction_count = parsed.instruction_count;
        debug!(
            "parsed {} lines, {} instructions, {} labels",
            parsed.instructions.len(),
            instruction_count,
            parsed.labels.len()
        );
        let (instructions, labels) = link(parsed)?;
        let instructions = collapse(instructions);
        debug!("collapsed placeholders");
        let instructions = if options.optimize {
            let folded = fold(instructions, options.strictness())?;
            debug!("folded with {:?}", options.strictness());
            folded
        } else {
            instructions
        };
        Ok(Program {
            instructions,
            labels,
            instruction_count,
            dialect: options.dialect,
        })
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn labels(&self) -> &BTreeMap<String, LineIndex> {
        &self.labels
    }

    /// Source lines that hold an instruction.
    pub fn instruction_count(&self) -> usize {
        self.instruction_count
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Where execution begins: line 0, or where its chain of
    /// placeholder lines ends.
    pub fn entry(&self) -> Target {
        let mut target = Target::Jump(0);
        for _ in 0..=self.instructions.len() {
            let line = match target {
                Target::Jump(line) => line,
                Target::Exit(_) => break,
            };
            match self.instructions.get(line) {
                Some(instruction) if instruction.kind == Kind::Nothing => {
                    target = instruction.white.target
                }
                Some(_) => break,
                None => return Target::Exit(0),
            }
        }
        target
    }
}

/// Compile palette source. Returns the program and its instruction count.
pub fn compile(source: &str, optimize: bool) -> Result<(Program, usize)> {
    let options = Options {
        optimize,
        ..Options::default()
    };
    let program = Program::compile(source, &options)?;
    let count = program.instruction_count();
    Ok((program, count))
}
