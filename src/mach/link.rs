use crate::error;
use crate::lang::ast::{Action, Goto, Instruction, Slot, Target};
use crate::lang::{Error, LineIndex, Parsed};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Label resolution

#[derive(Debug, Default)]
pub struct Link {
    labels: BTreeMap<String, LineIndex>,
    default_writes: bool,
}

impl Link {
    pub fn new(labels: BTreeMap<String, LineIndex>, default_writes: bool) -> Link {
        Link {
            labels,
            default_writes,
        }
    }

    pub fn into_labels(self) -> BTreeMap<String, LineIndex> {
        self.labels
    }

    /// Replace every label with its line. The first unknown label,
    /// white action before color action, is the error.
    pub fn link(&self, instructions: Vec<Instruction<Goto>>) -> Result<Vec<Instruction>> {
        instructions
            .into_iter()
            .enumerate()
            .map(|(line, instruction)| {
                Ok(Instruction {
                    white: self.action(line, Slot::White, instruction.white)?,
                    color: self.action(line, Slot::Color, instruction.color)?,
                    kind: instruction.kind,
                })
            })
            .collect()
    }

    fn action(&self, line: LineIndex, slot: Slot, action: Action<Goto>) -> Result<Action> {
        let target = match action.target {
            Goto::Line(to) => Target::Jump(to),
            Goto::Exit(status) => Target::Exit(status),
            Goto::Label(label) => match self.labels.get(&label) {
                Some(to) => Target::Jump(*to),
                None => {
                    return Err(error!(UndefinedLabel, line;
                        format!("label '{}' is not defined", label)))
                }
            },
        };
        let write = match action.write {
            None if self.default_writes => Some(slot.color()),
            write => write,
        };
        Ok(Action {
            write,
            direction: action.direction,
            target,
        })
    }
}

/// Resolve a whole parse.
pub fn link(parsed: Parsed) -> Result<(Vec<Instruction>, BTreeMap<String, LineIndex>)> {
    let default_writes = parsed.dialect.vocabulary().defaults_writes();
    let link = Link::new(parsed.labels, default_writes);
    let instructions = link.link(parsed.instructions)?;
    Ok((instructions, link.into_labels()))
}
