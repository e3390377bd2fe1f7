use super::Branch;
use crate::error;
use crate::lang::ast::{Action, Instruction, Kind, Slot, Target};
use crate::lang::{Color, Error, Strictness};
use log::trace;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, Error>;

/// Replace every chain of jumps that neither moves nor exits with the
/// action the chain ends on. Chains that never end are left alone, or
/// fail compilation when `strictness` is `Strict`.
pub fn fold(mut instructions: Vec<Instruction>, strictness: Strictness) -> Result<Vec<Instruction>> {
    let mut folder = Folder {
        instructions: &mut instructions,
        in_progress: HashSet::new(),
        looping: HashSet::new(),
        strictness,
    };
    for line in 0..folder.instructions.len() {
        if folder.instructions[line].kind == Kind::Nothing {
            continue;
        }
        for slot in Slot::BOTH.iter() {
            folder.in_progress.clear();
            folder.in_progress.insert(Branch::new(slot.color(), line));
            let action = *folder.instructions[line].action(*slot);
            if let Some(resolved) = folder.resolve(action, slot.color())? {
                *folder.instructions[line].action_mut(*slot) = resolved;
            }
        }
    }
    Ok(instructions)
}

struct Folder<'a> {
    instructions: &'a mut Vec<Instruction>,
    in_progress: HashSet<Branch>,
    looping: HashSet<Branch>,
    strictness: Strictness,
}

impl<'a> Folder<'a> {
    /// `None` when the chain from `action` never moves.
    fn resolve(&mut self, action: Action, color: Color) -> Result<Option<Action>> {
        let to = match action.target {
            Target::Jump(to) if action.is_still() => to,
            _ => return Ok(Some(action)),
        };
        let color = action.write.unwrap_or(color);
        let branch = Branch::new(color, to);
        if self.looping.contains(&branch) {
            return Ok(None);
        }
        if !self.in_progress.insert(branch) {
            self.looping.insert(branch);
            if self.strictness == Strictness::Strict {
                return Err(error!(InfiniteLoop, to; "found infinite loop without moving"));
            }
            trace!("fold: {} at line {} loops", color, to + 1);
            return Ok(None);
        }
        let slot = Slot::of(color);
        let next = *self.instructions[to].action(slot);
        let resolved = self.resolve(next, color)?;
        self.in_progress.remove(&branch);
        match resolved {
            Some(resolved) => {
                *self.instructions[to].action_mut(slot) = resolved;
                trace!("fold: {} at line {} -> {}", color, to + 1, resolved);
                Ok(Some(Action {
                    write: resolved.write.or(action.write),
                    ..resolved
                }))
            }
            None => {
                self.looping.insert(branch);
                Ok(None)
            }
        }
    }
}
