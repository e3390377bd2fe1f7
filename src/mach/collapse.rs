use super::Branch;
use crate::lang::ast::{Instruction, Kind, Slot, Target};
use crate::lang::LineIndex;
use log::trace;
use std::collections::HashSet;

/// Retarget every jump into a `Kind::Nothing` line to wherever that
/// line leads. Writes and moves are untouched.
pub fn collapse(mut instructions: Vec<Instruction>) -> Vec<Instruction> {
    let mut visited = HashSet::new();
    for line in 0..instructions.len() {
        for slot in Slot::BOTH.iter() {
            collapse_action(&mut instructions, &mut visited, line, *slot);
        }
    }
    instructions
}

fn collapse_action(
    instructions: &mut [Instruction],
    visited: &mut HashSet<Branch>,
    line: LineIndex,
    slot: Slot,
) {
    let action = *instructions[line].action(slot);
    let to = match action.target {
        Target::Jump(to) if instructions[to].kind == Kind::Nothing => to,
        _ => return,
    };
    let color = action.write.unwrap_or_else(|| slot.color());
    if visited.insert(Branch::new(color, to)) {
        collapse_action(instructions, visited, to, Slot::White);
        collapse_action(instructions, visited, to, Slot::Color);
    }
    let target = instructions[to].white.target;
    trace!("collapse line {} {:?}: goto {} -> {}", line + 1, slot, to + 1, target);
    instructions[line].action_mut(slot).target = target;
}
