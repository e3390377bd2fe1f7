use super::*;
use crate::lang::ast::{Action, Direction, Instruction, Kind, Target};
use crate::lang::{Color, Dialect, ErrorCode, Strictness};


fn compile_with(source: &str, dialect: Dialect, optimize: bool) -> Program {
    let options = Options {
        dialect,
        optimize,
        strictness: None,
    };
    match Program::compile(source, &options) {
        Ok(program) => program,
        Err(e) => panic!("{}", e),
    }
}

fn palette(source: &str) -> Program {
    compile_with(source, Dialect::Palette, true)
}

fn unoptimized(source: &str) -> Program {
    compile_with(source, Dialect::Palette, false)
}

fn still(target: Target) -> Action {
    Action::new(target)
}

fn moving(direction: Direction, target: Target) -> Action {
    Action {
        write: None,
        direction,
        target,
    }
}

fn unconditional(action: Action) -> Instruction {
    Instruction {
        white: action,
        color: action,
        kind: Kind::Unconditional,
    }
}

fn placeholder(target: Target) -> Instruction {
    Instruction {
        white: still(target),
        color: still(target),
        kind: Kind::Nothing,
    }
}
