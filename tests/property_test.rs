mod common;
use common::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tmlx::lang::ast::{Instruction, Kind, Slot, Target};
use tmlx::lang::{parse, Color, Dialect, Strictness};
use tmlx::mach::{collapse, fold, link, Canvas, Options};

const COLORS: [&str; 8] = ["white", "black", "red", "green", "blue", "cyan", "magenta", "yellow"];
const DIRECTIONS: [&str; 4] = ["up", "down", "left", "right"];

fn action(rng: &mut StdRng, lines: usize) -> String {
    let mut words = vec![];
    if rng.gen_bool(0.5) {
        words.push(format!("write {}", COLORS[rng.gen_range(0..COLORS.len())]));
    }
    if rng.gen_bool(0.4) {
        words.push(DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())].to_string());
    }
    match rng.gen_range(0..4) {
        0 => words.push("repeat".to_string()),
        1 => words.push(format!("goto l{}", rng.gen_range(0..lines))),
        2 => words.push(format!("exit {}", rng.gen_range(0..4))),
        _ => {}
    }
    if words.is_empty() {
        words.push(format!("write {}", COLORS[rng.gen_range(0..COLORS.len())]));
    }
    words.join(" ")
}

fn condition(rng: &mut StdRng) -> &'static str {
    if rng.gen_bool(0.5) {
        "white"
    } else {
        "color"
    }
}

/// Every line labeled `l0`, `l1`, ... so any line can be a target.
fn program(rng: &mut StdRng, blanks: bool) -> String {
    let lines = rng.gen_range(1..8);
    (0..lines)
        .map(|i| {
            let body = match rng.gen_range(0..5) {
                0 if blanks => String::new(),
                1 => format!(
                    "if {} {} else {}",
                    condition(rng),
                    action(rng, lines),
                    action(rng, lines)
                ),
                2 => format!("if {} {}", condition(rng), action(rng, lines)),
                3 => format!("while {} {}", condition(rng), action(rng, lines)),
                _ => action(rng, lines),
            };
            format!("l{}: {}", i, body)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn unoptimized() -> Options {
    Options {
        optimize: false,
        ..Options::default()
    }
}

#[test]
fn test_folding_keeps_behavior() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut compared = 0;
    for _ in 0..300 {
        let source = program(&mut rng, true);
        let input = Canvas::random(5, 5, &mut rng, &Color::ALL).unwrap();
        let fast = exec_n(compile(&source), input.clone(), 20_000);
        let slow = exec_n(compile_with(&source, &unoptimized()), input, 20_000);
        if fast.exit.is_none() || slow.exit.is_none() {
            continue;
        }
        compared += 1;
        assert_eq!(fast.exit, slow.exit, "{}", source);
        assert_eq!(fast.canvas, slow.canvas, "{}", source);
        assert!(fast.executed <= slow.executed, "{}", source);
    }
    assert!(compared > 0);
}

#[test]
fn test_runs_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let source = program(&mut rng, true);
        let input = Canvas::random(4, 4, &mut rng, &Color::ALL).unwrap();
        let a = exec_n(compile(&source), input.clone(), 5_000);
        let b = exec_n(compile(&source), input, 5_000);
        assert_eq!(a.exit, b.exit);
        assert_eq!(a.canvas, b.canvas);
        assert_eq!(a.executed, b.executed);
    }
}

#[test]
fn test_fold_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..200 {
        let source = program(&mut rng, true);
        let instructions = linked(&source);
        let once = fold(collapse(instructions), Strictness::Permissive).unwrap();
        let twice = fold(once.clone(), Strictness::Permissive).unwrap();
        assert_eq!(once, twice, "{}", source);
    }
}

fn linked(source: &str) -> Vec<Instruction> {
    let parsed = parse(source, Dialect::Palette.vocabulary()).unwrap();
    link(parsed).unwrap().0
}

/// Follow a chain of still jumps until a branch repeats. Panics if the
/// chain reaches an action that moves or exits.
fn assert_spins(instructions: &[Instruction], line: usize, slot: Slot, source: &str) {
    let mut seen = HashSet::new();
    let mut color = slot.color();
    let mut action = *instructions[line].action(slot);
    loop {
        let to = match action.target {
            Target::Jump(to) if action.is_still() => to,
            _ => panic!("line {} {:?} ends in {}\n{}", line + 1, slot, action, source),
        };
        color = action.write.unwrap_or(color);
        if !seen.insert((color, to)) {
            return;
        }
        action = *instructions[to].action(Slot::of(color));
    }
}

#[test]
fn test_folded_still_jumps_only_spin() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..500 {
        let source = program(&mut rng, true);
        let folded = fold(collapse(linked(&source)), Strictness::Permissive).unwrap();
        for (line, instruction) in folded.iter().enumerate() {
            if instruction.kind == Kind::Nothing {
                continue;
            }
            for slot in Slot::BOTH.iter() {
                let action = instruction.action(*slot);
                if action.is_still() && !action.target.is_exit() {
                    assert_spins(&folded, line, *slot, &source);
                }
            }
        }
    }
}

#[test]
fn test_collapse_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..200 {
        let source = program(&mut rng, true);
        let once = collapse(linked(&source));
        assert_eq!(collapse(once.clone()), once, "{}", source);
    }
}

#[test]
fn test_collapse_without_blanks_changes_nothing() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..200 {
        let source = program(&mut rng, false);
        let instructions = linked(&source);
        assert_eq!(collapse(instructions.clone()), instructions, "{}", source);
    }
}
