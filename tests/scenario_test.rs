mod common;
use common::*;
use tmlx::lang::Strictness;
use tmlx::mach::{Canvas, Options, Program, EDGE_EXIT_STATUS};

#[test]
fn test_repeat_walks_to_the_edge() {
    let out = exec(compile("right repeat"), Canvas::new(4, 1).unwrap());
    assert_eq!(out.exit, Some(EDGE_EXIT_STATUS));
    assert_eq!(out.executed, 4);
}

#[test]
fn test_exit() {
    let program = compile("exit 3");
    assert_eq!(program.instruction_count(), 1);
    let out = exec(program, Canvas::new(1, 1).unwrap());
    assert_eq!(out.exit, Some(3));
    assert_eq!(out.executed, 1);
}

#[test]
fn test_while_paints_until_color() {
    let program = compile("while white write black right\nexit 1");
    let out = exec(program, canvas("..#"));
    assert_eq!(out.exit, Some(1));
    assert_eq!(out.canvas.to_string(), "###\n");
    assert_eq!(out.executed, 3);
}

#[test]
fn test_if_else() {
    let source = "if color write red exit 5 else write green exit 6";
    let out = exec(compile(source), canvas("#"));
    assert_eq!((out.exit, out.canvas.to_string()), (Some(5), "r\n".to_string()));
    let out = exec(compile(source), canvas("."));
    assert_eq!((out.exit, out.canvas.to_string()), (Some(6), "g\n".to_string()));
}

#[test]
fn test_if_without_else_falls_through() {
    let out = exec(compile("if white write blue\nexit 9"), canvas("y"));
    assert_eq!(out.exit, Some(9));
    assert_eq!(out.canvas.to_string(), "y\n");
}

#[test]
fn test_jump_over_blank_lines() {
    let source = "goto b\nb:\n\nexit 4";
    let out = exec(compile(source), Canvas::new(1, 1).unwrap());
    assert_eq!((out.exit, out.executed), (Some(4), 1));
    let (program, count) = tmlx::mach::compile(source, false).unwrap();
    assert_eq!(count, 2);
    let out = exec(program, Canvas::new(1, 1).unwrap());
    assert_eq!((out.exit, out.executed), (Some(4), 2));
}

#[test]
fn test_only_labels_exits_at_once() {
    let program = compile("a:\n\nb:");
    assert_eq!(program.instruction_count(), 0);
    let out = exec(program, Canvas::new(2, 2).unwrap());
    assert_eq!(out.exit, Some(0));
    assert_eq!(out.executed, 0);
}

#[test]
fn test_comments() {
    let program = compile("/* setup\nstill a comment */ exit 7 // done");
    assert_eq!(program.instruction_count(), 1);
    let out = exec(program, Canvas::new(1, 1).unwrap());
    assert_eq!((out.exit, out.executed), (Some(7), 1));
}

#[test]
fn test_vertical_tab_joins_lines() {
    let out = exec(compile("write black\u{b}right"), Canvas::new(2, 1).unwrap());
    assert_eq!(out.exit, Some(0));
    assert_eq!(out.canvas.to_string(), "#.\n");
    assert_eq!(out.executed, 1);
}

#[test]
fn test_still_loop_spins() {
    let out = exec_n(compile("a: goto b\nb: goto a"), Canvas::new(1, 1).unwrap(), 10_000);
    assert_eq!(out.exit, None);
    assert_eq!(out.executed, 10_000);
}

#[test]
fn test_still_loop_strict() {
    let options = Options {
        strictness: Some(Strictness::Strict),
        ..Options::default()
    };
    assert_eq!(
        error_with("a: goto b\nb: goto a", &options),
        "Line 1: found infinite loop without moving"
    );
}

#[test]
fn test_painting_loop_ends() {
    // Second pass sees the pixel it painted and leaves.
    let out = exec(compile("a: if white write red goto a else exit 8"), canvas("."));
    assert_eq!(out.exit, Some(8));
    assert_eq!(out.canvas.to_string(), "r\n");
    assert_eq!(out.executed, 1);
}

#[test]
fn test_compile_is_deterministic() {
    let source = "start: if white write black up goto start\nwhile color right\nexit 1";
    let (a, count) = tmlx::mach::compile(source, true).unwrap();
    let b = Program::compile(source, &Options::default()).unwrap();
    assert_eq!(a, b);
    assert_eq!(count, 3);
}
