mod common;
use common::*;
use tmlx::lang::{Dialect, Strictness};
use tmlx::mach::{Canvas, Options};

fn binary(optimize: bool) -> Options {
    Options {
        dialect: Dialect::Binary,
        optimize,
        strictness: None,
    }
}

#[test]
fn test_scan_east() {
    let source = "a: if white move E goto a\nexit 1";
    let out = exec(compile_with(source, &binary(true)), canvas("..#."));
    assert_eq!(out.exit, Some(1));
    assert_eq!(out.canvas.to_string(), "..#.\n");
    assert_eq!(out.executed, 3);
    let out = exec(compile_with(source, &binary(false)), canvas("..#."));
    assert_eq!(out.exit, Some(1));
    assert_eq!(out.executed, 4);
}

#[test]
fn test_numbers_are_colors() {
    let out = exec(
        compile_with("move N\nwrite 1", &binary(true)),
        Canvas::new(1, 2).unwrap(),
    );
    assert_eq!(out.exit, Some(0));
    assert_eq!(out.canvas.to_string(), "#\n.\n");
}

#[test]
fn test_write_then_loop_back_ends() {
    let out = exec(
        compile_with("a: if white write 1 goto a\nexit 5", &binary(true)),
        canvas("."),
    );
    assert_eq!(out.exit, Some(5));
    assert_eq!(out.canvas.to_string(), "#\n");
    assert_eq!(out.executed, 1);
}

#[test]
fn test_still_loop_is_rejected() {
    assert_eq!(
        binary_error("a: goto a"),
        "Line 1: found infinite loop without moving"
    );
    let options = Options {
        strictness: Some(Strictness::Permissive),
        ..binary(true)
    };
    let out = exec_n(compile_with("a: goto a", &options), canvas("."), 500);
    assert_eq!(out.exit, None);
}

#[test]
fn test_palette_words_are_rejected() {
    assert_eq!(binary_error("move"), "Line 1: direction is missing");
    assert_eq!(
        binary_error("move up"),
        "Line 1, word 2: 'up' is not a valid direction"
    );
    assert_eq!(
        binary_error("while white move E"),
        "Line 1, word 1: 'while' is not a valid instruction"
    );
}
