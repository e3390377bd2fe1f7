mod common;
use common::*;
use tmlx::lang::ErrorCode;
use tmlx::mach::{Options, Program};

#[test]
fn test_label_errors() {
    assert_eq!(error(": right"), "Line 1: label is missing before colon");
    assert_eq!(
        error("right\nleft: up"),
        "Line 2, word 1: 'left' is reserved from use as a label"
    );
    assert_eq!(
        error("a: up\na: down"),
        "Line 2, word 1: label 'a' is already defined on line 1"
    );
    assert_eq!(error("goto"), "Line 1: label is missing");
    assert_eq!(
        error("up goto red"),
        "Line 1, word 3: 'red' is reserved from use as a label"
    );
    assert_eq!(error("goto nowhere_else"), "Line 1: label 'nowhere_else' is not defined");
}

#[test]
fn test_condition_errors() {
    assert_eq!(error("if"), "Line 1: condition is missing");
    assert_eq!(
        error("if red up"),
        "Line 1, word 2: 'red' is not a valid condition"
    );
    assert_eq!(error("if white"), "Line 1: 'if' action is missing");
    assert_eq!(error("while color"), "Line 1: 'while' action is missing");
    assert_eq!(
        error("if white else up"),
        "Line 1, word 3: found 'else' before 'if' action"
    );
    assert_eq!(
        error("while white if"),
        "Line 1, word 3: found 'if' before 'while' action"
    );
    assert_eq!(error("if white up else"), "Line 1: 'else' action is missing");
    assert_eq!(
        error("if white up else else"),
        "Line 1, word 5: found 'else' before 'else' action"
    );
}

#[test]
fn test_action_errors() {
    assert_eq!(error("write"), "Line 1: color is missing");
    assert_eq!(
        error("write color"),
        "Line 1, word 2: 'color' is not a valid color"
    );
    assert_eq!(error("write 7"), "Line 1, word 2: '7' is not a valid color");
    assert_eq!(
        error("exit -2"),
        "Line 1, word 2: '-2' is not a valid exit status"
    );
    assert_eq!(
        error("up down"),
        "Line 1, word 2: 'down' should be on the next line"
    );
    assert_eq!(
        error("paint"),
        "Line 1, word 1: 'paint' is not a valid instruction"
    );
    assert_eq!(
        error("if white up else down left"),
        "Line 1, word 6: 'left' should be on the next line"
    );
}

#[test]
fn test_binary_errors() {
    assert_eq!(
        binary_error("move E\n"),
        "Line 2: found empty line, use shift enter if an empty line was intended"
    );
    assert_eq!(
        binary_error("a:"),
        "Line 1: instruction is missing after label, use shift enter if a line break was intended"
    );
    assert_eq!(binary_error("if"), "Line 1: color is missing");
    assert_eq!(
        binary_error("if 2 move E"),
        "Line 1, word 2: '2' is not a valid color"
    );
    assert_eq!(
        binary_error("write red"),
        "Line 1, word 2: 'red' is not a valid color"
    );
    assert_eq!(
        binary_error("N: move E"),
        "Line 1, word 1: 'N' is reserved from use as a label"
    );
}

#[test]
fn test_unterminated_comment() {
    let e = Program::compile("up\n/* open\nright", &Options::default()).unwrap_err();
    assert_eq!(e.code(), ErrorCode::UnterminatedComment);
    assert_eq!(e.to_string(), "Line 2: block comment is not terminated");
}

#[test]
fn test_first_error_wins() {
    assert_eq!(
        error("goto missing\nwrite"),
        "Line 2: color is missing"
    );
    assert_eq!(
        error("goto missing\ngoto other"),
        "Line 1: label 'missing' is not defined"
    );
}
