use super::*;
use token::Token;

fn words(line: &str) -> Vec<String> {
    let (tokens, comment) = lex(0, line, BlockComment::Closed);
    assert_eq!(comment, BlockComment::Closed);
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_colon_is_its_own_token() {
    assert_eq!(words("start:right"), vec!["start", ":", "right"]);
    assert_eq!(words("a :: b"), vec!["a", ":", ":", "b"]);
}

#[test]
fn test_whitespace() {
    assert_eq!(words("  write\tblack   up  "), vec!["write", "black", "up"]);
    assert_eq!(words("exit 1\r"), vec!["exit", "1"]);
    assert!(words("").is_empty());
}

#[test]
fn test_line_comment() {
    assert_eq!(words("right // goto nowhere"), vec!["right"]);
    assert_eq!(words("right//left"), vec!["right"]);
    assert_eq!(words("a/b"), vec!["a/b"]);
}

#[test]
fn test_line_comment_ends_at_vertical_tab() {
    assert_eq!(words("right // x\u{b}exit"), vec!["right", "exit"]);
    assert_eq!(words("wri\u{b}te"), vec!["wri", "te"]);
}

#[test]
fn test_block_comment_within_line() {
    assert_eq!(words("write /* red */ black"), vec!["write", "black"]);
    assert_eq!(words("wr/* x */ite"), vec!["wr", "ite"]);
    assert_eq!(words("up/**/"), vec!["up"]);
}

#[test]
fn test_block_comment_across_lines() {
    let (tokens, comment) = lex(3, "right /* start", BlockComment::Closed);
    assert_eq!(tokens, vec![Token::from("right")]);
    assert_eq!(comment, BlockComment::Open(3));
    let (tokens, comment) = lex(4, "// still /* inside", comment);
    assert!(tokens.is_empty());
    assert_eq!(comment, BlockComment::Open(3));
    let (tokens, comment) = lex(5, "end */ exit", comment);
    assert_eq!(tokens, vec![Token::from("exit")]);
    assert_eq!(comment, BlockComment::Closed);
}
