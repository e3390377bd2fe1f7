use super::{token::*, LineIndex};

/// Block comment state carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockComment {
    Closed,
    /// Opened on this line and not yet closed.
    Open(LineIndex),
}

impl Default for BlockComment {
    fn default() -> BlockComment {
        BlockComment::Closed
    }
}

/// Split one source line into tokens. A vertical tab joins sub-lines
/// that an editor folded into one line; a `//` comment and a word both
/// end at the end of a sub-line.
pub fn lex(line_index: LineIndex, line: &str, comment: BlockComment) -> (Vec<Token>, BlockComment) {
    let mut lexer = Lexer {
        tokens: vec![],
        word: String::new(),
        comment,
    };
    for sub_line in line.split('\u{b}') {
        lexer.sub_line(line_index, sub_line);
        lexer.flush();
    }
    (lexer.tokens, lexer.comment)
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

struct Lexer {
    tokens: Vec<Token>,
    word: String,
    comment: BlockComment,
}

impl Lexer {
    fn sub_line(&mut self, line_index: LineIndex, s: &str) {
        let mut chars = s.chars().peekable();
        while let Some(ch) = chars.next() {
            let pk = chars.peek().copied();
            match self.comment {
                BlockComment::Open(_) => {
                    if ch == '*' && pk == Some('/') {
                        chars.next();
                        self.flush();
                        self.comment = BlockComment::Closed;
                    }
                }
                BlockComment::Closed => {
                    if ch == '/' && pk == Some('/') {
                        break;
                    }
                    if ch == '/' && pk == Some('*') {
                        chars.next();
                        self.comment = BlockComment::Open(line_index);
                    } else if ch == ':' {
                        self.flush();
                        self.tokens.push(Token::Colon);
                    } else if is_whitespace(ch) {
                        self.flush();
                    } else {
                        self.word.push(ch);
                    }
                }
            }
        }
    }

    fn flush(&mut self) {
        if !self.word.is_empty() {
            self.tokens.push(Token::Word(std::mem::take(&mut self.word)));
        }
    }
}
