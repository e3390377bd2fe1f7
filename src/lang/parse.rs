use super::{ast::*, token::*, BlockComment, Color, Dialect, Error, ExitStatus, LineIndex, Vocabulary};
use super::lex::lex;
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// Parser output: one instruction per source line, targets unlinked.
#[derive(Debug, Default, Clone)]
pub struct Parsed {
    pub instructions: Vec<Instruction<Goto>>,
    pub labels: BTreeMap<String, LineIndex>,
    /// Lines that are not `Kind::Nothing`.
    pub instruction_count: usize,
    pub dialect: Dialect,
}

pub fn parse(source: &str, vocabulary: &Vocabulary) -> Result<Parsed> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut parsed = Parsed {
        dialect: vocabulary.dialect(),
        ..Parsed::default()
    };
    let mut comment = BlockComment::Closed;
    for (line, text) in lines.iter().enumerate() {
        let (tokens, next) = lex(line, text, comment);
        comment = next;
        let mut parser = Parser {
            vocabulary,
            tokens: &tokens,
            index: 0,
            line,
            line_count: lines.len(),
        };
        let instruction = parser.instruction(&mut parsed.labels)?;
        if instruction.kind != Kind::Nothing {
            parsed.instruction_count += 1;
        }
        parsed.instructions.push(instruction);
    }
    if let BlockComment::Open(line) = comment {
        return Err(error!(UnterminatedComment, line; "block comment is not terminated"));
    }
    Ok(parsed)
}

struct Parser<'a> {
    vocabulary: &'a Vocabulary,
    tokens: &'a [Token],
    index: usize,
    line: LineIndex,
    line_count: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.index).map(|t| t.as_str())
    }

    fn at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    fn next_line(&self) -> Goto {
        if self.line + 1 < self.line_count {
            Goto::Line(self.line + 1)
        } else {
            Goto::Exit(0)
        }
    }

    fn instruction(&mut self, labels: &mut BTreeMap<String, LineIndex>) -> Result<Instruction<Goto>> {
        if self.tokens.is_empty() && !self.vocabulary.allows_placeholders() {
            return Err(error!(SyntaxError, self.line;
                "found empty line, use shift enter if an empty line was intended"));
        }
        let tokens = self.tokens;
        if let Some(Token::Colon) = tokens.first() {
            return Err(error!(SyntaxError, self.line; "label is missing before colon"));
        }
        if let (Some(Token::Word(name)), Some(Token::Colon)) = (tokens.first(), tokens.get(1)) {
            self.declare(name, labels)?;
        }
        let start = self.index;
        let instruction = match self.peek() {
            Some("if") => self.conditional(false)?,
            Some("while") if self.vocabulary.has_loops() => self.conditional(true)?,
            _ => {
                let action = self.action(self.next_line())?;
                let kind = if self.index == start {
                    Kind::Nothing
                } else {
                    Kind::Unconditional
                };
                Instruction {
                    white: action.clone(),
                    color: action,
                    kind,
                }
            }
        };
        if let Some(token) = self.tokens.get(self.index) {
            let complaint = if self.index == start {
                "is not a valid instruction"
            } else {
                "should be on the next line"
            };
            return Err(error!(SyntaxError, self.line, ..self.index;
                format!("'{}' {}", token, complaint)));
        }
        Ok(instruction)
    }

    fn declare(&mut self, name: &str, labels: &mut BTreeMap<String, LineIndex>) -> Result<()> {
        if self.vocabulary.is_reserved(name) {
            return Err(error!(SyntaxError, self.line, ..0;
                format!("'{}' is reserved from use as a label", name)));
        }
        if let Some(defined) = labels.get(name) {
            return Err(error!(SyntaxError, self.line, ..0;
                format!("label '{}' is already defined on line {}", name, defined + 1)));
        }
        labels.insert(name.to_string(), self.line);
        self.index = 2;
        if self.at_end() && !self.vocabulary.allows_placeholders() {
            return Err(error!(SyntaxError, self.line;
                "instruction is missing after label, use shift enter if a line break was intended"));
        }
        Ok(())
    }

    fn conditional(&mut self, looping: bool) -> Result<Instruction<Goto>> {
        let keyword = if looping { "while" } else { "if" };
        self.index += 1;
        let condition = self.condition()?;
        if self.at_end() {
            return Err(error!(SyntaxError, self.line; format!("'{}' action is missing", keyword)));
        }
        let start = self.index;
        let fallthrough = if looping {
            Goto::Line(self.line)
        } else {
            self.next_line()
        };
        let consequent = self.action(fallthrough)?;
        if self.index == start {
            return Err(self.found_before(keyword));
        }
        let alternative = if self.peek() == Some("else") {
            self.index += 1;
            if self.at_end() {
                return Err(error!(SyntaxError, self.line; "'else' action is missing"));
            }
            let start = self.index;
            let alternative = self.action(self.next_line())?;
            if self.index == start {
                return Err(self.found_before("else"));
            }
            alternative
        } else {
            Action::new(self.next_line())
        };
        let (white, color) = if condition.is_white() {
            (consequent, alternative)
        } else {
            (alternative, consequent)
        };
        Ok(Instruction {
            white,
            color,
            kind: Kind::Conditional,
        })
    }

    fn found_before(&self, keyword: &str) -> Error {
        let found = self.peek().unwrap_or_default();
        error!(SyntaxError, self.line, ..self.index;
            format!("found '{}' before '{}' action", found, keyword))
    }

    fn condition(&mut self) -> Result<Color> {
        let noun = self.vocabulary.condition_noun();
        let word = match self.peek() {
            Some(word) => word,
            None => return Err(error!(SyntaxError, self.line; format!("{} is missing", noun))),
        };
        match self.vocabulary.condition(word) {
            Some(color) => {
                self.index += 1;
                Ok(color)
            }
            None => Err(error!(SyntaxError, self.line, ..self.index;
                format!("'{}' is not a valid {}", word, noun))),
        }
    }

    fn action(&mut self, fallthrough: Goto) -> Result<Action<Goto>> {
        let mut action = Action::new(fallthrough);
        if self.peek() == Some("write") {
            self.index += 1;
            action.write = Some(self.color()?);
        }
        match self.vocabulary.move_word() {
            Some(move_word) => {
                if self.peek() == Some(move_word) {
                    self.index += 1;
                    action.direction = self.direction()?;
                }
            }
            None => {
                if let Some(direction) = self.peek().and_then(|w| self.vocabulary.direction(w)) {
                    self.index += 1;
                    action.direction = direction;
                }
            }
        }
        match self.peek() {
            Some("repeat") => {
                self.index += 1;
                action.target = Goto::Line(self.line);
            }
            Some("goto") => {
                self.index += 1;
                action.target = Goto::Label(self.label()?);
            }
            Some("exit") => {
                self.index += 1;
                action.target = Goto::Exit(self.exit_status()?);
            }
            _ => {}
        }
        Ok(action)
    }

    fn color(&mut self) -> Result<Color> {
        let word = match self.peek() {
            Some(word) => word,
            None => return Err(error!(SyntaxError, self.line; "color is missing")),
        };
        match self.vocabulary.color(word) {
            Some(color) => {
                self.index += 1;
                Ok(color)
            }
            None => Err(error!(SyntaxError, self.line, ..self.index;
                format!("'{}' is not a valid color", word))),
        }
    }

    fn direction(&mut self) -> Result<Direction> {
        let word = match self.peek() {
            Some(word) => word,
            None => return Err(error!(SyntaxError, self.line; "direction is missing")),
        };
        match self.vocabulary.direction(word) {
            Some(direction) => {
                self.index += 1;
                Ok(direction)
            }
            None => Err(error!(SyntaxError, self.line, ..self.index;
                format!("'{}' is not a valid direction", word))),
        }
    }

    fn label(&mut self) -> Result<String> {
        let word = match self.peek() {
            Some(word) => word,
            None => return Err(error!(SyntaxError, self.line; "label is missing")),
        };
        if self.vocabulary.is_reserved(word) {
            return Err(error!(SyntaxError, self.line, ..self.index;
                format!("'{}' is reserved from use as a label", word)));
        }
        self.index += 1;
        Ok(word.to_string())
    }

    /// A missing or non-numeric status is `exit 0` and leaves the token.
    fn exit_status(&mut self) -> Result<ExitStatus> {
        let word = match self.peek() {
            Some(word) => word,
            None => return Ok(0),
        };
        match word.parse::<i32>() {
            Ok(status) if status >= 0 => {
                self.index += 1;
                Ok(status as ExitStatus)
            }
            Ok(_) => Err(error!(SyntaxError, self.line, ..self.index;
                format!("'{}' is not a valid exit status", word))),
            Err(_) => Ok(0),
        }
    }
}
