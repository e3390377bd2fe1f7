use super::LineIndex;

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    line: Option<LineIndex>,
    word: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$word:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .in_word($word)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: None,
            word: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Zero based line the error was found on.
    pub fn line(&self) -> Option<LineIndex> {
        self.line
    }

    /// Zero based token position within the line.
    pub fn word(&self) -> Option<usize> {
        self.word
    }

    pub fn in_line(self, line: LineIndex) -> Error {
        debug_assert!(self.line.is_none());
        Error {
            line: Some(line),
            ..self
        }
    }

    pub fn in_word(self, word: usize) -> Error {
        debug_assert!(self.word.is_none());
        Error {
            word: Some(word),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    UndefinedLabel,
    UnterminatedComment,
    InfiniteLoop,
    InvalidCanvas,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        match self {
            SyntaxError => write!(f, "syntax error"),
            UndefinedLabel => write!(f, "undefined label"),
            UnterminatedComment => write!(f, "unterminated comment"),
            InfiniteLoop => write!(f, "infinite loop"),
            InvalidCanvas => write!(f, "invalid canvas"),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {:?}: {} }}", self.code, self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let message: &str = if self.message.is_empty() {
            match self.code {
                ErrorCode::SyntaxError => "syntax error",
                ErrorCode::UndefinedLabel => "undefined label",
                ErrorCode::UnterminatedComment => "block comment is not terminated",
                ErrorCode::InfiniteLoop => "found infinite loop without moving",
                ErrorCode::InvalidCanvas => "invalid canvas",
            }
        } else {
            &self.message
        };
        match (self.line, self.word) {
            (Some(line), Some(word)) => {
                write!(f, "Line {}, word {}: {}", line + 1, word + 1, message)
            }
            (Some(line), None) => write!(f, "Line {}: {}", line + 1, message),
            (None, _) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for Error {}
