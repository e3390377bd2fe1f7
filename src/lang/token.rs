#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Colon,
    Word(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Colon => ":",
            Token::Word(s) => s,
        }
    }

    pub fn is_colon(&self) -> bool {
        *self == Token::Colon
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Token {
        if s == ":" {
            Token::Colon
        } else {
            Token::Word(s.to_string())
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
