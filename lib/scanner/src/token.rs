use std::fmt::Display;

use cursor::Col;
use strum::EnumDiscriminants;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub data: TokenData,
    pub col: Col,
}

impl Token {
    pub fn new(data: TokenData, col: Col) -> Token {
        Self { data, col }
    }

    pub fn kind(&self) -> TokenKind {
        (&self.data).into()
    }

    pub fn col(&self) -> Col {
        self.col
    }

    pub fn is_eof(&self) -> bool {
        self.data == TokenData::Eof
    }

    /// Debug rendering of the token: its kind, plus the payload for numbers (`Integer:3`).
    pub fn describe(&self) -> String {
        match self.data {
            TokenData::Integer(n) => format!("{}:{}", self.kind(), n),
            TokenData::Float(n) => format!("{}:{:?}", self.kind(), n),
            _ => self.kind().to_string(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data)
    }
}

#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(TokenKind), derive(strum::Display, Hash))]
pub enum TokenData {
    // Single-character tokens.
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,

    // Literals.
    Integer(i64),
    Float(f64),

    Eof,
}

impl Display for TokenData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenData::Plus => write!(f, "'+'"),
            TokenData::Minus => write!(f, "'-'"),
            TokenData::Star => write!(f, "'*'"),
            TokenData::Slash => write!(f, "'/'"),
            TokenData::LeftParen => write!(f, "'('"),
            TokenData::RightParen => write!(f, "')'"),
            TokenData::Integer(n) => write!(f, "'{n}'"),
            TokenData::Float(n) => write!(f, "'{n:?}'"),
            TokenData::Eof => write!(f, "end of input"),
        }
    }
}
