use cursor::{Col, Cursor};

pub mod token;
pub use token::{Token, TokenData, TokenKind};
use TokenData::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("Unexpected character '{0}' at column {1}")]
    UnexpectedCharacter(char, Col),
    #[error("Malformed number at column {0}")]
    MalformedNumeral(Col),
    #[error("Integer literal at column {0} does not fit in 64 bits")]
    IntegerOutOfRange(Col),
}

impl LexError {
    pub fn col(&self) -> Col {
        match self {
            LexError::UnexpectedCharacter(_, col)
            | LexError::MalformedNumeral(col)
            | LexError::IntegerOutOfRange(col) => *col,
        }
    }
}

/// Splits `source` into tokens. The last token is always `Eof`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).scan_tokens()
}

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), tokens: Vec::new() }
    }

    fn add_token(&mut self, data: TokenData, col: Col) {
        let token = Token::new(data, col);
        log::trace!("Scanned {}", token.describe());
        self.tokens.push(token);
    }

    pub fn scan_tokens(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            let start = self.cursor.clone();
            let Some(c) = self.cursor.next() else {
                break;
            };

            let data = match c {
                '+' => Plus,
                '-' => Minus,
                '*' => Star,
                '/' => Slash,
                '(' => LeftParen,
                ')' => RightParen,

                d if d.is_ascii_digit() => self.number(&start)?,

                c if c.is_whitespace() => continue,

                c => return Err(LexError::UnexpectedCharacter(c, start.col())),
            };
            self.add_token(data, start.col());
        }

        let end = self.cursor.col();
        self.add_token(Eof, end);
        Ok(self.tokens)
    }

    fn number(&mut self, start: &Cursor<'a>) -> Result<TokenData, LexError> {
        self.cursor.advance_while(|c| c.is_ascii_digit() || c == '.');

        let lexeme = start.slice_until(&self.cursor);
        match lexeme.matches('.').count() {
            0 => lexeme
                .parse()
                .map(Integer)
                .map_err(|_| LexError::IntegerOutOfRange(start.col())),
            1 => lexeme
                .parse()
                .map(Float)
                .map_err(|_| LexError::MalformedNumeral(start.col())),
            _ => Err(LexError::MalformedNumeral(start.col())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn data(source: &str) -> Vec<TokenData> {
        tokenize(source).unwrap().into_iter().map(|t| t.data).collect()
    }

    #[test]
    fn single_char_tokens() {
        assert_eq!(
            tokenize("+-*/()").unwrap(),
            vec![
                Token::new(Plus, Col(1)),
                Token::new(Minus, Col(2)),
                Token::new(Star, Col(3)),
                Token::new(Slash, Col(4)),
                Token::new(LeftParen, Col(5)),
                Token::new(RightParen, Col(6)),
                Token::new(Eof, Col(7)),
            ]
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(data("42"), vec![Integer(42), Eof]);
        assert_eq!(data("3.25"), vec![Float(3.25), Eof]);
        assert_eq!(data("007"), vec![Integer(7), Eof]);
        assert_eq!(data("1."), vec![Float(1.0), Eof]);
        assert_eq!(data("12+0.5"), vec![Integer(12), Plus, Float(0.5), Eof]);
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(
            tokenize(" 1 +\t2\n").unwrap(),
            vec![
                Token::new(Integer(1), Col(2)),
                Token::new(Plus, Col(4)),
                Token::new(Integer(2), Col(6)),
                Token::new(Eof, Col(8)),
            ]
        );
        assert_eq!(data(""), vec![Eof]);
        assert_eq!(data("   "), vec![Eof]);
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(tokenize("a+1"), Err(LexError::UnexpectedCharacter('a', Col(1))));
        assert_eq!(tokenize("1 ^ 2"), Err(LexError::UnexpectedCharacter('^', Col(3))));
        assert_eq!(tokenize(".5"), Err(LexError::UnexpectedCharacter('.', Col(1))));
        assert_eq!(tokenize("1+é"), Err(LexError::UnexpectedCharacter('é', Col(3))));
    }

    #[test]
    fn malformed_numbers() {
        assert_eq!(tokenize("1.2.3"), Err(LexError::MalformedNumeral(Col(1))));
        assert_eq!(tokenize("2 * 1..5"), Err(LexError::MalformedNumeral(Col(5))));
        assert_eq!(
            tokenize("99999999999999999999"),
            Err(LexError::IntegerOutOfRange(Col(1)))
        );
        assert_eq!(data("9223372036854775807"), vec![Integer(i64::MAX), Eof]);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            LexError::UnexpectedCharacter('x', Col(4)).to_string(),
            "Unexpected character 'x' at column 4"
        );
        assert_eq!(LexError::MalformedNumeral(Col(1)).to_string(), "Malformed number at column 1");
    }

    #[test]
    fn describe_tokens() {
        let described: Vec<String> =
            tokenize("(1 + 2.5)").unwrap().iter().map(Token::describe).collect();
        assert_eq!(
            described,
            vec!["LeftParen", "Integer:1", "Plus", "Float:2.5", "RightParen", "Eof"]
        );
        assert_eq!(Token::new(Eof, Col(1)).to_string(), "end of input");
        assert_eq!(Token::new(Float(2.0), Col(1)).to_string(), "'2.0'");
    }
}
