mod expr;
use std::{iter::Peekable, vec};

use cursor::Col;
pub use expr::{BinaryOperator, Expr, LiteralValue, UnaryOperator};
use scanner::{Token, TokenData};

use TokenData::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected {0} at column {1}")]
    UnexpectedToken(Token, Col),
    #[error("Missing closing ')' for '(' at column {0}")]
    UnclosedParen(Col),
    #[error("Unexpected trailing input at column {0}")]
    TrailingTokens(Col),
}

impl ParseError {
    pub fn col(&self) -> Col {
        match self {
            ParseError::UnexpectedToken(_, col)
            | ParseError::UnclosedParen(col)
            | ParseError::TrailingTokens(col) => *col,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Builds the tree for a whole expression; every token up to `Eof` must be consumed.
pub fn parse(tokens: Vec<Token>) -> Result<Expr> {
    Parser::new(tokens).parse()
}

#[derive(Debug)]
pub struct Parser {
    tokens: Peekable<vec::IntoIter<Token>>,
    // Where end of input is reported when the tokens run out
    end: Col,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = match tokens.last() {
            Some(t) if t.is_eof() => t.col,
            Some(t) => t.col.next(),
            None => Col(1),
        };
        Self { tokens: tokens.into_iter().peekable(), end }
    }

    pub fn parse(mut self) -> Result<Expr> {
        let expr = self.expression()?;

        let next = self.advance();
        if next.is_eof() {
            log::debug!("Parsed {}", expr);
            Ok(expr)
        } else {
            Err(ParseError::TrailingTokens(next.col))
        }
    }

    // expression := term ( ( "+" | "-" ) term )*
    fn expression(&mut self) -> Result<Expr> {
        let mut expr = self.term()?;

        while let Some(operator) = additive_operator(self.peek()) {
            self.advance();
            let right = self.term()?;
            expr = Expr::binary(expr, operator, right);
        }
        Ok(expr)
    }

    // term := factor ( ( "*" | "/" ) factor )*
    fn term(&mut self) -> Result<Expr> {
        let mut expr = self.factor()?;

        while let Some(operator) = multiplicative_operator(self.peek()) {
            self.advance();
            let right = self.factor()?;
            expr = Expr::binary(expr, operator, right);
        }
        Ok(expr)
    }

    // factor := ( "+" | "-" ) factor | INTEGER | FLOAT | "(" expression ")"
    fn factor(&mut self) -> Result<Expr> {
        let token = self.advance();
        log::trace!("Parsing factor at {}: {}", token.col, token.describe());

        match &token.data {
            Plus => Ok(Expr::unary(UnaryOperator::Plus, self.factor()?)),
            Minus => Ok(Expr::unary(UnaryOperator::Minus, self.factor()?)),
            Integer(n) => Ok(Expr::Literal(LiteralValue::Integer(*n))),
            Float(n) => Ok(Expr::Literal(LiteralValue::Float(*n))),
            LeftParen => {
                let expr = self.expression()?;
                self.consume_or_error(RightParen, ParseError::UnclosedParen(token.col))?;
                Ok(expr)
            }
            _ => Err(ParseError::UnexpectedToken(token.clone(), token.col)),
        }
    }

    fn consume_or_error(&mut self, expected: TokenData, error: ParseError) -> Result<Token> {
        if *self.peek() == expected {
            Ok(self.advance())
        } else {
            Err(error)
        }
    }
}

// Helpers
impl Parser {
    fn peek(&mut self) -> &TokenData {
        self.tokens.peek().map_or(&Eof, |t| &t.data)
    }

    fn advance(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(|| Token::new(Eof, self.end))
    }
}

fn additive_operator(data: &TokenData) -> Option<BinaryOperator> {
    match data {
        Plus => Some(BinaryOperator::Add),
        Minus => Some(BinaryOperator::Subtract),
        _ => None,
    }
}

fn multiplicative_operator(data: &TokenData) -> Option<BinaryOperator> {
    match data {
        Star => Some(BinaryOperator::Multiply),
        Slash => Some(BinaryOperator::Divide),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scanner::tokenize;

    use super::*;

    fn parse_source(source: &str) -> Result<Expr> {
        parse(tokenize(source).unwrap())
    }

    fn prefix(source: &str) -> String {
        parse_source(source).unwrap().to_string()
    }

    #[test]
    fn precedence() {
        assert_eq!(prefix("1+2*3"), "(+ 1 (* 2 3))");
        assert_eq!(prefix("(1+2)*3"), "(* (+ 1 2) 3)");
        assert_eq!(prefix("1*2+3/4"), "(+ (* 1 2) (/ 3 4))");
        assert_eq!(prefix("((7))"), "7");
    }

    #[test]
    fn left_associativity() {
        assert_eq!(prefix("1-2-3"), "(- (- 1 2) 3)");
        assert_eq!(prefix("8/4/2"), "(/ (/ 8 4) 2)");
        assert_eq!(prefix("1-2+3"), "(+ (- 1 2) 3)");
    }

    #[test]
    fn unary_operators() {
        assert_eq!(
            parse_source("--5").unwrap(),
            Expr::unary(
                UnaryOperator::Minus,
                Expr::unary(UnaryOperator::Minus, Expr::Literal(LiteralValue::Integer(5)))
            )
        );
        assert_eq!(prefix("-2.5*+3"), "(* (- 2.5) (+ 3))");
        assert_eq!(prefix("2--3"), "(- 2 (- 3))");
        assert_eq!(prefix("-(1+2)"), "(- (+ 1 2))");
    }

    #[test]
    fn literals() {
        assert_eq!(parse_source("42").unwrap(), Expr::Literal(LiteralValue::Integer(42)));
        assert_eq!(parse_source("2.0").unwrap(), Expr::Literal(LiteralValue::Float(2.0)));
        assert_eq!(prefix("2.0"), "2.0");
    }

    #[test]
    fn unexpected_token() {
        assert_eq!(
            parse_source("1+"),
            Err(ParseError::UnexpectedToken(Token::new(Eof, Col(3)), Col(3)))
        );
        assert_eq!(
            parse_source("*2"),
            Err(ParseError::UnexpectedToken(Token::new(Star, Col(1)), Col(1)))
        );
        assert_eq!(
            parse_source("()"),
            Err(ParseError::UnexpectedToken(Token::new(RightParen, Col(2)), Col(2)))
        );
        assert_eq!(
            parse_source(""),
            Err(ParseError::UnexpectedToken(Token::new(Eof, Col(1)), Col(1)))
        );
    }

    #[test]
    fn unclosed_paren() {
        assert_eq!(parse_source("(1+2"), Err(ParseError::UnclosedParen(Col(1))));
        assert_eq!(parse_source("2*((1+2)"), Err(ParseError::UnclosedParen(Col(3))));
        assert_eq!(parse_source("(1 2)"), Err(ParseError::UnclosedParen(Col(1))));
    }

    #[test]
    fn trailing_tokens() {
        assert_eq!(parse_source("1+2)"), Err(ParseError::TrailingTokens(Col(4))));
        assert_eq!(parse_source("1 2"), Err(ParseError::TrailingTokens(Col(3))));
        assert_eq!(parse_source("(1)(2)"), Err(ParseError::TrailingTokens(Col(4))));
    }

    #[test]
    fn tokens_without_eof() {
        let tokens = vec![
            Token::new(Integer(1), Col(1)),
            Token::new(Plus, Col(2)),
            Token::new(Integer(2), Col(3)),
        ];
        assert_eq!(parse(tokens).unwrap().to_string(), "(+ 1 2)");

        let tokens = vec![Token::new(Integer(1), Col(1)), Token::new(Minus, Col(2))];
        assert_eq!(
            parse(tokens),
            Err(ParseError::UnexpectedToken(Token::new(Eof, Col(3)), Col(3)))
        );

        assert_eq!(
            parse(Vec::new()),
            Err(ParseError::UnexpectedToken(Token::new(Eof, Col(1)), Col(1)))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            parse_source("1+").unwrap_err().to_string(),
            "Unexpected end of input at column 3"
        );
        assert_eq!(
            parse_source("(1").unwrap_err().to_string(),
            "Missing closing ')' for '(' at column 1"
        );
        assert_eq!(
            parse_source("1)").unwrap_err().to_string(),
            "Unexpected trailing input at column 2"
        );
    }
}
