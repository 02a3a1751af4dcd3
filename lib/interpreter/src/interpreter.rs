use cursor::Col;
use parser::{BinaryOperator, Expr, ParseError, UnaryOperator};
use scanner::LexError;

mod value;
pub use value::Value;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Tried to divide by zero")]
    DivisionByZero,
    #[error("Integer overflow")]
    IntegerOverflow,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// Column the error points at. Evaluation errors belong to the whole expression.
    pub fn col(&self) -> Option<Col> {
        match self {
            CalcError::Lex(e) => Some(e.col()),
            CalcError::Parse(e) => Some(e.col()),
            CalcError::Eval(_) => None,
        }
    }
}

/// Tokenizes, parses and evaluates `expression`.
pub fn calc(expression: &str) -> Result<Value, CalcError> {
    let tokens = scanner::tokenize(expression)?;
    let expr = parser::parse(tokens)?;
    Ok(evaluate(&expr)?)
}

pub fn evaluate(expr: &Expr) -> Result<Value, EvalError> {
    match expr {
        Expr::Literal(literal) => Ok((*literal).into()),

        Expr::Unary { operator, right } => {
            let right = evaluate(right)?;
            match operator {
                UnaryOperator::Plus => Ok(right),
                UnaryOperator::Minus => right.checked_neg(),
            }
        }

        Expr::Binary { left, operator, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            let result = match operator {
                BinaryOperator::Add => left.checked_add(right),
                BinaryOperator::Subtract => left.checked_sub(right),
                BinaryOperator::Multiply => left.checked_mul(right),
                BinaryOperator::Divide => left.checked_div(right),
            };
            log::trace!("{} {} {} => {:?}", left, operator, right, result);
            result
        }
    }
}
