use std::fmt::{self, Display, Formatter};

use parser::LiteralValue;

use crate::EvalError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Integer(n) => n as f64,
            Value::Float(n) => n,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_zero(self) -> bool {
        match self {
            Value::Integer(n) => n == 0,
            Value::Float(n) => n == 0.0,
        }
    }

    pub fn checked_neg(self) -> Result<Value, EvalError> {
        match self {
            Value::Integer(n) => {
                n.checked_neg().map(Value::Integer).ok_or(EvalError::IntegerOverflow)
            }
            Value::Float(n) => Ok(Value::Float(-n)),
        }
    }

    pub fn checked_add(self, rhs: Value) -> Result<Value, EvalError> {
        self.arithmetic(rhs, i64::checked_add, |l, r| l + r)
    }

    pub fn checked_sub(self, rhs: Value) -> Result<Value, EvalError> {
        self.arithmetic(rhs, i64::checked_sub, |l, r| l - r)
    }

    pub fn checked_mul(self, rhs: Value) -> Result<Value, EvalError> {
        self.arithmetic(rhs, i64::checked_mul, |l, r| l * r)
    }

    /// Always a float, even for two integers.
    pub fn checked_div(self, rhs: Value) -> Result<Value, EvalError> {
        if rhs.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        Ok(Value::Float(self.as_f64() / rhs.as_f64()))
    }

    // Integers stay integers, anything involving a float is promoted
    fn arithmetic(
        self,
        rhs: Value,
        integer_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Integer(l), Value::Integer(r)) => {
                integer_op(l, r).map(Value::Integer).ok_or(EvalError::IntegerOverflow)
            }
            (l, r) => Ok(Value::Float(float_op(l.as_f64(), r.as_f64()))),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{:?}", n),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Value::Integer(n),
            LiteralValue::Float(n) => Value::Float(n),
        }
    }
}
