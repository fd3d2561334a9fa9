//!
//! Runtime Value Representation
//!
//! A minipy value is one of a fixed set of scalars, or a flat list of them.
//! Every slot carries its own variant, so reading a slot as the wrong type
//! is reported as `RuntimeError::TypeMismatch` rather than reinterpreting
//! the bits.
//!

use std::fmt;

use crate::error::RuntimeError;
use crate::list::TaggedList;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    /// A single byte, as read from the terminal
    Char(u8),
    Bool(bool),
    None,
    List(TaggedList),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Bool(_) => "bool",
            Value::None => "none",
            Value::List(_) => "list",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<u8> {
        match self {
            Value::Char(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&TaggedList> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn expect_int(&self) -> Result<i64, RuntimeError> {
        self.as_int().ok_or_else(|| self.mismatch("int"))
    }

    pub fn expect_float(&self) -> Result<f64, RuntimeError> {
        self.as_float().ok_or_else(|| self.mismatch("float"))
    }

    pub fn expect_char(&self) -> Result<u8, RuntimeError> {
        self.as_char().ok_or_else(|| self.mismatch("char"))
    }

    pub fn expect_bool(&self) -> Result<bool, RuntimeError> {
        self.as_bool().ok_or_else(|| self.mismatch("bool"))
    }

    fn mismatch(&self, expected: &'static str) -> RuntimeError {
        RuntimeError::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<TaggedList> for Value {
    fn from(list: TaggedList) -> Self {
        Value::List(list)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Char(v) => write!(f, "{}", *v as char),
            Value::Bool(v) => write!(f, "{}", v),
            Value::None => write!(f, "none"),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variant() {
        assert_eq!(Value::Int(4).as_int(), Some(4));
        assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Value::Char(b'x').as_char(), Some(b'x'));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert!(Value::None.is_none());
        assert_eq!(Value::Int(4).as_float(), None);
    }

    #[test]
    fn test_expect_reports_mismatch() {
        let err = Value::Float(2.0).expect_int().unwrap_err();
        match err {
            RuntimeError::TypeMismatch { expected, found } => {
                assert_eq!(expected, "int");
                assert_eq!(found, "float");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!Value::Bool(false).expect_bool().unwrap());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(-8i64), Value::Int(-8));
        assert_eq!(Value::from(0.5f64), Value::Float(0.5));
        assert_eq!(Value::from(true), Value::Bool(true));

        let list = TaggedList::sealed(vec![Value::Int(1)]);
        let value: Value = list.clone().into();
        assert_eq!(value.as_list(), Some(&list));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Char(b'q').to_string(), "q");
        assert_eq!(Value::None.to_string(), "none");

        let list = TaggedList::sealed(vec![Value::Int(1), Value::Bool(true)]);
        assert_eq!(Value::List(list).to_string(), "[1, true]");
    }
}
