///
/// Print items
///
/// `Item` pairs a value with the tag it is printed under, so a print call
/// is an ordered slice of items and a tag can never disagree with its
/// argument.
///

use std::io::{self, Write};

use minipy_std_core::{RuntimeError, Value};

use crate::config::IoConfig;
use crate::tag::Tag;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item<'a> {
    Int(i64),
    Float(f64),
    Char(u8),
    Bool(bool),
    Str(&'a str),
}

impl Item<'_> {
    pub fn tag(&self) -> Tag {
        match self {
            Item::Int(_) => Tag::Int,
            Item::Float(_) => Tag::Float,
            Item::Char(_) => Tag::Char,
            Item::Bool(_) => Tag::Bool,
            Item::Str(_) => Tag::Str,
        }
    }

    /// Print a stored value under `tag`. The value must hold that variant.
    pub fn from_value(tag: Tag, value: &Value) -> Result<Item<'static>, RuntimeError> {
        match tag {
            Tag::Int => value.expect_int().map(Item::Int),
            Tag::Float => value.expect_float().map(Item::Float),
            Tag::Char => value.expect_char().map(Item::Char),
            Tag::Bool => value.expect_bool().map(Item::Bool),
            Tag::Str => Err(RuntimeError::TypeMismatch {
                expected: Tag::Str.name(),
                found: value.type_name(),
            }),
        }
    }

    /// Same as `from_value` for callers holding the raw tag character
    pub fn from_tagged(tag: char, value: &Value) -> Result<Item<'static>, RuntimeError> {
        Item::from_value(Tag::from_char(tag)?, value)
    }

    pub fn write_to<W: Write>(&self, out: &mut W, config: &IoConfig) -> io::Result<()> {
        match self {
            Item::Int(v) => write!(out, "{}", v),
            // printf spells NaN in lowercase; infinities already match.
            Item::Float(v) if v.is_nan() => out.write_all(b"nan"),
            Item::Float(v) => write!(out, "{:.*}", config.float_precision, v),
            Item::Char(c) => out.write_all(&[*c]),
            Item::Bool(v) => out.write_all(if *v { b"true" } else { b"false" }),
            Item::Str(s) => out.write_all(s.as_bytes()),
        }
    }
}
