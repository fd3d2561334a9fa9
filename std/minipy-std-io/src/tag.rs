///
/// Type tags
///
/// The one-character selector compiled code passes to `print` and `input`.
///

use minipy_std_core::RuntimeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Int,
    Float,
    Char,
    Bool,
    Str,
}

impl Tag {
    pub fn from_char(c: char) -> Result<Self, RuntimeError> {
        match c {
            'i' => Ok(Tag::Int),
            'f' => Ok(Tag::Float),
            'c' => Ok(Tag::Char),
            'b' => Ok(Tag::Bool),
            's' => Ok(Tag::Str),
            other => Err(RuntimeError::UnknownTag(other)),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Tag::Int => 'i',
            Tag::Float => 'f',
            Tag::Char => 'c',
            Tag::Bool => 'b',
            Tag::Str => 's',
        }
    }

    /// Type name shown in input prompts
    pub fn name(self) -> &'static str {
        match self {
            Tag::Int => "int",
            Tag::Float => "float",
            Tag::Char => "char",
            Tag::Bool => "bool",
            Tag::Str => "str",
        }
    }

    /// Strings can be printed but never read
    pub fn is_readable(self) -> bool {
        !matches!(self, Tag::Str)
    }
}

impl TryFrom<char> for Tag {
    type Error = RuntimeError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Tag::from_char(c)
    }
}
