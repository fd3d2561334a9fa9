///
/// Token scanning
///
/// Reads whitespace-delimited tokens from a `BufRead` without consuming the
/// delimiter that ends a token, so a rejected token can be followed by
/// discarding exactly the rest of its line.
///

use std::io::{self, BufRead};

use minipy_std_core::Value;
use thiserror::Error;

use crate::tag::Tag;

/// A token that does not match the requested type. Always recoverable.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected {expected}, found end of input")]
    EndOfInput { expected: &'static str },

    #[error("expected {expected}, found {token:?}")]
    Malformed {
        expected: &'static str,
        token: String,
    },
}

pub struct Scanner<R> {
    reader: R,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Skip leading whitespace and return the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<Vec<u8>>> {
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(None);
            }
            let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            let exhausted = skip == buf.len();
            self.reader.consume(skip);
            if !exhausted {
                break;
            }
        }

        let mut token = Vec::new();
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let take = buf.iter().take_while(|b| !b.is_ascii_whitespace()).count();
            token.extend_from_slice(&buf[..take]);
            let ended = take < buf.len();
            self.reader.consume(take);
            if ended {
                break;
            }
        }
        Ok(Some(token))
    }

    /// Consume input through the next line terminator.
    /// Returns `false` if input ended before one was found.
    pub fn discard_line(&mut self) -> io::Result<bool> {
        let mut skipped = Vec::new();
        self.reader.read_until(b'\n', &mut skipped)?;
        Ok(skipped.last() == Some(&b'\n'))
    }
}

pub fn parse_token(tag: Tag, token: &[u8]) -> Result<Value, ParseError> {
    let malformed = || ParseError::Malformed {
        expected: tag.name(),
        token: String::from_utf8_lossy(token).into_owned(),
    };
    let text = std::str::from_utf8(token).map_err(|_| malformed());

    match tag {
        Tag::Int => text?.parse::<i64>().map(Value::Int).map_err(|_| malformed()),
        Tag::Float => text?.parse::<f64>().map(Value::Float).map_err(|_| malformed()),
        Tag::Char => match token {
            [c] => Ok(Value::Char(*c)),
            _ => Err(malformed()),
        },
        Tag::Bool => text?
            .parse::<i64>()
            .map(|v| Value::Bool(v != 0))
            .map_err(|_| malformed()),
        Tag::Str => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    #[test]
    fn test_tokens_split_on_whitespace() {
        let mut scanner = Scanner::new(Cursor::new("  12 abc\n\t-3\n"));
        assert_eq!(scanner.next_token().unwrap().unwrap(), b"12");
        assert_eq!(scanner.next_token().unwrap().unwrap(), b"abc");
        assert_eq!(scanner.next_token().unwrap().unwrap(), b"-3");
        assert!(scanner.next_token().unwrap().is_none());
    }

    #[test]
    fn test_token_spanning_buffer_refills() {
        let reader = BufReader::with_capacity(2, Cursor::new("   12345 6"));
        let mut scanner = Scanner::new(reader);
        assert_eq!(scanner.next_token().unwrap().unwrap(), b"12345");
        assert_eq!(scanner.next_token().unwrap().unwrap(), b"6");
    }

    #[test]
    fn test_discard_line_stops_after_newline() {
        let mut scanner = Scanner::new(Cursor::new("abc def\n7\n"));
        assert_eq!(scanner.next_token().unwrap().unwrap(), b"abc");
        assert!(scanner.discard_line().unwrap());
        assert_eq!(scanner.next_token().unwrap().unwrap(), b"7");
    }

    #[test]
    fn test_discard_line_reports_end_of_input() {
        let mut scanner = Scanner::new(Cursor::new("abc"));
        scanner.next_token().unwrap();
        assert!(!scanner.discard_line().unwrap());
    }

    #[test]
    fn test_parse_by_tag() {
        assert_eq!(parse_token(Tag::Int, b"-17").unwrap(), Value::Int(-17));
        assert_eq!(parse_token(Tag::Float, b"2.5").unwrap(), Value::Float(2.5));
        assert_eq!(parse_token(Tag::Float, b"3").unwrap(), Value::Float(3.0));
        assert_eq!(parse_token(Tag::Char, b"x").unwrap(), Value::Char(b'x'));
        assert_eq!(parse_token(Tag::Bool, b"0").unwrap(), Value::Bool(false));
        assert_eq!(parse_token(Tag::Bool, b"1").unwrap(), Value::Bool(true));
        assert_eq!(parse_token(Tag::Bool, b"5").unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_token(Tag::Int, b"abc").is_err());
        assert!(parse_token(Tag::Int, b"1.5").is_err());
        assert!(parse_token(Tag::Int, b"99999999999999999999").is_err());
        assert!(parse_token(Tag::Float, b"one").is_err());
        assert!(parse_token(Tag::Char, b"ab").is_err());
        assert!(parse_token(Tag::Bool, b"true").is_err());

        let err = parse_token(Tag::Int, b"abc").unwrap_err();
        assert_eq!(err.to_string(), "expected int, found \"abc\"");
    }
}
