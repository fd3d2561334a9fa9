///
/// Typed console
///
/// Binds a `Scanner` over the input channel to an output channel and
/// implements minipy's `input` and `print` builtins on top of them.
///
/// `read_typed` keeps prompting until the user enters a token that parses
/// under the requested tag. A malformed token costs the rest of its line
/// and one retry notice; running out of input while recovering is fatal.
///

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use minipy_std_core::{RuntimeError, Value};
use tracing::debug;

use crate::config::IoConfig;
use crate::format::Item;
use crate::scan::{ParseError, Scanner, parse_token};
use crate::tag::Tag;

pub const RETRY_NOTICE: &str = "Invalid input. Please try again.";

pub struct Console<R, W> {
    scanner: Scanner<R>,
    out: W,
    config: IoConfig,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's standard input and output
    pub fn stdio(config: IoConfig) -> Self {
        Console::with_config(io::stdin().lock(), io::stdout(), config)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console::with_config(input, output, IoConfig::default())
    }

    pub fn with_config(input: R, output: W, config: IoConfig) -> Self {
        Self {
            scanner: Scanner::new(input),
            out: output,
            config,
        }
    }

    pub fn config(&self) -> &IoConfig {
        &self.config
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Prompt for and read one value of type `tag`
    pub fn read_typed(&mut self, prompt: &str, tag: Tag) -> Result<Value, RuntimeError> {
        if !tag.is_readable() {
            return Err(RuntimeError::UnknownTag(tag.as_char()));
        }

        loop {
            self.prompt(prompt, tag)?;

            let parsed = match self.scanner.next_token()? {
                Some(token) => parse_token(tag, &token),
                None => Err(ParseError::EndOfInput {
                    expected: tag.name(),
                }),
            };

            match parsed {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(%err, tag = %tag.as_char(), "rejected input, retrying");
                    if !self.scanner.discard_line()? {
                        return Err(RuntimeError::UnexpectedEof);
                    }
                    writeln!(self.out, "{}", RETRY_NOTICE)?;
                }
            }
        }
    }

    /// `read_typed` for callers holding the raw tag character
    pub fn read_tagged(&mut self, prompt: &str, tag: char) -> Result<Value, RuntimeError> {
        self.read_typed(prompt, Tag::from_char(tag)?)
    }

    /// Print each item followed by a space, then end the line
    pub fn write_typed(&mut self, items: &[Item<'_>]) -> Result<(), RuntimeError> {
        for item in items {
            item.write_to(&mut self.out, &self.config)?;
            self.out.write_all(b" ")?;
        }
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str, tag: Tag) -> io::Result<()> {
        self.out.write_all(prompt.as_bytes())?;
        if self.config.type_hints {
            write!(self.out, " (expecting {}): ", tag.name())?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> Vec<String> {
        let out = String::from_utf8(console.into_output()).unwrap();
        out.split_inclusive('\n').map(str::to_string).collect()
    }

    #[test]
    fn test_write_typed_exact_output() {
        let mut console = console("");
        console
            .write_typed(&[Item::Int(1), Item::Float(2.0), Item::Str("hello!")])
            .unwrap();
        assert_eq!(console.into_output(), b"1 2.000000 hello! \n");
    }

    #[test]
    fn test_write_typed_empty_prints_newline() {
        let mut console = console("");
        console.write_typed(&[]).unwrap();
        assert_eq!(console.into_output(), b"\n");
    }

    #[test]
    fn test_write_typed_lines() {
        let mut console = console("");
        console
            .write_typed(&[Item::Char(b'x'), Item::Bool(true)])
            .unwrap();
        console
            .write_typed(&[Item::Bool(false), Item::Int(-5)])
            .unwrap();
        insta::assert_debug_snapshot!(transcript(console), @r#"
        [
            "x true \n",
            "false -5 \n",
        ]
        "#);
    }

    #[test]
    fn test_read_typed_each_tag() {
        let mut console = console("42 2.5 q 1\n");
        assert_eq!(console.read_typed("a", Tag::Int).unwrap(), Value::Int(42));
        assert_eq!(console.read_typed("b", Tag::Float).unwrap(), Value::Float(2.5));
        assert_eq!(console.read_typed("c", Tag::Char).unwrap(), Value::Char(b'q'));
        assert_eq!(console.read_typed("d", Tag::Bool).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_read_typed_retries_after_malformed_line() {
        let mut console = console("abc\n7\n");
        let value = console.read_typed("n?", Tag::Int).unwrap();
        assert_eq!(value, Value::Int(7));
        insta::assert_debug_snapshot!(transcript(console), @r#"
        [
            "n? (expecting int): Invalid input. Please try again.\n",
            "n? (expecting int): ",
        ]
        "#);
    }

    #[test]
    fn test_read_typed_discards_rest_of_bad_line() {
        let mut console = console("x 5 6\n8\n");
        assert_eq!(console.read_typed("n", Tag::Int).unwrap(), Value::Int(8));
    }

    #[test]
    fn test_read_typed_eof_while_recovering() {
        let mut console = console("abc");
        let err = console.read_typed("n?", Tag::Int).unwrap_err();
        assert!(matches!(err, RuntimeError::UnexpectedEof));
    }

    #[test]
    fn test_read_typed_eof_before_any_token() {
        let mut console = console("   ");
        let err = console.read_typed("n?", Tag::Float).unwrap_err();
        assert!(matches!(err, RuntimeError::UnexpectedEof));
    }

    #[test]
    fn test_read_typed_rejects_output_only_and_unknown_tags() {
        let mut console = console("1\n");
        let err = console.read_typed("s?", Tag::Str).unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownTag('s')));

        let err = console.read_tagged("z?", 'z').unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownTag('z')));

        // Nothing is prompted or consumed for a rejected tag.
        assert_eq!(console.read_tagged("i?", 'i').unwrap(), Value::Int(1));
    }

    #[test]
    fn test_prompt_without_type_hints() {
        let config = IoConfig {
            type_hints: false,
            ..IoConfig::default()
        };
        let mut console =
            Console::with_config(Cursor::new(b"3\n".to_vec()), Vec::new(), config);
        assert!(!console.config().type_hints);
        console.read_typed("size: ", Tag::Int).unwrap();
        assert_eq!(console.into_output(), b"size: ");
    }
}
