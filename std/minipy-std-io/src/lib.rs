//!
//! minipy-std-io - Typed Input/Output
//!
//! A single character tag selects how a value is parsed from or printed to
//! a line-oriented text channel.
//!
//! ## Tags
//!
//! - `i` - 64-bit signed integer
//! - `f` - 64-bit float, printed fixed-point with 6 fractional digits
//! - `c` - single byte character
//! - `b` - bool, read as an integer (nonzero is true), printed as `true`/`false`
//! - `s` - string, output only
//!
//! ## Functions
//!
//! - `Console::read_typed(prompt, tag)` - Prompt until a valid value is entered
//! - `Console::write_typed(items)` - Print items separated by spaces, then a newline
//!

pub mod config;
pub mod console;
pub mod format;
pub mod scan;
pub mod tag;

pub use config::IoConfig;
pub use console::{Console, RETRY_NOTICE};
pub use format::Item;
pub use scan::{ParseError, Scanner, parse_token};
pub use tag::Tag;
