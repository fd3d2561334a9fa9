///
/// Runtime error types.
///
/// Every condition the runtime cannot recover from: list lifecycle misuse,
/// bad indices, unknown type tags and exhausted input. Messages match the
/// text compiled minipy programs print after `RUNTIME ERROR:`.
///

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Unable to reserve storage for {requested} list elements")]
    Allocation { requested: usize },

    #[error("Invalid list length {length}")]
    InvalidLength { length: i64 },

    #[error("Trying to add more initial elements to full list. Length is {length}")]
    Overfill { length: usize },

    #[error("List initialization is not complete. Length is {length}, uninitialized length is {pending}")]
    NotSealed { length: usize, pending: usize },

    #[error("Index out of bounds. Trying to access {index}, length is {length}")]
    IndexOutOfRange { index: i64, length: usize },

    #[error("Unknown type: {0}")]
    UnknownTag(char),

    #[error("Reaching unexpected EOF.")]
    UnexpectedEof,

    #[error("List handle {handle} has already been released")]
    UseAfterRelease { handle: u64 },

    #[error("List handle {handle} was never allocated")]
    UnknownHandle { handle: u64 },

    #[error("Invalid print call with {count} arguments")]
    InvalidPrintCall { count: i64 },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
