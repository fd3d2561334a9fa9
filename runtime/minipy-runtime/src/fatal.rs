///
/// Fatal error reporting
///
/// A compiled program has no way to handle a runtime error, so at the C ABI
/// every `RuntimeError` prints `RUNTIME ERROR: <message>` on stdout and
/// exits with status 1.
///

use std::io::Write;

use minipy_std_core::RuntimeError;
use tracing::error;

pub const FATAL_PREFIX: &str = "RUNTIME ERROR:";

pub fn fatal_message(err: &RuntimeError) -> String {
    format!("{} {}", FATAL_PREFIX, err)
}

pub fn fatal(err: RuntimeError) -> ! {
    error!(%err, "fatal runtime error");
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{}", fatal_message(&err));
    let _ = out.flush();
    std::process::exit(1);
}

pub trait OrFatal<T> {
    fn or_fatal(self) -> T;
}

impl<T> OrFatal<T> for Result<T, RuntimeError> {
    fn or_fatal(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => fatal(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_message_format() {
        let err = RuntimeError::IndexOutOfRange { index: 5, length: 3 };
        assert_eq!(
            fatal_message(&err),
            "RUNTIME ERROR: Index out of bounds. Trying to access 5, length is 3"
        );
        assert_eq!(
            fatal_message(&RuntimeError::UnexpectedEof),
            "RUNTIME ERROR: Reaching unexpected EOF."
        );
    }

    #[test]
    fn test_or_fatal_passes_values_through() {
        let ok: Result<i64, RuntimeError> = Ok(3);
        assert_eq!(ok.or_fatal(), 3);
    }
}
