//! Terminates the process on unrecoverable errors.
//!
//! The reader and writer report every failure as a value. Tools that have no sensible way to
//! recover can use [`fatal`] or [`OrAbort::or_abort`] to print a diagnostic and exit instead.

use core::fmt::Display;

/// Exit status used by [`fatal`].
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Logs `message`, prints it to stderr and exits the process with [`FAILURE_EXIT_CODE`].
pub fn fatal(message: impl Display) -> ! {
    tracing::error!(reason = %message, "fatal error");
    eprintln!("{message}");
    std::process::exit(FAILURE_EXIT_CODE)
}

/// Unwraps a result, or terminates the process with a diagnostic.
pub trait OrAbort<T> {
    /// Returns the success value, or calls [`fatal`] with `"{context}: {error}"`.
    fn or_abort(self, context: &str) -> T;
}

impl<T, E: Display> OrAbort<T> for Result<T, E> {
    fn or_abort(self, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(e) => fatal(format_args!("{context}: {e}")),
        }
    }
}
