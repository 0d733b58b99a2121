//! CLI error formatting and exit codes.
//!
//! Successful runs print their own mapping lines; only failures are
//! rendered here.

use std::io::{self, Write};

use renamer::{Error, ErrorCode, Result};

/// Exit code when invoked without any arguments.
pub const USAGE_EXIT_CODE: i32 = 1;

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidArgument | ErrorCode::ValidationInvalidDirectory => 2,

        ErrorCode::RenameCollision | ErrorCode::InternalIoError => 1,
    }
}

fn print_error(err: &Error) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();

    let _ = writeln!(handle, "Error: {}", err.message);
    if let Some(problem) = err.problem() {
        let _ = writeln!(handle, "  {}", problem);
    }
    if let Some(context) = err.details.get("context").and_then(|v| v.as_str()) {
        let _ = writeln!(handle, "  while: {}", context);
    }
    for hint in &err.hints {
        let _ = writeln!(handle, "Hint: {}", hint.message);
    }
}

/// Print a failed result and map any result to its exit code.
pub fn report<T>(result: Result<(T, i32)>) -> i32 {
    match result {
        Ok((_, exit_code)) => exit_code,
        Err(err) => {
            print_error(&err);
            exit_code_for_error(err.code)
        }
    }
}

/// Print the help banner to stdout and return the no-arguments exit code.
pub fn print_usage(mut cmd: clap::Command) -> i32 {
    let _ = cmd.print_help();
    println!();
    USAGE_EXIT_CODE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_exit_2() {
        let err = Error::validation_invalid_directory("/nope", "path does not exist");
        assert_eq!(report::<()>(Err(err)), 2);

        let err = Error::validation_invalid_argument("search", "Search text cannot be empty", None);
        assert_eq!(report::<()>(Err(err)), 2);
    }

    #[test]
    fn runtime_failures_exit_1() {
        assert_eq!(exit_code_for_error(ErrorCode::InternalIoError), 1);
        assert_eq!(exit_code_for_error(ErrorCode::RenameCollision), 1);
    }

    #[test]
    fn success_passes_exit_code_through() {
        assert_eq!(report(Ok(((), 0))), 0);
    }
}
