//! Terminal reporting of command results and exit code mapping.

mod response;

pub use response::{print_usage, report};
