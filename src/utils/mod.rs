//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - Filesystem operations with consistent error handling
//! - `template` - `%key%` phrase rendering and number padding
//! - `validation` - Input validation helpers

pub mod io;
pub mod template;
pub mod validation;
