//! Rename pipeline: configuration, traversal, transformation, planning, application.

pub mod apply;
pub mod config;
pub mod error;
pub mod plan;
pub mod transform;
pub mod walk;

// Re-export common types for convenience
pub use apply::{apply_plan, run, RunSummary};
pub use config::{Mode, RunConfig, SkipSet, DEFAULT_PAD, DEFAULT_SKIP, MAX_PAD};
pub use error::{Error, ErrorCode, Result};
pub use plan::{Collision, CollisionKind, RenameEntry, RenamePlan};
pub use transform::Position;
pub use walk::CandidateFile;
