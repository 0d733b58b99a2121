//! Rename planning: change detection and collision checks.
//!
//! A plan is computed entirely in memory. Nothing here mutates the tree.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::config::Mode;
use crate::transform::{base_name, Position};
use crate::utils::io as fs_io;
use crate::walk::CandidateFile;

/// One accepted rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub from: PathBuf,
    pub to: PathBuf,
    /// Original name without extension, as printed.
    pub from_base: String,
    /// New name without extension, as printed.
    pub to_base: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Two entries compute the same target path.
    DuplicateTarget,
    /// The target already exists and nothing earlier in the plan moves it away.
    TargetExists,
}

impl CollisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionKind::DuplicateTarget => "duplicate_target",
            CollisionKind::TargetExists => "target_exists",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub kind: CollisionKind,
    pub from: PathBuf,
    pub to: PathBuf,
}

impl Collision {
    pub fn message(&self) -> String {
        match self.kind {
            CollisionKind::DuplicateTarget => format!(
                "'{}' would be renamed to '{}', which another file in this run also targets",
                self.from.display(),
                self.to.display()
            ),
            CollisionKind::TargetExists => format!(
                "'{}' would be renamed to '{}', which already exists",
                self.from.display(),
                self.to.display()
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    pub entries: Vec<RenameEntry>,
    pub collisions: Vec<Collision>,
}

impl RenamePlan {
    /// Build a plan from walked files.
    pub fn build(mode: &Mode, root: &Path, files: Vec<CandidateFile>) -> Self {
        let entries = mode
            .order(root, files)
            .into_iter()
            .filter_map(|(file, position)| plan_entry(mode, &file, position))
            .collect::<Vec<_>>();
        let collisions = detect_collisions(&entries);
        Self {
            entries,
            collisions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn plan_entry(mode: &Mode, file: &CandidateFile, position: Position) -> Option<RenameEntry> {
    let new_name = mode.new_name(&file.name, position)?;
    if !changes(&file.name, &new_name) {
        return None;
    }
    Some(RenameEntry {
        from: file.path(),
        to: file.parent.join(&new_name),
        from_base: base_name(&file.name).to_string(),
        to_base: base_name(&new_name).to_string(),
    })
}

/// Whether renaming `original` to `candidate` is a real change.
///
/// Only base names are compared; an entry whose base name is unchanged is
/// dropped even when the extension differs.
pub fn changes(original: &str, candidate: &str) -> bool {
    base_name(original) != base_name(candidate)
}

/// Find targets that would clobber another file when the plan is applied in order.
pub fn detect_collisions(entries: &[RenameEntry]) -> Vec<Collision> {
    let mut collisions = Vec::new();

    let mut target_counts: HashMap<&Path, usize> = HashMap::new();
    for entry in entries {
        *target_counts.entry(entry.to.as_path()).or_default() += 1;
    }

    let mut vacated: HashSet<&Path> = HashSet::new();
    for entry in entries {
        if target_counts.get(entry.to.as_path()).copied().unwrap_or(0) > 1 {
            collisions.push(Collision {
                kind: CollisionKind::DuplicateTarget,
                from: entry.from.clone(),
                to: entry.to.clone(),
            });
        } else if entry.to.exists()
            && !vacated.contains(entry.to.as_path())
            && !is_case_only_self_rename(&entry.from, &entry.to)
        {
            collisions.push(Collision {
                kind: CollisionKind::TargetExists,
                from: entry.from.clone(),
                to: entry.to.clone(),
            });
        }
        vacated.insert(entry.from.as_path());
    }

    collisions
}

// On a case-insensitive volume the target of a case-only rename is the source
// itself. Spelling alone proves nothing: on a case-sensitive volume both names
// can exist as separate files.
fn is_case_only_self_rename(from: &Path, to: &Path) -> bool {
    from.to_string_lossy()
        .eq_ignore_ascii_case(&to.to_string_lossy())
        && fs_io::same_file(from, to)
}
