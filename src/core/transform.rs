//! File name transformations.
//!
//! Both modes share one entry point: [`Mode::order`] arranges the walked files
//! and assigns each its [`Position`], then [`Mode::new_name`] computes the
//! candidate name for a single file. Neither touches the filesystem.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::Mode;
use crate::utils::template::{self, TemplateVars};
use crate::walk::CandidateFile;

/// 1-based counters used by iterate mode. Zero in replace mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Index of the file within its folder.
    pub file: usize,
    /// Index of the folder within the run.
    pub folder: usize,
}

impl Mode {
    /// Filter and order the walked files, assigning positions.
    ///
    /// Replace mode keeps traversal order. Iterate mode keeps only files
    /// containing the pivot, groups them by parent folder, and numbers both
    /// levels case-insensitively.
    pub fn order(&self, root: &Path, files: Vec<CandidateFile>) -> Vec<(CandidateFile, Position)> {
        match self {
            Mode::Replace { search, .. } => files
                .into_iter()
                .filter(|file| file.name.contains(search.as_str()))
                .map(|file| (file, Position::default()))
                .collect(),
            Mode::Iterate { pivot, .. } => number_files(root, files, pivot),
        }
    }

    /// Candidate name for `name`, or `None` when the file is not a candidate.
    pub fn new_name(&self, name: &str, position: Position) -> Option<String> {
        match self {
            Mode::Replace { search, replace } => replace_literal(name, search, replace),
            Mode::Iterate { pivot, phrase, pad } => {
                let suffix = pivot_suffix(name, pivot)?;
                let prefix = render_phrase(phrase, *pad, position);
                Some(format!("{}{}", prefix, suffix))
            }
        }
    }
}

/// Split a file name into base and extension, like `("archive.tar", ".gz")`.
///
/// The extension starts at the final `.`, unless that dot is part of the
/// leading run of dots: `.bashrc` and `...` have no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(offset) => name.split_at(leading + offset),
        None => (name, ""),
    }
}

/// File name without its extension.
pub fn base_name(name: &str) -> &str {
    split_extension(name).0
}

/// Replace every non-overlapping occurrence of `search`, left to right.
pub fn replace_literal(name: &str, search: &str, replace: &str) -> Option<String> {
    if search.is_empty() || !name.contains(search) {
        return None;
    }
    Some(name.replace(search, replace))
}

/// The part of `name` kept after the generated prefix.
///
/// Starts at the first occurrence of `pivot`, or at the space before it when
/// exactly one space precedes it. A longer run of spaces is left behind.
pub fn pivot_suffix<'a>(name: &'a str, pivot: &str) -> Option<&'a str> {
    if pivot.is_empty() {
        return None;
    }
    let at = name.find(pivot)?;
    let spaces = name[..at].len() - name[..at].trim_end_matches(' ').len();
    let start = if spaces == 1 { at - 1 } else { at };
    Some(&name[start..])
}

pub fn render_phrase(phrase: &str, pad: usize, position: Position) -> String {
    let file = template::pad_number(position.file, pad);
    let folder = template::pad_number(position.folder, pad);
    template::render(
        phrase,
        &[
            (TemplateVars::FILE_INDEX, file.as_str()),
            (TemplateVars::FOLDER_INDEX, folder.as_str()),
        ],
    )
}

fn folder_sort_key(root: &Path, parent: &Path) -> (String, String) {
    let relative = parent
        .strip_prefix(root)
        .unwrap_or(parent)
        .to_string_lossy()
        .to_string();
    (relative.to_lowercase(), relative)
}

/// Group pivot-bearing files by folder and assign `j` per folder, `i` per file.
fn number_files(
    root: &Path,
    files: Vec<CandidateFile>,
    pivot: &str,
) -> Vec<(CandidateFile, Position)> {
    let mut groups: HashMap<PathBuf, Vec<CandidateFile>> = HashMap::new();
    for file in files {
        if !pivot.is_empty() && file.name.contains(pivot) {
            groups.entry(file.parent.clone()).or_default().push(file);
        }
    }

    let mut folders: Vec<(PathBuf, Vec<CandidateFile>)> = groups.into_iter().collect();
    folders.sort_by_cached_key(|(parent, _)| folder_sort_key(root, parent));

    let mut numbered = Vec::new();
    for (folder_index, (_, mut members)) in folders.into_iter().enumerate() {
        members.sort_by_cached_key(|file| (file.name.to_lowercase(), file.name.clone()));
        for (file_index, file) in members.into_iter().enumerate() {
            let position = Position {
                file: file_index + 1,
                folder: folder_index + 1,
            };
            numbered.push((file, position));
        }
    }

    numbered
}
