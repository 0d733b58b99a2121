//! Run configuration, validated once before traversal.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::utils::io;
use crate::utils::template::{self, TemplateVars};
use crate::utils::validation;

/// Folder names pruned from traversal when `--skip` is not given.
pub const DEFAULT_SKIP: &str = ".git,.idea,node_modules";

/// Zero-fill width for `%i%` / `%j%` when `--pad` is not given.
pub const DEFAULT_PAD: usize = 2;

/// Widest accepted `--pad`. Counters never need more digits than this.
pub const MAX_PAD: usize = 32;

/// Folder base names excluded from traversal. Matching is exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet(HashSet<String>);

impl SkipSet {
    /// Parse a comma-separated list; entries are trimmed and empty entries dropped.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut names = HashSet::new();
        for name in validation::parse_name_list(raw) {
            validation::require_bare_name(
                &name,
                "skip",
                "Skip entries are folder names, not paths",
            )?;
            names.insert(name);
        }
        Ok(Self(names))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The transformation a run applies to each file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Literal substring replacement.
    Replace { search: String, replace: String },
    /// Numbered prefix generation anchored on a pivot.
    Iterate {
        pivot: String,
        phrase: String,
        pad: usize,
    },
}

impl Mode {
    pub fn replace(search: &str, replace: &str) -> Result<Self> {
        validation::require_literal(search, "search", "Search text cannot be empty")?;
        validation::require_bare_name(
            replace,
            "replace",
            "Replacement text cannot contain a path separator",
        )?;
        Ok(Mode::Replace {
            search: search.to_string(),
            replace: replace.to_string(),
        })
    }

    pub fn iterate(pivot: &str, phrase: &str, pad: usize) -> Result<Self> {
        validation::require_literal(pivot, "pivot", "Pivot text cannot be empty")?;
        validation::require_bare_name(
            phrase,
            "phrase",
            "Phrase cannot contain a path separator",
        )?;
        if pad > MAX_PAD {
            return Err(Error::validation_invalid_argument(
                "pad",
                format!("Pad width must be at most {}", MAX_PAD),
                Some(pad.to_string()),
            ));
        }
        Ok(Mode::Iterate {
            pivot: pivot.to_string(),
            phrase: phrase.to_string(),
            pad,
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Replace { .. } => "replace",
            Mode::Iterate { .. } => "iterate",
        }
    }

    /// Non-fatal problems with the mode's parameters, reported once before processing.
    pub fn warnings(&self) -> Vec<String> {
        match self {
            Mode::Replace { .. } => Vec::new(),
            Mode::Iterate { phrase, .. } => {
                if template::is_present(phrase, TemplateVars::FILE_INDEX)
                    || template::is_present(phrase, TemplateVars::FOLDER_INDEX)
                {
                    Vec::new()
                } else {
                    vec![format!(
                        "Phrase '{}' contains neither %i% nor %j%; files in the same folder will get identical names",
                        phrase
                    )]
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub root: PathBuf,
    pub dry_run: bool,
    pub skip: SkipSet,
    pub mode: Mode,
}

impl RunConfig {
    /// Build a validated configuration. Fails before any filesystem mutation.
    pub fn new(dir: &Path, dry_run: bool, skip: &str, mode: Mode) -> Result<Self> {
        let root = resolve_root(dir)?;
        let skip = SkipSet::parse(skip)?;
        Ok(Self {
            root,
            dry_run,
            skip,
            mode,
        })
    }
}

/// Expand `~`, absolutize, and require an existing directory.
pub fn resolve_root(dir: &Path) -> Result<PathBuf> {
    let expanded = match dir.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => dir.to_path_buf(),
    };
    let root = io::absolutize(&expanded)?;

    if !root.exists() {
        return Err(Error::validation_invalid_directory(
            root.display().to_string(),
            "path does not exist",
        ));
    }
    if !root.is_dir() {
        return Err(Error::validation_invalid_directory(
            root.display().to_string(),
            "path is not a directory",
        ));
    }

    Ok(root)
}
