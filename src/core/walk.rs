//! Directory traversal with folder pruning.

use std::path::{Path, PathBuf};

use crate::config::SkipSet;

/// A regular file found under the traversal root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub parent: PathBuf,
    pub name: String,
}

impl CandidateFile {
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }
}

/// Collect every regular file under `root`, in directory enumeration order.
///
/// Directories whose base name is in `skip` are pruned before descending, so
/// nothing beneath them is listed. The root itself is never matched against
/// `skip`.
pub fn walk_files(root: &Path, skip: &SkipSet) -> Vec<CandidateFile> {
    let mut files = Vec::new();
    walk_recursive(root, skip, &mut files);
    files
}

fn walk_recursive(dir: &Path, skip: &SkipSet, files: &mut Vec<CandidateFile>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        // Names that are not valid UTF-8 cannot be transformed as text.
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };

        // Symlinked directories are not followed; symlinked files are listed.
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            if skip.contains(&name) {
                continue;
            }
            walk_recursive(&path, skip, files);
        } else if path.is_file() {
            files.push(CandidateFile {
                parent: dir.to_path_buf(),
                name,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(files: &[CandidateFile]) -> Vec<String> {
        let mut names: Vec<String> = files.iter().map(|f| f.name.clone()).collect();
        names.sort();
        names
    }

    #[test]
    fn lists_files_recursively() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.txt"), "").unwrap();
        fs::write(dir.path().join("a/mid.txt"), "").unwrap();
        fs::write(dir.path().join("a/b/deep.txt"), "").unwrap();

        let files = walk_files(dir.path(), &SkipSet::default());

        assert_eq!(names(&files), vec!["deep.txt", "mid.txt", "top.txt"]);
        let deep = files.iter().find(|f| f.name == "deep.txt").unwrap();
        assert_eq!(deep.parent, dir.path().join("a/b"));
        assert_eq!(deep.path(), dir.path().join("a/b/deep.txt"));
    }

    #[test]
    fn directories_are_not_candidates() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("empty_dir")).unwrap();

        assert!(walk_files(dir.path(), &SkipSet::default()).is_empty());
    }

    #[test]
    fn skipped_directory_prunes_nested_content() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg/lib")).unwrap();
        fs::write(dir.path().join("node_modules/index.js"), "").unwrap();
        fs::write(dir.path().join("node_modules/pkg/lib/deep.js"), "").unwrap();
        fs::write(dir.path().join("keep.js"), "").unwrap();

        let skip = SkipSet::parse("node_modules").unwrap();
        let files = walk_files(dir.path(), &skip);

        assert_eq!(names(&files), vec!["keep.js"]);
    }

    #[test]
    fn skip_matches_at_any_depth() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/.git")).unwrap();
        fs::write(dir.path().join("src/.git/HEAD"), "").unwrap();
        fs::write(dir.path().join("src/main.rs"), "").unwrap();

        let skip = SkipSet::parse(".git").unwrap();
        assert_eq!(names(&walk_files(dir.path(), &skip)), vec!["main.rs"]);
    }

    #[test]
    fn skip_is_exact_name_match() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("node_modules_backup")).unwrap();
        fs::write(dir.path().join("node_modules_backup/old.js"), "").unwrap();

        let skip = SkipSet::parse("node_modules").unwrap();
        assert_eq!(names(&walk_files(dir.path(), &skip)), vec!["old.js"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_followed() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("real/file.txt"), "").unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("real/loop")).unwrap();

        assert_eq!(
            names(&walk_files(dir.path(), &SkipSet::default())),
            vec!["file.txt"]
        );
    }

    #[test]
    fn skip_does_not_apply_to_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("node_modules"), "").unwrap();

        let skip = SkipSet::parse("node_modules").unwrap();
        assert_eq!(names(&walk_files(dir.path(), &skip)), vec!["node_modules"]);
    }
}
