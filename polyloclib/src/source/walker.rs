//! Directory walking.
//!
//! Roots are walked sequentially with `walkdir`, following symlinks.
//! Version-control metadata directories are pruned unless the root itself
//! lives inside one.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::PolylocError;
use crate::Result;

use super::filter::FilterConfig;

/// Version-control metadata directories.
pub const VCS_DIRS: &[&str] = &[".bzr", ".cvs", ".git", ".hg", ".svn"];

fn is_vcs_name(name: &OsStr) -> bool {
    VCS_DIRS.iter().any(|vcs| name == *vcs)
}

/// Whether any component of `path` is a VCS metadata directory.
pub fn is_vcs_path(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(name) if is_vcs_name(name)))
}

/// Discover files under every root, sorted and without duplicates.
///
/// A root that does not exist or cannot be read aborts discovery. Errors on
/// entries below a root are logged and the entry is skipped.
pub fn discover_files<P: AsRef<Path>>(roots: &[P], filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for root in roots {
        files.extend(discover_root(root.as_ref(), filter)?);
    }

    files.sort();
    files.dedup();

    Ok(files)
}

fn discover_root(root: &Path, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(PolylocError::PathNotFound(root.to_path_buf()));
    }

    let root_in_vcs = is_vcs_path(root);
    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || root_in_vcs || !is_vcs_name(e.file_name()));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if err.depth() == 0 => {
                return Err(PolylocError::Walk {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                warn!(root = %root.display(), "skipping entry: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if filter.matches(path) {
            files.push(path.to_path_buf());
        } else {
            debug!(path = %path.display(), "filtered out");
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_test_files(dir: &Path) {
        fs::create_dir_all(dir.join("src/utils")).unwrap();
        fs::create_dir_all(dir.join("vendor")).unwrap();
        fs::create_dir_all(dir.join(".git/objects")).unwrap();
        fs::create_dir_all(dir.join(".hidden")).unwrap();

        fs::write(dir.join("src/main.go"), "package main\n").unwrap();
        fs::write(dir.join("src/utils/util.py"), "x = 1\n").unwrap();
        fs::write(dir.join("vendor/lib.js"), "var x;\n").unwrap();
        fs::write(dir.join(".git/config"), "[core]\n").unwrap();
        fs::write(dir.join(".git/objects/ab"), "blob\n").unwrap();
        fs::write(dir.join(".hidden/notes.md"), "# notes\n").unwrap();
        fs::write(dir.join("Makefile"), "all:\n").unwrap();
    }

    #[test]
    fn test_is_vcs_path() {
        assert!(is_vcs_path(Path::new("repo/.git/config")));
        assert!(is_vcs_path(Path::new(".svn")));
        assert!(!is_vcs_path(Path::new("repo/.github/workflows/ci.yml")));
        assert!(!is_vcs_path(Path::new("src/git/mod.rs")));
    }

    #[test]
    fn test_discover_files() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let files = discover_files(&[temp.path()], &FilterConfig::new()).unwrap();

        assert!(files.iter().any(|p| p.ends_with("src/main.go")));
        assert!(files.iter().any(|p| p.ends_with("src/utils/util.py")));
        assert!(files.iter().any(|p| p.ends_with("vendor/lib.js")));
        assert!(files.iter().any(|p| p.ends_with(".hidden/notes.md")));
        assert!(files.iter().any(|p| p.ends_with("Makefile")));
        assert!(!files.iter().any(|p| is_vcs_path(p)));
        assert_eq!(files.len(), 5);
    }

    #[test]
    fn test_root_inside_vcs_dir_is_walked() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let files = discover_files(&[temp.path().join(".git")], &FilterConfig::new()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with(".git/objects/ab")));
    }

    #[test]
    fn test_discover_files_with_filter() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let filter = FilterConfig::new()
            .exclude("**/vendor/**")
            .unwrap()
            .not_match_file(r"\.md$")
            .unwrap();
        let files = discover_files(&[temp.path()], &filter).unwrap();

        assert!(files.iter().any(|p| p.ends_with("src/main.go")));
        assert!(!files.iter().any(|p| p.ends_with("vendor/lib.js")));
        assert!(!files.iter().any(|p| p.ends_with(".hidden/notes.md")));
    }

    #[test]
    fn test_discover_single_file() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("test.rs");
        fs::write(&file_path, "fn test() {}").unwrap();

        let files = discover_files(&[&file_path], &FilterConfig::new()).unwrap();

        assert_eq!(files, vec![file_path]);
    }

    #[test]
    fn test_overlapping_roots_are_deduplicated() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let files = discover_files(
            &[temp.path().to_path_buf(), temp.path().join("src")],
            &FilterConfig::new(),
        )
        .unwrap();

        assert_eq!(files.len(), 5);
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_discover_files_nonexistent() {
        let result = discover_files(&["/nonexistent/path"], &FilterConfig::new());

        assert!(matches!(result, Err(PolylocError::PathNotFound(_))));
    }
}
