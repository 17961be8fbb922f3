//! Local working copies under the source root.
//!
//! There is no registry of installed packages: a directory named after the
//! repository inside the source root is the only record that a package is
//! installed.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Version-control metadata directory a checkout must contain.
pub const VCS_DIR: &str = ".git";

/// Files that mark a directory as a Python project.
pub const PROJECT_FILES: [&str; 2] = ["setup.py", "pyproject.toml"];

/// Errors that can occur while enumerating the source root.
#[derive(Debug, Error)]
pub enum ListError {
    /// The source root does not exist.
    #[error("source directory '{}' does not exist", .0.display())]
    MissingRoot(PathBuf),
    /// Reading the source root failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A package working copy living in the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    /// Directory name, which is the repository name.
    pub name: String,
    /// Absolute path to the working copy.
    pub path: PathBuf,
}

impl Checkout {
    /// Return the checkout at `dir` if it holds both a `.git` directory and a
    /// project file.
    #[must_use]
    pub fn detect(dir: &Path) -> Option<Self> {
        if !dir.join(VCS_DIR).is_dir() {
            return None;
        }
        if !PROJECT_FILES.iter().any(|f| dir.join(f).is_file()) {
            return None;
        }
        let name = dir.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            name,
            path: dir.to_path_buf(),
        })
    }
}

/// Return where `repo` is (or would be) checked out under `src`.
#[must_use]
pub fn checkout_path(src: &Path, repo: &str) -> PathBuf {
    src.join(repo)
}

/// List every checkout directly under `src`, sorted by name.
///
/// Entries that are not checkouts are skipped silently.
///
/// # Errors
///
/// Returns [`ListError::MissingRoot`] if `src` does not exist, or
/// [`ListError::Io`] if it cannot be read.
pub fn list_checkouts(src: &Path) -> Result<Vec<Checkout>, ListError> {
    if !src.exists() {
        return Err(ListError::MissingRoot(src.to_path_buf()));
    }

    let mut found = Vec::new();
    for entry in std::fs::read_dir(src)? {
        let path = entry?.path();
        if let Some(checkout) = Checkout::detect(&path) {
            found.push(checkout);
        }
    }
    found.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(found)
}
