//! Scoped change of the process working directory.

use std::path::{Path, PathBuf};

use log::{debug, error};

/// Restores the previous working directory when dropped.
///
/// The working directory is process-wide; hold at most one guard at a time.
#[derive(Debug)]
#[must_use = "the previous directory is restored as soon as the guard is dropped"]
pub struct WorkdirGuard {
    previous: PathBuf,
}

impl WorkdirGuard {
    /// Change into `path`, remembering the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read or `path`
    /// cannot be entered. The working directory is unchanged in that case.
    pub fn enter(path: &Path) -> std::io::Result<Self> {
        let previous = std::env::current_dir()?;
        std::env::set_current_dir(path)?;
        debug!("entered {}", path.display());
        Ok(Self { previous })
    }

    /// Directory that will be restored.
    #[must_use]
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        if let Err(e) = std::env::set_current_dir(&self.previous) {
            error!("failed to restore {}: {e}", self.previous.display());
        }
    }
}

/// Run `f` with the working directory set to `path`, restoring it afterwards
/// on every exit path.
///
/// # Errors
///
/// Returns `f`'s error, or an I/O error converted into `E` if `path` cannot
/// be entered.
pub fn with_workdir<T, E, F>(path: &Path, f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: From<std::io::Error>,
{
    let _guard = WorkdirGuard::enter(path)?;
    f()
}
