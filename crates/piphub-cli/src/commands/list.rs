//! `piphub --list` / `piphub --status` — show checkouts in the source directory.

use std::path::Path;

use anyhow::{Context, Result};

use piphub_core::checkout::{list_checkouts, Checkout};

use crate::installer::GIT;
use crate::runner::{CommandRunner, Invocation};
use crate::workdir::with_workdir;

/// `git log` format for the one-line status: short hash, relative age, subject.
pub const STATUS_FORMAT: &str = "--format=  %h [%ar] %s";

/// Print every checkout under `src`; with `status`, follow each name with
/// its latest commit.
///
/// # Errors
///
/// Returns an error if `src` cannot be read or a `git log` fails.
pub fn run_list(src: &Path, status: bool, runner: &dyn CommandRunner) -> Result<Vec<Checkout>> {
    println!("listing packages in {}", src.display());
    let checkouts = list_checkouts(src)?;
    for checkout in &checkouts {
        println!("{}", checkout.name);
        if status {
            with_workdir(&checkout.path, || {
                runner.run(&Invocation::new(GIT, ["log", "-1", STATUS_FORMAT]))
            })
            .with_context(|| format!("failed to read status of {}", checkout.name))?;
        }
    }
    Ok(checkouts)
}
