//! `piphub <packages>...` — install or update each package in turn.

use anyhow::{Context, Result};

use piphub_core::package_ref::PackageRef;

use crate::installer::{InstallOutcome, Installer};

/// Parse and install each token in order, stopping at the first failure.
///
/// Packages handled before the failure stay installed.
///
/// # Errors
///
/// Returns an error for the first token that is malformed or whose install
/// or update fails; later tokens are not touched.
pub fn run_install(installer: &Installer, tokens: &[String]) -> Result<Vec<InstallOutcome>> {
    let mut outcomes = Vec::with_capacity(tokens.len());
    for token in tokens {
        let pkg_ref = PackageRef::parse(token)?;
        let outcome = installer
            .install(&pkg_ref)
            .with_context(|| format!("failed to install {pkg_ref}"))?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
