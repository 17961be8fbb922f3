//! Editable installs from GitHub, and in-place updates of existing checkouts.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;

use piphub_core::checkout::checkout_path;
use piphub_core::package_ref::PackageRef;

use crate::config::Config;
use crate::runner::{CommandRunner, Invocation};
use crate::workdir::with_workdir;

/// Version-control client executable.
pub const GIT: &str = "git";

/// Errors that can occur during package installation.
#[derive(Debug, Error)]
pub enum InstallError {
    /// An external command exited unsuccessfully.
    #[error("command `{command}` failed: {status}")]
    CommandFailed {
        /// The command line that was run.
        command: String,
        /// Its exit status.
        status: ExitStatus,
    },
    /// An external command could not be started.
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        /// Program that could not be started.
        program: String,
        /// Underlying OS error.
        source: std::io::Error,
    },
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What [`Installer::install`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// A fresh clone was installed into `path`.
    Installed {
        /// The new checkout.
        path: PathBuf,
    },
    /// The existing checkout at `path` was pulled and reinstalled.
    Updated {
        /// The existing checkout.
        path: PathBuf,
    },
}

/// Runs pip and git against the configured source directory.
pub struct Installer {
    runner: Arc<dyn CommandRunner>,
    config: Config,
}

impl Installer {
    /// Create a new `Installer`.
    ///
    /// # Arguments
    ///
    /// * `runner` — Executes pip and git.
    /// * `config` — Effective configuration, with command-line overrides
    ///   already applied.
    pub fn new(runner: Arc<dyn CommandRunner>, config: Config) -> Self {
        Self { runner, config }
    }

    /// Install `pkg_ref`, or update it if its checkout already exists.
    ///
    /// The source directory is created first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError`] if the source directory cannot be created or
    /// any external command fails.
    pub fn install(&self, pkg_ref: &PackageRef) -> Result<InstallOutcome, InstallError> {
        let src = &self.config.src;
        if !src.exists() {
            debug!("creating {}", src.display());
            std::fs::create_dir_all(src)?;
        }

        let dest = checkout_path(src, &pkg_ref.repo);
        if dest.exists() {
            self.update(&dest)?;
            return Ok(InstallOutcome::Updated { path: dest });
        }

        info!("installing {pkg_ref}");
        self.call(&self.fresh_install(pkg_ref))?;
        Ok(InstallOutcome::Installed { path: dest })
    }

    /// Pull the checkout at `path` and reinstall it in editable mode.
    ///
    /// Both commands run with `path` as the working directory, which is
    /// restored afterwards whether or not they succeed.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError`] if `path` cannot be entered or either command
    /// fails. A failed pull skips the reinstall.
    pub fn update(&self, path: &Path) -> Result<(), InstallError> {
        println!("upgrading {}", path.display());
        with_workdir(path, || {
            self.call(&Invocation::new(GIT, ["pull"]))?;
            let mut args = self.pip_install_args();
            args.extend(["-e".to_owned(), ".".to_owned()]);
            self.call(&Invocation::new(self.config.pip.as_str(), args))
        })
    }

    /// The pip command that clones and installs `pkg_ref` in one step.
    #[must_use]
    pub fn fresh_install(&self, pkg_ref: &PackageRef) -> Invocation {
        let mut args = self.pip_install_args();
        args.extend([
            "--src".to_owned(),
            self.config.src.to_string_lossy().into_owned(),
            "-e".to_owned(),
            self.config.protocol.source_url(pkg_ref),
        ]);
        Invocation::new(self.config.pip.as_str(), args)
    }

    /// Echo `invocation` for the operator, then run it.
    fn call(&self, invocation: &Invocation) -> Result<(), InstallError> {
        println!("{invocation}");
        self.runner.run(invocation)
    }

    fn pip_install_args(&self) -> Vec<String> {
        let mut args = vec!["install".to_owned()];
        if self.config.user {
            args.push("--user".to_owned());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use piphub_core::protocol::Protocol;

    struct NoopRunner;

    impl CommandRunner for NoopRunner {
        fn run(&self, _invocation: &Invocation) -> Result<(), InstallError> {
            Ok(())
        }
    }

    fn installer(user: bool, protocol: Protocol) -> Installer {
        let config = Config {
            src: PathBuf::from("/home/min/dev/py"),
            pip: "pip3".to_owned(),
            protocol,
            user,
        };
        Installer::new(Arc::new(NoopRunner), config)
    }

    #[test]
    fn fresh_install_with_user() {
        let r = PackageRef::parse("ipython").unwrap();
        let inv = installer(true, Protocol::Https).fresh_install(&r);
        assert_eq!(
            inv.to_string(),
            "pip3 install --user --src /home/min/dev/py -e \
             git+https://github.com/ipython/ipython.git#egg=ipython"
        );
    }

    #[test]
    fn fresh_install_without_user() {
        let r = PackageRef::parse("jtriley/StarCluster/starcluster").unwrap();
        let inv = installer(false, Protocol::Http).fresh_install(&r);
        assert_eq!(inv.program, "pip3");
        assert_eq!(
            inv.args,
            [
                "install",
                "--src",
                "/home/min/dev/py",
                "-e",
                "git+http://github.com/jtriley/StarCluster.git#egg=starcluster",
            ]
        );
    }
}
