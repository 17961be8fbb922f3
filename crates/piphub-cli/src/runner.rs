//! External command trait and process-backed implementation.

use std::fmt;
use std::process::Command;

use log::debug;

use crate::installer::InstallError;

/// A program and its arguments, run in the current working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable name or path.
    pub program: String,
    /// Arguments, not including the program.
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation of `program` with `args`.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs external commands to completion.
pub trait CommandRunner: Send + Sync {
    /// Run `invocation`, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::Spawn`] if the program cannot be started and
    /// [`InstallError::CommandFailed`] if it exits unsuccessfully.
    fn run(&self, invocation: &Invocation) -> Result<(), InstallError>;
}

/// [`CommandRunner`] that spawns real processes with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), InstallError> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|source| InstallError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        debug!("{} exited with {status}", invocation.program);
        if !status.success() {
            return Err(InstallError::CommandFailed {
                command: invocation.to_string(),
                status,
            });
        }
        Ok(())
    }
}
