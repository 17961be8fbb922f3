#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use piphub_cli::config::Config;
use piphub_cli::installer::InstallError;
use piphub_cli::runner::{CommandRunner, Invocation};
use piphub_core::protocol::Protocol;

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Serialise tests that change the process working directory.
pub fn lock_cwd() -> MutexGuard<'static, ()> {
    CWD_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Records every invocation with the directory it ran in, failing on demand.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<(Invocation, PathBuf)>>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn failing_on(command: &str) -> Self {
        Self {
            fail_on: Some(command.to_owned()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(Invocation, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|(inv, _)| inv.to_string()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), InstallError> {
        let cwd = std::env::current_dir().unwrap();
        self.calls.lock().unwrap().push((invocation.clone(), cwd));
        if self.fail_on.as_deref() == Some(invocation.to_string().as_str()) {
            return Err(InstallError::Spawn {
                program: invocation.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "simulated failure"),
            });
        }
        Ok(())
    }
}

pub fn config(src: &Path, user: bool) -> Config {
    Config {
        src: src.to_path_buf(),
        pip: "pip".to_owned(),
        protocol: Protocol::Https,
        user,
    }
}

pub fn make_checkout(src: &Path, repo: &str) -> PathBuf {
    let dir = src.join(repo);
    fs::create_dir_all(dir.join(".git")).unwrap();
    fs::write(dir.join("setup.py"), "").unwrap();
    dir
}

pub fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap()
}
