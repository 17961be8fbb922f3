mod common;

use std::sync::Arc;

use piphub_cli::commands::install::run_install;
use piphub_cli::installer::Installer;
use piphub_core::package_ref::ParseError;
use tempfile::TempDir;

use common::{config, lock_cwd, RecordingRunner};

fn tokens(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn packages_are_installed_in_order() {
    let _lock = lock_cwd();
    let root = TempDir::new().unwrap();
    let runner = Arc::new(RecordingRunner::default());
    let installer = Installer::new(runner.clone(), config(root.path(), false));

    let outcomes = run_install(&installer, &tokens(&["numpy", "pydata/pandas"])).unwrap();

    assert_eq!(outcomes.len(), 2);
    let urls: Vec<String> = runner
        .calls()
        .into_iter()
        .map(|(inv, _)| inv.args.last().unwrap().clone())
        .collect();
    assert_eq!(
        urls,
        [
            "git+https://github.com/numpy/numpy.git#egg=numpy",
            "git+https://github.com/pydata/pandas.git#egg=pandas",
        ]
    );
}

#[test]
fn malformed_token_halts_after_earlier_packages() {
    let _lock = lock_cwd();
    let root = TempDir::new().unwrap();
    let runner = Arc::new(RecordingRunner::default());
    let installer = Installer::new(runner.clone(), config(root.path(), false));

    let err = run_install(&installer, &tokens(&["ipython", "a/b/c/d", "numpy"])).unwrap_err();

    assert_eq!(
        err.downcast_ref::<ParseError>(),
        Some(&ParseError::Malformed("a/b/c/d".to_owned()))
    );
    assert_eq!(runner.commands().len(), 1);
    assert!(runner.commands()[0].ends_with("#egg=ipython"));
}

#[test]
fn malformed_first_token_installs_nothing() {
    let _lock = lock_cwd();
    let root = TempDir::new().unwrap();
    let runner = Arc::new(RecordingRunner::default());
    let installer = Installer::new(runner.clone(), config(root.path(), false));

    assert!(run_install(&installer, &tokens(&["a/b/c/d", "ipython"])).is_err());
    assert!(runner.commands().is_empty());
}

#[test]
fn failed_install_halts_batch() {
    let _lock = lock_cwd();
    let root = TempDir::new().unwrap();
    let first = format!(
        "pip install --src {} -e git+https://github.com/numpy/numpy.git#egg=numpy",
        root.path().display()
    );
    let runner = Arc::new(RecordingRunner::failing_on(&first));
    let installer = Installer::new(runner.clone(), config(root.path(), false));

    let err = run_install(&installer, &tokens(&["numpy", "ipython"])).unwrap_err();

    assert!(err.to_string().contains("numpy"));
    assert_eq!(runner.commands(), [first]);
}
