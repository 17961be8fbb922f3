use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser};

use piphub_cli::commands::config::run_write_config;
use piphub_cli::commands::install::run_install;
use piphub_cli::commands::list::run_list;
use piphub_cli::commands::Action;
use piphub_cli::config::{default_config_path, load_config, Config, Overrides};
use piphub_cli::installer::Installer;
use piphub_cli::runner::SystemRunner;

/// Shortcut for quick installs from GitHub.
///
/// `name` only needs to be given if it differs from `repo`. If the
/// organization, repo and name are all the same (ipython, numpy, cython),
/// the single name is enough:
///
///     piphub ipython numpy cython pydata/pandas jtriley/StarCluster/starcluster
///
/// A package that is already checked out is updated in place.
#[derive(Parser)]
#[command(name = "piphub", version, verbatim_doc_comment)]
struct Cli {
    /// The packages to install: `name`, `org/repo` or `org/repo/name`
    packages: Vec<String>,
    /// Do a `--user` install
    #[arg(long, overrides_with_all = ["user", "no_user"])]
    user: bool,
    /// Don't do a `--user` install
    #[arg(long, overrides_with_all = ["user", "no_user"])]
    no_user: bool,
    /// The pip source directory
    #[arg(long, value_name = "PATH")]
    src: Option<PathBuf>,
    /// Write the default config file to ~/.piphub
    #[arg(long = "config")]
    write_config: bool,
    /// List piphub packages
    #[arg(long)]
    list: bool,
    /// List piphub packages and show their status
    #[arg(long)]
    status: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        let user = if self.user {
            Some(true)
        } else if self.no_user {
            Some(false)
        } else {
            None
        };
        Overrides {
            user,
            src: self.src.clone(),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let cfg_path = default_config_path();
    let persisted = load_config(&cfg_path, Config::from_env())?;
    let mut cfg = persisted.clone();
    cfg.apply(&cli.overrides());
    log::debug!("effective config: {cfg:?}");

    match Action::select(cli.write_config, cli.list, cli.status, cli.packages) {
        Action::WriteConfig => run_write_config(&persisted, &cfg_path)?,
        Action::List => {
            run_list(&cfg.src, false, &SystemRunner)?;
        }
        Action::Status => {
            run_list(&cfg.src, true, &SystemRunner)?;
        }
        Action::Usage => {
            Cli::command().print_help()?;
            return Ok(ExitCode::FAILURE);
        }
        Action::Install(tokens) => {
            let installer = Installer::new(Arc::new(SystemRunner), cfg);
            run_install(&installer, &tokens)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
