//! CLI action implementations and the order in which flags select them.

pub mod config;
pub mod install;
pub mod list;

/// The single thing one invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `--config`: persist the merged config and exit.
    WriteConfig,
    /// `--list`: print checkout names.
    List,
    /// `--status`: print checkout names with their latest commit.
    Status,
    /// No action flag and no packages: print help and fail.
    Usage,
    /// Install or update each package token, in order.
    Install(Vec<String>),
}

impl Action {
    /// Pick the action from parsed flags.
    ///
    /// `--config` beats `--list`, which beats `--status`, which beats
    /// package tokens.
    #[must_use]
    pub fn select(write_config: bool, list: bool, status: bool, packages: Vec<String>) -> Self {
        if write_config {
            Self::WriteConfig
        } else if list {
            Self::List
        } else if status {
            Self::Status
        } else if packages.is_empty() {
            Self::Usage
        } else {
            Self::Install(packages)
        }
    }
}
