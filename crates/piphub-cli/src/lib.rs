//! piphub CLI library — command implementations and install orchestration.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

/// CLI action implementations.
pub mod commands;
/// CLI configuration — read/write `~/.piphub`.
pub mod config;
pub mod installer;
pub mod runner;
pub mod workdir;
