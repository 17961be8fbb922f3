//! Core domain types for piphub.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod checkout;
pub mod package_ref;
pub mod protocol;
