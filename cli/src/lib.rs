//! Offline tooling for the portfolio content file.

pub mod cli;
pub mod commands;
