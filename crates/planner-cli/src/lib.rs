//! Command-line front-end for Patch Planner
//!
//! The binary is a thin wrapper: [`cli::command`] builds the argument tree,
//! [`logging::init`] installs the subscriber and [`commands::run`] writes
//! results to any [`std::io::Write`].

pub mod cli;
pub mod commands;
pub mod logging;
