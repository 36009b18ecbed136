// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hdict - offline client for the English/Ewe healthcare dictionary.
//!
//! This crate provides the `hdict` CLI: it installs the dictionary into a
//! local SQLite replica, answers searches without a connection, and queues
//! feedback written while offline until connectivity returns.
//!
//! # Main Components
//!
//! - [`sync`] - Remote API, sync engine, feedback queue, connectivity monitor
//! - [`Config`] - Per-data-directory configuration (server URL, timeouts)
//! - [`Error`] - Error types for all operations
//!
//! The storage and query layer lives in `hd-core`.

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod help;

pub mod config;
pub mod error;
pub mod sync;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::sync::SyncKind;
use commands::Context;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    if let Command::Completion { shell } = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "hdict", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = Context::load(cli.dir.as_deref())?;
    match cli.command {
        Command::Search {
            query,
            category,
            lang,
            output,
        } => commands::search::run(&ctx, &query, category, lang, output),
        Command::Show { id, lang, output } => commands::show::run(&ctx, id, lang, output),
        Command::Categories { lang, output } => commands::categories::run(&ctx, lang, output),
        Command::Lang { language, toggle } => commands::lang::run(&ctx, language, toggle),
        Command::Install => commands::sync::run(&ctx, SyncKind::Install),
        Command::Sync => commands::sync::run(&ctx, SyncKind::Refresh),
        Command::Status { output } => commands::status::run(&ctx, output),
        Command::Feedback { fields, offline } => commands::feedback::send(&ctx, &fields, offline),
        Command::Pending { output } => commands::feedback::pending(&ctx, output),
        Command::Replay => commands::feedback::replay(&ctx),
        Command::Watch { initial } => commands::watch::run(&ctx, initial),
        Command::Completion { .. } => Ok(()),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
