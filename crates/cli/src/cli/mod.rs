// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::help;
use crate::sync::Connectivity;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use hd_core::Language;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "hdict")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Offline English/Ewe healthcare dictionary")]
#[command(
    long_about = "Offline English/Ewe healthcare dictionary.\n\n\
    Download the dictionary once, then search it without a connection. \
    Feedback written while offline is queued and submitted when you reconnect."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Data directory (default: $HDICT_DIR, then ~/.local/share/healthdict)
    #[arg(long = "dir", global = true, value_name = "path")]
    pub dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Dictionary
    // ─────────────────────────────────────────────────────────────────────────
    /// Search the offline dictionary
    #[command(after_help = colors::examples("\
Examples:
  hdict search malaria          Terms whose name or definition mentions malaria
  hdict search -c 2             Every term in category 2
  hdict search fever -l ewe     Search the Ewe names and definitions
  hdict search heart -o json    Results as JSON"))]
    Search {
        /// Text to look for (empty matches every term)
        query: Vec<String>,

        /// Only terms in this category
        #[arg(long, short = 'c', value_name = "id")]
        category: Option<i64>,

        /// Language to search and display (default: saved preference)
        #[arg(long, short = 'l')]
        lang: Option<Language>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show one term
    Show {
        /// Term ID
        id: i64,

        /// Display language (default: saved preference)
        #[arg(long, short = 'l')]
        lang: Option<Language>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List categories
    Categories {
        /// Display language (default: saved preference)
        #[arg(long, short = 'l')]
        lang: Option<Language>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Print, set, or toggle the language preference
    Lang {
        /// New language (en or ewe)
        language: Option<Language>,

        /// Switch between English and Ewe
        #[arg(long, conflicts_with = "language")]
        toggle: bool,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Offline & Sync
    // ─────────────────────────────────────────────────────────────────────────
    /// Download the dictionary for offline use
    Install,

    /// Refresh the offline dictionary
    Sync,

    /// Show offline data status
    Status {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Send feedback about a term, queueing it when offline
    #[command(after_help = colors::examples("\
Examples:
  hdict feedback -f term_id=4 -f feedback_type=correction -f comment=\"Typo\"
  hdict feedback -f comment=\"Add more terms\" --offline"))]
    Feedback {
        /// Feedback field, repeatable
        #[arg(long = "field", short = 'f', value_name = "key=value", required = true)]
        fields: Vec<String>,

        /// Queue without trying the server
        #[arg(long)]
        offline: bool,
    },

    /// List queued feedback
    Pending {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Submit queued feedback now
    Replay,

    /// Follow connectivity changes read from stdin ("online" / "offline" lines)
    Watch {
        /// Connectivity at startup
        #[arg(long, default_value = "online")]
        initial: Connectivity,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
