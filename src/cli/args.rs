//! Defines the command-line arguments and subcommands for the tantra CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "tantra",
    version,
    about = "Validate and re-render JSON documents with a backtracking combinator grammar."
)]
pub struct TantraArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a document and report whether it is valid JSON.
    Check {
        /// The file to check; stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Parse a document and print it re-rendered.
    Format {
        /// The file to format; stdin when omitted.
        file: Option<PathBuf>,
        /// Emit compact single-line output instead of indented.
        #[arg(long)]
        compact: bool,
    },
}
