//! The tantra command-line interface.
//!
//! This module is the entry point for the demonstration binary and
//! orchestrates the library's public parsing surface. No grammar or engine
//! logic lives here; the commands are ordinary external callers of
//! [`crate::json::from_str`].

use std::io::Read;
use std::path::Path;
use std::{fs, io, process};

use clap::Parser;

use crate::cli::args::{Command, TantraArgs};
use crate::json;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = TantraArgs::parse();

    // Dispatch to the appropriate subcommand handler.
    let result = match args.command {
        Command::Check { file } => handle_check(file.as_deref()),
        Command::Format { file, compact } => handle_format(file.as_deref(), compact),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Handles the `check` subcommand.
fn handle_check(path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let (name, text) = read_source(path)?;
    match json::from_str(&text) {
        Ok(value) => {
            output::print_valid(&name, &value);
            Ok(())
        }
        Err(error) => {
            output::print_error(&name, &text, error);
            process::exit(1);
        }
    }
}

/// Handles the `format` subcommand.
fn handle_format(path: Option<&Path>, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (name, text) = read_source(path)?;
    match json::from_str(&text) {
        Ok(value) => {
            output::print_document(&value, compact);
            Ok(())
        }
        Err(error) => {
            output::print_error(&name, &text, error);
            process::exit(1);
        }
    }
}

/// Reads the document to parse, from a file or from stdin.
fn read_source(path: Option<&Path>) -> Result<(String, String), Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok((path.display().to_string(), fs::read_to_string(path)?)),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(("<stdin>".to_string(), text))
        }
    }
}
