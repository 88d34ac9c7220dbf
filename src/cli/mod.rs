//! # Command Line Interface
//!
//! A thin front end over [`AtlasClient`](crate::client::AtlasClient). Every
//! sub-command maps its flags one-to-one onto an option set and prints the
//! combined output of the external tool to stdout.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod args;
pub mod handlers;

use args::{ApplyArgs, DiffArgs, InspectArgs};

/// atlas-client: inspect, diff and apply database schemas through the Atlas CLI.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
#[command(
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
pub struct Cli {
    /// Path to the config file. Defaults to `~/.config/atlas-client/config.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Program to invoke instead of the configured entrypoint.
    #[arg(long, global = true)]
    pub entrypoint: Option<String>,

    /// Working directory for the external tool.
    #[arg(long, global = true)]
    pub working_dir: Option<PathBuf>,

    /// Print the compiled command line to stderr before running it.
    #[arg(long, global = true)]
    pub print_command: bool,

    #[command(subcommand)]
    pub command: SchemaCommand,
}

/// The schema operations exposed on the command line.
#[derive(Subcommand, Debug)]
pub enum SchemaCommand {
    /// Inspect the schema of a database.
    Inspect(InspectArgs),
    /// Compare two schema states.
    Diff(DiffArgs),
    /// Apply a desired schema state to a database.
    Apply(ApplyArgs),
}
