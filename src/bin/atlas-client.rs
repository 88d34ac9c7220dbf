// src/bin/atlas-client.rs

use atlas_client::{
    cli::{Cli, handlers},
    client::AtlasError,
    system::executor::ExecutionError,
};
use clap::Parser;
use colored::*;

/// The main entry point of the `atlas-client` application.
/// It sets up logging, parses arguments, dispatches to the handler
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = handlers::dispatch(Cli::parse()) {
        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        std::process::exit(exit_code(&e));
    }
}

/// Mirrors the external tool's exit code when it ran and failed.
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<AtlasError>() {
        Some(AtlasError::Execution(ExecutionError::Cancelled { .. })) => 130,
        Some(AtlasError::Execution(exec_err)) => exec_err.exit_code().unwrap_or(1),
        _ => 1,
    }
}
