// src/cli/handlers/commons.rs

// Shared plumbing for the schema handlers.

use crate::{
    cli::Cli,
    client::{AtlasClient, AtlasError},
    core::{
        compiler::{Invocation, SchemaOperation},
        config::ClientConfig,
    },
};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// The resolved settings for one CLI run.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: ClientConfig,
    pub print_command: bool,
}

impl Session {
    /// Loads the config file and applies the command-line overrides on top.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::load_default().context("Failed to load the default config")?,
        };
        if let Some(entrypoint) = &cli.entrypoint {
            config.entrypoint = entrypoint.clone();
        }
        if let Some(dir) = &cli.working_dir {
            config.working_dir = Some(dir.clone());
        }
        log::debug!("Resolved client config: {:?}", config);

        Ok(Self {
            config,
            print_command: cli.print_command,
        })
    }
}

/// Runs one client operation and writes its output to stdout.
pub fn run_operation<O, F>(session: &Session, opts: &O, operation: F) -> Result<()>
where
    O: SchemaOperation,
    F: FnOnce(&mut AtlasClient<'_>, &O) -> Result<Vec<u8>, AtlasError>,
{
    if session.print_command {
        let invocation = Invocation::compile(&session.config.entrypoint, opts)?;
        eprintln!("{} {}", "$".dimmed(), invocation.to_string().dimmed());
    }

    let mut client = AtlasClient::new(session.config.clone());
    let output = operation(&mut client, opts)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&output)
        .and_then(|()| stdout.flush())
        .context("Failed to write the tool output to stdout")?;
    Ok(())
}
