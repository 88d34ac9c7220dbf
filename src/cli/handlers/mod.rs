// src/cli/handlers/mod.rs

pub mod apply;
pub mod commons;
pub mod diff;
pub mod inspect;

use crate::cli::{Cli, SchemaCommand};
use anyhow::Result;

/// Resolves the configuration and routes the parsed command to its handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);
    let session = commons::Session::resolve(&cli)?;

    match cli.command {
        SchemaCommand::Inspect(args) => inspect::handle(args, &session),
        SchemaCommand::Diff(args) => diff::handle(args, &session),
        SchemaCommand::Apply(args) => apply::handle(args, &session),
    }
}
