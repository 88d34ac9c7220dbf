use super::commons::{self, Session};
use crate::cli::args::ApplyArgs;
use anyhow::Result;
use colored::Colorize;

/// Runs `atlas schema apply`.
pub fn handle(args: ApplyArgs, session: &Session) -> Result<()> {
    let opts = args.into_options(&session.config);
    if opts.dry_run {
        eprintln!("{}", "Dry run: no changes will be executed.".yellow());
    }
    commons::run_operation(session, &opts, |client, opts| client.schema_apply(opts))
}
