use super::commons::{self, Session};
use crate::cli::args::DiffArgs;
use anyhow::Result;

/// Runs `atlas schema diff` and prints the planned changes.
pub fn handle(args: DiffArgs, session: &Session) -> Result<()> {
    let opts = args.into_options(&session.config);
    commons::run_operation(session, &opts, |client, opts| client.schema_diff(opts))
}
