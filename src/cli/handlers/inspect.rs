use super::commons::{self, Session};
use crate::cli::args::InspectArgs;
use anyhow::Result;

/// Runs `atlas schema inspect` and prints the inspected schema.
pub fn handle(args: InspectArgs, session: &Session) -> Result<()> {
    let opts = args.into_options(&session.config);
    commons::run_operation(session, &opts, |client, opts| client.schema_inspect(opts))
}
