//! # Atlas Client
//!
//! The caller-facing facade. Each operation validates its option set,
//! compiles it into an [`Invocation`], runs it once and hands back the combined
//! output of the external tool.
//!
//! ```no_run
//! use atlas_client::{AtlasClient, ClientConfig, Format, SchemaInspectOptions};
//!
//! let mut client = AtlasClient::new(ClientConfig::default());
//! let output = client.schema_inspect(&SchemaInspectOptions {
//!     url: Some("postgres://localhost:5432/app?sslmode=disable".to_string()),
//!     format: Some(Format::Sql),
//!     ..Default::default()
//! })?;
//! println!("{}", String::from_utf8_lossy(&output));
//! # Ok::<(), atlas_client::AtlasError>(())
//! ```

use crate::{
    CancellationToken,
    core::{
        compiler::{Invocation, SchemaOperation, ValidationError},
        config::ClientConfig,
    },
    models::{Flag, SchemaApplyOptions, SchemaDiffOptions, SchemaInspectOptions},
    system::executor::{self, ExecutionError},
};
use thiserror::Error;

/// Any failure of a client operation.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// Required options were missing. Nothing was executed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The external tool could not be run or reported a failure.
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

/// A client for the Atlas schema commands.
///
/// The client remembers the last compiled invocation, so one instance must not
/// be shared between concurrent callers. Use one client per caller.
///
/// When bound to a sink, the combined output of every executed call is
/// appended to it, on success and on failure alike. The sink accumulates
/// across calls; clear it between calls to isolate output.
#[derive(Debug)]
pub struct AtlasClient<'a> {
    config: ClientConfig,
    sink: Option<&'a mut Vec<u8>>,
    cancellation_token: Option<CancellationToken>,
    last: Option<Invocation>,
}

impl<'a> AtlasClient<'a> {
    /// Creates a client that returns output only through the operation result.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            sink: None,
            cancellation_token: None,
            last: None,
        }
    }

    /// Creates a client that also appends all captured output to `sink`.
    pub fn with_sink(config: ClientConfig, sink: &'a mut Vec<u8>) -> Self {
        Self {
            sink: Some(sink),
            ..Self::new(config)
        }
    }

    /// Kills the running external process once `token` is set.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// The configuration this client spawns with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Inspects the schema of the target database.
    pub fn schema_inspect(&mut self, opts: &SchemaInspectOptions) -> Result<Vec<u8>, AtlasError> {
        self.run(opts)
    }

    /// Compares the current state against the desired state.
    pub fn schema_diff(&mut self, opts: &SchemaDiffOptions) -> Result<Vec<u8>, AtlasError> {
        self.run(opts)
    }

    /// Applies the desired state to the target database.
    pub fn schema_apply(&mut self, opts: &SchemaApplyOptions) -> Result<Vec<u8>, AtlasError> {
        self.run(opts)
    }

    /// The diagnostic command line of the last compiled call, if any.
    pub fn command_line(&self) -> Option<String> {
        self.last.as_ref().map(Invocation::to_string)
    }

    /// The flags compiled by the last call. Empty before the first call.
    pub fn flags(&self) -> &[Flag] {
        self.last
            .as_ref()
            .map(|inv| inv.flags.as_slice())
            .unwrap_or(&[])
    }

    /// The last compiled invocation, if any.
    pub fn last_invocation(&self) -> Option<&Invocation> {
        self.last.as_ref()
    }

    fn run<O: SchemaOperation>(&mut self, opts: &O) -> Result<Vec<u8>, AtlasError> {
        // Validation failures leave the previous state untouched.
        let invocation = Invocation::compile(&self.config.entrypoint, opts)?;
        let invocation = self.last.insert(invocation);

        let result = executor::execute(
            invocation,
            self.config.working_dir.as_deref(),
            self.cancellation_token.as_ref(),
        );

        if let Some(sink) = self.sink.as_deref_mut() {
            match &result {
                Ok(output) => sink.extend_from_slice(output),
                Err(e) => sink.extend_from_slice(e.output()),
            }
        }

        result.map_err(AtlasError::from)
    }
}
