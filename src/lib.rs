//! # atlas-client
//!
//! A typed client for the [Atlas](https://atlasgo.io) schema-management CLI.
//!
//! Option sets for `schema inspect`, `schema diff` and `schema apply` are
//! validated, compiled into an ordered flag sequence and executed as a single
//! external process. The combined output of the tool is returned verbatim;
//! nothing here interprets schemas or output templates.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// A flag shared with a running operation. Setting it kills the external process.
pub type CancellationToken = Arc<AtomicBool>;

pub mod cli;
pub mod client;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;

pub use client::{AtlasClient, AtlasError};
pub use crate::core::compiler::{Invocation, SchemaOperation, ValidationError};
pub use crate::core::config::ClientConfig;
pub use models::{Flag, Format, SchemaApplyOptions, SchemaDiffOptions, SchemaInspectOptions};
pub use system::executor::ExecutionError;
