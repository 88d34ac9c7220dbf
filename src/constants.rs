// src/constants.rs

/// The program invoked when no entrypoint is configured.
pub const DEFAULT_ENTRYPOINT: &str = "atlas";

/// The sub-command shared by every schema operation.
pub const COMMAND_SCHEMA: &str = "schema";

/// Action token for `atlas schema inspect`.
pub const ACTION_INSPECT: &str = "inspect";
/// Action token for `atlas schema diff`.
pub const ACTION_DIFF: &str = "diff";
/// Action token for `atlas schema apply`.
pub const ACTION_APPLY: &str = "apply";

// Flag vocabulary. These must match the external tool byte-for-byte.

/// URL of the target database.
pub const FLAG_URL: &str = "--url";
/// Schema to restrict the operation to. May repeat.
pub const FLAG_SCHEMA: &str = "--schema";
/// Glob pattern of resources to filter out. May repeat for diff/apply.
pub const FLAG_EXCLUDE: &str = "--exclude";
/// Output template forwarded to the external tool.
pub const FLAG_FORMAT: &str = "--format";
/// Current state URL for `schema diff`.
pub const FLAG_FROM_URL: &str = "--from";
/// Desired state URL.
pub const FLAG_TO_URL: &str = "--to";
/// URL of the development (scratch) database.
pub const FLAG_DEV_URL: &str = "--dev-url";
/// Switch skipping the interactive approval prompt.
pub const FLAG_AUTO_APPROVE: &str = "--auto-approve";
/// Switch that prints the planned changes without executing them.
pub const FLAG_DRY_RUN: &str = "--dry-run";

/// Built-in template rendering the result as SQL.
pub const SQL_TEMPLATE: &str = "{{ sql . }}";
/// Built-in template rendering the result as JSON.
pub const JSON_TEMPLATE: &str = "{{ json . }}";

/// The name of the configuration directory (in ~/.config/).
pub const CONFIG_DIR_NAME: &str = "atlas-client";

/// The name of the configuration file inside the configuration directory.
pub const CONFIG_FILENAME: &str = "config.toml";
