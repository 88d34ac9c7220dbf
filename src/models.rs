// src/models.rs

use crate::constants::{
    ACTION_APPLY, ACTION_DIFF, ACTION_INSPECT, JSON_TEMPLATE, SQL_TEMPLATE,
};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// --- FLAGS ---

/// A single compiled command-line argument, optionally carrying a value.
///
/// A flag without a value is a boolean switch and renders as one bare token.
/// A flag with a value renders as two tokens: the name, then the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    name: &'static str,
    value: Option<String>,
}

impl Flag {
    /// Creates a value-bearing flag, e.g. `--url <value>`.
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: Some(value.into()),
        }
    }

    /// Creates a bare boolean switch, e.g. `--dry-run`.
    pub fn switch(name: &'static str) -> Self {
        Self { name, value: None }
    }

    /// The flag token, including its leading dashes.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The value of the flag, `None` for switches.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The argv tokens for this flag. Values are passed through unquoted.
    pub fn to_args(&self) -> Vec<String> {
        match &self.value {
            Some(value) => vec![self.name.to_string(), value.clone()],
            None => vec![self.name.to_string()],
        }
    }
}

/// Diagnostic rendering: `--name "value"` or `--name`.
///
/// The value is wrapped in double quotes with no escaping of embedded quotes
/// or whitespace. It is meant for display only and never used to spawn.
impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} \"{}\"", self.name, value),
            None => f.write_str(self.name),
        }
    }
}

// --- FORMAT ---

/// An output template forwarded verbatim to the external tool.
///
/// The template language belongs to Atlas; nothing here parses or validates it.
/// A broken custom template only surfaces as an execution error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Format {
    /// Renders the result as SQL (`{{ sql . }}`).
    Sql,
    /// Renders the result as JSON (`{{ json . }}`).
    Json,
    /// A caller-supplied template.
    Custom(String),
}

impl Format {
    /// Creates a custom format, stripping one layer of surrounding double quotes.
    pub fn custom(template: impl Into<String>) -> Self {
        let template = template.into();
        let unquoted = template.strip_prefix('"').unwrap_or(&template);
        let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
        Self::Custom(unquoted.to_string())
    }

    /// The template string passed as the value of `--format`.
    pub fn template(&self) -> &str {
        match self {
            Self::Sql => SQL_TEMPLATE,
            Self::Json => JSON_TEMPLATE,
            Self::Custom(template) => template,
        }
    }
}

/// `sql` and `json` (any case) select the built-ins, anything else is a custom template.
impl FromStr for Format {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "sql" => Self::Sql,
            "json" => Self::Json,
            _ => Self::custom(s),
        })
    }
}

impl From<String> for Format {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(format) => format,
            Err(never) => match never {},
        }
    }
}

impl From<Format> for String {
    fn from(value: Format) -> Self {
        match value {
            Format::Sql => "sql".to_string(),
            Format::Json => "json".to_string(),
            Format::Custom(template) => template,
        }
    }
}

// --- ACTIONS ---

/// The schema action selected by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// `atlas schema inspect`
    Inspect,
    /// `atlas schema diff`
    Diff,
    /// `atlas schema apply`
    Apply,
}

impl Action {
    /// The action token as passed on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inspect => ACTION_INSPECT,
            Self::Diff => ACTION_DIFF,
            Self::Apply => ACTION_APPLY,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- OPTION SETS ---
// Endpoint fields are opaque URLs: a database URL, an HCL or SQL schema file,
// or a migration directory. They are forwarded as-is.

/// Parameters for inspecting the schema of a target database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaInspectOptions {
    /// URL of the database to inspect. Required.
    pub url: Option<String>,
    /// Schemas to inspect within the target database.
    pub schemas: Vec<String>,
    /// Filter out resources matching this glob pattern.
    pub exclude: Option<String>,
    /// Template used to format the output.
    pub format: Option<Format>,
}

/// Parameters for comparing a current state against a desired state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDiffOptions {
    /// URLs of the current state (`--from`). At least one is required.
    pub current_urls: Vec<String>,
    /// URLs of the desired state (`--to`). At least one is required.
    pub desired_urls: Vec<String>,
    /// URL of the development database. Required.
    pub dev_url: Option<String>,
    /// Schemas to inspect within the target database.
    pub schemas: Vec<String>,
    /// Glob patterns of resources to filter out.
    pub exclude: Vec<String>,
    /// Template used to format the output.
    pub format: Option<Format>,
}

/// Parameters for applying a desired state to a target database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaApplyOptions {
    /// URL of the database to modify. Required.
    pub url: Option<String>,
    /// URLs of the desired state (`--to`). At least one is required.
    pub desired_urls: Vec<String>,
    /// URL of the development database. Required.
    pub dev_url: Option<String>,
    /// Schemas to inspect within the target database.
    pub schemas: Vec<String>,
    /// Glob patterns of resources to filter out.
    pub exclude: Vec<String>,
    /// Template used to format the output.
    pub format: Option<Format>,
    /// Apply without asking for confirmation (`--auto-approve`).
    pub auto_approve: bool,
    /// Print the planned statements without executing them (`--dry-run`).
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FLAG_DRY_RUN, FLAG_URL};

    #[test]
    fn test_flag_with_value_renders_quoted_and_splits_into_two_args() {
        let flag = Flag::new(FLAG_URL, "db://x");
        assert_eq!(flag.to_string(), "--url \"db://x\"");
        assert_eq!(flag.to_args(), vec!["--url", "db://x"]);
        assert_eq!(flag.value(), Some("db://x"));
    }

    #[test]
    fn test_switch_renders_bare() {
        let flag = Flag::switch(FLAG_DRY_RUN);
        assert_eq!(flag.to_string(), "--dry-run");
        assert_eq!(flag.to_args(), vec!["--dry-run"]);
        assert!(flag.value().is_none());
    }

    #[test]
    fn test_flag_value_is_not_escaped() {
        // Known limitation: embedded quotes pass through untouched.
        let flag = Flag::new(FLAG_URL, "a \"b\"");
        assert_eq!(flag.to_string(), "--url \"a \"b\"\"");
    }

    #[test]
    fn test_builtin_templates() {
        assert_eq!(Format::Sql.template(), "{{ sql . }}");
        assert_eq!(Format::Json.template(), "{{ json . }}");
    }

    #[test]
    fn test_custom_format_strips_quotes_once() {
        let format = Format::custom("\"{{ json . }}\"");
        assert_eq!(format.template(), "{{ json . }}");

        let doubled = Format::custom("\"\"{{ json . }}\"\"");
        assert_eq!(doubled.template(), "\"{{ json . }}\"");

        let bare = Format::custom("{{ sql . | split | write }}");
        assert_eq!(bare.template(), "{{ sql . | split | write }}");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("SQL".parse::<Format>(), Ok(Format::Sql));
        assert_eq!("json".parse::<Format>(), Ok(Format::Json));
        assert_eq!(
            "{{ mermaid . }}".parse::<Format>(),
            Ok(Format::Custom("{{ mermaid . }}".to_string()))
        );
    }

    #[test]
    fn test_action_tokens() {
        assert_eq!(Action::Inspect.as_str(), "inspect");
        assert_eq!(Action::Diff.to_string(), "diff");
        assert_eq!(Action::Apply.as_str(), "apply");
    }
}
