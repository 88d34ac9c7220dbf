// src/cli/args.rs

use crate::{
    core::config::ClientConfig,
    models::{Format, SchemaApplyOptions, SchemaDiffOptions, SchemaInspectOptions},
};
use clap::Args;

#[derive(Args, Debug, Default, Clone)]
pub struct InspectArgs {
    /// URL of the database to inspect.
    #[arg(long, short)]
    pub url: Option<String>,

    /// Schema to inspect. May be repeated.
    #[arg(long = "schema", short = 's')]
    pub schemas: Vec<String>,

    /// Filter out resources matching the given glob pattern.
    #[arg(long)]
    pub exclude: Option<String>,

    /// Output template: `sql`, `json` or a custom template string.
    #[arg(long)]
    pub format: Option<Format>,
}

impl InspectArgs {
    /// Builds the option set, filling the format from the config when omitted.
    pub fn into_options(self, config: &ClientConfig) -> SchemaInspectOptions {
        SchemaInspectOptions {
            url: self.url,
            schemas: self.schemas,
            exclude: self.exclude,
            format: self.format.or_else(|| config.format.clone()),
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct DiffArgs {
    /// URL of the current state. May be repeated.
    #[arg(long = "from")]
    pub from: Vec<String>,

    /// URL of the desired state. May be repeated.
    #[arg(long = "to")]
    pub to: Vec<String>,

    /// URL of the dev database. Falls back to `dev_url` in the config file.
    #[arg(long)]
    pub dev_url: Option<String>,

    /// Schema to compare. May be repeated.
    #[arg(long = "schema", short = 's')]
    pub schemas: Vec<String>,

    /// Filter out resources matching the given glob pattern. May be repeated.
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Output template: `sql`, `json` or a custom template string.
    #[arg(long)]
    pub format: Option<Format>,
}

impl DiffArgs {
    /// Builds the option set, filling dev URL and format from the config when omitted.
    pub fn into_options(self, config: &ClientConfig) -> SchemaDiffOptions {
        SchemaDiffOptions {
            current_urls: self.from,
            desired_urls: self.to,
            dev_url: self.dev_url.or_else(|| config.dev_url.clone()),
            schemas: self.schemas,
            exclude: self.exclude,
            format: self.format.or_else(|| config.format.clone()),
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct ApplyArgs {
    /// URL of the database to modify.
    #[arg(long, short)]
    pub url: Option<String>,

    /// URL of the desired state. May be repeated.
    #[arg(long = "to")]
    pub to: Vec<String>,

    /// URL of the dev database. Falls back to `dev_url` in the config file.
    #[arg(long)]
    pub dev_url: Option<String>,

    /// Schema to modify. May be repeated.
    #[arg(long = "schema", short = 's')]
    pub schemas: Vec<String>,

    /// Filter out resources matching the given glob pattern. May be repeated.
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Output template: `sql`, `json` or a custom template string.
    #[arg(long)]
    pub format: Option<Format>,

    /// Apply the changes without prompting for approval.
    #[arg(long)]
    pub auto_approve: bool,

    /// Print the SQL statements without executing them.
    #[arg(long)]
    pub dry_run: bool,
}

impl ApplyArgs {
    /// Builds the option set, filling dev URL and format from the config when omitted.
    pub fn into_options(self, config: &ClientConfig) -> SchemaApplyOptions {
        SchemaApplyOptions {
            url: self.url,
            desired_urls: self.to,
            dev_url: self.dev_url.or_else(|| config.dev_url.clone()),
            schemas: self.schemas,
            exclude: self.exclude,
            format: self.format.or_else(|| config.format.clone()),
            auto_approve: self.auto_approve,
            dry_run: self.dry_run,
        }
    }
}
