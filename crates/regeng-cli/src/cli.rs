//! Command-line definition for the `rge` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Top-level CLI parser for the `rge` binary.
#[derive(Debug, Parser)]
#[command(name = "rge", version, about = "RegEngine - regulatory intelligence dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check liveness of all four backend services
    Health {
        /// Keep polling on the health interval instead of exiting
        #[arg(long)]
        watch: bool,
    },

    /// API key administration (requires the admin key)
    Keys {
        #[command(subcommand)]
        action: KeysCommands,
    },

    /// Submit a document URL for ingestion (requires an API key)
    Ingest {
        /// Absolute URL of the document to ingest
        url: String,
    },

    /// List supported regulatory domains
    Industries,

    /// List compliance checklists
    Checklists {
        /// Only checklists for this industry
        #[arg(long)]
        industry: Option<String>,
    },

    /// Show one checklist with its rules
    Checklist {
        /// Checklist id, e.g. hipaa-v1
        id: String,
    },

    /// Validate a JSON config file against a checklist
    Validate {
        /// Checklist id to validate against
        checklist_id: String,

        /// Path to a JSON file holding the config object
        #[arg(long)]
        config: PathBuf,
    },

    /// List cross-jurisdiction arbitrage opportunities
    Arbitrage {
        #[arg(long)]
        j1: Option<String>,
        #[arg(long)]
        j2: Option<String>,
        #[arg(long)]
        concept: Option<String>,
        /// Minimum relative delta (0.0 to 1.0)
        #[arg(long)]
        rel_delta: Option<f64>,
        #[arg(long)]
        limit: Option<u32>,
        /// Only opportunities observed since this RFC 3339 timestamp
        #[arg(long)]
        since: Option<String>,
    },

    /// List compliance gaps between two jurisdictions
    Gaps {
        #[arg(long)]
        j1: Option<String>,
        #[arg(long)]
        j2: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Debug, Subcommand)]
pub enum KeysCommands {
    /// Issue a new API key (the secret is shown once, here only)
    Create {
        #[arg(long)]
        description: Option<String>,
    },
    /// List issued keys (secrets are never listed)
    List,
    /// Revoke a key by its key_id
    Revoke { key_id: String },
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["rge", "--format", "json", "--verbose", "industries"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Industries));
    }

    #[test]
    fn arbitrage_filters_parse() {
        let cli = Cli::try_parse_from([
            "rge",
            "arbitrage",
            "--j1",
            "EU",
            "--j2",
            "US",
            "--rel-delta",
            "0.2",
            "--limit",
            "25",
        ])
        .expect("cli should parse");
        let Commands::Arbitrage {
            j1,
            j2,
            rel_delta,
            limit,
            ..
        } = cli.command
        else {
            panic!("expected arbitrage");
        };
        assert_eq!(j1.as_deref(), Some("EU"));
        assert_eq!(j2.as_deref(), Some("US"));
        assert_eq!(rel_delta, Some(0.2));
        assert_eq!(limit, Some(25));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["rge", "--format", "xml", "industries"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn keys_subcommands_parse() {
        let cli = Cli::try_parse_from(["rge", "keys", "create", "--description", "svc-a"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Keys {
                action: super::KeysCommands::Create { .. }
            }
        ));
    }
}
