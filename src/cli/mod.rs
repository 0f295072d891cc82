//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod report;
pub mod serve;
pub mod status;
pub mod user;

pub use args::{GlobalOptions, TokenArgs};
pub use context::CommandContext;

/// Copilot Dashboard - backend for the GitHub Copilot usage dashboard
#[derive(Parser, Debug)]
#[command(name = "copilot-dashboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Override config file location
    #[arg(long, global = true, env = "COPILOT_DASH_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "COPILOT_DASH_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Override the GitHub API base URL
    #[arg(long, global = true, env = "COPILOT_DASH_API_HOST", hide = true)]
    pub api_host: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on (overrides config and PORT)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Print the usage report for an organization as JSON
    Report {
        /// Organization login
        org: String,

        #[command(flatten)]
        token: TokenArgs,
    },

    /// Print the usage summary for a single user as JSON
    User {
        /// GitHub username
        username: String,

        #[command(flatten)]
        token: TokenArgs,
    },

    /// Show configuration status
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report() {
        let cli = Cli::try_parse_from([
            "copilot-dashboard",
            "report",
            "acme",
            "--token",
            "gho_abc",
            "--debug",
        ])
        .unwrap();

        assert!(cli.debug);
        match cli.command {
            Commands::Report { org, token } => {
                assert_eq!(org, "acme");
                assert_eq!(token.token.as_deref(), Some("gho_abc"));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli =
            Cli::try_parse_from(["copilot-dashboard", "serve", "--bind", "0.0.0.0", "-p", "8080"])
                .unwrap();

        match cli.command {
            Commands::Serve { bind, port } => {
                assert_eq!(bind.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "copilot-dashboard",
            "status",
            "--config",
            "/tmp/dash.yaml",
            "--api-host",
            "http://127.0.0.1:9999",
        ])
        .unwrap();

        assert_eq!(cli.config.as_deref(), Some("/tmp/dash.yaml"));
        assert_eq!(cli.api_host.as_deref(), Some("http://127.0.0.1:9999"));
    }
}
