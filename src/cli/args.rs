//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `serve`: Start the MCP server on stdio (alias `start`)
//! - `status`: Show the effective configuration, optionally probing each service
//! - `configure`: Write connection settings to the config file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::ResponseFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path to the config file (default: ~/.config/radarr-sonarr-mcp/config.json)
    #[arg(long, global = true, env = "RADARR_SONARR_MCP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Response format for tool results (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<ResponseFormat>,
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Query each configured service and report whether it is reachable
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Default, Args)]
pub struct ConfigureCommand {
    /// Radarr URL, e.g. http://localhost:7878
    #[arg(long)]
    pub radarr_url: Option<String>,

    /// Radarr API key
    #[arg(long)]
    pub radarr_api_key: Option<String>,

    /// Radarr API base path (default: /api/v3)
    #[arg(long)]
    pub radarr_base_path: Option<String>,

    /// Sonarr URL, e.g. http://localhost:8989
    #[arg(long)]
    pub sonarr_url: Option<String>,

    /// Sonarr API key
    #[arg(long)]
    pub sonarr_api_key: Option<String>,

    /// Sonarr API base path (default: /api/v3)
    #[arg(long)]
    pub sonarr_base_path: Option<String>,

    /// Default response format for tool results
    #[arg(long, value_enum)]
    pub format: Option<ResponseFormat>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start MCP server for AI assistants
    #[command(alias = "start")]
    Serve(ServeCommand),
    /// Show the effective configuration
    Status(StatusCommand),
    /// Save Radarr/Sonarr connection settings to the config file
    Configure(ConfigureCommand),
}
