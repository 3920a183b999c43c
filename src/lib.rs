//! radarr-sonarr-mcp - Radarr and Sonarr for AI assistants
//!
//! An MCP (Model Context Protocol) server that exposes the Radarr (movies) and
//! Sonarr (TV series) REST APIs as tools and resources, plus a small CLI to
//! configure and check the connections.
//!
//! ## Module Structure
//!
//! - `arr`: REST clients for the Radarr and Sonarr v3 APIs
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading, environment overrides and saving
//! - `logging`: tracing subscriber setup (stderr only)
//! - `mcp`: Model Context Protocol server implementation

pub mod arr;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mcp;
