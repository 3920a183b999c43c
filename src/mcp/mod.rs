//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes Radarr and Sonarr to AI
//! assistants like Claude Desktop. Communication happens over stdio.
//!
//! ## Module Structure
//!
//! - `format`: Text rendering of tool results
//! - `helpers`: Validation and reshaping of remote records
//! - `server`: Main MCP server implementation (tools and resources)
//! - `types`: Tool parameter and result types

mod format;
mod helpers;
mod server;
pub mod types;

pub use format::Render;
pub use server::{ArrMcpServer, MOVIES_RESOURCE_URI, SERIES_RESOURCE_URI, run_server};
