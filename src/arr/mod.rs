//! REST clients for the Radarr and Sonarr v3 APIs.
//!
//! ## Module Structure
//!
//! - `client`: Shared HTTP plumbing and the endpoints both services expose
//! - `error`: Client error type
//! - `models`: Remote JSON shapes (lenient deserialization)
//! - `radarr` / `sonarr`: Service-specific facades

mod client;
mod error;
pub mod models;
mod radarr;
mod sonarr;

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use client::{
    ArrClient, HistoryQuery, PageQuery, QueryParam, WantedKind, build_http_client,
};
pub use error::ClientError;
pub use radarr::Radarr;
pub use sonarr::Sonarr;

/// One of the two wrapped services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Radarr,
    Sonarr,
}

impl Service {
    pub fn as_str(self) -> &'static str {
        match self {
            Service::Radarr => "radarr",
            Service::Sonarr => "sonarr",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Service::Radarr => "Radarr",
            Service::Sonarr => "Sonarr",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Service selector for tools that can query both services at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServiceSelection {
    Radarr,
    Sonarr,
    Both,
}

impl ServiceSelection {
    /// Services to query, in a stable order.
    pub fn services(self) -> &'static [Service] {
        match self {
            ServiceSelection::Radarr => &[Service::Radarr],
            ServiceSelection::Sonarr => &[Service::Sonarr],
            ServiceSelection::Both => &[Service::Radarr, Service::Sonarr],
        }
    }
}
