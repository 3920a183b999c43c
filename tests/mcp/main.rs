use radarr_sonarr_mcp::config::{Config, ResponseFormat, ServerConfig, ServiceConfig};
use radarr_sonarr_mcp::mcp::ArrMcpServer;
use rmcp::model::CallToolResult;
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod tools;

pub const RADARR_KEY: &str = "radarr-test-key";
pub const SONARR_KEY: &str = "sonarr-test-key";

/// Test fixture for MCP integration tests
///
/// Runs one mock HTTP server per service and points the MCP server at them.
pub struct McpTestFixture {
    pub radarr: MockServer,
    pub sonarr: MockServer,
}

impl McpTestFixture {
    pub async fn new() -> Self {
        Self {
            radarr: MockServer::start().await,
            sonarr: MockServer::start().await,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            radarr_config: ServiceConfig {
                api_key: RADARR_KEY.to_string(),
                url: self.radarr.uri(),
                base_path: "/api/v3".to_string(),
            },
            sonarr_config: ServiceConfig {
                api_key: SONARR_KEY.to_string(),
                url: self.sonarr.uri(),
                base_path: "/api/v3".to_string(),
            },
            server: ServerConfig {
                response_format: ResponseFormat::Json,
                request_timeout_secs: 5,
            },
        }
    }

    /// Server answering in JSON
    pub fn server(&self) -> ArrMcpServer {
        ArrMcpServer::new(&self.config()).unwrap()
    }

    /// Server answering in the text format
    pub fn text_server(&self) -> ArrMcpServer {
        self.server().with_format(ResponseFormat::Text)
    }

    /// Answer `GET /api/v3/<endpoint>` on Radarr with `body`.
    pub async fn radarr_get(&self, endpoint: &str, body: Value) {
        mount_get(&self.radarr, endpoint, RADARR_KEY, body).await;
    }

    /// Answer `GET /api/v3/<endpoint>` on Sonarr with `body`.
    pub async fn sonarr_get(&self, endpoint: &str, body: Value) {
        mount_get(&self.sonarr, endpoint, SONARR_KEY, body).await;
    }
}

async fn mount_get(server: &MockServer, endpoint: &str, api_key: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v3/{}", endpoint)))
        .and(header("X-Api-Key", api_key))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ============================================================================
// Assertion Helpers
// ============================================================================

fn tool_text(result: &CallToolResult) -> &str {
    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );
    &result.content[0]
        .as_text()
        .expect("Tool result content should be text")
        .text
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }
    serde_json::from_str(tool_text(result)).expect("Tool result should be valid JSON")
}

/// Extract the text of a successful CallToolResult
pub fn extract_tool_result_text(result: &CallToolResult) -> String {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }
    tool_text(result).to_string()
}

/// Extract the message of a failed CallToolResult
pub fn extract_tool_error_text(result: &CallToolResult) -> String {
    assert_eq!(result.is_error, Some(true), "Expected an error result");
    tool_text(result).to_string()
}
