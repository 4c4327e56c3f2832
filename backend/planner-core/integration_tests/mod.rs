mod credential_flow;
mod gemini_client;
mod pipeline_flow;

/// A key that passes the format check.
pub const TEST_KEY: &str = "AIzaSyD-integration-0123456789abcdef";

/// Base URL the client should use for a mock server.
pub fn base_url(server: &wiremock::MockServer) -> String {
    format!("{}/v1beta", server.uri())
}
