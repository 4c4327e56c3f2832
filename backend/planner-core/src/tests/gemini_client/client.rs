use crate::config::GeminiConfig;
use crate::gemini_client::GeminiClient;

#[test]
fn given_base_without_trailing_slash_when_creating_then_slash_is_added() {
    let client = GeminiClient::new("https://example.com/v1beta").unwrap();

    assert_eq!(client.base_url().as_str(), "https://example.com/v1beta/");
}

#[test]
fn given_default_config_when_creating_then_official_endpoint() {
    let client = GeminiClient::from_config(&GeminiConfig::default()).unwrap();

    assert_eq!(
        client.base_url().as_str(),
        "https://generativelanguage.googleapis.com/v1beta/"
    );
}

#[test]
fn given_unparseable_base_when_creating_then_error() {
    assert!(GeminiClient::new("not a url").is_err());
}
