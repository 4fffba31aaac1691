#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gemini_models::Client;

pub fn build_gemini_client(base_url: &str) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(base_url)
        .build()
        .unwrap()
}

pub fn sample_models() -> Value {
    json!({
        "models": [
            {
                "name": "models/gemini-pro",
                "displayName": "Gemini Pro",
                "supportedGenerationMethods": ["generateContent", "countTokens"]
            },
            {
                "name": "models/embed-1",
                "displayName": "Embedding 1",
                "supportedGenerationMethods": ["embedContent"]
            },
            {
                "name": "models/imagen-3.0-generate-002",
                "supportedGenerationMethods": ["predict"]
            }
        ],
        "nextPageToken": "ignored"
    })
}

pub async fn mount_list_models(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
