mod support;

use std::net::TcpListener;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gemini_models::{ModelLister, Outcome, Result};

use support::{build_gemini_client, mount_list_models, sample_models};

async fn run_against(server: &MockServer) -> (Outcome, String) {
    let uri = server.uri();
    let mut lister = ModelLister::new(Vec::new());
    let outcome = lister
        .run(Some("test-key"), |_key: &str| -> Result<_> {
            Ok(build_gemini_client(&uri).models())
        })
        .await
        .unwrap();
    (outcome, String::from_utf8(lister.into_inner()).unwrap())
}

#[tokio::test]
async fn test_lister_prints_generation_models() {
    let mock_server = MockServer::start().await;
    mount_list_models(&mock_server, sample_models()).await;

    let (outcome, output) = run_against(&mock_server).await;
    assert_eq!(
        outcome,
        Outcome::Listed {
            total: 3,
            matched: 2
        }
    );
    assert_eq!(
        output,
        concat!(
            "List of available models:\n",
            "Model Name: models/gemini-pro\n",
            " - Supported Methods: [\"generateContent\", \"countTokens\"]\n",
            "Model Name: models/imagen-3.0-generate-002\n",
            " - Supported Methods: [\"predict\"]\n",
        )
    );
}

#[tokio::test]
async fn test_lister_reports_api_error_on_one_line() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
        .mount(&mock_server)
        .await;

    let (outcome, output) = run_against(&mock_server).await;
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(
        output,
        "Error listing models: API error (status 403): permission denied\n"
    );
}

#[tokio::test]
async fn test_lister_flattens_structured_api_error() {
    let mock_server = MockServer::start().await;
    let body = r#"{
  "error": {
    "code": 400,
    "message": "API key not valid. Please pass a valid API key.",
    "status": "INVALID_ARGUMENT",
    "details": [
      {
        "@type": "type.googleapis.com/google.rpc.ErrorInfo",
        "reason": "API_KEY_INVALID",
        "domain": "googleapis.com"
      }
    ]
  }
}
"#;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(
            ResponseTemplate::new(400)
                .insert_header("content-type", "application/json; charset=UTF-8")
                .set_body_string(body),
        )
        .mount(&mock_server)
        .await;

    let (outcome, output) = run_against(&mock_server).await;
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(output.lines().count(), 1);
    assert_eq!(
        output,
        "Error listing models: API error (status 400): INVALID_ARGUMENT: \
         API key not valid. Please pass a valid API key.\n"
    );
}

#[tokio::test]
async fn test_lister_reports_empty_error_body_by_reason() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let (outcome, output) = run_against(&mock_server).await;
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(
        output,
        "Error listing models: API error (status 503): Service Unavailable\n"
    );
}

#[tokio::test]
async fn test_lister_reports_unreachable_server() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let mut lister = ModelLister::new(Vec::new());
    let outcome = lister
        .run(Some("test-key"), |_key: &str| -> Result<_> {
            Ok(build_gemini_client(&uri).models())
        })
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Failed);
    let output = String::from_utf8(lister.into_inner()).unwrap();
    assert!(output.starts_with("Error listing models: HTTP client error:"));
    assert_eq!(output.lines().count(), 1);
}

#[tokio::test]
async fn test_lister_output_is_stable_across_runs() {
    let mock_server = MockServer::start().await;
    mount_list_models(&mock_server, sample_models()).await;

    let first = run_against(&mock_server).await;
    let second = run_against(&mock_server).await;
    assert_eq!(first, second);
}
