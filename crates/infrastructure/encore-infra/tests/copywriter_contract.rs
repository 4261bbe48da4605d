use encore_core::{DescriptionRequest, EventCategory};
use encore_infra::{GeminiCopywriter, EMPTY_RESPONSE_FALLBACK, SERVICE_ERROR_FALLBACK};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-2.5-flash";

fn request() -> DescriptionRequest {
    DescriptionRequest {
        title: "Demo Launch".into(),
        category: EventCategory::Technology,
        key_details: "speaker: Ana; free snacks".into(),
    }
}

fn copywriter_for(base_url: &str) -> GeminiCopywriter {
    GeminiCopywriter::new(
        reqwest::Client::new(),
        base_url,
        MODEL,
        Some("test-key".into()),
    )
}

#[tokio::test]
async fn successful_generation_returns_the_service_prose() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}:generateContent")))
        .and(query_param("key", "test-key"))
        .and(body_string_contains("Demo Launch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Uma noite inesquecível espera por você." }] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = copywriter_for(&server.uri())
        .generate_description(&request())
        .await;
    assert_eq!(text, "Uma noite inesquecível espera por você.");
}

#[tokio::test]
async fn empty_content_maps_to_the_retry_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let text = copywriter_for(&server.uri())
        .generate_description(&request())
        .await;
    assert_eq!(text, EMPTY_RESPONSE_FALLBACK);
}

#[tokio::test]
async fn service_errors_map_to_the_manual_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let text = copywriter_for(&server.uri())
        .generate_description(&request())
        .await;
    assert_eq!(text, SERVICE_ERROR_FALLBACK);
}

#[tokio::test]
async fn unreachable_service_maps_to_the_manual_fallback() {
    // Nothing listens on this port; the connection itself fails.
    let text = copywriter_for("http://127.0.0.1:9")
        .generate_description(&request())
        .await;
    assert_eq!(text, SERVICE_ERROR_FALLBACK);
}

#[tokio::test]
async fn missing_api_key_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let copywriter = GeminiCopywriter::new(reqwest::Client::new(), server.uri(), MODEL, None);
    let text = copywriter.generate_description(&request()).await;
    assert_eq!(text, SERVICE_ERROR_FALLBACK);
}
