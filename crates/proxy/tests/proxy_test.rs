//! Integration tests for the proxy against a mock inference backend.

use alp_common::{BackendConfig, ProxyConfig, SystemConfig};
use alp_proxy::ProxyServer;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Spawn the proxy router on an ephemeral port, pointed at `backend_url`.
async fn spawn_proxy(backend_url: &str, api_key: Option<&str>) -> String {
    let config = SystemConfig {
        proxy: ProxyConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        backend: BackendConfig {
            url: backend_url.to_string(),
            api_key: api_key.map(String::from),
            timeout_secs: 5,
        },
    };

    let router = ProxyServer::new(config).unwrap().router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

fn backend_generate_body() -> Value {
    json!({
        "response": "Qubits hold superpositions.",
        "model": "8bit",
        "metrics": {
            "latency": 512.0,
            "memoryUsage": 58.3,
            "taskComplexity": "Medium",
            "modelUsage": {"full": 2, "8bit": 4, "4bit": 1},
            "memorySavings": 41.5
        }
    })
}

#[tokio::test]
async fn test_generate_forwards_prompt_and_api_key() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(header("X-API-Key", "secret-key"))
        .and(body_json(json!({
            "prompt": "Explain quantum computing.",
            "model": "8bit"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(backend_generate_body()))
        .expect(1)
        .mount(&backend)
        .await;

    let proxy_url = spawn_proxy(&backend.uri(), Some("secret-key")).await;

    let response = reqwest::Client::new()
        .post(format!("{}/generate", proxy_url))
        .json(&json!({"prompt": "Explain quantum computing.", "model": "8bit"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["model"], "8bit");
    assert_eq!(body["metrics"]["latency"], 512.0);
    assert_eq!(body["metrics"]["modelUsage"]["8bit"], 4);
}

#[tokio::test]
async fn test_generate_defaults_missing_model_to_full() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_json(json!({
            "prompt": "hello",
            "model": "full"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(backend_generate_body()))
        .expect(1)
        .mount(&backend)
        .await;

    let proxy_url = spawn_proxy(&backend.uri(), None).await;

    let response = reqwest::Client::new()
        .post(format!("{}/generate", proxy_url))
        .json(&json!({"prompt": "hello"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_generate_rejects_empty_prompt_without_backend_call() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(backend_generate_body()))
        .expect(0)
        .mount(&backend)
        .await;

    let proxy_url = spawn_proxy(&backend.uri(), None).await;

    let response = reqwest::Client::new()
        .post(format!("{}/generate", proxy_url))
        .json(&json!({"prompt": "   "}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "EMPTY_PROMPT");
}

#[tokio::test]
async fn test_generate_rejects_oversized_prompt() {
    let backend = MockServer::start().await;
    let proxy_url = spawn_proxy(&backend.uri(), None).await;

    let response = reqwest::Client::new()
        .post(format!("{}/generate", proxy_url))
        .json(&json!({"prompt": "x".repeat(10_001)}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "PROMPT_TOO_LONG");
}

#[tokio::test]
async fn test_backend_failure_maps_to_bad_gateway() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend)
        .await;

    let proxy_url = spawn_proxy(&backend.uri(), None).await;

    let response = reqwest::Client::new()
        .post(format!("{}/generate", proxy_url))
        .json(&json!({"prompt": "hello"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "BACKEND_UNAVAILABLE");
}

#[tokio::test]
async fn test_stats_passthrough() {
    let backend = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "loaded_models": ["full", "4bit"],
            "memory_usage": 64.0,
            "total_requests": 12,
            "total_memory_saved": 98.5,
            "model_usage": {"full": 4, "8bit": 3, "4bit": 5}
        })))
        .mount(&backend)
        .await;

    let proxy_url = spawn_proxy(&backend.uri(), None).await;

    let response = reqwest::Client::new()
        .get(format!("{}/stats", proxy_url))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["total_requests"], 12);
    assert_eq!(body["model_usage"]["4bit"], 5);
}

#[tokio::test]
async fn test_health_does_not_require_backend() {
    // Point at a port nothing listens on: health must still answer.
    let proxy_url = spawn_proxy("http://127.0.0.1:1", None).await;

    let response = reqwest::Client::new()
        .get(format!("{}/health", proxy_url))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
