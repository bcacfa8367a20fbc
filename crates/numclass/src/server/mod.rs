use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::facts::{FactClient, NUMBERS_API_BASE};
use crate::prelude::{eprintln, *};
use numclass_core::classify::{classify, Classification};

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "NUMCLASS_PORT", default_value = "8080")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "NUMCLASS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Base URL of the numeric trivia service
    #[arg(long, env = "NUMCLASS_FACT_API_BASE", default_value = NUMBERS_API_BASE)]
    pub fact_api_base: String,

    /// Timeout in seconds for trivia lookups
    #[arg(long, env = "NUMCLASS_FACT_TIMEOUT", default_value = "10")]
    pub fact_timeout: u64,
}

/// Shared per-process state. The classifier itself is stateless; the only
/// thing requests share is the trivia client.
pub struct AppState {
    facts: FactClient,
}

impl AppState {
    pub fn new(facts: FactClient) -> Self {
        Self { facts }
    }
}

/// Successful classification payload.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<String>,
    pub digit_sum: u32,
    pub fun_fact: String,
}

impl ClassifyResponse {
    pub(crate) fn from_parts(classification: Classification, fun_fact: String) -> Self {
        Self {
            number: classification.number,
            is_prime: classification.is_prime,
            is_perfect: classification.is_perfect,
            properties: classification.properties,
            digit_sum: classification.digit_sum,
            fun_fact,
        }
    }
}

/// Error payload, echoing the raw query value back to the caller.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub number: String,
    pub error: bool,
}

#[derive(Debug, Deserialize)]
struct ClassifyParams {
    number: Option<String>,
}

/// Strict machine-integer parse: no partial parses, no floats, no
/// separators. A missing parameter arrives here as the empty string.
fn parse_number(raw: &str) -> std::result::Result<i64, Error> {
    raw.parse::<i64>()
        .map_err(|_| Error::InvalidNumber(raw.to_string()))
}

pub fn app_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/api/classify-number", get(classify_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn run_serve(options: ServeOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Starting classification server on {}:{}...",
            options.host, options.port
        );
    }

    let addr = format!("{}:{}", options.host, options.port);

    let facts = FactClient::new(
        options.fact_api_base.clone(),
        Duration::from_secs(options.fact_timeout),
    )?;

    let app_router = app_router(Arc::new(AppState::new(facts)));

    if global.verbose {
        eprintln!("Server listening on http://{}", addr);
        eprintln!("Classify endpoint: http://{}/api/classify-number", addr);
        eprintln!("Trivia upstream: {}", options.fact_api_base);
    }

    log::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

async fn classify_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ClassifyParams>,
) -> Response {
    let raw = params.number.unwrap_or_default();

    let number = match parse_number(&raw) {
        Ok(n) => n,
        Err(_) => {
            let body = ErrorResponse {
                number: raw,
                error: true,
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let classification = classify(number);
    let fun_fact = state.facts.fun_fact(number).await;

    Json(ClassifyResponse::from_parts(classification, fun_fact)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use httpmock::prelude::*;
    use tower::ServiceExt;

    fn router_with_fact_base(base_url: String) -> Router {
        let facts = FactClient::new(base_url, Duration::from_secs(2)).unwrap();
        app_router(Arc::new(AppState::new(facts)))
    }

    async fn send(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_parse_number_strict() {
        assert_eq!(parse_number("371").unwrap(), 371);
        assert_eq!(parse_number("-42").unwrap(), -42);
        assert!(parse_number("").is_err());
        assert!(parse_number("abc").is_err());
        assert!(parse_number("12.5").is_err());
        assert!(parse_number("1,000").is_err());
        assert!(parse_number("42 ").is_err());
    }

    #[tokio::test]
    async fn test_classify_endpoint_success() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/371/math");
                then.status(200).body("371 is a narcissistic number.");
            })
            .await;

        let router = router_with_fact_base(server.base_url());
        let (status, body) = send(router, "/api/classify-number?number=371").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["number"], 371);
        assert_eq!(body["is_prime"], false);
        assert_eq!(body["is_perfect"], false);
        assert_eq!(body["properties"], serde_json::json!(["armstrong", "odd"]));
        assert_eq!(body["digit_sum"], 11);
        assert_eq!(body["fun_fact"], "371 is a narcissistic number.");
    }

    #[tokio::test]
    async fn test_classify_endpoint_invalid_input() {
        let router = router_with_fact_base("http://127.0.0.1:9".to_string());
        let (status, body) = send(router, "/api/classify-number?number=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "number": "abc", "error": true }));
    }

    #[tokio::test]
    async fn test_classify_endpoint_missing_parameter() {
        let router = router_with_fact_base("http://127.0.0.1:9".to_string());
        let (status, body) = send(router, "/api/classify-number").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "number": "", "error": true }));
    }

    #[tokio::test]
    async fn test_classify_endpoint_survives_dead_fact_service() {
        let router = router_with_fact_base("http://127.0.0.1:9".to_string());
        let (status, body) = send(router, "/api/classify-number?number=28").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_perfect"], true);
        assert_eq!(body["properties"], serde_json::json!(["even"]));
        assert_eq!(body["fun_fact"], "28 is an interesting number.");
    }
}
