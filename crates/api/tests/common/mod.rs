//! Shared helpers for HTTP-level integration tests.
//!
//! Provides a scripted [`FakeGateway`] standing in for the summarization
//! webhook, token minting for authenticated requests, and a
//! `build_test_app` that mirrors the production router construction.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use recap_api::auth::jwt::{Claims, JwtConfig};
use recap_api::config::ServerConfig;
use recap_api::routes;
use recap_api::state::AppState;
use recap_core::thumbnail::Thumbnail;
use recap_core::types::OwnerId;
use recap_n8n::client::SummaryGateway;
use recap_n8n::error::GatewayError;
use recap_n8n::payload::SummaryPayload;

/// HMAC secret shared between minted test tokens and the test config.
pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

// ---------------------------------------------------------------------------
// Scripted gateway
// ---------------------------------------------------------------------------

/// What a [`FakeGateway`] returns when invoked.
pub enum GatewayScript {
    /// Resolve with the given payload.
    Success(SummaryPayload),
    /// Fail with a transport error.
    TransportFailure(String),
    /// Fail with a protocol violation naming a missing field.
    MissingField(&'static str),
}

/// Scripted stand-in for the summarization webhook.
///
/// Records every video reference it is asked about so tests can assert
/// how often (and with what) the outbound call was made.
pub struct FakeGateway {
    script: GatewayScript,
    calls: AtomicUsize,
    requests: Mutex<Vec<String>>,
}

impl FakeGateway {
    pub fn succeeding(payload: SummaryPayload) -> Self {
        Self::new(GatewayScript::Success(payload))
    }

    pub fn failing_transport(detail: &str) -> Self {
        Self::new(GatewayScript::TransportFailure(detail.to_string()))
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::new(GatewayScript::MissingField(field))
    }

    fn new(script: GatewayScript) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of times `request_summary` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Video references passed to `request_summary`, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryGateway for FakeGateway {
    async fn request_summary(
        &self,
        video_reference: &str,
    ) -> Result<SummaryPayload, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push(video_reference.to_string());

        match &self.script {
            GatewayScript::Success(payload) => Ok(payload.clone()),
            GatewayScript::TransportFailure(detail) => Err(GatewayError::Transport {
                detail: detail.clone(),
            }),
            GatewayScript::MissingField(field) => Err(GatewayError::Protocol { field }),
        }
    }
}

/// A plausible webhook payload with three thumbnail resolutions.
///
/// The 640x480 candidate has the largest pixel area and should win
/// selection.
pub fn sample_payload() -> SummaryPayload {
    SummaryPayload {
        title: "How Rust Ownership Works".to_string(),
        summary: "## Key points\n\n- Ownership moves values\n- Borrows are checked at compile time"
            .to_string(),
        thumbnails: vec![
            Thumbnail {
                url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg".to_string(),
                width: 120,
                height: 90,
            },
            Thumbnail {
                url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/sddefault.jpg".to_string(),
                width: 640,
                height: 480,
            },
            Thumbnail {
                url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg".to_string(),
                width: 320,
                height: 180,
            },
        ],
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        webhook_url: "http://localhost:5678/webhook/summarize".to_string(),
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and gateway.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool, gateway: Arc<dyn SummaryGateway>) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
        gateway,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:3000".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// Mint a valid bearer token for the given owner, expiring in an hour.
pub fn auth_token(owner: OwnerId) -> String {
    mint_token(owner, 3600, TEST_JWT_SECRET)
}

/// Mint a token with an arbitrary expiry offset and secret.
pub fn mint_token(owner: OwnerId, exp_offset_secs: i64, secret: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: owner,
        exp: now + exp_offset_secs,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
