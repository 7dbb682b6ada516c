//! Common test utilities for client integration tests.
//!
//! Provides a mock vocabulary backend served over real HTTP on an
//! ephemeral port, so the reqwest client is exercised end to end.

#![allow(dead_code)]

pub mod fixtures;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use vocab_quiz_client::{AppState, ClientConfig, VocabApi};

/// How the mock backend should behave.
#[derive(Debug, Clone, Default)]
pub struct MockOptions {
    /// Reject requests without `Authorization: Bearer <token>`.
    pub required_token: Option<String>,
    /// Answer every data route with 500.
    pub fail: bool,
    /// Answer the entries route with a body that is not valid JSON.
    pub malformed_entries: bool,
}

/// A running mock backend.
pub struct MockBackend {
    pub addr: SocketAddr,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self::start_with(MockOptions::default()).await
    }

    pub async fn start_with(options: MockOptions) -> Self {
        let app = build_mock_router(Arc::new(options));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn config(&self, token: Option<&str>) -> ClientConfig {
        ClientConfig {
            api_url: self.url(),
            token: token.map(str::to_string),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn api(&self) -> VocabApi {
        VocabApi::new(&self.config(None)).expect("Failed to build client")
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(self.api())
    }
}

/// Address nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    format!("http://{}", addr)
}

/// Address that accepts connections but never answers them.
///
/// The accepted sockets are kept open for the life of the runtime, so a
/// request to this address hangs until the client times out.
pub async fn silent_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("address");

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    format!("http://{}", addr)
}

type Shared = Arc<MockOptions>;

fn build_mock_router(options: Shared) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/vocablist/", get(lists))
        .route("/vocablist/:id", get(list_detail))
        .route("/vocab/entries/list/:id", get(entries))
        .with_state(options)
}

fn guard(options: &MockOptions, headers: &HeaderMap) -> Result<(), Response> {
    if options.fail {
        return Err((StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response());
    }
    if let Some(token) = &options.required_token {
        let expected = format!("Bearer {}", token);
        let given = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        if given != Some(expected.as_str()) {
            return Err((StatusCode::UNAUTHORIZED, "User nicht gefunden").into_response());
        }
    }
    Ok(())
}

async fn lists(State(options): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = guard(&options, &headers) {
        return resp;
    }
    Json(fixtures::list_summaries()).into_response()
}

async fn list_detail(
    State(options): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    if let Err(resp) = guard(&options, &headers) {
        return resp;
    }
    match fixtures::list_detail(id) {
        Some(body) => Json(body).into_response(),
        None => (StatusCode::NOT_FOUND, "list not found").into_response(),
    }
}

async fn entries(
    State(options): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    if let Err(resp) = guard(&options, &headers) {
        return resp;
    }
    if options.malformed_entries {
        return (StatusCode::OK, "[{\"id\": ").into_response();
    }
    match fixtures::entries(id) {
        Some(body) => Json(body).into_response(),
        None => (StatusCode::NOT_FOUND, "list not found").into_response(),
    }
}
