//! Mock blob store speaking the upload/download subset of the Vercel Blob API
//!
//! `PUT /store/{name}` stores the body and answers with a public URL that
//! carries a per-upload suffix; `GET /files/{key}` serves it back.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde_json::json;
use tokio_util::sync::CancellationToken;

/// One accepted upload
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub key: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub struct MockBlob {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    addr: SocketAddr,
    fail_fetch: bool,
    upload_count: AtomicU32,
    fetch_count: AtomicU32,
    uploads: Mutex<Vec<Upload>>,
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MockBlob {
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(false).await
    }

    /// Start a store whose downloads all fail with 500
    pub async fn start_failing_fetch() -> anyhow::Result<Self> {
        Self::start_inner(true).await
    }

    async fn start_inner(fail_fetch: bool) -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let state = Arc::new(MockState {
            addr,
            fail_fetch,
            upload_count: AtomicU32::new(0),
            fetch_count: AtomicU32::new(0),
            uploads: Mutex::default(),
            objects: Mutex::default(),
        });

        let app = Router::new()
            .route("/store/{name}", routing::put(handle_put))
            .route("/files/{key}", routing::get(handle_get))
            .with_state(Arc::clone(&state));

        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL to configure as `blob.base_url`
    pub fn base_url(&self) -> String {
        format!("http://{}/store", self.addr)
    }

    pub fn upload_count(&self) -> u32 {
        self.state.upload_count.load(Ordering::Relaxed)
    }

    pub fn fetch_count(&self) -> u32 {
        self.state.fetch_count.load(Ordering::Relaxed)
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.state.uploads.lock().unwrap().clone()
    }
}

impl Drop for MockBlob {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_put(
    State(state): State<Arc<MockState>>,
    Path(name): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "Bearer blob-test-token");
    if !authorized {
        return (StatusCode::FORBIDDEN, "invalid token").into_response();
    }

    let n = state.upload_count.fetch_add(1, Ordering::Relaxed);
    let key = format!("{n}-{name}");
    let content_type = headers
        .get("x-content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    state.objects.lock().unwrap().insert(key.clone(), body.to_vec());
    state.uploads.lock().unwrap().push(Upload {
        name: name.clone(),
        key: key.clone(),
        content_type,
        bytes: body.to_vec(),
    });

    Json(json!({
        "url": format!("http://{}/files/{key}", state.addr),
        "pathname": key,
        "contentType": "application/octet-stream",
    }))
    .into_response()
}

async fn handle_get(State(state): State<Arc<MockState>>, Path(key): Path<String>) -> impl IntoResponse {
    state.fetch_count.fetch_add(1, Ordering::Relaxed);

    if state.fail_fetch {
        return (StatusCode::INTERNAL_SERVER_ERROR, "storage unavailable").into_response();
    }

    match state.objects.lock().unwrap().get(&key) {
        Some(bytes) => bytes.clone().into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
