//! Mock OpenAI backend serving transcription, chat completion and speech
//!
//! Transcription returns a fixed transcript, chat completion a fixed
//! translation and speech echoes its input as `mp3:<input>` bytes.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Canned answers for one mock instance
pub struct MockOpenAiOptions {
    pub transcript: String,
    /// `None` answers with a `null` message content
    pub translation: Option<String>,
    pub fail_speech: bool,
}

impl Default for MockOpenAiOptions {
    fn default() -> Self {
        Self {
            transcript: "Hello".to_owned(),
            translation: Some("Hola".to_owned()),
            fail_speech: false,
        }
    }
}

pub struct MockOpenAi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    options: MockOpenAiOptions,
    transcription_count: AtomicU32,
    completion_count: AtomicU32,
    speech_count: AtomicU32,
    /// `(filename, model)` of every transcription request
    transcriptions: Mutex<Vec<(String, String)>>,
    completions: Mutex<Vec<Value>>,
    speeches: Mutex<Vec<Value>>,
}

impl MockOpenAi {
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(MockOpenAiOptions::default()).await
    }

    pub async fn start_with(options: MockOpenAiOptions) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            options,
            transcription_count: AtomicU32::new(0),
            completion_count: AtomicU32::new(0),
            speech_count: AtomicU32::new(0),
            transcriptions: Mutex::default(),
            completions: Mutex::default(),
            speeches: Mutex::default(),
        });

        let app = Router::new()
            .route("/v1/audio/transcriptions", routing::post(handle_transcription))
            .route("/v1/chat/completions", routing::post(handle_completion))
            .route("/v1/audio/speech", routing::post(handle_speech))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
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

    /// Base URL including `/v1`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    pub fn transcription_count(&self) -> u32 {
        self.state.transcription_count.load(Ordering::Relaxed)
    }

    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    pub fn speech_count(&self) -> u32 {
        self.state.speech_count.load(Ordering::Relaxed)
    }

    pub fn transcriptions(&self) -> Vec<(String, String)> {
        self.state.transcriptions.lock().unwrap().clone()
    }

    pub fn completions(&self) -> Vec<Value> {
        self.state.completions.lock().unwrap().clone()
    }

    pub fn speeches(&self) -> Vec<Value> {
        self.state.speeches.lock().unwrap().clone()
    }
}

impl Drop for MockOpenAi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_transcription(State(state): State<Arc<MockState>>, mut multipart: Multipart) -> impl IntoResponse {
    state.transcription_count.fetch_add(1, Ordering::Relaxed);

    let mut filename = String::new();
    let mut model = String::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        match name.as_str() {
            "file" => {
                filename = field.file_name().unwrap_or_default().to_owned();
                field.bytes().await.ok();
            }
            "model" => model = field.text().await.unwrap_or_default(),
            _ => {}
        }
    }

    state.transcriptions.lock().unwrap().push((filename, model));

    Json(json!({ "text": state.options.transcript }))
}

async fn handle_completion(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> impl IntoResponse {
    state.completion_count.fetch_add(1, Ordering::Relaxed);
    state.completions.lock().unwrap().push(body);

    Json(json!({
        "id": "chatcmpl-mock",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": state.options.translation },
            "finish_reason": "stop"
        }]
    }))
}

async fn handle_speech(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> impl IntoResponse {
    state.speech_count.fetch_add(1, Ordering::Relaxed);
    let input = body["input"].as_str().unwrap_or_default().to_owned();
    state.speeches.lock().unwrap().push(body);

    if state.options.fail_speech {
        return (StatusCode::SERVICE_UNAVAILABLE, "speech backend down").into_response();
    }

    ([(header::CONTENT_TYPE, "audio/mpeg")], format!("mp3:{input}")).into_response()
}
