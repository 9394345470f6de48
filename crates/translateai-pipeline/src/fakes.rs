//! In-memory adapters that record every call

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use stt::{SpeechToText, SttError, TranscriptionRequest, TranscriptionResponse};
use translateai_blob::{BlobError, BlobStore, StoredObject};
use translation::{TranslationError, TranslationRequest, TranslationResponse, Translator};
use tts::{SpeechRequest, SpeechResponse, TextToSpeech, TtsError};

use crate::Adapters;

#[derive(Default)]
pub struct FakeBlob {
    pub uploads: Mutex<Vec<(StoredObject, Vec<u8>)>>,
    pub fetches: AtomicUsize,
    pub fail_fetch: bool,
    pub fail_put_for: Option<String>,
}

#[async_trait]
impl BlobStore for FakeBlob {
    async fn put(&self, name: &str, body: Vec<u8>, _content_type: &str) -> translateai_blob::Result<StoredObject> {
        if self.fail_put_for.as_deref() == Some(name) {
            return Err(BlobError::ConnectionError(format!("Failed to upload '{name}': refused")));
        }

        let mut uploads = self.uploads.lock().unwrap();
        let object = StoredObject {
            name: name.to_string(),
            url: format!("https://blob.test/{}/{name}", uploads.len()),
        };
        uploads.push((object.clone(), body));
        Ok(object)
    }

    async fn fetch(&self, object: &StoredObject) -> translateai_blob::Result<Vec<u8>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if self.fail_fetch {
            return Err(BlobError::ConnectionError(format!("Failed to fetch '{}': timed out", object.name)));
        }

        self.uploads
            .lock()
            .unwrap()
            .iter()
            .find(|(stored, _)| stored.url == object.url)
            .map(|(_, bytes)| bytes.clone())
            .ok_or_else(|| BlobError::ApiError {
                status: 404,
                message: "not found".to_string(),
            })
    }
}

impl FakeBlob {
    pub fn upload_names(&self) -> Vec<String> {
        self.uploads.lock().unwrap().iter().map(|(o, _)| o.name.clone()).collect()
    }
}

#[derive(Default)]
pub struct FakeStt {
    /// Text returned for every call; `None` makes the call fail
    pub text: Option<String>,
    pub requests: Mutex<Vec<TranscriptionRequest>>,
}

#[async_trait]
impl SpeechToText for FakeStt {
    async fn transcribe(&self, request: TranscriptionRequest) -> stt::Result<TranscriptionResponse> {
        self.requests.lock().unwrap().push(request);

        self.text
            .clone()
            .map(|text| TranscriptionResponse { text })
            .ok_or_else(|| SttError::ProviderApiError {
                status: 500,
                message: "whisper exploded".to_string(),
            })
    }
}

impl FakeStt {
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

pub struct FakeTranslator {
    /// Response returned for every call; `Err` makes the call fail
    pub response: Result<Option<String>, u16>,
    pub requests: Mutex<Vec<TranslationRequest>>,
}

impl Default for FakeTranslator {
    fn default() -> Self {
        Self {
            response: Ok(None),
            requests: Mutex::default(),
        }
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, request: TranslationRequest) -> translation::Result<TranslationResponse> {
        self.requests.lock().unwrap().push(request);

        match &self.response {
            Ok(content) => Ok(TranslationResponse {
                content: content.clone(),
            }),
            Err(status) => Err(TranslationError::Upstream {
                status: *status,
                message: "model overloaded".to_string(),
            }),
        }
    }
}

impl FakeTranslator {
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[derive(Default)]
pub struct FakeTts {
    pub fail: bool,
    pub requests: Mutex<Vec<SpeechRequest>>,
}

#[async_trait]
impl TextToSpeech for FakeTts {
    async fn synthesize(&self, request: SpeechRequest) -> tts::Result<SpeechResponse> {
        let audio = format!("mp3:{}", request.input).into_bytes();
        self.requests.lock().unwrap().push(request);

        if self.fail {
            return Err(TtsError::AuthenticationFailed("invalid api key".to_string()));
        }

        Ok(SpeechResponse {
            audio,
            content_type: "audio/mpeg".to_string(),
        })
    }
}

impl FakeTts {
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// A full set of fakes plus the [`Adapters`] view over them
pub struct Fakes {
    pub blob: Arc<FakeBlob>,
    pub stt: Arc<FakeStt>,
    pub translator: Arc<FakeTranslator>,
    pub tts: Arc<FakeTts>,
}

impl Fakes {
    /// Fakes that translate "Hello" into "Hola"
    pub fn working() -> Self {
        Self::new(
            FakeBlob::default(),
            FakeStt {
                text: Some("Hello".to_string()),
                ..FakeStt::default()
            },
            FakeTranslator {
                response: Ok(Some("Hola".to_string())),
                ..FakeTranslator::default()
            },
            FakeTts::default(),
        )
    }

    pub fn new(blob: FakeBlob, stt: FakeStt, translator: FakeTranslator, tts: FakeTts) -> Self {
        Self {
            blob: Arc::new(blob),
            stt: Arc::new(stt),
            translator: Arc::new(translator),
            tts: Arc::new(tts),
        }
    }

    pub fn adapters(&self) -> Adapters {
        Adapters {
            blob: self.blob.clone(),
            stt: self.stt.clone(),
            translator: self.translator.clone(),
            tts: self.tts.clone(),
        }
    }
}
