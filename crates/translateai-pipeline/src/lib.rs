//! Media translation pipeline
//!
//! [`TranslationPipeline`] runs fetch → transcribe → translate → synthesize
//! for one stored input. [`SubmissionController`] wraps it with the input
//! and output uploads and turns every outcome into a [`PipelineResult`].

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod controller;
mod error;
mod orchestrator;
mod types;

#[cfg(test)]
mod fakes;

use std::sync::Arc;

use stt::SpeechToText;
use translateai_blob::BlobStore;
use translation::Translator;
use tts::TextToSpeech;

pub use controller::{MISSING_FILE_MESSAGE, OUTPUT_FILE_NAME, SUCCESS_MESSAGE, SubmissionController};
pub use error::{PipelineError, Result};
pub use orchestrator::TranslationPipeline;
pub use translateai_blob::StoredObject;
pub use tts::SpeechResponse as SynthesizedAudio;
pub use types::{FormResponse, PipelineResult, UploadedFile};

/// External collaborators the pipeline talks to
///
/// Built once at startup and shared by every submission.
#[derive(Clone)]
pub struct Adapters {
    pub blob: Arc<dyn BlobStore>,
    pub stt: Arc<dyn SpeechToText>,
    pub translator: Arc<dyn Translator>,
    pub tts: Arc<dyn TextToSpeech>,
}
