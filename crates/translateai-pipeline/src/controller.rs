use std::sync::Arc;

use translateai_blob::{BlobStore, StoredObject};

use crate::{
    Adapters,
    error::{PipelineError, Result},
    orchestrator::TranslationPipeline,
    types::{PipelineResult, UploadedFile},
};

/// Name every translated file is stored under
pub const OUTPUT_FILE_NAME: &str = "translateIA-output.mp3";

/// Message returned when the form carried no file
pub const MISSING_FILE_MESSAGE: &str = "El archivo es null";

/// Message shown next to a successful result
pub const SUCCESS_MESSAGE: &str = "Archivo pusheado con éxito";

/// Handles one upload form submission end to end
///
/// This is the only place pipeline errors are caught: every failure becomes
/// a [`PipelineResult::Failed`] carrying the original message. The input
/// object is not removed from the store when a later step fails.
pub struct SubmissionController {
    blob: Arc<dyn BlobStore>,
    pipeline: TranslationPipeline,
}

impl SubmissionController {
    pub fn new(adapters: Adapters) -> Self {
        Self {
            blob: Arc::clone(&adapters.blob),
            pipeline: TranslationPipeline::new(adapters),
        }
    }

    pub async fn handle_submit(&self, file: Option<UploadedFile>) -> PipelineResult {
        match self.run(file).await {
            Ok(output) => {
                tracing::info!(name = %output.name, url = %output.url, "translation stored");
                PipelineResult::Completed { output }
            }
            Err(e) => {
                tracing::warn!(step = e.step(), error = %e, "submission failed");
                PipelineResult::Failed { message: e.to_string() }
            }
        }
    }

    async fn run(&self, file: Option<UploadedFile>) -> Result<StoredObject> {
        let file = file.ok_or(PipelineError::MissingFile)?;

        tracing::info!(name = %file.name, bytes = file.bytes.len(), "submission received");

        let input = self
            .blob
            .put(&file.name, file.bytes, &file.content_type)
            .await
            .map_err(PipelineError::Upload)?;

        let speech = self.pipeline.translate(&input).await?;

        self.blob
            .put(OUTPUT_FILE_NAME, speech.audio, &speech.content_type)
            .await
            .map_err(PipelineError::Upload)
    }
}
