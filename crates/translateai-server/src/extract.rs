//! Request extractors that validate input at the HTTP boundary

use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request, multipart::MultipartError},
    http::StatusCode,
};
use translateai_pipeline::UploadedFile;

use crate::{access::Credentials, error::ServerError};

/// Multipart field carrying the uploaded media
const FILE_FIELD: &str = "file";

/// Name used when the file part carries no filename
const FALLBACK_FILE_NAME: &str = "file";

/// The `file` part of an upload form, if one was really attached
///
/// Browsers submit an empty part with no filename when the user picked
/// nothing; that is reported as `None`. Only the first `file` part counts.
pub struct ExtractSubmission(pub Option<UploadedFile>);

impl<S> FromRequest<S> for ExtractSubmission
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| ServerError::InvalidRequest(format!("Failed to parse multipart form: {}", e.body_text())))?;

        while let Some(field) = multipart.next_field().await.map_err(field_error)? {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let filename = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map_err(field_error)?;

            if filename.is_empty() && bytes.is_empty() {
                tracing::debug!("empty file part received");
                return Ok(Self(None));
            }

            let name = if filename.is_empty() {
                FALLBACK_FILE_NAME.to_string()
            } else {
                filename
            };

            let mut file = UploadedFile::new(name, bytes.to_vec());
            if let Some(content_type) = content_type.filter(|ct| ct != "application/octet-stream") {
                file.content_type = content_type;
            }

            return Ok(Self(Some(file)));
        }

        Ok(Self(None))
    }
}

fn field_error(e: MultipartError) -> ServerError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge(e.body_text())
    } else {
        ServerError::InvalidRequest(format!("Failed to read multipart field: {}", e.body_text()))
    }
}

/// Login credentials sent either as JSON or as an urlencoded form
pub struct ExtractCredentials(pub Credentials);

impl<S> FromRequest<S> for ExtractCredentials
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = request
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let credentials = if is_json {
            Json::<Credentials>::from_request(request, state)
                .await
                .map_err(|e| ServerError::InvalidRequest(e.body_text()))?
                .0
        } else {
            Form::<Credentials>::from_request(request, state)
                .await
                .map_err(|e| ServerError::InvalidRequest(e.body_text()))?
                .0
        };

        Ok(Self(credentials))
    }
}
