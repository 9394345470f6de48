//! JSON endpoints used by scripts and the upload page

use axum::{Json, extract::State};
use translateai_pipeline::FormResponse;

use crate::{
    AppState,
    access::AuthResult,
    error::ServerError,
    extract::{ExtractCredentials, ExtractSubmission},
};

/// `POST /api/translate`
pub async fn translate(
    State(state): State<AppState>,
    ExtractSubmission(file): ExtractSubmission,
) -> Json<FormResponse> {
    let result = state.controller.handle_submit(file).await;

    Json(result.into())
}

/// `POST /api/auth`
pub async fn authenticate(
    State(state): State<AppState>,
    ExtractCredentials(credentials): ExtractCredentials,
) -> Result<Json<bool>, ServerError> {
    match state.gate.authenticate(&credentials.name, &credentials.password) {
        AuthResult::Granted => {
            tracing::info!(name = %credentials.name, "login granted");
            Ok(Json(true))
        }
        AuthResult::Denied => {
            tracing::info!(name = %credentials.name, "login denied");
            Ok(Json(false))
        }
        AuthResult::Errored(message) => {
            tracing::error!(error = %message, "login could not be checked");
            Err(ServerError::AccessUnavailable(message))
        }
    }
}
