//! Server-rendered upload page

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    AppState,
    access::{AuthResult, Credentials},
    extract::ExtractSubmission,
    view::PageState,
};

/// `GET /`
pub async fn index() -> Html<String> {
    Html(PageState::default().render())
}

/// `POST /`: login form
pub async fn login(State(state): State<AppState>, Form(credentials): Form<Credentials>) -> Response {
    let result = state.gate.authenticate(&credentials.name, &credentials.password);

    let status = match &result {
        AuthResult::Granted | AuthResult::Denied => StatusCode::OK,
        AuthResult::Errored(message) => {
            tracing::error!(error = %message, "login could not be checked");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let page = PageState::default().authenticate(&result);

    (status, Html(page.render())).into_response()
}

/// `POST /upload`: upload form posted by the page
pub async fn upload(State(state): State<AppState>, ExtractSubmission(file): ExtractSubmission) -> Html<String> {
    let page = match &file {
        Some(file) => PageState::NoFileSelected.select_file(&file.name).submit(),
        None => PageState::NoFileSelected,
    };

    let result = state.controller.handle_submit(file).await;

    Html(page.complete(result).render())
}
