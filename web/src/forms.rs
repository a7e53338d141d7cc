//! The three form actions. Each handler validates its input, forwards
//! the action to the backend and renders the whole page with the
//! resulting status.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use rag_client::ClientError;

use crate::page::{self, PageView, ResultCard, StatusLine};
use crate::state::AppState;

const NETWORK_ERROR: &str = "Network or server error. Check your backend.";

#[derive(Debug, Deserialize)]
pub struct TextForm {
    #[serde(default)]
    pub text: String,
}

pub async fn index() -> Html<String> {
    Html(page::render(&PageView::default()))
}

pub async fn add_document(
    State(state): State<AppState>,
    Form(form): Form<TextForm>,
) -> Html<String> {
    let mut view = PageView::default();

    if form.text.trim().is_empty() {
        view.document_text = form.text;
        view.add_text_status = Some(StatusLine::error("Please enter text to add."));
        return Html(page::render(&view));
    }

    match state.rag.add_document(&form.text).await {
        Ok(response) => {
            // Input is cleared on success.
            view.add_text_status = Some(StatusLine::ok(format!(
                "Document added successfully! ID: {}",
                response.id
            )));
        }
        Err(ClientError::Api { detail, .. }) => {
            view.document_text = form.text;
            view.add_text_status = Some(StatusLine::error(format!("Error: {detail}")));
        }
        Err(err) => {
            log::error!("add_document failed: {err}");
            view.document_text = form.text;
            view.add_text_status = Some(StatusLine::error(NETWORK_ERROR));
        }
    }

    Html(page::render(&view))
}

pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Html<String> {
    let mut view = PageView::default();

    let file = match read_file_field(&mut multipart).await {
        Ok(file) => file,
        Err(err) => {
            log::error!("failed to read upload form: {err}");
            view.upload_status = Some(StatusLine::error(NETWORK_ERROR));
            return Html(page::render(&view));
        }
    };

    let Some((filename, bytes)) = file else {
        view.upload_status = Some(StatusLine::error("Please select a file to upload."));
        return Html(page::render(&view));
    };

    match state.rag.upload_document(&filename, bytes).await {
        Ok(response) => {
            view.upload_status = Some(StatusLine::ok(format!(
                "File \"{}\" uploaded successfully! ID: {}",
                response.filename, response.id
            )));
        }
        Err(ClientError::Api { detail, .. }) => {
            view.upload_status = Some(StatusLine::error(format!("Error: {detail}")));
        }
        Err(err) => {
            log::error!("upload_document failed: {err}");
            view.upload_status = Some(StatusLine::error(NETWORK_ERROR));
        }
    }

    Html(page::render(&view))
}

/// Pull the `file` field out of the multipart body. A file input left
/// empty still submits the field, with an empty filename; that counts
/// as "no file selected".
async fn read_file_field(
    multipart: &mut Multipart,
) -> Result<Option<(String, Vec<u8>)>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(str::to_string).unwrap_or_default();
        let bytes = field.bytes().await?;

        if filename.is_empty() {
            continue;
        }
        return Ok(Some((filename, bytes.to_vec())));
    }

    Ok(None)
}

pub async fn generate_answer(
    State(state): State<AppState>,
    Form(form): Form<TextForm>,
) -> Html<String> {
    let mut view = PageView {
        query_text: form.text.clone(),
        ..PageView::default()
    };

    if form.text.trim().is_empty() {
        view.query_status = Some(StatusLine::error("Please enter a query."));
        return Html(page::render(&view));
    }

    match state.rag.generate_answer(&form.text).await {
        Ok(response) => {
            view.answer = Some(response.answer);
            view.results = response
                .sources
                .into_iter()
                .enumerate()
                .map(|(index, text)| ResultCard {
                    id: index + 1,
                    text,
                    score: 1.0,
                })
                .collect();
        }
        Err(ClientError::Api { status, detail }) => {
            log::error!("generate_answer returned {status}: {detail}");
            view.query_status = Some(StatusLine::error("Error generating answer."));
        }
        Err(err) => {
            log::error!("generate_answer failed: {err}");
            view.query_status = Some(StatusLine::error(NETWORK_ERROR));
        }
    }

    Html(page::render(&view))
}
