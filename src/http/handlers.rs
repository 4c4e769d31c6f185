//! HTTP handlers.

use axum::{Json, body::Bytes, extract::State};

use super::error::{ApiError, parse_body};
use crate::{
    base::types::{ChatAnswer, ChatQuery, ContactMessage, ContactReceipt, Diagnostics, StatusMessage},
    interaction,
    runtime::Runtime,
};

/// GET / - Liveness check.
pub async fn get_root(State(runtime): State<Runtime>) -> Json<StatusMessage> {
    Json(interaction::health::health(runtime.responder.knowledge()))
}

/// GET /test - Backend and document store diagnostics.
pub async fn get_test(State(runtime): State<Runtime>) -> Json<Diagnostics> {
    Json(interaction::diagnostics::diagnostics(&runtime.config, &runtime.db).await)
}

/// POST /contact - Store a contact form submission.
pub async fn post_contact(State(runtime): State<Runtime>, body: Bytes) -> Result<Json<ContactReceipt>, ApiError> {
    let message: ContactMessage = parse_body(&body)?;
    let receipt = interaction::contact::submit_contact(&runtime.db, message).await?;

    Ok(Json(receipt))
}

/// POST /chat - Answer a question from the knowledge base.
pub async fn post_chat(State(runtime): State<Runtime>, body: Bytes) -> Result<Json<ChatAnswer>, ApiError> {
    let query: ChatQuery = parse_body(&body)?;
    let answer = interaction::chat::chat(&runtime.responder, &query)?;

    Ok(Json(answer))
}
