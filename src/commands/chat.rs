use serde::Deserialize;

use crate::chat::{compose_prompt, ChatContext, ChatView, CompletionBackend, CompletionRequest};
use crate::error::AppError;
use crate::state::{AppState, StateAccess};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub api_key: String,
    pub question: String,
}

/// Sends the question with the full datasets to the completion backend.
///
/// A blank key fails with `MissingCredential` before anything is sent. Every
/// failure is also recorded as a notification on the chat session. No lock
/// is held while the request is in flight.
pub async fn submit_chat(
    state: &AppState,
    backend: &dyn CompletionBackend,
    request: &ChatRequest,
) -> Result<ChatView, AppError> {
    let api_key = request.api_key.trim();
    if api_key.is_empty() {
        let err = AppError::MissingCredential;
        state.chat_session(|s| s.reject(&err))?;
        return Err(err);
    }

    let config = state.config_snapshot()?;
    let datasets = state.datasets();
    let prompt = match compose_prompt(&ChatContext::from_datasets(&datasets), &request.question) {
        Ok(p) => p,
        Err(e) => {
            state.chat_session(|s| s.reject(&e))?;
            return Err(e);
        }
    };
    let completion = CompletionRequest::new(&config.chat, prompt);

    let ticket = state.chat_session(|s| s.begin())?;
    let prompt_chars: usize = completion.messages.iter().map(|m| m.content.len()).sum();
    log::info!(
        "Chat request #{} sent to {} ({} prompt chars)",
        ticket.sequence(),
        config.chat.model,
        prompt_chars
    );

    let outcome = backend.complete(api_key, &completion).await;
    let view = state.chat_session(|s| {
        s.finish(ticket, &outcome);
        s.view()
    })?;

    outcome.map(|_| view)
}

pub fn get_chat_view(state: &AppState) -> Result<ChatView, AppError> {
    state.chat_session(|s| s.view())
}
