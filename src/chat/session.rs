use serde::Serialize;

use super::response::render_response_html;
use crate::error::{AppError, Notification};

/// Handed out when a request is issued; only the ticket of the most
/// recent request may write its outcome back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatTicket(u64);

impl ChatTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Display state of the chat panel.
#[derive(Debug, Default)]
pub struct ChatSession {
    latest: u64,
    pending: bool,
    response: Option<String>,
    notification: Option<Notification>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatView {
    pub pending: bool,
    pub response: Option<String>,
    pub response_html: Option<String>,
    pub notification: Option<Notification>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new request in flight. The previous answer stays visible
    /// until this one resolves.
    pub fn begin(&mut self) -> ChatTicket {
        self.latest += 1;
        self.pending = true;
        self.notification = None;
        log::debug!("Chat request #{} issued", self.latest);
        ChatTicket(self.latest)
    }

    /// Applies the outcome of `ticket`'s request. Returns `false` when a newer
    /// request was issued in the meantime; the outcome is then discarded.
    pub fn finish(&mut self, ticket: ChatTicket, outcome: &Result<String, AppError>) -> bool {
        if ticket.0 != self.latest {
            log::warn!(
                "Dropping stale chat response #{} (latest is #{})",
                ticket.0,
                self.latest
            );
            return false;
        }

        self.pending = false;
        match outcome {
            Ok(text) => {
                log::info!("Chat request #{} answered ({} chars)", ticket.0, text.len());
                self.response = Some(text.clone());
                self.notification = None;
            }
            Err(e) => {
                log::warn!("Chat request #{} failed: {}", ticket.0, e);
                self.notification = Some(Notification::from(e));
            }
        }
        true
    }

    /// Records a failure that happened before any request was issued.
    pub fn reject(&mut self, err: &AppError) {
        self.notification = Some(Notification::from(err));
    }

    pub fn view(&self) -> ChatView {
        ChatView {
            pending: self.pending,
            response: self.response.clone(),
            response_html: self.response.as_deref().map(render_response_html),
            notification: self.notification.clone(),
        }
    }
}
