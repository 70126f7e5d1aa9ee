pub mod client;
pub mod prompt;
pub mod response;
pub mod session;

pub use client::{
    parse_completion, ChatMessage, CompletionBackend, CompletionRequest, HttpCompletionClient,
};
pub use prompt::{compose_prompt, ChatContext};
pub use response::render_response_html;
pub use session::{ChatSession, ChatTicket, ChatView};
