pub mod analyzer;
pub mod chat;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod state;

use config::AppConfig;
use error::AppError;
use state::AppState;

/// Builds the application state: generates the datasets once and seeds the
/// selection and chat session with their defaults. The host keeps the
/// returned state for the lifetime of the dashboard.
pub fn init(config: AppConfig) -> Result<AppState, AppError> {
    let state = AppState::new(config)?;
    log::info!(
        "HR dashboard ready: {} records across 9 datasets",
        state.datasets().total_records()
    );
    Ok(state)
}

// ─── E2E Integration Tests ──────────────────────────────────────────────────
