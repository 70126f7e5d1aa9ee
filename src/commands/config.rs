use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::{AppState, StateAccess};

pub fn get_config(state: &AppState) -> Result<AppConfig, AppError> {
    state.config_snapshot()
}

/// Replaces the live config. Generator settings only apply to the next
/// `AppState`; datasets already generated stay as they are.
pub fn update_config(state: &AppState, config: AppConfig) -> Result<(), AppError> {
    let mut guard = state.config.lock()?;
    *guard = config;
    log::info!("Configuration updated");
    Ok(())
}
