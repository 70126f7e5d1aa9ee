use crate::analyzer::dashboard::{build_dashboard, DashboardView};
use crate::error::AppError;
use crate::state::{AppState, StateAccess};

/// Returns the complete dashboard payload for the current selection.
///
/// Recomputed from the immutable datasets on every call.
pub fn get_dashboard(state: &AppState) -> Result<DashboardView, AppError> {
    let selection = state.selection_snapshot()?;
    let mode = state.config_snapshot()?.rate_combination;
    let datasets = state.datasets();
    Ok(build_dashboard(&datasets, &selection, mode))
}
