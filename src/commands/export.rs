use std::time::Instant;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::AppError;
use crate::export::bundle_datasets;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub path: String,
    pub file_name: String,
    pub size_bytes: u64,
    pub duration_ms: u64,
}

/// Writes every dataset (unfiltered) as CSV into one ZIP archive at `path`.
/// `date` only names the archive.
pub fn export_datasets_zip(
    state: &AppState,
    path: String,
    date: NaiveDate,
) -> Result<ExportResult, AppError> {
    let start = Instant::now();

    let datasets = state.datasets();
    let bundle = bundle_datasets(&datasets, date)?;

    std::fs::write(&path, &bundle.bytes)?;

    log::info!(
        "Exported {} ({} bytes) to {}",
        bundle.file_name,
        bundle.bytes.len(),
        path
    );

    Ok(ExportResult {
        path,
        file_name: bundle.file_name,
        size_bytes: bundle.bytes.len() as u64,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
