use std::io::Write as _;

use chrono::NaiveDate;

use super::csv_export::{to_csv, CsvRow};
use crate::data::types::Datasets;
use crate::error::AppError;

/// A finished archive, ready to be written wherever the host wants it.
#[derive(Debug, Clone)]
pub struct ExportBundle {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// `hr-analytics-data-2025-06-30.zip`
pub fn archive_file_name(date: NaiveDate) -> String {
    format!("hr-analytics-data-{}.zip", date.format("%Y-%m-%d"))
}

fn entry<R: CsvRow>(name: &str, rows: &[R]) -> Result<(String, String), AppError> {
    Ok((format!("{}.csv", name), to_csv(rows)?))
}

/// Serializes all nine datasets to CSV and zips them (Deflated), one entry per dataset.
pub fn bundle_datasets(datasets: &Datasets, date: NaiveDate) -> Result<ExportBundle, AppError> {
    let entries = [
        entry("hiring", &datasets.hiring)?,
        entry("attrition", &datasets.attrition)?,
        entry("requisition", &datasets.requisition)?,
        entry("timeToFill", &datasets.time_to_fill)?,
        entry("loa", &datasets.loa)?,
        entry("candidatePool", &datasets.candidate_pool)?,
        entry("interview", &datasets.interview)?,
        entry("newHirePerformance", &datasets.new_hire_performance)?,
        entry("candidateProfile", &datasets.candidate_profile)?,
    ];

    let cursor = std::io::Cursor::new(Vec::new());
    let mut zip = zip::ZipWriter::new(cursor);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for (filename, content) in &entries {
        zip.start_file(filename.as_str(), options)?;
        zip.write_all(content.as_bytes())?;
    }

    let cursor = zip.finish()?;
    let bytes = cursor.into_inner();

    Ok(ExportBundle {
        file_name: archive_file_name(date),
        bytes,
    })
}
