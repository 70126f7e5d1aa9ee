use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::data::types::{
    AttritionRecord, CandidatePoolRecord, CandidateProfileRecord, HiringRecord, InterviewRecord,
    LoaRecord, NewHirePerformanceRecord, RequisitionRecord, TimeToFillRecord,
};
use crate::error::AppError;

/// One exported value. Text is double-quoted, dates are `YYYY-MM-DD`,
/// numbers are written bare.
#[derive(Debug, Clone, PartialEq)]
pub enum CsvCell {
    Text(String),
    Date(NaiveDate),
    Int(i64),
    Float(f64),
}

impl CsvCell {
    fn render(&self) -> String {
        match self {
            CsvCell::Text(s) => format!("\"{}\"", s.replace('"', "\"\"")),
            CsvCell::Date(d) => d.format("%Y-%m-%d").to_string(),
            CsvCell::Int(n) => n.to_string(),
            CsvCell::Float(f) => f.to_string(),
        }
    }
}

fn text(v: impl ToString) -> CsvCell {
    CsvCell::Text(v.to_string())
}

fn int(v: u32) -> CsvCell {
    CsvCell::Int(v as i64)
}

/// A record that can be written as one CSV line under a fixed header.
pub trait CsvRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<CsvCell>;
}

/// Serializes `rows` with a header line of field names. Lines are joined
/// with `\n` and the last row has no trailing newline.
/// An empty slice yields an empty string (no header either).
pub fn to_csv<R: CsvRow>(rows: &[R]) -> Result<String, AppError> {
    if rows.is_empty() {
        return Ok(String::new());
    }

    // Cells arrive pre-quoted so the writer must not quote again.
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(R::HEADERS)?;
    for row in rows {
        wtr.write_record(row.cells().iter().map(CsvCell::render))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Custom(e.to_string()))?;
    let mut out = String::from_utf8(bytes).map_err(|e| AppError::Custom(e.to_string()))?;
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

// ─── Row Mappings ────────────────────────────────────────────────────────────

impl CsvRow for HiringRecord {
    const HEADERS: &'static [&'static str] =
        &["date", "segment", "role", "leader", "planned", "actual"];

    fn cells(&self) -> Vec<CsvCell> {
        vec![
            CsvCell::Date(self.date),
            text(self.segment),
            text(self.role),
            text(self.leader),
            int(self.planned),
            int(self.actual),
        ]
    }
}

impl CsvRow for AttritionRecord {
    const HEADERS: &'static [&'static str] = &["date", "segment", "count", "total", "rate"];

    fn cells(&self) -> Vec<CsvCell> {
        vec![
            CsvCell::Date(self.date()),
            text(self.segment()),
            int(self.count()),
            int(self.total()),
            CsvCell::Float(self.rate()),
        ]
    }
}

impl CsvRow for RequisitionRecord {
    const HEADERS: &'static [&'static str] = &["segment", "role", "leader", "budgeted", "open"];

    fn cells(&self) -> Vec<CsvCell> {
        vec![
            text(self.segment),
            text(self.role),
            text(self.leader),
            int(self.budgeted),
            int(self.open),
        ]
    }
}

impl CsvRow for TimeToFillRecord {
    const HEADERS: &'static [&'static str] = &["segment", "role", "days"];

    fn cells(&self) -> Vec<CsvCell> {
        vec![
            text(self.segment),
            text(self.role),
            CsvCell::Float(self.days),
        ]
    }
}

impl CsvRow for LoaRecord {
    const HEADERS: &'static [&'static str] = &["segment", "count", "total", "impactPercentage"];

    fn cells(&self) -> Vec<CsvCell> {
        vec![
            text(self.segment()),
            int(self.count()),
            int(self.total()),
            CsvCell::Float(self.impact_percentage()),
        ]
    }
}

impl CsvRow for CandidatePoolRecord {
    const HEADERS: &'static [&'static str] = &["segment", "role", "leader", "poolSize"];

    fn cells(&self) -> Vec<CsvCell> {
        vec![
            text(self.segment),
            text(self.role),
            text(self.leader),
            int(self.pool_size),
        ]
    }
}

impl CsvRow for InterviewRecord {
    const HEADERS: &'static [&'static str] = &["segment", "role", "leader", "count"];

    fn cells(&self) -> Vec<CsvCell> {
        vec![
            text(self.segment),
            text(self.role),
            text(self.leader),
            int(self.count),
        ]
    }
}

impl CsvRow for NewHirePerformanceRecord {
    const HEADERS: &'static [&'static str] = &[
        "segment",
        "role",
        "pprScore",
        "tenuredPprScore",
        "payPerformance",
        "tenuredPayPerformance",
    ];

    fn cells(&self) -> Vec<CsvCell> {
        vec![
            text(self.segment),
            text(self.role),
            CsvCell::Float(self.ppr_score),
            CsvCell::Float(self.tenured_ppr_score),
            CsvCell::Float(self.pay_performance),
            CsvCell::Float(self.tenured_pay_performance),
        ]
    }
}

impl CsvRow for CandidateProfileRecord {
    const HEADERS: &'static [&'static str] =
        &["segment", "role", "source", "successRate", "conversionRate"];

    fn cells(&self) -> Vec<CsvCell> {
        vec![
            text(self.segment),
            text(self.role),
            text(self.source),
            CsvCell::Float(self.success_rate),
            CsvCell::Float(self.conversion_rate),
        ]
    }
}
