//! Filter bar selection and the permissive-match record predicate.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::data::types::{
    AttritionRecord, CandidatePoolRecord, CandidateProfileRecord, HiringRecord, InterviewRecord,
    Leader, LoaRecord, NewHirePerformanceRecord, RequisitionRecord, Role, Segment,
    TimeToFillRecord,
};
use crate::error::AppError;

const ALL_LABEL: &str = "All";

// ─── Filter<T> ───────────────────────────────────────────────────────────────

/// One filter bar dropdown: either no constraint or a single category.
/// On the wire this is `"All"` or the category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    Any,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::Any
    }
}

impl<T: PartialEq> Filter<T> {
    /// A record without the dimension (`None`) always passes.
    pub fn admits(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Filter::Any, _) => true,
            (Filter::Only(_), None) => true,
            (Filter::Only(wanted), Some(v)) => wanted == v,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Filter::Any)
    }
}

impl<T: Serialize> Serialize for Filter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Filter::Any => serializer.serialize_str(ALL_LABEL),
            Filter::Only(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for Filter<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == ALL_LABEL {
            return Ok(Filter::Any);
        }
        raw.parse()
            .map(Filter::Only)
            .map_err(serde::de::Error::custom)
    }
}

// ─── DateRange ───────────────────────────────────────────────────────────────

/// Inclusive `[from, to]` range; construction rejects `from > to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = AppError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.from, raw.to)
    }
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, AppError> {
        if from > to {
            return Err(AppError::InvalidDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn start(&self) -> NaiveDate {
        self.from
    }

    pub fn end(&self) -> NaiveDate {
        self.to
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

// ─── Dimensions ──────────────────────────────────────────────────────────────

/// Categorical dimensions a record carries. Only the segment is mandatory.
pub trait Dimensions {
    fn segment(&self) -> Segment;

    fn role(&self) -> Option<Role> {
        None
    }

    fn leader(&self) -> Option<Leader> {
        None
    }

    fn date(&self) -> Option<NaiveDate> {
        None
    }
}

impl Dimensions for HiringRecord {
    fn segment(&self) -> Segment {
        self.segment
    }
    fn role(&self) -> Option<Role> {
        Some(self.role)
    }
    fn leader(&self) -> Option<Leader> {
        Some(self.leader)
    }
    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

impl Dimensions for AttritionRecord {
    fn segment(&self) -> Segment {
        AttritionRecord::segment(self)
    }
    fn date(&self) -> Option<NaiveDate> {
        Some(AttritionRecord::date(self))
    }
}

impl Dimensions for RequisitionRecord {
    fn segment(&self) -> Segment {
        self.segment
    }
    fn role(&self) -> Option<Role> {
        Some(self.role)
    }
    fn leader(&self) -> Option<Leader> {
        Some(self.leader)
    }
}

impl Dimensions for TimeToFillRecord {
    fn segment(&self) -> Segment {
        self.segment
    }
    fn role(&self) -> Option<Role> {
        Some(self.role)
    }
}

impl Dimensions for LoaRecord {
    fn segment(&self) -> Segment {
        LoaRecord::segment(self)
    }
}

impl Dimensions for CandidatePoolRecord {
    fn segment(&self) -> Segment {
        self.segment
    }
    fn role(&self) -> Option<Role> {
        Some(self.role)
    }
    fn leader(&self) -> Option<Leader> {
        Some(self.leader)
    }
}

impl Dimensions for InterviewRecord {
    fn segment(&self) -> Segment {
        self.segment
    }
    fn role(&self) -> Option<Role> {
        Some(self.role)
    }
    fn leader(&self) -> Option<Leader> {
        Some(self.leader)
    }
}

impl Dimensions for NewHirePerformanceRecord {
    fn segment(&self) -> Segment {
        self.segment
    }
    fn role(&self) -> Option<Role> {
        Some(self.role)
    }
}

impl Dimensions for CandidateProfileRecord {
    fn segment(&self) -> Segment {
        self.segment
    }
    fn role(&self) -> Option<Role> {
        Some(self.role)
    }
}

// ─── Selection ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selection {
    pub segment: Filter<Segment>,
    pub role: Filter<Role>,
    pub leader: Filter<Leader>,
    pub date_range: Option<DateRange>,
}

impl Selection {
    pub fn is_unconstrained(&self) -> bool {
        self.segment.is_any()
            && self.role.is_any()
            && self.leader.is_any()
            && self.date_range.is_none()
    }

    pub fn matches<R: Dimensions>(&self, record: &R) -> bool {
        let segment = record.segment();
        let in_range = match (self.date_range, record.date()) {
            (Some(range), Some(date)) => range.contains(date),
            _ => true,
        };

        self.segment.admits(Some(&segment))
            && self.role.admits(record.role().as_ref())
            && self.leader.admits(record.leader().as_ref())
            && in_range
    }

    /// Matching records, in input order.
    pub fn apply<R: Dimensions + Clone>(&self, records: &[R]) -> Vec<R> {
        records
            .iter()
            .filter(|r| self.matches(*r))
            .cloned()
            .collect()
    }
}
