//! Per-chart regrouping of filtered records.
//!
//! Additive measures are summed; rate-like measures go through
//! [`RateCombination::fold`].

use serde::Serialize;

use super::aggregate::{group_by, Group, RateCombination};
use crate::data::types::{
    AttritionRecord, CandidatePoolRecord, CandidateProfileRecord, HiringRecord, InterviewRecord,
    LoaRecord, RequisitionRecord, Segment, Source, TimeToFillRecord,
};

/// `"Jan 2025"` style month label.
pub fn month_key(date: chrono::NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

// ─── Series Types ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringTotals {
    pub planned: u32,
    pub actual: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionTotals {
    pub open: u32,
    pub budgeted: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRates {
    pub success_rate: f64,
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaSlice {
    pub segment: Segment,
    pub count: u32,
    pub impact_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolTile {
    pub name: String,
    pub size: u32,
    pub segment: Segment,
}

pub type MonthlyHiring = Vec<Group<String, HiringTotals>>;
pub type MonthlyRate = Vec<Group<String, f64>>;
pub type SegmentRequisitions = Vec<Group<Segment, RequisitionTotals>>;
pub type SegmentDays = Vec<Group<Segment, f64>>;
pub type SegmentCounts = Vec<Group<Segment, u32>>;
pub type SourceEffectiveness = Vec<Group<Source, SourceRates>>;

// ─── Aggregators ─────────────────────────────────────────────────────────────

pub fn hiring_by_month(records: &[HiringRecord]) -> MonthlyHiring {
    group_by(
        records,
        |r| month_key(r.date),
        |r| HiringTotals {
            planned: r.planned,
            actual: r.actual,
        },
        |acc, r, _| {
            acc.planned += r.planned;
            acc.actual += r.actual;
        },
    )
}

pub fn attrition_by_month(records: &[AttritionRecord], mode: RateCombination) -> MonthlyRate {
    group_by(
        records,
        |r| month_key(r.date()),
        |r| r.rate(),
        |acc, r, seen| *acc = mode.fold(*acc, r.rate(), seen),
    )
}

pub fn requisitions_by_segment(records: &[RequisitionRecord]) -> SegmentRequisitions {
    group_by(
        records,
        |r| r.segment,
        |r| RequisitionTotals {
            open: r.open,
            budgeted: r.budgeted,
        },
        |acc, r, _| {
            acc.open += r.open;
            acc.budgeted += r.budgeted;
        },
    )
}

pub fn time_to_fill_by_segment(
    records: &[TimeToFillRecord],
    mode: RateCombination,
) -> SegmentDays {
    group_by(
        records,
        |r| r.segment,
        |r| r.days,
        |acc, r, seen| *acc = mode.fold(*acc, r.days, seen),
    )
}

pub fn interviews_by_segment(records: &[InterviewRecord]) -> SegmentCounts {
    group_by(
        records,
        |r| r.segment,
        |r| r.count,
        |acc, r, _| *acc += r.count,
    )
}

pub fn candidate_profile_by_source(
    records: &[CandidateProfileRecord],
    mode: RateCombination,
) -> SourceEffectiveness {
    group_by(
        records,
        |r| r.source,
        |r| SourceRates {
            success_rate: r.success_rate,
            conversion_rate: r.conversion_rate,
        },
        |acc, r, seen| {
            acc.success_rate = mode.fold(acc.success_rate, r.success_rate, seen);
            acc.conversion_rate = mode.fold(acc.conversion_rate, r.conversion_rate, seen);
        },
    )
}

/// LOA is shown as a pie of the filtered records, one slice per record.
pub fn loa_slices(records: &[LoaRecord]) -> Vec<LoaSlice> {
    records
        .iter()
        .map(|r| LoaSlice {
            segment: r.segment(),
            count: r.count(),
            impact_percentage: r.impact_percentage(),
        })
        .collect()
}

pub fn candidate_pool_tiles(records: &[CandidatePoolRecord]) -> Vec<PoolTile> {
    records
        .iter()
        .map(|r| PoolTile {
            name: format!("{} - {}", r.segment, r.role),
            size: r.pool_size,
            segment: r.segment,
        })
        .collect()
}
