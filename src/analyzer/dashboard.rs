//! Dashboard view: filters every dataset with the current selection and builds all chart payloads.

use std::time::Instant;

use serde::Serialize;

use super::aggregate::RateCombination;
use super::charts::{
    self, LoaSlice, MonthlyHiring, MonthlyRate, PoolTile, SegmentCounts, SegmentDays,
    SegmentRequisitions, SourceEffectiveness,
};
use super::filter::Selection;
use super::summary::{self, ChartSummary};
use crate::data::types::{Datasets, NewHirePerformanceRecord};

// ─── Data Structures ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub meta: DashboardMeta,
    pub hiring: ChartView<MonthlyHiring>,
    pub attrition: ChartView<MonthlyRate>,
    pub requisition: ChartView<SegmentRequisitions>,
    pub time_to_fill: ChartView<SegmentDays>,
    pub loa: ChartView<Vec<LoaSlice>>,
    pub candidate_pool: ChartView<Vec<PoolTile>>,
    pub interview: ChartView<SegmentCounts>,
    pub new_hire_performance: ChartView<Vec<NewHirePerformanceRecord>>,
    pub candidate_profile: ChartView<SourceEffectiveness>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMeta {
    pub selection: Selection,
    pub rate_combination: RateCombination,
    pub total_records: usize,
    pub filtered_records: usize,
    pub duration_ms: u64,
}

/// Series for the renderer plus the sentences displayed above the chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView<S> {
    pub title: &'static str,
    pub series: S,
    pub summary: ChartSummary,
}

// ─── Main Entry Point ────────────────────────────────────────────────────────

/// Builds the complete dashboard for one selection.
///
/// Everything is recomputed from `datasets` on each call; nothing is cached
/// between selections.
pub fn build_dashboard(
    datasets: &Datasets,
    selection: &Selection,
    mode: RateCombination,
) -> DashboardView {
    let start = Instant::now();

    let filtered = Datasets {
        hiring: selection.apply(&datasets.hiring),
        attrition: selection.apply(&datasets.attrition),
        requisition: selection.apply(&datasets.requisition),
        time_to_fill: selection.apply(&datasets.time_to_fill),
        loa: selection.apply(&datasets.loa),
        candidate_pool: selection.apply(&datasets.candidate_pool),
        interview: selection.apply(&datasets.interview),
        new_hire_performance: selection.apply(&datasets.new_hire_performance),
        candidate_profile: selection.apply(&datasets.candidate_profile),
    };

    let hiring = charts::hiring_by_month(&filtered.hiring);
    let attrition = charts::attrition_by_month(&filtered.attrition, mode);
    let requisition = charts::requisitions_by_segment(&filtered.requisition);
    let time_to_fill = charts::time_to_fill_by_segment(&filtered.time_to_fill, mode);
    let loa = charts::loa_slices(&filtered.loa);
    let candidate_pool = charts::candidate_pool_tiles(&filtered.candidate_pool);
    let interview = charts::interviews_by_segment(&filtered.interview);
    let candidate_profile = charts::candidate_profile_by_source(&filtered.candidate_profile, mode);

    let view = DashboardView {
        hiring: ChartView {
            title: "Hiring Plan vs Actuals",
            summary: summary::hiring_summary(&hiring),
            series: hiring,
        },
        attrition: ChartView {
            title: "Attrition Rate Trends",
            summary: summary::attrition_summary(&attrition),
            series: attrition,
        },
        requisition: ChartView {
            title: "Open vs Budgeted Requisitions",
            summary: summary::requisition_summary(&requisition),
            series: requisition,
        },
        time_to_fill: ChartView {
            title: "Average Time to Fill (Days)",
            summary: summary::time_to_fill_summary(&time_to_fill),
            series: time_to_fill,
        },
        loa: ChartView {
            title: "LOA Impact Analysis",
            summary: summary::loa_summary(&loa),
            series: loa,
        },
        candidate_pool: ChartView {
            title: "Candidate Pool Sizes",
            summary: summary::candidate_pool_summary(&filtered.candidate_pool),
            series: candidate_pool,
        },
        interview: ChartView {
            title: "Interview Counts by Segment",
            summary: summary::interview_summary(&interview),
            series: interview,
        },
        new_hire_performance: ChartView {
            title: "New Hire vs Tenured Performance",
            summary: summary::new_hire_performance_summary(&filtered.new_hire_performance),
            series: filtered.new_hire_performance.clone(),
        },
        candidate_profile: ChartView {
            title: "Candidate Profile Effectiveness",
            summary: summary::candidate_profile_summary(&candidate_profile),
            series: candidate_profile,
        },
        meta: DashboardMeta {
            selection: *selection,
            rate_combination: mode,
            total_records: datasets.total_records(),
            filtered_records: filtered.total_records(),
            duration_ms: start.elapsed().as_millis() as u64,
        },
    };

    log::debug!(
        "Dashboard built: {}/{} records in {} ms",
        view.meta.filtered_records,
        view.meta.total_records,
        view.meta.duration_ms
    );

    view
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::filter::{DateRange, Filter};
    use crate::config::GeneratorConfig;
    use crate::data::generate_datasets;
    use crate::data::types::{Role, Segment};
    use chrono::NaiveDate;

    fn datasets() -> Datasets {
        generate_datasets(&GeneratorConfig {
            seed: Some(2025),
            start_year: 2025,
            months: 12,
        })
        .unwrap()
    }

    #[test]
    fn test_unfiltered_dashboard() {
        let ds = datasets();
        let view = build_dashboard(&ds, &Selection::default(), RateCombination::PairwiseAverage);

        assert_eq!(view.meta.total_records, view.meta.filtered_records);
        assert_eq!(view.hiring.series.len(), 12);
        assert_eq!(view.hiring.series[0].key, "Jan 2025");
        assert_eq!(view.attrition.series.len(), 12);
        assert_eq!(view.requisition.series.len(), 5);
        assert_eq!(view.time_to_fill.series.len(), 5);
        assert_eq!(view.interview.series.len(), 5);
        assert_eq!(view.candidate_profile.series.len(), 5);
        assert_eq!(view.loa.series.len(), 5);
        assert_eq!(view.candidate_pool.series.len(), 80);

        // every hiring record lands in exactly one month bucket
        let bucketed: usize = view.hiring.series.iter().map(|g| g.records).sum();
        assert_eq!(bucketed, ds.hiring.len());
    }

    #[test]
    fn test_segment_selection() {
        let ds = datasets();
        let selection = Selection {
            segment: Filter::Only(Segment::Engineering),
            role: Filter::Only(Role::Lead),
            ..Selection::default()
        };
        let view = build_dashboard(&ds, &selection, RateCombination::PairwiseAverage);

        assert_eq!(view.requisition.series.len(), 1);
        assert_eq!(view.requisition.series[0].key, Segment::Engineering);
        // 4 leaders × 1 role
        assert_eq!(view.requisition.series[0].records, 4);
        assert_eq!(view.loa.series.len(), 1);
        assert!(view
            .candidate_pool
            .series
            .iter()
            .all(|t| t.name == "Engineering - Lead"));
        assert!(view.meta.filtered_records < view.meta.total_records);
    }

    #[test]
    fn test_date_range_limits_monthly_series() {
        let ds = datasets();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
        )
        .unwrap();
        let selection = Selection {
            date_range: Some(range),
            ..Selection::default()
        };
        let view = build_dashboard(&ds, &selection, RateCombination::PairwiseAverage);

        let months: Vec<&str> = view.hiring.series.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(months, vec!["Mar 2025", "Apr 2025", "May 2025"]);
        assert_eq!(view.attrition.series.len(), 3);
        // undated datasets are untouched by the range
        assert_eq!(view.requisition.series.len(), 5);
    }

    #[test]
    fn test_empty_selection_result_has_safe_summaries() {
        let ds = datasets();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2030, 12, 31).unwrap(),
        )
        .unwrap();
        let selection = Selection {
            date_range: Some(range),
            ..Selection::default()
        };
        let view = build_dashboard(&ds, &selection, RateCombination::PairwiseAverage);

        assert!(view.hiring.series.is_empty());
        assert_eq!(
            view.hiring.summary.sentences[0],
            "Achieved 0% of planned hiring targets."
        );
        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("NaN"));
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let ds = datasets();
        let view = build_dashboard(&ds, &Selection::default(), RateCombination::ArithmeticMean);
        let v = serde_json::to_value(&view).unwrap();
        assert_eq!(v["meta"]["rateCombination"], "arithmeticMean");
        assert!(v["meta"]["durationMs"].is_u64());
        assert!(v["meta"].get("calculDurationMs").is_none());
        assert_eq!(v["meta"]["selection"]["segment"], "All");
        assert!(v["timeToFill"]["series"].is_array());
        assert_eq!(v["hiring"]["title"], "Hiring Plan vs Actuals");
    }
}
