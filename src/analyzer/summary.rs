//! Descriptive sentences shown above each chart.

use serde::Serialize;

use super::charts::{
    LoaSlice, MonthlyHiring, MonthlyRate, SegmentCounts, SegmentDays, SegmentRequisitions,
    SourceEffectiveness,
};
use super::stats::{first_max_by, mean, percent};
use crate::data::types::{CandidatePoolRecord, NewHirePerformanceRecord};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSummary {
    pub sentences: Vec<String>,
}

impl ChartSummary {
    fn push(&mut self, sentence: String) {
        self.sentences.push(sentence);
    }

    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }
}

/// Percentage with one decimal, or a bare `0` when the denominator is zero.
fn ratio_label(part: f64, whole: f64) -> String {
    if whole > 0.0 {
        format!("{:.1}", percent(part, whole))
    } else {
        "0".to_string()
    }
}

pub fn hiring_summary(series: &MonthlyHiring) -> ChartSummary {
    let planned: u64 = series.iter().map(|g| g.value.planned as u64).sum();
    let actual: u64 = series.iter().map(|g| g.value.actual as u64).sum();

    let mut s = ChartSummary::default();
    s.push(format!(
        "Achieved {}% of planned hiring targets.",
        ratio_label(actual as f64, planned as f64)
    ));
    s.push(format!(
        "Planned to hire {} and actually hired {} people.",
        planned, actual
    ));
    s
}

pub fn attrition_summary(series: &MonthlyRate) -> ChartSummary {
    let rates: Vec<f64> = series.iter().map(|g| g.value).collect();
    let average = mean(&rates);

    let mut s = ChartSummary::default();
    s.push(format!("The average attrition rate is {:.1}%.", average));
    if let Some(latest) = rates.last() {
        let trend = if *latest > average {
            "an increase"
        } else {
            "a decrease"
        };
        s.push(format!(
            "The most recent rate is {:.1}%, showing {} from the average.",
            latest, trend
        ));
    }
    s
}

pub fn requisition_summary(series: &SegmentRequisitions) -> ChartSummary {
    let open: u64 = series.iter().map(|g| g.value.open as u64).sum();
    let budgeted: u64 = series.iter().map(|g| g.value.budgeted as u64).sum();
    let filled = budgeted as f64 - open as f64;

    let mut s = ChartSummary::default();
    s.push(format!(
        "{}% of budgeted positions are filled.",
        ratio_label(filled, budgeted as f64)
    ));
    s.push(format!(
        "{} positions remain open out of {} budgeted roles.",
        open, budgeted
    ));
    s
}

pub fn time_to_fill_summary(series: &SegmentDays) -> ChartSummary {
    let days: Vec<f64> = series.iter().map(|g| g.value).collect();

    let mut s = ChartSummary::default();
    s.push(format!(
        "Overall average time to fill is {:.1} days.",
        mean(&days)
    ));
    if let Some(longest) = first_max_by(series, |g| g.value) {
        s.push(format!(
            "{} takes longest at {:.1} days.",
            longest.key, longest.value
        ));
    }
    s
}

pub fn loa_summary(slices: &[LoaSlice]) -> ChartSummary {
    let on_leave: u64 = slices.iter().map(|l| l.count as u64).sum();

    let mut s = ChartSummary::default();
    s.push(format!(
        "Total of {} employees on leave of absence.",
        on_leave
    ));
    if let Some(top) = first_max_by(slices, |l| l.impact_percentage) {
        s.push(format!(
            "{} shows the highest impact at {:.1}%.",
            top.segment, top.impact_percentage
        ));
    }
    s
}

pub fn candidate_pool_summary(records: &[CandidatePoolRecord]) -> ChartSummary {
    let total: u64 = records.iter().map(|r| r.pool_size as u64).sum();

    let mut s = ChartSummary::default();
    s.push(format!("Total of {} candidates across all pools.", total));
    if let Some(largest) = first_max_by(records, |r| r.pool_size as f64) {
        s.push(format!(
            "Largest pool is {} - {} with {} candidates.",
            largest.segment, largest.role, largest.pool_size
        ));
    }
    s
}

pub fn interview_summary(series: &SegmentCounts) -> ChartSummary {
    let total: u64 = series.iter().map(|g| g.value as u64).sum();

    let mut s = ChartSummary::default();
    s.push(format!("Total of {} interviews conducted.", total));
    if let Some(top) = first_max_by(series, |g| g.value as f64) {
        s.push(format!(
            "{} had the most interviews with {}.",
            top.key, top.value
        ));
    }
    s
}

pub fn new_hire_performance_summary(records: &[NewHirePerformanceRecord]) -> ChartSummary {
    let new_hire: Vec<f64> = records.iter().map(|r| r.ppr_score).collect();
    let tenured: Vec<f64> = records.iter().map(|r| r.tenured_ppr_score).collect();
    let avg_new = mean(&new_hire);
    let avg_tenured = mean(&tenured);

    let mut s = ChartSummary::default();
    if avg_tenured != 0.0 {
        s.push(format!(
            "New hires perform {:.1}% below tenured employees.",
            percent(avg_tenured - avg_new, avg_tenured)
        ));
    }
    s.push(format!(
        "Average PPR scores: New Hires {:.2} vs Tenured {:.2}.",
        avg_new, avg_tenured
    ));
    s
}

pub fn candidate_profile_summary(series: &SourceEffectiveness) -> ChartSummary {
    let mut s = ChartSummary::default();
    if let Some(best) = first_max_by(series, |g| g.value.success_rate + g.value.conversion_rate) {
        s.push(format!(
            "{} is the most effective source with {:.1}% success and {:.1}% conversion rates.",
            best.key,
            best.value.success_rate * 100.0,
            best.value.conversion_rate * 100.0
        ));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::aggregate::Group;
    use crate::analyzer::charts::{HiringTotals, RequisitionTotals, SourceRates};
    use crate::data::types::{Leader, Role, Segment, Source};

    fn group<K, V>(key: K, value: V) -> Group<K, V> {
        Group {
            key,
            records: 1,
            value,
        }
    }

    fn hired(planned: u32, actual: u32) -> HiringTotals {
        HiringTotals { planned, actual }
    }

    fn reqs(open: u32, budgeted: u32) -> RequisitionTotals {
        RequisitionTotals { open, budgeted }
    }

    fn rates(success_rate: f64, conversion_rate: f64) -> SourceRates {
        SourceRates {
            success_rate,
            conversion_rate,
        }
    }

    fn slice(segment: Segment, count: u32, impact_percentage: f64) -> LoaSlice {
        LoaSlice {
            segment,
            count,
            impact_percentage,
        }
    }

    #[test]
    fn test_hiring_progress() {
        let series = vec![
            group("Jan 2025".to_string(), hired(10, 8)),
            group("Feb 2025".to_string(), hired(6, 4)),
        ];
        let s = hiring_summary(&series);
        assert_eq!(s.sentences[0], "Achieved 75.0% of planned hiring targets.");
        assert_eq!(
            s.sentences[1],
            "Planned to hire 16 and actually hired 12 people."
        );
    }

    #[test]
    fn test_hiring_empty_renders_zero() {
        let s = hiring_summary(&vec![]);
        assert_eq!(s.sentences[0], "Achieved 0% of planned hiring targets.");
        assert!(!s.text().contains("NaN"));
    }

    #[test]
    fn test_fill_rate_zero_budget() {
        let series = vec![group(Segment::Sales, reqs(0, 0))];
        let s = requisition_summary(&series);
        assert_eq!(s.sentences[0], "0% of budgeted positions are filled.");
        assert!(!s.text().contains("NaN") && !s.text().contains("inf"));
    }

    #[test]
    fn test_fill_rate_known() {
        let series = vec![
            group(Segment::Sales, reqs(3, 10)),
            group(Segment::Product, reqs(2, 10)),
        ];
        let s = requisition_summary(&series);
        assert_eq!(
            s.text(),
            "75.0% of budgeted positions are filled. 5 positions remain open out of 20 budgeted roles."
        );
    }

    #[test]
    fn test_attrition_trend() {
        let series = vec![
            group("Jan 2025".to_string(), 2.0),
            group("Feb 2025".to_string(), 6.0),
        ];
        let s = attrition_summary(&series);
        assert_eq!(s.sentences[0], "The average attrition rate is 4.0%.");
        assert_eq!(
            s.sentences[1],
            "The most recent rate is 6.0%, showing an increase from the average."
        );

        let empty = attrition_summary(&vec![]);
        assert_eq!(
            empty.sentences,
            vec!["The average attrition rate is 0.0%.".to_string()]
        );
    }

    #[test]
    fn test_time_to_fill_longest_first_tie() {
        let series = vec![
            group(Segment::Sales, 45.0),
            group(Segment::Engineering, 70.0),
            group(Segment::Support, 70.0),
        ];
        let s = time_to_fill_summary(&series);
        assert_eq!(s.sentences[1], "Engineering takes longest at 70.0 days.");
    }

    #[test]
    fn test_interview_summary() {
        let series = vec![group(Segment::Sales, 12), group(Segment::Marketing, 30)];
        let s = interview_summary(&series);
        assert_eq!(
            s.text(),
            "Total of 42 interviews conducted. Marketing had the most interviews with 30."
        );
        assert_eq!(interview_summary(&vec![]).sentences.len(), 1);
    }

    #[test]
    fn test_candidate_pool_summary() {
        let records = vec![
            CandidatePoolRecord {
                segment: Segment::Sales,
                role: Role::Junior,
                leader: Leader::MikeChen,
                pool_size: 40,
            },
            CandidatePoolRecord {
                segment: Segment::Support,
                role: Role::Lead,
                leader: Leader::JohnSmith,
                pool_size: 90,
            },
        ];
        let s = candidate_pool_summary(&records);
        assert_eq!(s.sentences[0], "Total of 130 candidates across all pools.");
        assert_eq!(
            s.sentences[1],
            "Largest pool is Support - Lead with 90 candidates."
        );
    }

    #[test]
    fn test_new_hire_gap() {
        let records = vec![NewHirePerformanceRecord {
            segment: Segment::Product,
            role: Role::Senior,
            ppr_score: 3.0,
            tenured_ppr_score: 4.0,
            pay_performance: 1.0,
            tenured_pay_performance: 1.1,
        }];
        let s = new_hire_performance_summary(&records);
        assert_eq!(
            s.sentences[0],
            "New hires perform 25.0% below tenured employees."
        );
        assert_eq!(
            s.sentences[1],
            "Average PPR scores: New Hires 3.00 vs Tenured 4.00."
        );
    }

    #[test]
    fn test_new_hire_empty_omits_gap() {
        let s = new_hire_performance_summary(&[]);
        assert_eq!(s.sentences.len(), 1);
        assert!(!s.text().contains("NaN"));
    }

    #[test]
    fn test_candidate_profile_best_source() {
        let series = vec![
            group(Source::Referral, rates(0.5, 0.2)),
            group(Source::JobBoard, rates(0.6, 0.3)),
        ];
        let s = candidate_profile_summary(&series);
        assert_eq!(
            s.text(),
            "Job Board is the most effective source with 60.0% success and 30.0% conversion rates."
        );
        assert!(candidate_profile_summary(&vec![]).sentences.is_empty());
    }

    #[test]
    fn test_loa_summary() {
        let slices = vec![
            slice(Segment::Sales, 4, 4.0),
            slice(Segment::Support, 9, 12.5),
        ];
        let s = loa_summary(&slices);
        assert_eq!(
            s.text(),
            "Total of 13 employees on leave of absence. Support shows the highest impact at 12.5%."
        );
    }
}
