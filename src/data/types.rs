use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

// ─── Dimensions ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    Sales,
    Engineering,
    Marketing,
    Product,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Senior,
    Junior,
    Lead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leader {
    #[serde(rename = "John Smith")]
    JohnSmith,
    #[serde(rename = "Sarah Johnson")]
    SarahJohnson,
    #[serde(rename = "Mike Chen")]
    MikeChen,
    #[serde(rename = "Lisa Brown")]
    LisaBrown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    LinkedIn,
    Referral,
    #[serde(rename = "Job Board")]
    JobBoard,
    #[serde(rename = "Company Website")]
    CompanyWebsite,
    Recruiter,
}

impl Segment {
    pub const ALL: [Segment; 5] = [
        Segment::Sales,
        Segment::Engineering,
        Segment::Marketing,
        Segment::Product,
        Segment::Support,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Segment::Sales => "Sales",
            Segment::Engineering => "Engineering",
            Segment::Marketing => "Marketing",
            Segment::Product => "Product",
            Segment::Support => "Support",
        }
    }
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Manager, Role::Senior, Role::Junior, Role::Lead];

    pub fn label(self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Senior => "Senior",
            Role::Junior => "Junior",
            Role::Lead => "Lead",
        }
    }
}

impl Leader {
    pub const ALL: [Leader; 4] = [
        Leader::JohnSmith,
        Leader::SarahJohnson,
        Leader::MikeChen,
        Leader::LisaBrown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Leader::JohnSmith => "John Smith",
            Leader::SarahJohnson => "Sarah Johnson",
            Leader::MikeChen => "Mike Chen",
            Leader::LisaBrown => "Lisa Brown",
        }
    }
}

impl Source {
    pub const ALL: [Source; 5] = [
        Source::LinkedIn,
        Source::Referral,
        Source::JobBoard,
        Source::CompanyWebsite,
        Source::Recruiter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Source::LinkedIn => "LinkedIn",
            Source::Referral => "Referral",
            Source::JobBoard => "Job Board",
            Source::CompanyWebsite => "Company Website",
            Source::Recruiter => "Recruiter",
        }
    }
}

/// Display and parsing go through `label()` so the wire form matches serde.
macro_rules! label_conversions {
    ($($ty:ident),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = AppError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $ty::ALL
                        .iter()
                        .copied()
                        .find(|v| v.label() == s)
                        .ok_or_else(|| {
                            AppError::Custom(format!("unknown {}: {}", stringify!($ty), s))
                        })
                }
            }
        )*
    };
}

label_conversions!(Segment, Role, Leader, Source);

// ─── Records ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringRecord {
    pub date: NaiveDate,
    pub segment: Segment,
    pub role: Role,
    pub leader: Leader,
    pub planned: u32,
    pub actual: u32,
}

/// Monthly attrition for one segment. `rate` is derived from `count` and
/// `total` at construction and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttritionRecord {
    date: NaiveDate,
    segment: Segment,
    count: u32,
    total: u32,
    rate: f64,
}

impl AttritionRecord {
    pub fn new(date: NaiveDate, segment: Segment, count: u32, total: u32) -> Self {
        Self {
            date,
            segment,
            count,
            total,
            rate: percentage_of(count, total),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionRecord {
    pub segment: Segment,
    pub role: Role,
    pub leader: Leader,
    pub open: u32,
    pub budgeted: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeToFillRecord {
    pub segment: Segment,
    pub role: Role,
    pub days: f64,
}

/// Leave-of-absence headcount for one segment; `impact_percentage` is derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaRecord {
    segment: Segment,
    count: u32,
    total: u32,
    impact_percentage: f64,
}

impl LoaRecord {
    pub fn new(segment: Segment, count: u32, total: u32) -> Self {
        Self {
            segment,
            count,
            total,
            impact_percentage: percentage_of(count, total),
        }
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn impact_percentage(&self) -> f64 {
        self.impact_percentage
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePoolRecord {
    pub segment: Segment,
    pub role: Role,
    pub leader: Leader,
    pub pool_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    pub segment: Segment,
    pub role: Role,
    pub leader: Leader,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHirePerformanceRecord {
    pub segment: Segment,
    pub role: Role,
    pub ppr_score: f64,
    pub tenured_ppr_score: f64,
    pub pay_performance: f64,
    pub tenured_pay_performance: f64,
}

/// `success_rate` and `conversion_rate` are fractions in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfileRecord {
    pub segment: Segment,
    pub role: Role,
    pub source: Source,
    pub success_rate: f64,
    pub conversion_rate: f64,
}

/// The nine generated collections, built once at start and then shared read-only.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Datasets {
    pub hiring: Vec<HiringRecord>,
    pub attrition: Vec<AttritionRecord>,
    pub requisition: Vec<RequisitionRecord>,
    pub time_to_fill: Vec<TimeToFillRecord>,
    pub loa: Vec<LoaRecord>,
    pub candidate_pool: Vec<CandidatePoolRecord>,
    pub interview: Vec<InterviewRecord>,
    pub new_hire_performance: Vec<NewHirePerformanceRecord>,
    pub candidate_profile: Vec<CandidateProfileRecord>,
}

impl Datasets {
    pub fn total_records(&self) -> usize {
        self.hiring.len()
            + self.attrition.len()
            + self.requisition.len()
            + self.time_to_fill.len()
            + self.loa.len()
            + self.candidate_pool.len()
            + self.interview.len()
            + self.new_hire_performance.len()
            + self.candidate_profile.len()
    }
}

fn percentage_of(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
