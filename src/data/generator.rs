//! Synthetic HR dataset generation.
//!
//! Every collection is the full cross product of its dimensions, so the
//! record counts are fixed for a given number of months; only the measures
//! are random.

use chrono::{Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{
    AttritionRecord, CandidatePoolRecord, CandidateProfileRecord, Datasets, HiringRecord,
    InterviewRecord, Leader, LoaRecord, NewHirePerformanceRecord, RequisitionRecord, Role,
    Segment, Source, TimeToFillRecord,
};
use crate::config::GeneratorConfig;
use crate::error::AppError;

/// Upper bound on `GeneratorConfig::months` (ten years).
pub const MAX_MONTHS: u32 = 120;

pub struct DatasetGenerator {
    rng: StdRng,
    months: Vec<NaiveDate>,
}

impl DatasetGenerator {
    pub fn new(config: &GeneratorConfig) -> Result<Self, AppError> {
        if !(1..=MAX_MONTHS).contains(&config.months) {
            return Err(AppError::Custom(format!(
                "months must be between 1 and {}, got {}",
                MAX_MONTHS, config.months
            )));
        }

        let start = NaiveDate::from_ymd_opt(config.start_year, 1, 1)
            .ok_or_else(|| {
                AppError::Custom(format!("invalid start year: {}", config.start_year))
            })?;

        let months = (0..config.months)
            .map(|i| {
                start
                    .checked_add_months(Months::new(i))
                    .ok_or_else(|| {
                        AppError::Custom(format!("month offset out of range: {}", i))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self { rng, months })
    }

    /// Builds all nine datasets in a fixed order so that a seeded generator
    /// always yields the same values.
    pub fn generate(mut self) -> Datasets {
        let datasets = Datasets {
            hiring: self.hiring(),
            attrition: self.attrition(),
            requisition: self.requisition(),
            time_to_fill: self.time_to_fill(),
            loa: self.loa(),
            candidate_pool: self.candidate_pool(),
            interview: self.interview(),
            new_hire_performance: self.new_hire_performance(),
            candidate_profile: self.candidate_profile(),
        };

        log::info!(
            "Generated {} records across 9 datasets ({} months)",
            datasets.total_records(),
            self.months.len()
        );

        datasets
    }

    fn hiring(&mut self) -> Vec<HiringRecord> {
        let mut data = Vec::with_capacity(5 * 4 * 4 * self.months.len());
        for segment in Segment::ALL {
            for role in Role::ALL {
                for leader in Leader::ALL {
                    for &date in &self.months {
                        let planned: u32 = self.rng.gen_range(1..=10);
                        let factor: f64 = self.rng.gen_range(0.7..1.3);
                        let actual = (planned as f64 * factor).floor() as u32;
                        data.push(HiringRecord {
                            date,
                            segment,
                            role,
                            leader,
                            planned,
                            actual,
                        });
                    }
                }
            }
        }
        data
    }

    fn attrition(&mut self) -> Vec<AttritionRecord> {
        let mut data = Vec::with_capacity(5 * self.months.len());
        for segment in Segment::ALL {
            for &date in &self.months {
                let total: u32 = self.rng.gen_range(50..150);
                let count: u32 = self.rng.gen_range(0..10);
                data.push(AttritionRecord::new(date, segment, count, total));
            }
        }
        data
    }

    fn requisition(&mut self) -> Vec<RequisitionRecord> {
        let mut data = Vec::with_capacity(5 * 4 * 4);
        for segment in Segment::ALL {
            for role in Role::ALL {
                for leader in Leader::ALL {
                    let budgeted: u32 = self.rng.gen_range(5..20);
                    let factor: f64 = self.rng.gen_range(0.3..1.0);
                    let open = (budgeted as f64 * factor).floor() as u32;
                    data.push(RequisitionRecord {
                        segment,
                        role,
                        leader,
                        open,
                        budgeted,
                    });
                }
            }
        }
        data
    }

    fn time_to_fill(&mut self) -> Vec<TimeToFillRecord> {
        let mut data = Vec::with_capacity(5 * 4);
        for segment in Segment::ALL {
            for role in Role::ALL {
                let days: u32 = self.rng.gen_range(30..90);
                data.push(TimeToFillRecord {
                    segment,
                    role,
                    days: days as f64,
                });
            }
        }
        data
    }

    fn loa(&mut self) -> Vec<LoaRecord> {
        Segment::ALL
            .iter()
            .map(|&segment| {
                let total: u32 = self.rng.gen_range(50..150);
                let count: u32 = self.rng.gen_range(1..=12);
                LoaRecord::new(segment, count, total)
            })
            .collect()
    }

    fn candidate_pool(&mut self) -> Vec<CandidatePoolRecord> {
        let mut data = Vec::with_capacity(5 * 4 * 4);
        for segment in Segment::ALL {
            for role in Role::ALL {
                for leader in Leader::ALL {
                    data.push(CandidatePoolRecord {
                        segment,
                        role,
                        leader,
                        pool_size: self.rng.gen_range(10..110),
                    });
                }
            }
        }
        data
    }

    fn interview(&mut self) -> Vec<InterviewRecord> {
        let mut data = Vec::with_capacity(5 * 4 * 4);
        for segment in Segment::ALL {
            for role in Role::ALL {
                for leader in Leader::ALL {
                    data.push(InterviewRecord {
                        segment,
                        role,
                        leader,
                        count: self.rng.gen_range(5..30),
                    });
                }
            }
        }
        data
    }

    fn new_hire_performance(&mut self) -> Vec<NewHirePerformanceRecord> {
        let mut data = Vec::with_capacity(5 * 4);
        for segment in Segment::ALL {
            for role in Role::ALL {
                data.push(NewHirePerformanceRecord {
                    segment,
                    role,
                    ppr_score: self.rng.gen_range(2.5..4.5),
                    tenured_ppr_score: self.rng.gen_range(3.0..5.0),
                    pay_performance: self.rng.gen_range(0.8..1.2),
                    tenured_pay_performance: self.rng.gen_range(0.8..1.2),
                });
            }
        }
        data
    }

    fn candidate_profile(&mut self) -> Vec<CandidateProfileRecord> {
        let mut data = Vec::with_capacity(5 * 4 * 5);
        for segment in Segment::ALL {
            for role in Role::ALL {
                for source in Source::ALL {
                    data.push(CandidateProfileRecord {
                        segment,
                        role,
                        source,
                        success_rate: self.rng.gen_range(0.1..0.9),
                        conversion_rate: self.rng.gen_range(0.05..0.6),
                    });
                }
            }
        }
        data
    }
}

/// Convenience wrapper: generator construction + generation.
pub fn generate_datasets(config: &GeneratorConfig) -> Result<Datasets, AppError> {
    Ok(DatasetGenerator::new(config)?.generate())
}
