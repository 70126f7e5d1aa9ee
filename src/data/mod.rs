pub mod generator;
pub mod types;

pub use generator::{generate_datasets, DatasetGenerator};
pub use types::{
    AttritionRecord, CandidatePoolRecord, CandidateProfileRecord, Datasets, HiringRecord,
    InterviewRecord, Leader, LoaRecord, NewHirePerformanceRecord, RequisitionRecord, Role,
    Segment, Source, TimeToFillRecord,
};
