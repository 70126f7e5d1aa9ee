pub mod aggregate;
pub mod charts;
pub mod dashboard;
pub mod filter;
pub mod stats;
pub mod summary;

pub use aggregate::{group_by, Group, RateCombination};
pub use dashboard::{build_dashboard, DashboardView};
pub use filter::{DateRange, Dimensions, Filter, Selection};
