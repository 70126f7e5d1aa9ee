use chrono::NaiveDate;
use serde::Serialize;

use crate::analyzer::filter::{DateRange, Selection};
use crate::data::types::{Leader, Role, Segment};
use crate::error::AppError;
use crate::state::{AppState, StateAccess};

/// Dropdown entries for the filter bar, `"All"` first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub segments: Vec<&'static str>,
    pub roles: Vec<&'static str>,
    pub leaders: Vec<&'static str>,
}

fn with_all(labels: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    std::iter::once("All").chain(labels).collect()
}

pub fn get_filter_options() -> FilterOptions {
    FilterOptions {
        segments: with_all(Segment::ALL.iter().map(|s| s.label())),
        roles: with_all(Role::ALL.iter().map(|r| r.label())),
        leaders: with_all(Leader::ALL.iter().map(|l| l.label())),
    }
}

pub fn get_selection(state: &AppState) -> Result<Selection, AppError> {
    state.selection_snapshot()
}

pub fn set_selection(state: &AppState, selection: Selection) -> Result<Selection, AppError> {
    let mut guard = state.selection.lock()?;
    *guard = selection;
    log::debug!("Selection updated: {:?}", selection);
    Ok(selection)
}

/// Sets or clears the date window, keeping the categorical filters.
pub fn set_date_range(
    state: &AppState,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Result<Selection, AppError> {
    let range = bounds
        .map(|(from, to)| DateRange::new(from, to))
        .transpose()?;

    let mut guard = state.selection.lock()?;
    guard.date_range = range;
    Ok(*guard)
}

pub fn reset_selection(state: &AppState) -> Result<Selection, AppError> {
    set_selection(state, Selection::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::filter::Filter;
    use crate::config::AppConfig;
    use crate::data::types::Datasets;

    fn state() -> AppState {
        AppState::with_datasets(AppConfig::default(), Datasets::default())
    }

    #[test]
    fn test_filter_options() {
        let opts = get_filter_options();
        assert_eq!(opts.segments[0], "All");
        assert_eq!(opts.segments.len(), 6);
        assert_eq!(opts.roles.len(), 5);
        assert!(opts.leaders.contains(&"Sarah Johnson"));
    }

    #[test]
    fn test_set_and_reset_selection() {
        let state = state();
        let wanted = Selection {
            segment: Filter::Only(Segment::Sales),
            ..Selection::default()
        };
        set_selection(&state, wanted).unwrap();
        assert_eq!(get_selection(&state).unwrap(), wanted);

        reset_selection(&state).unwrap();
        assert!(get_selection(&state).unwrap().is_unconstrained());
    }

    #[test]
    fn test_set_date_range_keeps_categories() {
        let state = state();
        set_selection(
            &state,
            Selection {
                role: Filter::Only(Role::Lead),
                ..Selection::default()
            },
        )
        .unwrap();

        let from = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 4, 30).unwrap();
        let sel = set_date_range(&state, Some((from, to))).unwrap();
        assert_eq!(sel.role, Filter::Only(Role::Lead));
        assert_eq!(sel.date_range.unwrap().start(), from);

        let cleared = set_date_range(&state, None).unwrap();
        assert!(cleared.date_range.is_none());
    }

    #[test]
    fn test_inverted_date_range_rejected() {
        let state = state();
        let from = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(matches!(
            set_date_range(&state, Some((from, to))),
            Err(AppError::InvalidDateRange { .. })
        ));
        assert!(get_selection(&state).unwrap().date_range.is_none());
    }
}
