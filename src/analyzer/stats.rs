//! Reusable statistical helpers for chart summaries.
//! None of these ever return NaN or infinity for empty input or a zero denominator.

/// Arithmetic mean. Returns 0.0 if the slice is empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// `part / whole * 100`, or 0.0 when `whole` is zero.
pub fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// First item with the strictly greatest score; ties keep the earliest item.
pub fn first_max_by<T, F>(items: &[T], score: F) -> Option<&T>
where
    F: Fn(&T) -> f64,
{
    let mut iter = items.iter();
    let mut best = iter.next()?;
    let mut best_score = score(best);
    for item in iter {
        let s = score(item);
        if s > best_score {
            best = item;
            best_score = s;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- mean ---

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[5.0]), 5.0);
    }

    #[test]
    fn test_mean_known() {
        // (2 + 4 + 6) / 3 = 4.0
        assert!((mean(&[2.0, 4.0, 6.0]) - 4.0).abs() < 1e-10);
    }

    // --- percent ---

    #[test]
    fn test_percent_zero_whole() {
        assert_eq!(percent(12.0, 0.0), 0.0);
        assert!(percent(0.0, 0.0).is_finite());
    }

    #[test]
    fn test_percent_known() {
        assert!((percent(45.0, 60.0) - 75.0).abs() < 1e-10);
    }

    // --- first_max_by ---

    #[test]
    fn test_first_max_empty() {
        let v: Vec<f64> = vec![];
        assert!(first_max_by(&v, |x| *x).is_none());
    }

    #[test]
    fn test_first_max_tie_keeps_first() {
        let v = vec![("a", 3.0), ("b", 7.0), ("c", 7.0), ("d", 1.0)];
        assert_eq!(first_max_by(&v, |x| x.1).unwrap().0, "b");
    }
}
