//! Order-preserving group-and-combine used by every chart.

use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One bucket of a grouped series. `records` is how many input records fell
/// into the bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group<K, V> {
    pub key: K,
    pub records: usize,
    pub value: V,
}

/// Groups `records` by `key_of`, in first-seen key order.
///
/// The first record of a key seeds the bucket through `init`; every later
/// record is folded in with `combine`, which also receives the bucket size
/// including that record.
pub fn group_by<R, K, V, FK, FI, FC>(
    records: &[R],
    key_of: FK,
    init: FI,
    mut combine: FC,
) -> Vec<Group<K, V>>
where
    K: Eq + Hash,
    FK: Fn(&R) -> K,
    FI: Fn(&R) -> V,
    FC: FnMut(&mut V, &R, usize),
{
    let mut buckets: IndexMap<K, (usize, V)> = IndexMap::new();

    for record in records {
        let key = key_of(record);
        match buckets.get_mut(&key) {
            Some((count, value)) => {
                *count += 1;
                combine(value, record, *count);
            }
            None => {
                buckets.insert(key, (1, init(record)));
            }
        }
    }

    buckets
        .into_iter()
        .map(|(key, (records, value))| Group {
            key,
            records,
            value,
        })
        .collect()
}

/// How rate-like measures (percentages, durations) are merged within a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RateCombination {
    /// `acc = (acc + next) / 2`. Order dependent and weighted toward the most
    /// recent record; matches the figures the dashboard has always shown.
    #[default]
    PairwiseAverage,
    /// True arithmetic mean of every value in the bucket.
    ArithmeticMean,
}

impl RateCombination {
    /// Merges `next` into `acc`; `seen` counts values including `next`.
    pub fn fold(self, acc: f64, next: f64, seen: usize) -> f64 {
        match self {
            RateCombination::PairwiseAverage => (acc + next) / 2.0,
            RateCombination::ArithmeticMean => acc + (next - acc) / seen as f64,
        }
    }
}
