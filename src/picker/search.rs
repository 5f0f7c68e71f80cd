//! Fuzzy search over option display names.
//!
//! The filter engine only depends on the [`FuzzySearch`] trait, so any
//! matcher that can rank `{id, name}` records can be plugged in. The default
//! [`EditDistanceSearch`] scores a query against the best-aligned window of
//! each name using Levenshtein distance, which tolerates typos and
//! transposed letters.

use std::cmp::Ordering;
use std::collections::HashMap;

use rapidfuzz::distance::levenshtein::BatchComparator;

use super::option::{OptionId, PickerOption};

/// Default strictness: a query may be off by roughly two edits in five.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Characters of offset that cost a full point of score.
pub const DEFAULT_DISTANCE: usize = 100;

/// A searchable record: an option id with its single indexed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    pub id: OptionId,
    pub name: String,
}

/// Ranked fuzzy matching capability.
pub trait FuzzySearch {
    /// Return the ids of matching records, best match first.
    fn search(&self, query: &str, records: &[SearchRecord]) -> Vec<OptionId>;
}

/// Search records built from an option set.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
    positions: HashMap<OptionId, usize>,
}

impl SearchIndex {
    pub fn build(options: &[PickerOption]) -> Self {
        let records: Vec<SearchRecord> = options
            .iter()
            .map(|option| SearchRecord {
                id: option.id.clone(),
                name: option.name.clone(),
            })
            .collect();

        let mut positions = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            positions.entry(record.id.clone()).or_insert(i);
        }

        Self { records, positions }
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Position of the first record with this id in the source option set.
    pub fn position(&self, id: &OptionId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Approximate substring matcher ranked by edit distance.
///
/// A record's score is the lowest value of
/// `edits(query, window) / query_len + window_start / distance`
/// over windows of the name that are one character shorter, equal to, or one
/// longer than the query. Zero is a perfect match at the start of the name.
/// Records scoring above `threshold` are dropped.
#[derive(Debug, Clone)]
pub struct EditDistanceSearch {
    threshold: f64,
}

impl Default for EditDistanceSearch {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl EditDistanceSearch {
    /// Create a matcher; lower thresholds are stricter.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Score `name` against the query held by `query`, both lowercased.
    ///
    /// Returns `None` when the best score exceeds the threshold.
    fn score(&self, query: &BatchComparator<char>, query_len: usize, name: &[char]) -> Option<f64> {
        if query_len == 0 {
            return Some(0.0);
        }

        let len = query_len as f64;
        let min_width = query_len.saturating_sub(1).max(1);
        let max_width = query_len + 1;

        let best = if name.len() <= min_width {
            query.distance(name.iter().copied()) as f64 / len
        } else {
            let mut best = f64::INFINITY;
            'windows: for start in 0..name.len() {
                let location = start as f64 / DEFAULT_DISTANCE as f64;
                if location >= best {
                    break;
                }
                for width in min_width..=max_width {
                    let Some(window) = name.get(start..start + width) else {
                        break;
                    };
                    let score = query.distance(window.iter().copied()) as f64 / len + location;
                    if score < best {
                        best = score;
                    }
                    if best == 0.0 {
                        break 'windows;
                    }
                }
            }
            best
        };

        (best <= self.threshold).then_some(best)
    }
}

impl FuzzySearch for EditDistanceSearch {
    fn search(&self, query: &str, records: &[SearchRecord]) -> Vec<OptionId> {
        let query: Vec<char> = query.trim().to_lowercase().chars().collect();
        let comparator = BatchComparator::new(query.iter().copied());

        let mut scored: Vec<(f64, &SearchRecord)> = records
            .iter()
            .filter_map(|record| {
                let name: Vec<char> = record.name.to_lowercase().chars().collect();
                self.score(&comparator, query.len(), &name)
                    .map(|score| (score, record))
            })
            .collect();

        // Stable sort keeps index order between equal scores
        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        scored.into_iter().map(|(_, record)| record.id.clone()).collect()
    }
}
