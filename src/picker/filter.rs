//! Filter engine: turns filter text into the visible option sequence.

use super::option::PickerOption;
use super::search::{FuzzySearch, SearchIndex};

/// Compute the visible list for `filter`.
///
/// A blank filter (empty or whitespace) returns the option set as-is. Otherwise the search
/// capability ranks the index records and the matching options are returned
/// best first. The option set is never modified.
pub fn apply(
    filter: &str,
    options: &[PickerOption],
    index: &SearchIndex,
    search: &dyn FuzzySearch,
) -> Vec<PickerOption> {
    if filter.trim().is_empty() {
        return options.to_vec();
    }

    search
        .search(filter, index.records())
        .iter()
        .filter_map(|id| index.position(id).and_then(|i| options.get(i)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::search::{EditDistanceSearch, SearchRecord};
    use crate::picker::OptionId;

    fn options() -> Vec<PickerOption> {
        vec![
            PickerOption::new("FR".into(), "France"),
            PickerOption::new("DE".into(), "Germany"),
            PickerOption::new("GR".into(), "Greece"),
        ]
    }

    /// Returns every record in reverse, to show the engine keeps search order.
    struct Reversed;

    impl FuzzySearch for Reversed {
        fn search(&self, _query: &str, records: &[SearchRecord]) -> Vec<OptionId> {
            records.iter().rev().map(|r| r.id.clone()).collect()
        }
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let options = options();
        let index = SearchIndex::build(&options);
        let visible = apply("", &options, &index, &EditDistanceSearch::default());
        assert_eq!(visible, options);

        let visible = apply("", &[], &SearchIndex::default(), &Reversed);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_blank_filter_is_identity() {
        let options = options();
        let index = SearchIndex::build(&options);
        let visible = apply("  \t", &options, &index, &Reversed);
        assert_eq!(visible, options);
    }

    #[test]
    fn test_filter_keeps_close_matches_only() {
        let options = options();
        let index = SearchIndex::build(&options);
        let visible = apply("Franc", &options, &index, &EditDistanceSearch::default());
        let codes: Vec<&str> = visible.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(codes, vec!["FR"]);
    }

    #[test]
    fn test_filter_uses_search_ranking() {
        let options = options();
        let index = SearchIndex::build(&options);
        let visible = apply("x", &options, &index, &Reversed);
        let codes: Vec<&str> = visible.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(codes, vec!["GR", "DE", "FR"]);
    }

    #[test]
    fn test_no_matches_is_empty_list() {
        let options = options();
        let index = SearchIndex::build(&options);
        let visible = apply("qqqqqq", &options, &index, &EditDistanceSearch::default());
        assert!(visible.is_empty());
    }

    #[test]
    fn test_same_filter_twice_is_identical() {
        let options = options();
        let index = SearchIndex::build(&options);
        let search = EditDistanceSearch::default();
        let first = apply("gre", &options, &index, &search);
        let second = apply("gre", &options, &index, &search);
        assert_eq!(first, second);
        assert_eq!(options, self::options());
    }
}
