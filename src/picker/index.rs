//! Option index construction.
//!
//! Turns the configured option list into everything the picker renders and
//! searches: the ordered option set, the alphabetical jump letters, and the
//! fuzzy search records.

use std::collections::{BTreeSet, HashSet};

use crate::country::NameResolver;

use super::option::{OptionId, PickerOption};
use super::search::SearchIndex;

/// Sorted, de-duplicated uppercase first letters of the option names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpIndex(Vec<char>);

impl JumpIndex {
    pub fn from_options(options: &[PickerOption]) -> Self {
        let letters: BTreeSet<char> = options.iter().filter_map(PickerOption::initial).collect();
        Self(letters.into_iter().collect())
    }

    pub fn letters(&self) -> &[char] {
        &self.0
    }

    /// Whether `letter` (any case) is one of the jump letters.
    pub fn contains(&self, letter: char) -> bool {
        letter
            .to_uppercase()
            .next()
            .is_some_and(|upper| self.0.binary_search(&upper).is_ok())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The option set with its derived jump and search indexes.
#[derive(Debug, Clone, Default)]
pub struct OptionIndex {
    pub options: Vec<PickerOption>,
    pub letters: JumpIndex,
    pub search: SearchIndex,
}

impl OptionIndex {
    /// Build the index from the configured options minus the excluded ones.
    ///
    /// Relative order of the remaining options is preserved. Excluded ids
    /// that are not configured are ignored. Display names are resolved once
    /// here with `translation`.
    pub fn build(
        configured: &[OptionId],
        excluded: &[OptionId],
        resolver: &dyn NameResolver,
        translation: &str,
    ) -> Self {
        let excluded: HashSet<&OptionId> = excluded.iter().collect();

        let options: Vec<PickerOption> = configured
            .iter()
            .filter(|id| !excluded.contains(id))
            .map(|id| PickerOption::new(id.clone(), resolver.resolve_name(id, translation)))
            .collect();

        let letters = JumpIndex::from_options(&options);
        let search = SearchIndex::build(&options);

        Self {
            options,
            letters,
            search,
        }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
