//! Country dataset and localized name lookup.
//!
//! The picker never reads country data directly; it asks a [`NameResolver`]
//! for the display name of an [`OptionId`] under a translation key. The
//! bundled [`CountryTable`] is one such resolver, backed by a JSON dataset.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::error::Result;
use crate::picker::OptionId;

/// Translation key that every record must carry.
pub const COMMON_NAME: &str = "common";

const BUNDLED_COUNTRIES: &str = include_str!("../data/countries.json");

/// Resolves the display name of an option for a translation key.
///
/// Implementations fall back to a canonical name when the translation is
/// missing. They never fail: an unknown id resolves to something printable.
pub trait NameResolver {
    fn resolve_name(&self, id: &OptionId, translation: &str) -> String;
}

impl<R: NameResolver + ?Sized> NameResolver for &R {
    fn resolve_name(&self, id: &OptionId, translation: &str) -> String {
        (**self).resolve_name(id, translation)
    }
}

/// A single dataset entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRecord {
    pub cca2: OptionId,
    /// Names keyed by translation (`"common"`, `"fra"`, `"deu"`, ...)
    pub name: BTreeMap<String, String>,
}

/// In-memory country table keyed by code.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    records: HashMap<OptionId, CountryRecord>,
    /// Codes in dataset order
    codes: Vec<OptionId>,
}

impl CountryTable {
    /// Load the dataset shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_COUNTRIES)
    }

    /// Parse a dataset from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CountryRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: impl IntoIterator<Item = CountryRecord>) -> Self {
        let mut table = Self::default();
        for record in records {
            if !table.records.contains_key(&record.cca2) {
                table.codes.push(record.cca2.clone());
            }
            table.records.insert(record.cca2.clone(), record);
        }
        table
    }

    /// Every code in dataset order.
    pub fn codes(&self) -> &[OptionId] {
        &self.codes
    }

    pub fn get(&self, id: &OptionId) -> Option<&CountryRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl NameResolver for CountryTable {
    fn resolve_name(&self, id: &OptionId, translation: &str) -> String {
        let Some(record) = self.records.get(id) else {
            return id.to_string();
        };

        record
            .name
            .get(translation)
            .or_else(|| record.name.get(COMMON_NAME))
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}

/// Build a record from `(translation, name)` pairs.
#[cfg(test)]
pub fn record<'a>(code: &str, names: impl IntoIterator<Item = (&'a str, &'a str)>) -> CountryRecord {
    CountryRecord {
        cca2: OptionId::from(code),
        name: names
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CountryTable {
        CountryTable::from_records([
            record("FR", [("common", "France"), ("deu", "Frankreich")]),
            record("DE", [("common", "Germany"), ("fra", "Allemagne")]),
        ])
    }

    #[test]
    fn test_resolve_requested_translation() {
        assert_eq!(table().resolve_name(&"FR".into(), "deu"), "Frankreich");
        assert_eq!(table().resolve_name(&"DE".into(), "fra"), "Allemagne");
    }

    #[test]
    fn test_missing_translation_falls_back_to_common() {
        assert_eq!(table().resolve_name(&"FR".into(), "eng"), "France");
        assert_eq!(table().resolve_name(&"DE".into(), "deu"), "Germany");
    }

    #[test]
    fn test_unknown_code_resolves_to_code() {
        assert_eq!(table().resolve_name(&"XX".into(), "eng"), "XX");
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let table = CountryTable::bundled().unwrap();
        // Every ISO 3166-1 alpha-2 code
        assert_eq!(table.len(), 249);
        for code in ["NE", "MC", "TD", "NG", "BJ", "CM"] {
            assert!(table.get(&code.into()).is_some(), "missing {}", code);
        }
        assert_eq!(table.resolve_name(&"DE".into(), "eng"), "Germany");
        assert_eq!(table.resolve_name(&"DE".into(), "deu"), "Deutschland");
        assert_eq!(table.resolve_name(&"DE".into(), "fra"), "Allemagne");
        assert_eq!(table.resolve_name(&"DE".into(), "jpn"), "ドイツ");
        assert!(table.codes().iter().all(|code| table.get(code).is_some()));
    }

    #[test]
    fn test_malformed_json_is_dataset_error() {
        let err = CountryTable::from_json("[{\"cca2\": 1}]").unwrap_err();
        assert!(matches!(err, crate::error::PickerError::Dataset(_)));
    }
}
