//! Option identifiers and resolved options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a selectable option (a country code such as `"FR"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(String);

impl OptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OptionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OptionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An option with its display name already resolved for the active translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub id: OptionId,
    pub name: String,
}

impl PickerOption {
    pub fn new(id: OptionId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }

    /// Uppercased first character of the display name, used for jump letters.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().and_then(|c| c.to_uppercase().next())
    }
}

/// Build a list of ids from string slices.
#[cfg(test)]
pub fn ids<'a>(codes: impl IntoIterator<Item = &'a str>) -> Vec<OptionId> {
    codes.into_iter().map(OptionId::from).collect()
}
