//! Configuration inputs of a picker instance.

use std::sync::Arc;

use crate::error::{ConfigError, ConfigResult};
use crate::style::StyleOverrides;

use super::option::OptionId;
use super::search::DEFAULT_THRESHOLD;

pub const DEFAULT_TRANSLATION: &str = "eng";
pub const DEFAULT_FILTER_PLACEHOLDER: &str = "Filter";
pub const DEFAULT_TRIGGER_LABEL: &str = "Select";

/// Props supplied by the host at construction and on every re-render.
///
/// `options_list` and `exclude_countries` are shared slices: handing the
/// picker the same `Arc` again is how a host says "unchanged", and the index
/// is only rebuilt when the reference differs.
#[derive(Debug, Clone)]
pub struct PickerProps {
    pub options_list: Arc<[OptionId]>,
    pub exclude_countries: Arc<[OptionId]>,
    /// Translation key for display names
    pub translation: String,
    /// Show an explicit close button
    pub closeable: bool,
    /// Show the filter input
    pub filterable: bool,
    pub filter_placeholder: String,
    /// Focus the filter input when the modal opens
    pub auto_focus_filter: bool,
    /// Trigger content; the picker shows "Select" when unset
    pub trigger_label: Option<String>,
    /// Fixed height of one row in list units
    pub item_height: f32,
    /// Fuzzy match strictness, lower is stricter
    pub fuzzy_threshold: f64,
    pub style_overrides: StyleOverrides,
}

impl Default for PickerProps {
    fn default() -> Self {
        Self {
            options_list: Arc::from(Vec::new()),
            exclude_countries: Arc::from(Vec::new()),
            translation: DEFAULT_TRANSLATION.to_string(),
            closeable: false,
            filterable: false,
            filter_placeholder: DEFAULT_FILTER_PLACEHOLDER.to_string(),
            auto_focus_filter: true,
            trigger_label: None,
            item_height: 1.0,
            fuzzy_threshold: DEFAULT_THRESHOLD,
            style_overrides: StyleOverrides::new(),
        }
    }
}

impl PickerProps {
    pub fn with_options<I, T>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OptionId>,
    {
        self.options_list = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_excluded<I, T>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OptionId>,
    {
        self.exclude_countries = excluded.into_iter().map(Into::into).collect();
        self
    }

    pub fn trigger_label(&self) -> &str {
        self.trigger_label.as_deref().unwrap_or(DEFAULT_TRIGGER_LABEL)
    }

    /// Check numeric settings before they reach the picker.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            return Err(ConfigError::InvalidItemHeight(self.item_height));
        }
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(ConfigError::InvalidThreshold(self.fuzzy_threshold));
        }
        Ok(())
    }
}
