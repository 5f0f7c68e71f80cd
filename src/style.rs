//! Per-instance picker styles.
//!
//! Every picker resolves its own [`PickerStyles`] from the base style set and
//! the overrides it was configured with. Nothing is cached between instances,
//! so two pickers with different overrides render independently.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::tui::theme::*;

/// Named parts of the picker that can be restyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleSlot {
    TouchFlag,
    ModalContainer,
    Header,
    CloseButton,
    Input,
    InputOnly,
    Placeholder,
    ContentContainer,
    ItemCountry,
    CountryName,
    Highlight,
    Letters,
    LetterText,
}

impl fmt::Display for StyleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StyleSlot::TouchFlag => "touch_flag",
            StyleSlot::ModalContainer => "modal_container",
            StyleSlot::Header => "header",
            StyleSlot::CloseButton => "close_button",
            StyleSlot::Input => "input",
            StyleSlot::InputOnly => "input_only",
            StyleSlot::Placeholder => "placeholder",
            StyleSlot::ContentContainer => "content_container",
            StyleSlot::ItemCountry => "item_country",
            StyleSlot::CountryName => "country_name",
            StyleSlot::Highlight => "highlight",
            StyleSlot::Letters => "letters",
            StyleSlot::LetterText => "letter_text",
        };
        f.write_str(name)
    }
}

/// A partial style from configuration. Unset fields keep the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underlined: Option<bool>,
}

impl StyleSpec {
    fn to_style(&self, slot: StyleSlot) -> ConfigResult<Style> {
        let mut style = Style::new();
        if let Some(fg) = &self.fg {
            style = style.fg(parse_color(slot, fg)?);
        }
        if let Some(bg) = &self.bg {
            style = style.bg(parse_color(slot, bg)?);
        }
        for (flag, modifier) in [
            (self.bold, Modifier::BOLD),
            (self.italic, Modifier::ITALIC),
            (self.underlined, Modifier::UNDERLINED),
        ] {
            style = match flag {
                Some(true) => style.add_modifier(modifier),
                Some(false) => style.remove_modifier(modifier),
                None => style,
            };
        }
        Ok(style)
    }
}

fn parse_color(slot: StyleSlot, value: &str) -> ConfigResult<Color> {
    Color::from_str(value).map_err(|_| ConfigError::InvalidColor {
        slot: slot.to_string(),
        value: value.to_string(),
    })
}

/// Style overrides keyed by slot.
pub type StyleOverrides = BTreeMap<StyleSlot, StyleSpec>;

/// Fully resolved styles for one picker instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerStyles {
    slots: BTreeMap<StyleSlot, Style>,
}

impl PickerStyles {
    /// The base style set, used verbatim when there are no overrides.
    pub fn base() -> Self {
        let slots = [
            (StyleSlot::TouchFlag, Style::new().fg(ACCENT_MINT).bold()),
            (StyleSlot::ModalContainer, Style::new().bg(SURFACE)),
            (StyleSlot::Header, Style::new().fg(ACCENT_MINT)),
            (StyleSlot::CloseButton, Style::new().fg(ACCENT_CORAL).bold()),
            (StyleSlot::Input, Style::new().fg(TEXT_WHITE)),
            (StyleSlot::InputOnly, Style::new().fg(TEXT_WHITE)),
            (StyleSlot::Placeholder, Style::new().fg(TEXT_DIM).italic()),
            (StyleSlot::ContentContainer, Style::new().fg(ACCENT_BLUE)),
            (StyleSlot::ItemCountry, Style::new()),
            (StyleSlot::CountryName, Style::new().fg(TEXT_WHITE)),
            (StyleSlot::Highlight, Style::new().bg(HIGHLIGHT_BG).bold()),
            (StyleSlot::Letters, Style::new().fg(TEXT_DIM)),
            (StyleSlot::LetterText, Style::new().fg(ACCENT_GOLD).bold()),
        ];
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// Merge `overrides` on top of the base style set.
    pub fn resolve(overrides: &StyleOverrides) -> ConfigResult<Self> {
        let mut styles = Self::base();
        for (slot, spec) in overrides {
            let patch = spec.to_style(*slot)?;
            let merged = styles.get(*slot).patch(patch);
            styles.slots.insert(*slot, merged);
        }
        Ok(styles)
    }

    pub fn get(&self, slot: StyleSlot) -> Style {
        self.slots.get(&slot).copied().unwrap_or_default()
    }
}

impl Default for PickerStyles {
    fn default() -> Self {
        Self::base()
    }
}
