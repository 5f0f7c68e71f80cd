//! Modal country picker for the terminal.
//!
//! The [`picker`] module holds the headless state machine: option index,
//! fuzzy filter, jump letters and selection. The [`tui`] module renders it
//! with ratatui, and [`app::App`] wires both to crossterm events.

pub mod app;
pub mod config;
pub mod country;
pub mod error;
pub mod events;
pub mod log;
pub mod picker;
pub mod scroll;
pub mod style;
pub mod tui;

pub use country::{CountryTable, NameResolver};
pub use error::{PickerError, Result};
pub use picker::{CountryPicker, OptionId, PickerOption, PickerProps};
