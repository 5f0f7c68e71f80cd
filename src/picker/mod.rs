//! Headless country picker
//!
//! The picker keeps the option index, the filter and the visible list in
//! sync. Rendering, the list widget and the name data are supplied by the
//! host through [`crate::scroll::ListHost`] and [`crate::country::NameResolver`].

pub mod filter;
pub mod index;
pub mod option;
pub mod props;
pub mod search;
pub mod state;
mod traits;

pub use index::{JumpIndex, OptionIndex};
pub use option::{OptionId, PickerOption};
pub use props::PickerProps;
pub use search::{EditDistanceSearch, FuzzySearch, SearchIndex, SearchRecord};
pub use state::{CountryPicker, ModalState, PickerBuilder, PickerState};
pub use traits::Picker;
