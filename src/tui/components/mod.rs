//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `trigger` - Button shown while the modal is closed
//! - `modal` - Full-screen picker: header, list and jump letters
//! - `country_list` - Rows of the visible options
//! - `letter_bar` - Jump letter column

mod country_list;
mod letter_bar;
mod modal;
mod trigger;

pub use country_list::render_country_list;
pub use letter_bar::render_letter_bar;
pub use modal::render_modal;
pub use trigger::render_trigger;
