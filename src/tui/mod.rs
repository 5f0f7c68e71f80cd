pub mod components;
pub mod interaction;
pub mod list_view;
pub mod theme;
pub mod ui;
