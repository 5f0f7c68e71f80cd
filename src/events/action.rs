//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or customized.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Modal ===
    /// Trigger pressed: open the modal
    OpenPicker,
    /// Close button pressed
    ClosePicker,
    /// Modal dismissed without pressing close (Esc on a non-closeable picker)
    DismissPicker,

    // === Filter input ===
    /// Append a character to the filter
    FilterChar(char),
    /// Append pasted text to the filter
    FilterPaste(String),
    /// Delete the last filter character
    FilterBackspace,
    /// Clear the filter
    FilterClear,
    /// Give keyboard focus to the filter input
    FocusFilter,
    /// Toggle keyboard focus between filter input and list
    ToggleFilterFocus,

    // === List ===
    /// Scroll to the first option starting with a letter
    JumpToLetter(char),
    /// Move highlight down
    HighlightNext,
    /// Move highlight up
    HighlightPrev,
    /// Move highlight one page up
    PageUp,
    /// Move highlight one page down
    PageDown,
    /// Select the highlighted option
    SelectHighlighted,
    /// Select a visible row by index
    SelectRow(usize),
    /// Mouse wheel steps over the list (negative = up)
    ScrollWheel(i32),

    /// No action
    None,
}

impl Action {
    /// Whether this action should be written to the log.
    pub fn is_loggable(&self) -> bool {
        !matches!(self, Action::None)
    }
}
