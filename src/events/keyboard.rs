//! Keyboard event handling by picker state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if app.picker.is_open() {
        handle_modal_mode(app, key)
    } else {
        handle_trigger_mode(key)
    }
}

fn handle_trigger_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => Action::OpenPicker,
        _ => Action::None,
    }
}

fn handle_modal_mode(app: &App, key: KeyEvent) -> Action {
    let props = app.picker.props();
    let typing = props.filterable && app.filter_focused;

    match key.code {
        KeyCode::Esc if props.closeable => Action::ClosePicker,
        KeyCode::Esc => Action::DismissPicker,

        KeyCode::Up => Action::HighlightPrev,
        KeyCode::Down => Action::HighlightNext,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Enter => Action::SelectHighlighted,

        KeyCode::Tab if props.filterable => Action::ToggleFilterFocus,

        KeyCode::Char('u') if typing && key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::FilterClear
        }
        KeyCode::Backspace if typing => Action::FilterBackspace,
        KeyCode::Char(c) if typing => Action::FilterChar(c),

        // With the filter unfocused, letters jump through the list
        KeyCode::Char(c) if app.picker.index().letters.contains(c) => Action::JumpToLetter(c),
        KeyCode::Char('/') if props.filterable => Action::FocusFilter,

        _ => Action::None,
    }
}
