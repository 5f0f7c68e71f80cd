//! Terminal host for the picker.
//!
//! `App` owns a [`CountryPicker`], the list view it scrolls, and the mouse
//! regions of the last frame. Picker callbacks are delivered back to the app
//! over a channel and drained after each action.

use std::sync::mpsc::{self, Receiver};

use crate::country::CountryTable;
use crate::error::Result;
use crate::events::Action;
use crate::log;
use crate::picker::{CountryPicker, OptionId, Picker, PickerOption, PickerProps};
use crate::scroll::{ListHost, ScrollHelper};
use crate::tui::interaction::InteractionRegistry;
use crate::tui::list_view::ListView;

/// Notifications emitted by the picker callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Changed(OptionId),
    Closed,
}

#[derive(Debug)]
pub struct App {
    pub picker: CountryPicker<CountryTable>,
    pub list: ListView,
    pub interactions: InteractionRegistry,
    pub wheel: ScrollHelper,
    /// Keyboard input goes to the filter instead of the list
    pub filter_focused: bool,
    /// Last chosen option
    pub selected: Option<PickerOption>,
    /// One-line message shown under the trigger
    pub status: Option<String>,
    pub should_quit: bool,
    events: Receiver<PickerEvent>,
}

impl App {
    pub fn new(props: PickerProps, table: CountryTable) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let close_tx = tx.clone();

        let picker = CountryPicker::builder(props, table)
            .on_change(move |id| {
                let _ = tx.send(PickerEvent::Changed(id.clone()));
            })
            .on_close(move || {
                let _ = close_tx.send(PickerEvent::Closed);
            })
            .build()?;

        Ok(Self {
            picker,
            list: ListView::new(),
            interactions: InteractionRegistry::new(),
            wheel: ScrollHelper::default(),
            filter_focused: false,
            selected: None,
            status: None,
            should_quit: false,
            events: rx,
        })
    }

    /// Whether typed or pasted text should go to the filter.
    pub fn accepts_text(&self) -> bool {
        self.picker.is_open() && self.picker.props().filterable && self.filter_focused
    }

    /// Rows one page of the list spans.
    fn page_rows(&self) -> isize {
        let rows = self.list.viewport_height() / self.picker.item_height();
        (rows.floor() as isize).max(1)
    }

    /// Apply an action to the picker and host state.
    pub fn dispatch(&mut self, action: Action) {
        if action.is_loggable() {
            log::log_action(&format!("{:?}", action));
        }

        match action {
            Action::Quit => self.should_quit = true,

            Action::OpenPicker => {
                if self.picker.open() {
                    self.list.scroll_to(0.0);
                    self.wheel.reset();
                    let props = self.picker.props();
                    self.filter_focused = props.filterable && props.auto_focus_filter;
                }
            }
            Action::ClosePicker => {
                self.picker.close();
            }
            Action::DismissPicker => {
                self.picker.dismiss();
            }

            Action::FilterChar(c) => {
                let mut text = self.picker.filter_text().to_string();
                text.push(c);
                self.apply_filter(text);
            }
            Action::FilterPaste(pasted) => {
                let mut text = self.picker.filter_text().to_string();
                text.extend(pasted.chars().filter(|c| !c.is_control()));
                self.apply_filter(text);
            }
            Action::FilterBackspace => {
                let mut text = self.picker.filter_text().to_string();
                if text.pop().is_some() {
                    self.apply_filter(text);
                }
            }
            Action::FilterClear => {
                if !self.picker.filter_text().is_empty() {
                    self.apply_filter(String::new());
                }
            }
            Action::FocusFilter => {
                self.filter_focused = self.picker.props().filterable;
            }
            Action::ToggleFilterFocus => {
                self.filter_focused = !self.filter_focused && self.picker.props().filterable;
            }

            Action::JumpToLetter(letter) => {
                self.picker.jump_to_letter(letter, &mut self.list);
            }
            Action::HighlightNext => {
                self.picker.highlight_next();
                self.reveal_highlight();
            }
            Action::HighlightPrev => {
                self.picker.highlight_prev();
                self.reveal_highlight();
            }
            Action::PageUp => {
                let page = self.page_rows();
                self.picker.highlight_by(-page);
                self.reveal_highlight();
            }
            Action::PageDown => {
                let page = self.page_rows();
                self.picker.highlight_by(page);
                self.reveal_highlight();
            }
            Action::SelectHighlighted => {
                self.picker.select_highlighted();
            }
            Action::SelectRow(row) => {
                self.picker.select_row(row);
            }
            Action::ScrollWheel(steps) => {
                if let Some(delta) = self.wheel.accumulate(steps) {
                    let content = self.picker.content_height();
                    self.list.scroll_by(delta, content);
                }
            }

            Action::None => {}
        }

        self.drain_events();
    }

    fn apply_filter(&mut self, text: String) {
        self.picker.change_filter(text, &mut self.list);
    }

    fn reveal_highlight(&mut self) {
        let item_height = self.picker.item_height();
        let top = self.picker.highlighted_index() as f32 * item_height;
        let content = self.picker.content_height();
        self.list.reveal(top, top + item_height, content);
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                PickerEvent::Changed(id) => {
                    let option = self
                        .picker
                        .options()
                        .iter()
                        .find(|option| option.id == id)
                        .cloned()
                        .unwrap_or_else(|| PickerOption::new(id.clone(), id.to_string()));
                    self.status = Some(format!("Selected {} ({})", option.name, option.id));
                    self.selected = Some(option);
                }
                PickerEvent::Closed => {
                    self.status = Some("Closed without choosing".to_string());
                }
            }
            self.filter_focused = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::record;

    fn table() -> CountryTable {
        CountryTable::from_records([
            record("FR", [("common", "France")]),
            record("US", [("common", "United States")]),
            record("DE", [("common", "Germany")]),
            record("GR", [("common", "Greece")]),
            record("JP", [("common", "Japan")]),
        ])
    }

    fn app(props: PickerProps) -> App {
        App::new(props.with_options(["FR", "US", "DE", "GR", "JP"]), table()).unwrap()
    }

    #[test]
    fn test_open_focuses_filter_when_configured() {
        let mut app = app(PickerProps {
            filterable: true,
            ..Default::default()
        });
        app.dispatch(Action::OpenPicker);
        assert!(app.picker.is_open());
        assert!(app.filter_focused);
        assert!(app.accepts_text());

        let mut app = self::app(PickerProps {
            filterable: true,
            auto_focus_filter: false,
            ..Default::default()
        });
        app.dispatch(Action::OpenPicker);
        assert!(!app.filter_focused);
    }

    #[test]
    fn test_typing_filters_and_selection_reports_back() {
        let mut app = app(PickerProps {
            filterable: true,
            ..Default::default()
        });
        app.dispatch(Action::OpenPicker);
        for c in "germ".chars() {
            app.dispatch(Action::FilterChar(c));
        }
        assert_eq!(app.picker.filter_text(), "germ");
        assert_eq!(app.picker.visible()[0].id.as_str(), "DE");

        app.dispatch(Action::SelectHighlighted);
        assert!(!app.picker.is_open());
        assert_eq!(app.selected.as_ref().map(|o| o.id.as_str()), Some("DE"));
        assert_eq!(app.status.as_deref(), Some("Selected Germany (DE)"));
    }

    #[test]
    fn test_backspace_and_paste() {
        let mut app = app(PickerProps {
            filterable: true,
            ..Default::default()
        });
        app.dispatch(Action::OpenPicker);
        app.dispatch(Action::FilterPaste("Japx\n".to_string()));
        assert_eq!(app.picker.filter_text(), "Japx");
        app.dispatch(Action::FilterBackspace);
        assert_eq!(app.picker.filter_text(), "Jap");
        app.dispatch(Action::FilterClear);
        assert_eq!(app.picker.filter_text(), "");
        assert_eq!(app.picker.visible().len(), 5);
    }

    #[test]
    fn test_close_reports_on_close() {
        let mut app = app(PickerProps {
            closeable: true,
            ..Default::default()
        });
        app.dispatch(Action::OpenPicker);
        app.dispatch(Action::ClosePicker);
        assert!(!app.picker.is_open());
        assert_eq!(app.status.as_deref(), Some("Closed without choosing"));
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_dismiss_is_silent() {
        let mut app = app(PickerProps::default());
        app.dispatch(Action::OpenPicker);
        app.dispatch(Action::DismissPicker);
        assert!(!app.picker.is_open());
        assert!(app.status.is_none());
    }

    #[test]
    fn test_jump_and_highlight_reveal() {
        let mut app = app(PickerProps {
            item_height: 2.0,
            ..Default::default()
        });
        app.list.on_layout(4.0);
        app.dispatch(Action::OpenPicker);

        // France, United States, Germany, Greece, Japan: J is row 4
        app.dispatch(Action::JumpToLetter('j'));
        assert_eq!(app.picker.highlighted_index(), 4);
        assert_eq!(app.list.offset(), 6.0);

        app.dispatch(Action::HighlightNext);
        assert_eq!(app.picker.highlighted_index(), 0);
        assert_eq!(app.list.offset(), 0.0);

        app.dispatch(Action::PageDown);
        assert_eq!(app.picker.highlighted_index(), 2);
        assert_eq!(app.list.offset(), 2.0);
    }

    #[test]
    fn test_select_row_by_click() {
        let mut app = app(PickerProps::default());
        app.dispatch(Action::OpenPicker);
        app.dispatch(Action::SelectRow(1));
        assert_eq!(app.selected.as_ref().map(|o| o.id.as_str()), Some("US"));
    }

    #[test]
    fn test_quit() {
        let mut app = app(PickerProps::default());
        app.dispatch(Action::Quit);
        assert!(app.should_quit);
    }
}
