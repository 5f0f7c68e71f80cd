//! The picker state machine.
//!
//! A [`CountryPicker`] is either `Closed` (only the trigger is shown) or
//! `Open` (the modal with filter, list and jump letters). It owns the option
//! index and the visible list and is the only thing that mutates them.
//!
//! ```text
//! Closed --open--> Open
//! Open --select(o)--> Closed      on_change(o)
//! Open --close--> Closed          on_close()
//! Open --dismiss--> Closed
//! Open --change_filter(v)--> Open scroll to top
//! ```
//!
//! Prop updates rebuild the index in either state without changing it.

use std::fmt;
use std::sync::Arc;

use crate::country::NameResolver;
use crate::error::{PickerError, Result};
use crate::log;
use crate::scroll::{ListHost, offset_for_letter};
use crate::style::PickerStyles;

use super::filter;
use super::index::OptionIndex;
use super::option::{OptionId, PickerOption};
use super::props::PickerProps;
use super::search::{EditDistanceSearch, FuzzySearch};
use super::traits::Picker;

/// Invoked with the chosen option on selection.
pub type ChangeCallback = Box<dyn FnMut(&OptionId)>;

/// Invoked when the user closes the modal explicitly.
pub type CloseCallback = Box<dyn FnMut()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Mutable part of the picker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickerState {
    pub modal: ModalState,
    pub filter: String,
    pub visible: Vec<PickerOption>,
    /// Keyboard highlight, an index into `visible`
    pub highlighted: usize,
}

impl PickerState {
    fn reset(&mut self, options: &[PickerOption]) {
        self.filter.clear();
        self.visible = options.to_vec();
        self.highlighted = 0;
    }
}

/// Builder that validates a picker before it exists.
pub struct PickerBuilder<R> {
    props: PickerProps,
    resolver: R,
    search: Option<Box<dyn FuzzySearch>>,
    on_change: Option<ChangeCallback>,
    on_close: Option<CloseCallback>,
}

impl<R: NameResolver> PickerBuilder<R> {
    pub fn new(props: PickerProps, resolver: R) -> Self {
        Self {
            props,
            resolver,
            search: None,
            on_change: None,
            on_close: None,
        }
    }

    /// Required: called once per selection.
    pub fn on_change(mut self, callback: impl FnMut(&OptionId) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Replace the default edit-distance matcher.
    pub fn search(mut self, search: impl FuzzySearch + 'static) -> Self {
        self.search = Some(Box::new(search));
        self
    }

    pub fn build(self) -> Result<CountryPicker<R>> {
        let on_change = self.on_change.ok_or(PickerError::MissingOnChange)?;
        self.props.validate()?;
        let styles = PickerStyles::resolve(&self.props.style_overrides)?;

        let custom_search = self.search.is_some();
        let search = self
            .search
            .unwrap_or_else(|| Box::new(EditDistanceSearch::new(self.props.fuzzy_threshold)));

        let index = OptionIndex::build(
            &self.props.options_list,
            &self.props.exclude_countries,
            &self.resolver,
            &self.props.translation,
        );

        let state = PickerState {
            visible: index.options.clone(),
            ..Default::default()
        };

        log::log_event(&format!(
            "picker built with {} options, {} jump letters",
            index.len(),
            index.letters.len()
        ));

        Ok(CountryPicker {
            props: self.props,
            resolver: self.resolver,
            search,
            custom_search,
            index,
            state,
            styles,
            on_change,
            on_close: self.on_close,
        })
    }
}

/// A modal country picker.
pub struct CountryPicker<R> {
    props: PickerProps,
    resolver: R,
    search: Box<dyn FuzzySearch>,
    custom_search: bool,
    index: OptionIndex,
    state: PickerState,
    styles: PickerStyles,
    on_change: ChangeCallback,
    on_close: Option<CloseCallback>,
}

impl<R> fmt::Debug for CountryPicker<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountryPicker")
            .field("props", &self.props)
            .field("options", &self.index.len())
            .field("state", &self.state)
            .field("has_on_close", &self.on_close.is_some())
            .finish_non_exhaustive()
    }
}

impl<R: NameResolver> CountryPicker<R> {
    pub fn builder(props: PickerProps, resolver: R) -> PickerBuilder<R> {
        PickerBuilder::new(props, resolver)
    }

    /// Trigger pressed.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.state.modal = ModalState::Open;
        log::log_event("modal opened");
        true
    }

    /// Select the visible row at `index`.
    pub fn select_row(&mut self, index: usize) -> bool {
        match self.state.visible.get(index) {
            Some(option) => {
                let id = option.id.clone();
                self.commit(id)
            }
            None => false,
        }
    }

    /// Select the highlighted row; no-op on an empty list.
    pub fn select_highlighted(&mut self) -> bool {
        match self.highlighted_item() {
            Some(option) => {
                let id = option.id.clone();
                self.commit(id)
            }
            None => false,
        }
    }

    /// Select a visible option by id.
    pub fn select(&mut self, id: &OptionId) -> bool {
        if !self.state.visible.iter().any(|option| &option.id == id) {
            return false;
        }
        self.commit(id.clone())
    }

    fn commit(&mut self, id: OptionId) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state.modal = ModalState::Closed;
        self.state.reset(&self.index.options);
        log::log_event(&format!("selected {}", id));
        (self.on_change)(&id);
        true
    }

    /// Close button pressed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state.modal = ModalState::Closed;
        self.state.reset(&self.index.options);
        log::log_event("modal closed");
        if let Some(on_close) = self.on_close.as_mut() {
            on_close();
        }
        true
    }

    /// The host asked the modal to go away (back button, Esc) without the
    /// user pressing close. Resets like `close` but does not notify.
    pub fn dismiss(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state.modal = ModalState::Closed;
        self.state.reset(&self.index.options);
        log::log_event("modal dismissed");
        true
    }

    /// Apply new filter text and scroll the list back to the top.
    ///
    /// Ignored while closed.
    pub fn change_filter(&mut self, text: impl Into<String>, list: &mut dyn ListHost) -> bool {
        if !self.is_open() {
            return false;
        }
        let text = text.into();
        self.state.visible = filter::apply(
            &text,
            &self.index.options,
            &self.index.search,
            self.search.as_ref(),
        );
        self.state.filter = text;
        self.state.highlighted = 0;
        list.scroll_to(0.0);
        log::log_event(&format!(
            "filter '{}' -> {} options",
            self.state.filter,
            self.state.visible.len()
        ));
        true
    }

    /// Scroll to the first visible option starting with `letter`.
    ///
    /// Returns the applied offset, or `None` when nothing starts with the
    /// letter (the list is left where it is).
    pub fn jump_to_letter(&mut self, letter: char, list: &mut dyn ListHost) -> Option<f32> {
        if !self.is_open() {
            return None;
        }
        let offset = offset_for_letter(
            letter,
            &self.state.visible,
            self.props.item_height,
            list.viewport_height(),
            self.content_height(),
        )?;
        list.scroll_to(offset);
        if let Some(index) = crate::scroll::index_for_letter(letter, &self.state.visible) {
            self.state.highlighted = index;
        }
        log::log_event(&format!("jump to '{}' -> offset {}", letter, offset));
        Some(offset)
    }

    /// Re-apply props from the host.
    ///
    /// The index is rebuilt from the new props when the option list or the
    /// exclusion list is a different reference, or the translation changed.
    /// A rebuild resets the filter and visible list but leaves the modal open
    /// or closed as it was. Returns whether a rebuild happened.
    pub fn update_props(&mut self, props: PickerProps) -> Result<bool> {
        props.validate()?;
        let styles = PickerStyles::resolve(&props.style_overrides)?;

        let rebuild = !Arc::ptr_eq(&props.options_list, &self.props.options_list)
            || !Arc::ptr_eq(&props.exclude_countries, &self.props.exclude_countries)
            || props.translation != self.props.translation;
        let threshold_changed = props.fuzzy_threshold != self.props.fuzzy_threshold;

        self.props = props;
        self.styles = styles;

        if threshold_changed && !self.custom_search {
            self.search = Box::new(EditDistanceSearch::new(self.props.fuzzy_threshold));
        }

        if rebuild {
            self.index = OptionIndex::build(
                &self.props.options_list,
                &self.props.exclude_countries,
                &self.resolver,
                &self.props.translation,
            );
            self.state.reset(&self.index.options);
            log::log_event(&format!("options rebuilt: {} options", self.index.len()));
        } else if threshold_changed && !self.state.filter.is_empty() {
            self.state.visible = filter::apply(
                &self.state.filter,
                &self.index.options,
                &self.index.search,
                self.search.as_ref(),
            );
            self.state.highlighted = 0;
        }

        Ok(rebuild)
    }
}

impl<R> CountryPicker<R> {
    pub fn is_open(&self) -> bool {
        self.state.modal == ModalState::Open
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn filter_text(&self) -> &str {
        &self.state.filter
    }

    pub fn visible(&self) -> &[PickerOption] {
        &self.state.visible
    }

    /// The full option set after exclusions.
    pub fn options(&self) -> &[PickerOption] {
        &self.index.options
    }

    pub fn index(&self) -> &OptionIndex {
        &self.index
    }

    pub fn jump_letters(&self) -> &[char] {
        self.index.letters.letters()
    }

    /// Jump letters to render: none while a filter is active.
    pub fn visible_jump_letters(&self) -> &[char] {
        if self.state.filter.trim().is_empty() {
            self.jump_letters()
        } else {
            &[]
        }
    }

    pub fn props(&self) -> &PickerProps {
        &self.props
    }

    pub fn styles(&self) -> &PickerStyles {
        &self.styles
    }

    pub fn item_height(&self) -> f32 {
        self.props.item_height
    }

    /// Total height of the visible rows.
    pub fn content_height(&self) -> f32 {
        self.state.visible.len() as f32 * self.props.item_height
    }
}

impl<R> Picker for CountryPicker<R> {
    type Item = PickerOption;

    fn items(&self) -> &[Self::Item] {
        &self.state.visible
    }

    fn highlighted_index(&self) -> usize {
        self.state.highlighted
    }

    fn set_highlighted_index(&mut self, index: usize) {
        self.state.highlighted = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::{CountryTable, record};
    use crate::picker::search::SearchRecord;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct RecordingList {
        viewport: f32,
        scrolls: Vec<f32>,
    }

    impl ListHost for RecordingList {
        fn scroll_to(&mut self, offset: f32) {
            self.scrolls.push(offset);
        }

        fn viewport_height(&self) -> f32 {
            self.viewport
        }
    }

    fn table() -> CountryTable {
        CountryTable::from_records([
            record("FR", [("common", "France"), ("deu", "Frankreich")]),
            record("US", [("common", "United States")]),
            record("DE", [("common", "Germany"), ("deu", "Deutschland")]),
            record("GR", [("common", "Greece")]),
            record("JP", [("common", "Japan")]),
        ])
    }

    struct Harness {
        picker: CountryPicker<CountryTable>,
        changes: Rc<RefCell<Vec<OptionId>>>,
        closes: Rc<RefCell<usize>>,
    }

    fn harness(props: PickerProps, with_on_close: bool) -> Harness {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let closes = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&changes);
        let mut builder = CountryPicker::builder(props, table())
            .on_change(move |id| sink.borrow_mut().push(id.clone()));
        if with_on_close {
            let counter = Rc::clone(&closes);
            builder = builder.on_close(move || *counter.borrow_mut() += 1);
        }

        Harness {
            picker: builder.build().unwrap(),
            changes,
            closes,
        }
    }

    fn props() -> PickerProps {
        PickerProps::default()
            .with_options(["FR", "US", "DE"])
            .with_excluded(["US"])
    }

    fn codes(options: &[PickerOption]) -> Vec<&str> {
        options.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let h = harness(props(), false);
        assert!(!h.picker.is_open());
        assert_eq!(h.picker.filter_text(), "");
        assert_eq!(codes(h.picker.visible()), vec!["FR", "DE"]);
        assert_eq!(h.picker.jump_letters(), &['F', 'G']);
    }

    #[test]
    fn test_missing_on_change_fails_fast() {
        let err = CountryPicker::builder(props(), table()).build().unwrap_err();
        assert!(matches!(err, PickerError::MissingOnChange));
    }

    #[test]
    fn test_invalid_props_fail_build() {
        let bad = PickerProps {
            item_height: -1.0,
            ..props()
        };
        let err = CountryPicker::builder(bad, table())
            .on_change(|_| {})
            .build()
            .unwrap_err();
        assert!(matches!(err, PickerError::Config(_)));
    }

    #[test]
    fn test_open_only_changes_modal() {
        let mut h = harness(props(), false);
        assert!(h.picker.open());
        assert!(h.picker.is_open());
        assert!(!h.picker.open());
        assert_eq!(codes(h.picker.visible()), vec!["FR", "DE"]);
    }

    #[test]
    fn test_select_closes_and_notifies_once() {
        let mut h = harness(props(), false);
        let mut list = RecordingList::default();
        h.picker.open();
        h.picker.change_filter("Ger", &mut list);

        assert!(h.picker.select(&"DE".into()));
        assert!(!h.picker.is_open());
        assert_eq!(h.picker.filter_text(), "");
        assert_eq!(codes(h.picker.visible()), vec!["FR", "DE"]);
        assert_eq!(*h.changes.borrow(), vec![OptionId::from("DE")]);
    }

    #[test]
    fn test_select_while_closed_is_ignored() {
        let mut h = harness(props(), false);
        assert!(!h.picker.select_row(0));
        assert!(!h.picker.select(&"FR".into()));
        assert!(h.changes.borrow().is_empty());
    }

    #[test]
    fn test_select_unknown_row_is_ignored() {
        let mut h = harness(props(), false);
        h.picker.open();
        assert!(!h.picker.select_row(7));
        assert!(!h.picker.select(&"US".into()));
        assert!(h.picker.is_open());
        assert!(h.changes.borrow().is_empty());
    }

    #[test]
    fn test_select_highlighted() {
        let mut h = harness(props(), false);
        h.picker.open();
        h.picker.highlight_next();
        assert!(h.picker.select_highlighted());
        assert_eq!(*h.changes.borrow(), vec![OptionId::from("DE")]);
    }

    #[test]
    fn test_close_resets_and_calls_on_close() {
        let mut h = harness(props(), true);
        let mut list = RecordingList::default();
        h.picker.open();
        h.picker.change_filter("zzzz", &mut list);
        assert!(h.picker.visible().is_empty());

        assert!(h.picker.close());
        assert!(!h.picker.is_open());
        assert_eq!(h.picker.filter_text(), "");
        assert_eq!(codes(h.picker.visible()), vec!["FR", "DE"]);
        assert_eq!(*h.closes.borrow(), 1);
        assert!(h.changes.borrow().is_empty());

        assert!(!h.picker.close());
        assert_eq!(*h.closes.borrow(), 1);
    }

    #[test]
    fn test_close_without_on_close() {
        let mut h = harness(props(), false);
        h.picker.open();
        assert!(h.picker.close());
        assert!(!h.picker.is_open());
    }

    #[test]
    fn test_dismiss_does_not_notify() {
        let mut h = harness(props(), true);
        let mut list = RecordingList::default();
        h.picker.open();
        h.picker.change_filter("Fra", &mut list);
        assert!(h.picker.dismiss());
        assert_eq!(h.picker.filter_text(), "");
        assert_eq!(*h.closes.borrow(), 0);
    }

    #[test]
    fn test_filter_change_scrolls_to_top() {
        let mut h = harness(props(), false);
        let mut list = RecordingList::default();
        h.picker.open();

        assert!(h.picker.change_filter("Franc", &mut list));
        assert_eq!(codes(h.picker.visible()), vec!["FR"]);
        assert_eq!(list.scrolls, vec![0.0]);
        assert!(h.picker.visible_jump_letters().is_empty());

        assert!(h.picker.change_filter("", &mut list));
        assert_eq!(codes(h.picker.visible()), vec!["FR", "DE"]);
        assert_eq!(list.scrolls, vec![0.0, 0.0]);
        assert_eq!(h.picker.visible_jump_letters(), &['F', 'G']);
    }

    #[test]
    fn test_blank_filter_keeps_full_list_and_letters() {
        let mut h = harness(props(), false);
        let mut list = RecordingList::default();
        h.picker.open();

        assert!(h.picker.change_filter(" ", &mut list));
        assert_eq!(codes(h.picker.visible()), vec!["FR", "DE"]);
        assert_eq!(h.picker.visible_jump_letters(), &['F', 'G']);
    }

    #[test]
    fn test_filter_while_closed_is_ignored() {
        let mut h = harness(props(), false);
        let mut list = RecordingList::default();
        assert!(!h.picker.change_filter("Fra", &mut list));
        assert_eq!(h.picker.filter_text(), "");
        assert!(list.scrolls.is_empty());
    }

    #[test]
    fn test_jump_to_letter_clamps() {
        let options: Vec<String> = (0..10).map(|i| format!("X{}", i)).collect();
        let mut records = vec![
            record("FR", [("common", "France")]),
            record("DE", [("common", "Germany")]),
        ];
        let mut configured = vec!["FR".to_string(), "DE".to_string()];
        for code in options.iter().take(8) {
            records.push(record(code, [("common", "Zed")]));
            configured.push(code.clone());
        }

        let props = PickerProps {
            item_height: 40.0,
            ..PickerProps::default().with_options(configured)
        };
        let mut picker = CountryPicker::builder(props, CountryTable::from_records(records))
            .on_change(|_| {})
            .build()
            .unwrap();
        let mut list = RecordingList {
            viewport: 380.0,
            scrolls: vec![],
        };

        picker.open();
        assert_eq!(picker.content_height(), 400.0);
        assert_eq!(picker.jump_to_letter('G', &mut list), Some(20.0));
        assert_eq!(list.scrolls, vec![20.0]);
        assert_eq!(picker.highlighted_index(), 1);
    }

    #[test]
    fn test_jump_to_missing_letter_is_noop() {
        let mut h = harness(props(), false);
        let mut list = RecordingList::default();
        h.picker.open();
        assert_eq!(h.picker.jump_to_letter('Q', &mut list), None);
        assert!(list.scrolls.is_empty());
    }

    #[test]
    fn test_new_option_list_rebuilds_without_closing() {
        let mut h = harness(props(), false);
        let mut list = RecordingList::default();
        h.picker.open();
        h.picker.change_filter("Fra", &mut list);

        let next = PickerProps {
            exclude_countries: h.picker.props().exclude_countries.clone(),
            ..PickerProps::default().with_options(["JP", "GR", "US"])
        };
        assert!(h.picker.update_props(next).unwrap());

        assert!(h.picker.is_open());
        assert_eq!(h.picker.filter_text(), "");
        assert_eq!(codes(h.picker.visible()), vec!["JP", "GR"]);
        assert_eq!(h.picker.jump_letters(), &['G', 'J']);
        assert_eq!(h.picker.index().search.len(), 2);
    }

    #[test]
    fn test_same_option_list_skips_rebuild() {
        let mut h = harness(props(), false);
        let mut list = RecordingList::default();
        h.picker.open();
        h.picker.change_filter("Fra", &mut list);

        let same = PickerProps {
            closeable: true,
            ..h.picker.props().clone()
        };
        assert!(!h.picker.update_props(same).unwrap());
        assert_eq!(h.picker.filter_text(), "Fra");
        assert!(h.picker.props().closeable);
    }

    #[test]
    fn test_translation_change_rebuilds_names() {
        let mut h = harness(props(), false);
        let next = PickerProps {
            translation: "deu".to_string(),
            ..h.picker.props().clone()
        };
        assert!(h.picker.update_props(next).unwrap());
        assert_eq!(h.picker.visible()[1].name, "Deutschland");
        assert_eq!(h.picker.jump_letters(), &['D', 'F']);
        assert!(!h.picker.is_open());
    }

    #[test]
    fn test_custom_search_backend() {
        struct Exact;

        impl FuzzySearch for Exact {
            fn search(&self, query: &str, records: &[SearchRecord]) -> Vec<OptionId> {
                records
                    .iter()
                    .filter(|r| r.name == query)
                    .map(|r| r.id.clone())
                    .collect()
            }
        }

        let mut picker = CountryPicker::builder(props(), table())
            .on_change(|_| {})
            .search(Exact)
            .build()
            .unwrap();
        let mut list = RecordingList::default();
        picker.open();
        picker.change_filter("Franc", &mut list);
        assert!(picker.visible().is_empty());
        picker.change_filter("Germany", &mut list);
        assert_eq!(codes(picker.visible()), vec!["DE"]);
    }
}
