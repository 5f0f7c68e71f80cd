//! Highlight navigation for keyboard-driven hosts.

/// Moves a highlight cursor over a list of rows.
///
/// Implementors only expose the rows and the cursor; wrap-around stepping and
/// clamping come for free.
///
/// # Example
///
/// ```ignore
/// impl Picker for CountryPicker<R> {
///     type Item = PickerOption;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.state.visible
///     }
///
///     fn highlighted_index(&self) -> usize {
///         self.state.highlighted
///     }
///
///     fn set_highlighted_index(&mut self, index: usize) {
///         self.state.highlighted = index;
///     }
/// }
/// ```
pub trait Picker {
    type Item;

    /// Rows currently shown
    fn items(&self) -> &[Self::Item];

    fn highlighted_index(&self) -> usize;

    fn set_highlighted_index(&mut self, index: usize);

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Highlight the next row (wraps around)
    fn highlight_next(&mut self) {
        if !self.is_empty() {
            let next = (self.highlighted_index() + 1) % self.len();
            self.set_highlighted_index(next);
        }
    }

    /// Highlight the previous row (wraps around)
    fn highlight_prev(&mut self) {
        if !self.is_empty() {
            let prev = self
                .highlighted_index()
                .checked_sub(1)
                .unwrap_or(self.len() - 1);
            self.set_highlighted_index(prev);
        }
    }

    /// Move the highlight by `delta` rows, stopping at either end
    fn highlight_by(&mut self, delta: isize) {
        if !self.is_empty() {
            let target = self.highlighted_index().saturating_add_signed(delta);
            self.highlight_index(target);
        }
    }

    fn highlighted_item(&self) -> Option<&Self::Item> {
        self.items().get(self.highlighted_index())
    }

    /// Highlight a specific row (clamped to valid range)
    fn highlight_index(&mut self, index: usize) {
        if !self.is_empty() {
            let clamped = index.min(self.len() - 1);
            self.set_highlighted_index(clamped);
        }
    }
}
