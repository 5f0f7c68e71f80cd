//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the region under the pointer.
//!
//! # Example
//!
//! ```ignore
//! // During render, register an interactive region:
//! registry.register(InteractiveRegion::clickable(
//!     "letter",
//!     ClickRegion::new(x, y, 3, 1),
//!     Action::JumpToLetter('G'),
//! ));
//!
//! // Mouse events are then dispatched to matching regions
//! let action = registry.handle_click(mouse.column, mouse.row);
//! ```

use ratatui::layout::Rect;

use crate::events::Action;

/// A rectangular hit area in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for logging
    pub id: &'static str,

    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    pub fn register_scroll(
        &mut self,
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) {
        self.register(InteractiveRegion::scrollable(
            id,
            bounds,
            scroll_up,
            scroll_down,
        ));
    }

    /// Register a row of the option list
    pub fn register_row(&mut self, row: usize, bounds: ClickRegion) {
        self.register(InteractiveRegion::clickable(
            "country_row",
            bounds,
            Action::SelectRow(row),
        ));
    }

    /// Register a jump letter
    pub fn register_letter(&mut self, letter: char, bounds: ClickRegion) {
        self.register(
            InteractiveRegion::clickable("jump_letter", bounds, Action::JumpToLetter(letter))
                .with_priority(1),
        );
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Find the action to dispatch for a click at (x, y)
    ///
    /// Returns the action from the highest-priority region that contains the point
    /// and has a click handler.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_click.as_ref())
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_scroll_up.as_ref())
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_scroll_down.as_ref())
    }

    fn find<F>(&self, x: u16, y: u16, handler: F) -> Action
    where
        F: Fn(&InteractiveRegion) -> Option<&Action>,
    {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y) && handler(r).is_some())
            // Later registrations win ties, they were drawn on top
            .max_by_key(|r| r.priority)
            .and_then(|r| handler(r).cloned())
            .unwrap_or(Action::None)
    }
}
