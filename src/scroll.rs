//! Scroll coordination for the option list.
//!
//! The picker does not own a list widget. It talks to whatever renders the
//! rows through [`ListHost`], which reports the measured viewport height and
//! accepts programmatic scrolls. Offsets are in the same unit as the item
//! height (pixels on a device, rows in a terminal).
//!
//! # Example
//!
//! ```rust,ignore
//! let content = visible.len() as f32 * item_height;
//! if let Some(offset) = offset_for_letter('G', &visible, item_height, host.viewport_height(), content) {
//!     host.scroll_to(offset);
//! }
//! ```

use std::time::{Duration, Instant};

use crate::picker::PickerOption;

/// Capability of the list that renders the visible options.
pub trait ListHost {
    /// Scroll so that `offset` is at the top of the viewport.
    fn scroll_to(&mut self, offset: f32);

    /// Height of the list container from the last layout, 0 before the first.
    fn viewport_height(&self) -> f32;
}

/// Largest offset that still fills the viewport.
pub fn max_offset(content_height: f32, viewport_height: f32) -> f32 {
    (content_height - viewport_height).max(0.0)
}

/// Clamp an offset into `[0, max(0, content - viewport)]`.
pub fn clamp_offset(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
    offset.max(0.0).min(max_offset(content_height, viewport_height))
}

/// Find the scroll offset of the first visible option starting with `letter`.
///
/// Returns `None` when no option starts with the letter. The offset never
/// scrolls past the end of the list, so before the first layout (viewport
/// height 0) every jump lands no further than the content allows.
pub fn offset_for_letter(
    letter: char,
    visible: &[PickerOption],
    item_height: f32,
    viewport_height: f32,
    content_height: f32,
) -> Option<f32> {
    let index = index_for_letter(letter, visible)?;
    let raw = index as f32 * item_height;
    Some(raw.min(max_offset(content_height, viewport_height)))
}

/// Index of the first option whose name starts with `letter`, ignoring case.
pub fn index_for_letter(letter: char, visible: &[PickerOption]) -> Option<usize> {
    let letter = letter.to_uppercase().next()?;
    visible.iter().position(|option| option.initial() == Some(letter))
}

/// Size that is `percent` of `total`, the way row heights are derived from
/// the screen height.
pub fn height_percent(total: f32, percent: f32) -> f32 {
    total * percent / 100.0
}

/// Accumulates mouse wheel steps into list scroll deltas.
///
/// Terminals report every wheel notch separately, and precision devices
/// send bursts of them. Steps arriving within the debounce window are added
/// up, and a delta is emitted once the total reaches the threshold.
#[derive(Debug, Clone)]
pub struct ScrollHelper {
    /// Pending steps since the last emitted delta
    pending: i32,
    /// Time of the last wheel step
    last_step: Option<Instant>,
    /// Window in which consecutive steps are combined
    debounce: Duration,
    /// Minimum pending steps before emitting
    threshold: i32,
    /// List units scrolled per wheel step
    step_size: f32,
}

impl Default for ScrollHelper {
    fn default() -> Self {
        Self::new(Duration::from_millis(50), 1, 3.0)
    }
}

impl ScrollHelper {
    pub fn new(debounce: Duration, threshold: i32, step_size: f32) -> Self {
        Self {
            pending: 0,
            last_step: None,
            debounce,
            threshold: threshold.max(1),
            step_size,
        }
    }

    /// Record wheel steps (negative = up) and return the delta to scroll by,
    /// if enough steps have accumulated.
    pub fn accumulate(&mut self, steps: i32) -> Option<f32> {
        self.accumulate_at(steps, Instant::now())
    }

    fn accumulate_at(&mut self, steps: i32, now: Instant) -> Option<f32> {
        let fresh = self
            .last_step
            .is_none_or(|last| now.duration_since(last) > self.debounce);

        if fresh {
            self.pending = steps;
        } else {
            self.pending += steps;
        }
        self.last_step = Some(now);

        self.flush()
    }

    /// Emit any pending delta that has reached the threshold.
    pub fn flush(&mut self) -> Option<f32> {
        if self.pending.abs() >= self.threshold {
            let delta = self.pending as f32 * self.step_size;
            self.pending = 0;
            Some(delta)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.pending = 0;
        self.last_step = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible() -> Vec<PickerOption> {
        vec![
            PickerOption::new("FR".into(), "France"),
            PickerOption::new("DE".into(), "Germany"),
            PickerOption::new("GR".into(), "Greece"),
            PickerOption::new("US".into(), "United States"),
        ]
    }

    #[test]
    fn test_jump_clamps_to_end_of_list() {
        let offset = offset_for_letter('G', &visible(), 40.0, 380.0, 400.0);
        assert_eq!(offset, Some(20.0));
    }

    #[test]
    fn test_jump_without_clamping() {
        let offset = offset_for_letter('U', &visible(), 40.0, 40.0, 160.0);
        assert_eq!(offset, Some(120.0));
    }

    #[test]
    fn test_jump_is_case_insensitive() {
        assert_eq!(index_for_letter('g', &visible()), Some(1));
    }

    #[test]
    fn test_jump_to_missing_letter_is_none() {
        assert_eq!(offset_for_letter('Z', &visible(), 40.0, 100.0, 160.0), None);
        assert_eq!(offset_for_letter('A', &[], 40.0, 100.0, 0.0), None);
    }

    #[test]
    fn test_jump_before_layout_stays_in_content() {
        // Viewport height is 0 until the host reports a layout
        let offset = offset_for_letter('U', &visible(), 40.0, 0.0, 160.0);
        assert_eq!(offset, Some(120.0));

        let offset = offset_for_letter('U', &visible(), 40.0, 0.0, 0.0);
        assert_eq!(offset, Some(0.0));
    }

    #[test]
    fn test_offsets_stay_within_bounds() {
        let visible = visible();
        for viewport in [0.0, 10.0, 79.0, 160.0, 500.0] {
            for content in [0.0, 40.0, 160.0] {
                for letter in ['F', 'G', 'U'] {
                    if let Some(offset) = offset_for_letter(letter, &visible, 40.0, viewport, content) {
                        assert!(offset >= 0.0);
                        assert!(offset <= max_offset(content, viewport));
                    }
                }
            }
        }
    }

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(-5.0, 100.0, 20.0), 0.0);
        assert_eq!(clamp_offset(50.0, 100.0, 20.0), 50.0);
        assert_eq!(clamp_offset(95.0, 100.0, 20.0), 80.0);
        assert_eq!(clamp_offset(10.0, 10.0, 20.0), 0.0);
    }

    #[test]
    fn test_height_percent() {
        assert_eq!(height_percent(200.0, 7.0), 14.0);
        assert_eq!(height_percent(0.0, 7.0), 0.0);
    }

    #[test]
    fn test_wheel_accumulates_within_debounce() {
        let mut helper = ScrollHelper::new(Duration::from_millis(100), 3, 1.0);
        let start = Instant::now();

        assert!(helper.accumulate_at(1, start).is_none());
        assert!(helper.accumulate_at(1, start + Duration::from_millis(10)).is_none());
        assert_eq!(helper.accumulate_at(1, start + Duration::from_millis(20)), Some(3.0));
    }

    #[test]
    fn test_wheel_restarts_after_debounce() {
        let mut helper = ScrollHelper::new(Duration::from_millis(10), 2, 2.0);
        let start = Instant::now();

        assert!(helper.accumulate_at(1, start).is_none());
        // Stale step is dropped once the window has passed
        assert!(helper.accumulate_at(1, start + Duration::from_millis(50)).is_none());
        assert_eq!(helper.accumulate_at(-3, start + Duration::from_millis(55)), Some(-4.0));
    }

    #[test]
    fn test_wheel_reset_drops_pending() {
        let mut helper = ScrollHelper::new(Duration::from_millis(100), 2, 1.0);
        assert!(helper.accumulate(1).is_none());
        helper.reset();
        assert!(helper.flush().is_none());
    }
}
