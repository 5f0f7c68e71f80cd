use ratatui::Frame;

use crate::app::App;

use super::components::{render_modal, render_trigger};

/// Draw one frame and rebuild the mouse regions for it.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.interactions.clear();

    if app.picker.is_open() {
        render_modal(
            frame,
            area,
            &app.picker,
            &mut app.list,
            app.filter_focused,
            &mut app.interactions,
        );
    } else {
        render_trigger(
            frame,
            area,
            &app.picker,
            app.selected.as_ref(),
            app.status.as_deref(),
            &mut app.interactions,
        );
    }
}
