//! The scrolling list of visible options.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::country::CountryTable;
use crate::events::Action;
use crate::picker::{CountryPicker, Picker};
use crate::style::StyleSlot;
use crate::tui::interaction::{ClickRegion, InteractionRegistry};
use crate::tui::list_view::ListView;
use crate::tui::theme::*;

/// Render the rows of the visible list that fall inside the viewport.
///
/// Each option spans `item_height` rows, which need not be whole, with its
/// name on the row holding its center. Rows map to items with the same
/// heights the jump offsets use.
pub fn render_country_list(
    frame: &mut Frame,
    area: Rect,
    picker: &CountryPicker<CountryTable>,
    list: &ListView,
    registry: &mut InteractionRegistry,
) {
    let styles = picker.styles();
    let visible = picker.visible();

    registry.register_scroll(
        "country_list",
        ClickRegion::from(area),
        Action::ScrollWheel(-1),
        Action::ScrollWheel(1),
    );

    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("  (no matching countries)", Style::new().fg(TEXT_DIM))),
            area,
        );
        return;
    }

    let item_height = picker.item_height();
    let first_row = list.visible_offset(picker.content_height()).floor() as usize;
    let highlighted = picker.highlighted_index();

    let item_style = styles.get(StyleSlot::ItemCountry);
    let highlight_style = item_style.patch(styles.get(StyleSlot::Highlight));
    let name_style = styles.get(StyleSlot::CountryName);

    let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
    for screen_row in 0..area.height {
        let row = first_row + screen_row as usize;
        // A row belongs to the item covering its middle
        let item = ((row as f32 + 0.5) / item_height).floor() as usize;
        let Some(option) = visible.get(item) else {
            lines.push(Line::raw(""));
            continue;
        };

        let row_style = if item == highlighted {
            highlight_style
        } else {
            item_style
        };
        let name_row = ((item as f32 + 0.5) * item_height).floor() as usize;
        let line = if row == name_row {
            Line::styled(format!("  {}", option.name), name_style.patch(row_style))
        } else {
            Line::raw("")
        };
        lines.push(line.style(row_style));

        registry.register_row(item, ClickRegion::new(area.x, area.y + screen_row, area.width, 1));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
