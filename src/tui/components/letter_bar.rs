//! Column of jump letters beside the list.

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::Paragraph,
};

use crate::tui::interaction::{ClickRegion, InteractionRegistry};
use crate::picker::CountryPicker;
use crate::country::CountryTable;
use crate::style::StyleSlot;

/// Render one letter per row; letters beyond the area height are not shown.
pub fn render_letter_bar(
    frame: &mut Frame,
    area: Rect,
    picker: &CountryPicker<CountryTable>,
    registry: &mut InteractionRegistry,
) {
    let styles = picker.styles();
    let letters = picker.visible_jump_letters();

    let lines: Vec<Line> = letters
        .iter()
        .take(area.height as usize)
        .map(|letter| Line::styled(format!(" {} ", letter), styles.get(StyleSlot::LetterText)))
        .collect();

    for (row, letter) in letters.iter().take(area.height as usize).enumerate() {
        registry.register_letter(
            *letter,
            ClickRegion::new(area.x, area.y + row as u16, area.width, 1),
        );
    }

    frame.render_widget(
        Paragraph::new(lines).style(styles.get(StyleSlot::Letters)),
        area,
    );
}
