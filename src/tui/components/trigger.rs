//! Trigger shown while the modal is closed.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::country::CountryTable;
use crate::events::Action;
use crate::picker::{CountryPicker, PickerOption};
use crate::style::StyleSlot;
use crate::tui::interaction::{ClickRegion, InteractionRegistry};
use crate::tui::theme::*;

/// Render the trigger button centered in `area`.
pub fn render_trigger(
    frame: &mut Frame,
    area: Rect,
    picker: &CountryPicker<CountryTable>,
    selected: Option<&PickerOption>,
    status: Option<&str>,
    registry: &mut InteractionRegistry,
) {
    let styles = picker.styles();

    let width = 40u16.min(area.width.saturating_sub(4));
    let height = 5u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let button = Rect::new(x, y, width, height);

    let mut lines = vec![Line::styled(
        picker.props().trigger_label().to_string(),
        styles.get(StyleSlot::TouchFlag),
    )];
    match selected {
        Some(option) => lines.push(Line::from(vec![
            Span::styled(option.name.clone(), styles.get(StyleSlot::CountryName)),
            Span::styled(format!(" ({})", option.id), Style::new().fg(TEXT_DIM)),
        ])),
        None => lines.push(Line::styled("nothing chosen yet", Style::new().fg(TEXT_DIM))),
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_MINT))
        .title(" Country ");
    frame.render_widget(Paragraph::new(lines).centered().block(block), button);
    registry.register_click("trigger", ClickRegion::from(button), Action::OpenPicker);

    // Status and hotkeys below the button
    let below = button.y + button.height;
    if let Some(status) = status {
        if below < area.y + area.height {
            let status_area = Rect::new(area.x, below, area.width, 1);
            frame.render_widget(
                Paragraph::new(Line::styled(status.to_string(), Style::new().fg(ACCENT_BLUE)))
                    .centered(),
                status_area,
            );
        }
    }

    if area.height > 0 {
        let help_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" open · ", Style::new().fg(TEXT_DIM)),
                Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" quit", Style::new().fg(TEXT_DIM)),
            ]))
            .centered(),
            help_area,
        );
    }
}
