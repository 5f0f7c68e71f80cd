//! Full-screen modal: header with close button and filter, list, letters.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::country::CountryTable;
use crate::events::Action;
use crate::picker::CountryPicker;
use crate::style::StyleSlot;
use crate::tui::interaction::{ClickRegion, InteractionRegistry};
use crate::tui::list_view::ListView;
use crate::tui::theme::*;

use super::{render_country_list, render_letter_bar};

const CLOSE_LABEL: &str = "[ x ]";
const LETTER_BAR_WIDTH: u16 = 3;

/// Render the open picker over the whole `area`.
pub fn render_modal(
    frame: &mut Frame,
    area: Rect,
    picker: &CountryPicker<CountryTable>,
    list: &mut ListView,
    filter_focused: bool,
    registry: &mut InteractionRegistry,
) {
    let styles = picker.styles();
    let props = picker.props();

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Select a country ")
        .title_style(styles.get(StyleSlot::Header).bold())
        .borders(Borders::ALL)
        .border_style(styles.get(StyleSlot::Header))
        .style(styles.get(StyleSlot::ModalContainer));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_height = u16::from(props.closeable || props.filterable);
    let [header, content, help] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    if header_height > 0 {
        render_header(frame, header, picker, filter_focused, registry);
    }

    let letters = picker.visible_jump_letters();
    let letter_width = if letters.is_empty() { 0 } else { LETTER_BAR_WIDTH };
    let [list_area, letter_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(letter_width),
    ])
    .areas(content);

    let content_block = Block::default()
        .borders(Borders::TOP)
        .border_style(styles.get(StyleSlot::ContentContainer));
    let list_inner = content_block.inner(list_area);
    frame.render_widget(content_block, list_area);

    // Layout callback for the list host
    list.on_layout(f32::from(list_inner.height));
    render_country_list(frame, list_inner, picker, list, registry);

    if letter_width > 0 {
        let letter_inner = Rect {
            y: list_inner.y,
            height: list_inner.height,
            ..letter_area
        };
        render_letter_bar(frame, letter_inner, picker, registry);
    }

    render_help(frame, help, picker);
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    picker: &CountryPicker<CountryTable>,
    filter_focused: bool,
    registry: &mut InteractionRegistry,
) {
    let styles = picker.styles();
    let props = picker.props();

    let close_width = if props.closeable {
        CLOSE_LABEL.len() as u16 + 1
    } else {
        0
    };
    let [close_area, input_area] = Layout::horizontal([
        Constraint::Length(close_width),
        Constraint::Min(0),
    ])
    .areas(area);

    if props.closeable {
        frame.render_widget(
            Paragraph::new(Line::styled(CLOSE_LABEL, styles.get(StyleSlot::CloseButton))),
            close_area,
        );
        registry.register_click("close_button", ClickRegion::from(close_area), Action::ClosePicker);
    }

    if !props.filterable {
        return;
    }

    let input_style = if props.closeable {
        styles.get(StyleSlot::Input)
    } else {
        styles.get(StyleSlot::InputOnly)
    };
    let prompt_style = if filter_focused {
        Style::new().fg(ACCENT_MINT)
    } else {
        Style::new().fg(TEXT_DIM)
    };

    let filter = picker.filter_text();
    let text = if filter.is_empty() {
        Span::styled(props.filter_placeholder.clone(), styles.get(StyleSlot::Placeholder))
    } else {
        Span::styled(filter.to_string(), input_style)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled("> ", prompt_style), text])),
        input_area,
    );
    registry.register_click("filter_input", ClickRegion::from(input_area), Action::FocusFilter);

    // The cursor is hidden once the filter runs past the input
    if filter_focused {
        let typed = u16::try_from(filter.chars().count()).unwrap_or(u16::MAX);
        let cursor_x = input_area.x.saturating_add(2).saturating_add(typed);
        if cursor_x < input_area.right() {
            frame.set_cursor_position(Position::new(cursor_x, input_area.y));
        }
    }
}

fn render_help(frame: &mut Frame, area: Rect, picker: &CountryPicker<CountryTable>) {
    let props = picker.props();
    let key = Style::new().fg(TEXT_WHITE);
    let dim = Style::new().fg(TEXT_DIM);

    let mut spans = vec![
        Span::styled("[↑/↓]", key),
        Span::styled(" navigate · ", dim),
        Span::styled("[Enter]", key),
        Span::styled(" select · ", dim),
    ];
    if props.filterable {
        spans.push(Span::styled("[Tab]", key));
        spans.push(Span::styled(" filter/letters · ", dim));
    }
    spans.push(Span::styled("[Esc]", key));
    spans.push(Span::styled(
        if props.closeable { " close" } else { " back" },
        dim,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
