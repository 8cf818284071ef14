//! Routine card rendering widget.
//!
//! This module renders one routine as a bordered card holding its title,
//! task list, status label and command row.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use rdash_protocol::RoutineState;

use super::commands::render_commands;
use super::status::render_status;
use super::title::title_line;

/// Renders a routine card to the buffer.
///
/// # Layout
///
/// ```text
/// ╭ stocks_daily ─────────────────────────╮
/// │ [D] MSFT › [R] AAPL           running │
/// │ [s] start  [c] cancel                 │
/// ╰───────────────────────────────────────╯
/// ```
///
/// The border is cyan when the card is selected and dark gray otherwise.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use rdash_protocol::RoutineState;
/// use rdash_tui::widgets::render_routine_card;
///
/// let state = RoutineState::new("stocks_daily");
/// let area = Rect::new(0, 0, 40, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_routine_card(&state, None, true, area, &mut buf);
/// ```
pub fn render_routine_card(
    state: &RoutineState,
    description: Option<&str>,
    is_selected: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let border_color = if is_selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(title_line(&state.name, description, is_selected))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    block.render(area, buf);

    let inner = inner.inner(Margin::new(1, 0));
    let [status_area, commands_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    render_status(state, status_area, buf);
    render_commands(is_selected, commands_area, buf);
}
