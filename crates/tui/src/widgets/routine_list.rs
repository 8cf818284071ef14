//! Routine list rendering widget.
//!
//! Stacks one routine card per routine, scrolling so the selected card
//! stays on screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use rdash_protocol::RoutineState;

use super::card::render_routine_card;
use crate::layout::ROUTINE_CARD_HEIGHT;

/// Renders the routine list to the buffer.
///
/// An empty list shows a "No routines" placeholder.
///
/// # Arguments
///
/// * `routines` - The routines to render, in display order
/// * `selected` - Index of the selected routine, if any
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use rdash_protocol::RoutineState;
/// use rdash_tui::widgets::render_routine_list;
///
/// let routines = [RoutineState::new("bbc"), RoutineState::new("cnn")];
/// let refs: Vec<_> = routines.iter().collect();
/// let area = Rect::new(0, 0, 40, 12);
/// let mut buf = Buffer::empty(area);
///
/// render_routine_list(&refs, Some(1), area, &mut buf);
/// ```
pub fn render_routine_list(
    routines: &[&RoutineState],
    selected: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    if routines.is_empty() {
        render_empty_placeholder(area, buf);
        return;
    }

    let visible = (area.height / ROUTINE_CARD_HEIGHT).max(1) as usize;
    let offset = calculate_scroll_offset(selected, routines.len(), visible);
    let count = routines.len().saturating_sub(offset).min(visible);

    let mut constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Length(ROUTINE_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let card_areas = Layout::vertical(constraints).split(area);

    for (i, (state, card_area)) in routines[offset..]
        .iter()
        .zip(card_areas.iter())
        .take(count)
        .enumerate()
    {
        let is_selected = selected == Some(offset + i);
        render_routine_card(state, None, is_selected, *card_area, buf);
    }
}

/// Renders a placeholder message when no routines are loaded.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No routines",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Calculates the scroll offset that keeps the selected routine visible.
fn calculate_scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };

    if total <= visible {
        return 0;
    }

    let max_offset = total.saturating_sub(visible);

    if selected < visible / 2 {
        0
    } else {
        (selected.saturating_sub(visible / 2)).min(max_offset)
    }
}
