//! Task rendering widget.
//!
//! This module provides functions for rendering a single task as a status
//! glyph badge followed by the task name.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use rdash_protocol::{StatusKind, Task};

/// Returns the color associated with a status kind.
///
/// This provides consistent color coding across the application:
///
/// - `Idle`: Gray - queued or waiting
/// - `Active`: Blue - currently running
/// - `Done`: Green - finished successfully
/// - `Failed`: Red - finished with an error
/// - `Canceled`: Yellow - stopped by a command
/// - `Other`: White - a label the dashboard does not recognise
///
/// # Examples
///
/// ```
/// use rdash_protocol::StatusKind;
/// use rdash_tui::widgets::status_color;
/// use ratatui::style::Color;
///
/// assert_eq!(status_color(StatusKind::Active), Color::Blue);
/// assert_eq!(status_color(StatusKind::Failed), Color::Red);
/// ```
#[must_use]
pub const fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Idle => Color::DarkGray,
        StatusKind::Active => Color::Blue,
        StatusKind::Done => Color::Green,
        StatusKind::Failed => Color::Red,
        StatusKind::Canceled => Color::Yellow,
        StatusKind::Other => Color::White,
    }
}

/// Builds the spans for one task: `[G] name`.
///
/// The current task's name is bold; historical tasks are dimmed. An empty
/// status renders as a blank badge.
#[must_use]
pub fn task_spans(task: &Task, is_current: bool) -> Vec<Span<'_>> {
    let badge_style = Style::default()
        .fg(status_color(task.status.kind()))
        .add_modifier(Modifier::BOLD);
    let name_style = if is_current {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    vec![
        Span::styled(format!("[{:1}]", task.status.glyph()), badge_style),
        Span::raw(" "),
        Span::styled(task.name.as_str(), name_style),
    ]
}

/// Renders a single task to the buffer.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use rdash_protocol::Task;
/// use rdash_tui::widgets::render_task;
///
/// let task = Task::new("AAPL", "running");
/// let area = Rect::new(0, 0, 20, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_task(&task, true, area, &mut buf);
/// ```
pub fn render_task(task: &Task, is_current: bool, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(task_spans(task, is_current))).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn status_color_mapping() {
        assert_eq!(status_color(StatusKind::Idle), Color::DarkGray);
        assert_eq!(status_color(StatusKind::Active), Color::Blue);
        assert_eq!(status_color(StatusKind::Done), Color::Green);
        assert_eq!(status_color(StatusKind::Failed), Color::Red);
        assert_eq!(status_color(StatusKind::Canceled), Color::Yellow);
        assert_eq!(status_color(StatusKind::Other), Color::White);
    }

    #[test]
    fn render_task_shows_glyph_and_name() {
        let task = Task::new("AAPL", "running");
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);

        render_task(&task, false, area, &mut buf);

        assert_eq!(buffer_to_string(&buf), "[R] AAPL\n");
    }

    #[test]
    fn render_task_empty_status_blank_badge() {
        let task = Task::new("MSFT", "");
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);

        render_task(&task, false, area, &mut buf);

        assert_eq!(buffer_to_string(&buf), "[ ] MSFT\n");
    }

    #[test]
    fn badge_colored_by_status() {
        let task = Task::new("job", "error");
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);

        render_task(&task, false, area, &mut buf);

        let glyph = buf.cell((1, 0)).unwrap();
        assert_eq!(glyph.symbol(), "E");
        assert_eq!(glyph.fg, Color::Red);
    }

    #[test]
    fn current_task_name_is_bold() {
        let task = Task::new("job", "done");
        let spans = task_spans(&task, true);
        assert!(spans[2].style.add_modifier.contains(Modifier::BOLD));

        let spans = task_spans(&task, false);
        assert!(!spans[2].style.add_modifier.contains(Modifier::BOLD));
    }
}
