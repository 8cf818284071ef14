//! Routine status rendering widget.
//!
//! Composes the task list with the routine-level status label, which is
//! right-aligned on the same row.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};
use rdash_protocol::{RoutineState, StatusKind};

use super::task::status_color;
use super::task_list::render_task_list;

/// Renders a routine's tasks and status label on one row.
///
/// # Layout
///
/// ```text
/// [D] t1 › [R] t0                 running
/// ```
///
/// An empty status string leaves the label column out.
pub fn render_status(state: &RoutineState, area: Rect, buf: &mut Buffer) {
    let label_width = u16::try_from(state.status.chars().count())
        .unwrap_or(u16::MAX)
        .min(area.width / 2);
    let gap = u16::from(label_width > 0);

    let [tasks_area, _, label_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(gap),
        Constraint::Length(label_width),
    ])
    .areas(area);

    render_task_list(&state.tasks, tasks_area, buf);

    if label_width > 0 {
        let style = Style::default()
            .fg(status_color(StatusKind::classify(&state.status)))
            .add_modifier(Modifier::BOLD);
        Paragraph::new(Span::styled(state.status.as_str(), style))
            .alignment(Alignment::Right)
            .render(label_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use rdash_protocol::{StatusResponse, Task};
    use ratatui::style::Color;

    fn state(status: &str, tasks: Vec<Task>) -> RoutineState {
        let mut state = RoutineState::new("bbc");
        state.apply(StatusResponse {
            status: status.to_string(),
            tasks,
        });
        state
    }

    #[test]
    fn status_label_is_right_aligned() {
        let state = state("running", vec![Task::new("t0", "running")]);
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        render_status(&state, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.starts_with("[R] t0"));
        assert!(content.ends_with("running\n"));
        assert_eq!(buf.cell((29, 0)).unwrap().symbol(), "g");
        assert_eq!(buf.cell((29, 0)).unwrap().fg, Color::Blue);
    }

    #[test]
    fn empty_status_renders_tasks_only() {
        let state = state("", vec![Task::new("t0", "done")]);
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        render_status(&state, area, &mut buf);

        assert_eq!(buffer_to_string(&buf), "[D] t0\n");
    }

    #[test]
    fn unknown_status_is_rendered_verbatim() {
        let state = state("paused-by-operator", vec![]);
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        render_status(&state, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("No tasks"));
        assert!(content.contains("paused-by-operator"));
    }
}
