//! Task list rendering widget.
//!
//! A routine's tasks arrive most recent first. The list is drawn as a
//! left-to-right chain ending at the current task:
//!
//! ```text
//! [D] t1 › [D] t2 › [R] t0
//! ```
//!
//! Every historical task is followed by a `›` arrow. The current task
//! (index 0) comes last, in bold, with no arrow after it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use rdash_protocol::Task;

use super::task::task_spans;

/// Separator drawn after every historical task.
pub const ARROW: &str = " › ";

/// One task in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskListEntry<'a> {
    /// The task to draw.
    pub task: &'a Task,
    /// Whether this is the most recent task.
    pub is_current: bool,
}

impl TaskListEntry<'_> {
    /// Returns whether an arrow follows this entry.
    #[must_use]
    pub const fn has_arrow(&self) -> bool {
        !self.is_current
    }
}

/// Orders `tasks` for display: the history first, then the current task.
///
/// # Examples
///
/// ```
/// use rdash_protocol::Task;
/// use rdash_tui::widgets::task_list_entries;
///
/// let tasks = vec![Task::new("t0", "running"), Task::new("t1", "done")];
/// let entries = task_list_entries(&tasks);
///
/// assert_eq!(entries[0].task.name, "t1");
/// assert!(entries[0].has_arrow());
/// assert_eq!(entries[1].task.name, "t0");
/// assert!(!entries[1].has_arrow());
/// ```
#[must_use]
pub fn task_list_entries(tasks: &[Task]) -> Vec<TaskListEntry<'_>> {
    let Some((current, history)) = tasks.split_first() else {
        return Vec::new();
    };

    history
        .iter()
        .map(|task| TaskListEntry {
            task,
            is_current: false,
        })
        .chain(std::iter::once(TaskListEntry {
            task: current,
            is_current: true,
        }))
        .collect()
}

/// Builds the single line representing `tasks`.
#[must_use]
pub fn task_list_line(tasks: &[Task]) -> Line<'_> {
    let arrow_style = Style::default().fg(Color::DarkGray);

    let spans = task_list_entries(tasks)
        .into_iter()
        .flat_map(|entry| {
            let mut spans = task_spans(entry.task, entry.is_current);
            if entry.has_arrow() {
                spans.push(Span::styled(ARROW, arrow_style));
            }
            spans
        })
        .collect::<Vec<_>>();

    Line::from(spans)
}

/// Renders a routine's task list to the buffer.
///
/// An empty list shows a "No tasks" placeholder. Lines wider than `area`
/// are clipped.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use rdash_protocol::Task;
/// use rdash_tui::widgets::render_task_list;
///
/// let tasks = vec![Task::new("t0", "running"), Task::new("t1", "done")];
/// let area = Rect::new(0, 0, 40, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_task_list(&tasks, area, &mut buf);
/// ```
pub fn render_task_list(tasks: &[Task], area: Rect, buf: &mut Buffer) {
    if tasks.is_empty() {
        render_empty_placeholder(area, buf);
        return;
    }

    Paragraph::new(task_list_line(tasks)).render(area, buf);
}

/// Renders a placeholder message for routines without tasks.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}
