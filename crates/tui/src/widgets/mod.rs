//! Widget components for the rdash TUI.
//!
//! This module provides reusable rendering functions for the routine
//! dashboard, organized into focused submodules for each visual component.
//!
//! # Overview
//!
//! Every widget is a pure function that renders its inputs into a buffer.
//! None of them hold state; the routine views own the data and pass it in.
//!
//! # Modules
//!
//! - [`menu`]: header bar with the server address and a help cue
//! - [`routine_list`]: scrolling stack of routine cards
//! - [`card`]: one routine, composing the pieces below
//! - [`title`]: routine name and description
//! - [`status`]: task list plus the routine status label
//! - [`task_list`]: tasks as a chain ending at the current one
//! - [`task`]: a single task with its status glyph
//! - [`commands`]: start/cancel affordances and their keys
//! - [`help`]: keybinding overlay
//!
//! # Color Coding
//!
//! Statuses are color-coded by their [`StatusKind`](rdash_protocol::StatusKind):
//!
//! | Kind | Color |
//! |------|-------|
//! | `Idle` | Gray (`Color::DarkGray`) |
//! | `Active` | Blue (`Color::Blue`) |
//! | `Done` | Green (`Color::Green`) |
//! | `Failed` | Red (`Color::Red`) |
//! | `Canceled` | Yellow (`Color::Yellow`) |
//! | `Other` | White (`Color::White`) |
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use rdash_protocol::RoutineState;
//! use rdash_tui::widgets;
//!
//! let routines = [RoutineState::new("stocks_daily")];
//! let refs: Vec<_> = routines.iter().collect();
//!
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_routine_list(&refs, Some(0), area, &mut buf);
//! ```

pub mod card;
pub mod commands;
pub mod help;
pub mod menu;
pub mod routine_list;
pub mod status;
pub mod task;
pub mod task_list;
pub mod title;

// Re-export primary rendering functions for convenience
pub use card::render_routine_card;
pub use commands::{command_for_key, command_key, render_commands};
pub use help::render_help_overlay;
pub use menu::render_menu;
pub use routine_list::render_routine_list;
pub use status::render_status;
pub use task::{render_task, status_color, task_spans};
pub use task_list::{ARROW, TaskListEntry, render_task_list, task_list_entries, task_list_line};
pub use title::title_line;
