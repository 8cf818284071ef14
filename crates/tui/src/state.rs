//! Application state management.
//!
//! This module defines the state the TUI keeps between frames: the mounted
//! routine views, which one is selected, and whether help is shown.

use crate::poller::ViewId;
use crate::routine::RoutineView;

/// The application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Mounted routine views, in list order.
    pub routines: Vec<RoutineView>,
    /// Index of the selected routine, if any.
    pub selected: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Creates an empty state with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if visible.
    ///
    /// Returns `true` if help was dismissed, `false` if it wasn't visible.
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }

    /// Moves the selection up one routine, wrapping to the bottom.
    pub fn navigate_up(&mut self) {
        if self.routines.is_empty() {
            self.selected = None;
            return;
        }

        let max_idx = self.routines.len() - 1;
        self.selected = match self.selected {
            Some(idx) if idx > 0 => Some(idx - 1),
            // Wrap to bottom
            Some(_) => Some(max_idx),
            None => Some(0),
        };
    }

    /// Moves the selection down one routine, wrapping to the top.
    pub fn navigate_down(&mut self) {
        if self.routines.is_empty() {
            self.selected = None;
            return;
        }

        let max_idx = self.routines.len() - 1;
        self.selected = match self.selected {
            Some(idx) if idx < max_idx => Some(idx + 1),
            // Wrap to top
            Some(_) | None => Some(0),
        };
    }

    /// Clears the routine selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Returns the selected routine view, if any.
    #[must_use]
    pub fn selected_routine(&self) -> Option<&RoutineView> {
        self.selected.and_then(|idx| self.routines.get(idx))
    }

    /// Returns the view with the given id, if it is still mounted.
    pub fn routine_mut(&mut self, id: ViewId) -> Option<&mut RoutineView> {
        self.routines.iter_mut().find(|view| view.id() == id)
    }
}
