//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: loading the routine list, mounting one view per
//! routine, applying poll results, handling input and rendering.

use std::collections::HashSet;
use std::sync::Arc;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};
use rdash_client::RoutineApi;
use rdash_config::Config;
use rdash_protocol::{Message, RoutineName};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::{debug, info};

use crate::{
    AppState,
    event::{event_to_message, poll_event},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH},
    poller::{PollContext, Update, ViewId},
    routine::{ApplyOutcome, RoutineView},
    terminal::AppTerminal,
    widgets::{render_help_overlay, render_menu, render_routine_list},
};

/// The main application struct.
///
/// Owns the routine views and the receiving end of the channel their
/// background requests report on.
#[derive(Debug)]
pub struct App {
    state: AppState,
    context: PollContext,
    updates: UnboundedReceiver<Update>,
    server_address: String,
    next_view_id: u64,
    list_requested: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application talking to `api`.
    ///
    /// Nothing is fetched until [`load_routines`](Self::load_routines) or
    /// [`run`](Self::run) is called.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use rdash_client::HttpClient;
    /// use rdash_config::Config;
    /// use rdash_tui::App;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::default();
    /// let api = HttpClient::new(&config.server_address, config.request_timeout())?;
    /// let app = App::new(Arc::new(api), &config);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn new(api: Arc<dyn RoutineApi>, config: &Config) -> Self {
        let (context, updates) =
            PollContext::new(api, config.polling.interval(), config.num_tasks);
        Self {
            state: AppState::new(),
            context,
            updates,
            server_address: config.server_address.clone(),
            next_view_id: 1,
            list_requested: false,
            should_quit: false,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns whether the app has been asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests the routine list from the service.
    ///
    /// Only the first call has any effect; the list is never refreshed.
    /// Must be called from within a tokio runtime.
    pub fn load_routines(&mut self) {
        if self.list_requested {
            return;
        }
        self.list_requested = true;
        drop(self.context.spawn_list_fetch());
    }

    /// Applies every update currently waiting on the channel.
    ///
    /// Returns the number of updates processed.
    pub fn drain_updates(&mut self) -> usize {
        let mut processed = 0;
        loop {
            match self.updates.try_recv() {
                Ok(update) => {
                    self.handle_update(update);
                    processed += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        processed
    }

    /// Applies one background update.
    pub fn handle_update(&mut self, update: Update) {
        match update {
            Update::RoutineList(names) => self.mount_routines(names),
            Update::Status {
                view,
                seq,
                response,
            } => match self.state.routine_mut(view) {
                Some(routine) => {
                    if routine.apply_status(seq, response) == ApplyOutcome::Applied {
                        debug!(%view, seq, "status applied");
                    }
                }
                None => debug!(%view, seq, "discarding update for unmounted view"),
            },
        }
    }

    /// Mounts one view per distinct routine name, preserving list order.
    fn mount_routines(&mut self, names: Vec<RoutineName>) {
        if !self.state.routines.is_empty() {
            debug!("routine list already mounted, ignoring");
            return;
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in names {
            if !seen.insert(name.clone()) {
                debug!(routine = %name, "skipping duplicate routine name");
                continue;
            }

            let id = ViewId(self.next_view_id);
            self.next_view_id += 1;
            self.state
                .routines
                .push(RoutineView::mount(id, name, &self.context));
        }

        info!(count = self.state.routines.len(), "routine views mounted");
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, most messages are intercepted to
    /// dismiss the help instead of their normal action. Only `Quit` and
    /// `ToggleHelp` work normally when help is shown.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            match msg {
                Message::Quit => {
                    self.should_quit = true;
                }
                Message::ToggleHelp | Message::Escape => {
                    self.state.toggle_help();
                }
                // Any other key dismisses help
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::Escape => {
                self.state.clear_selection();
            }
            Message::NavigateUp => {
                self.state.navigate_up();
            }
            Message::NavigateDown => {
                self.state.navigate_down();
            }
            Message::ToggleHelp => {
                self.state.toggle_help();
            }
            Message::Dispatch { command } => match self.state.selected_routine() {
                Some(routine) => routine.dispatch(command, &self.context),
                None => debug!(%command, "no routine selected, ignoring command"),
            },
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            Self::render_terminal_too_small(frame, area);
            return;
        }

        let content_area = if area.height >= MIN_HEIGHT_WITH_HEADER {
            let [header_area, content_area] =
                Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                    .areas(area);
            render_menu(
                &self.server_address,
                self.state.routines.len(),
                header_area,
                frame.buffer_mut(),
            );
            content_area
        } else {
            area
        };

        let states: Vec<_> = self.state.routines.iter().map(RoutineView::state).collect();
        render_routine_list(
            &states,
            self.state.selected,
            content_area,
            frame.buffer_mut(),
        );

        if self.state.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// Requests the routine list, then loops until the user quits: apply
    /// pending updates, render, and handle at most one input event.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use rdash_client::HttpClient;
    /// use rdash_config::Config;
    /// use rdash_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let config = Config::default();
    ///     let api = HttpClient::new(&config.server_address, config.request_timeout())?;
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Arc::new(api), &config);
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        self.load_routines();

        while !self.should_quit {
            self.drain_updates();
            terminal.draw(|frame| self.view(frame))?;

            let event = tokio::task::block_in_place(poll_event)?;
            if let Some(msg) = event.as_ref().and_then(event_to_message) {
                self.update(msg);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{Terminal, backend::TestBackend};
    use rdash_config::PollingConfig;
    use rdash_protocol::{Command, CommandRequest, StatusRequest};

    use super::*;
    use crate::test_utils::{FakeApi, buffer_to_string, settle, status};

    const INTERVAL: Duration = Duration::from_millis(1000);

    fn config() -> Config {
        let mut config = Config::default();
        config.polling = PollingConfig::with_interval_ms(1000);
        config
    }

    fn app_with(fake: &Arc<FakeApi>) -> App {
        App::new(Arc::clone(fake) as Arc<dyn RoutineApi>, &config())
    }

    fn names(app: &App) -> Vec<&str> {
        app.state
            .routines
            .iter()
            .map(|r| r.name().as_str())
            .collect()
    }

    /// Loads the list and mounts the views, leaving the first polls
    /// resolved but not yet applied.
    async fn loaded(fake: &Arc<FakeApi>) -> App {
        let mut app = app_with(fake);
        app.load_routines();
        settle().await;
        app.drain_updates();
        settle().await;
        app
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[tokio::test(start_paused = true)]
    async fn list_creates_one_view_per_name_in_order() {
        let fake = Arc::new(FakeApi::with_routines(&["bbc", "cnn", "ynet"]));
        let app = loaded(&fake).await;

        assert_eq!(names(&app), ["bbc", "cnn", "ynet"]);
    }

    #[tokio::test(start_paused = true)]
    async fn duplicate_names_are_mounted_once() {
        let fake = Arc::new(FakeApi::with_routines(&["bbc", "cnn", "bbc", "ynet", "cnn"]));
        let app = loaded(&fake).await;

        assert_eq!(names(&app), ["bbc", "cnn", "ynet"]);
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_list_creates_no_views() {
        let fake = Arc::new(FakeApi::with_rejected_list("error"));
        let mut app = loaded(&fake).await;

        assert!(app.state.routines.is_empty());
        assert_eq!(app.drain_updates(), 0);
        assert!(fake.status_requests().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn list_is_requested_once() {
        let fake = Arc::new(FakeApi::with_routines(&["bbc"]));
        let mut app = loaded(&fake).await;

        app.load_routines();
        settle().await;
        app.drain_updates();

        assert_eq!(names(&app), ["bbc"]);
    }

    #[tokio::test(start_paused = true)]
    async fn polls_immediately_then_every_interval() {
        let fake = Arc::new(FakeApi::with_routines(&["stocks_daily"]));
        let _app = loaded(&fake).await;

        assert_eq!(
            fake.status_requests(),
            [StatusRequest::new(RoutineName::from("stocks_daily"))]
        );

        tokio::time::sleep(INTERVAL).await;
        assert_eq!(fake.status_requests().len(), 2);

        tokio::time::sleep(INTERVAL).await;
        assert_eq!(fake.status_requests().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn applied_status_matches_response() {
        let fake = Arc::new(FakeApi::with_routines(&["stocks_daily"]));
        let response = status("running", &[("AAPL", "running"), ("MSFT", "done")]);
        fake.push_status(Duration::ZERO, response.clone());

        let mut app = loaded(&fake).await;
        app.drain_updates();

        let state = app.state.routines[0].state();
        assert_eq!(state.status, response.status);
        assert_eq!(state.tasks, response.tasks);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_response_is_dropped() {
        let fake = Arc::new(FakeApi::with_routines(&["bbc"]));
        // The first poll resolves after the second one
        fake.push_status(Duration::from_millis(2500), status("old", &[]));
        fake.push_status(Duration::ZERO, status("new", &[]));

        let mut app = loaded(&fake).await;
        tokio::time::sleep(Duration::from_millis(3000)).await;
        app.drain_updates();

        assert_eq!(app.state.routines[0].state().status, "new");
    }

    #[tokio::test(start_paused = true)]
    async fn failed_poll_keeps_previous_state() {
        let fake = Arc::new(FakeApi::with_routines(&["bbc"]));
        fake.push_status(Duration::ZERO, status("running", &[("t0", "running")]));
        fake.push_failure(Duration::ZERO);

        let mut app = loaded(&fake).await;
        app.drain_updates();
        tokio::time::sleep(INTERVAL).await;
        app.drain_updates();

        assert_eq!(fake.status_requests().len(), 2);
        let state = app.state.routines[0].state();
        assert_eq!(state.status, "running");
        assert_eq!(state.tasks.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn torn_down_view_stops_polling() {
        let fake = Arc::new(FakeApi::with_routines(&["bbc"]));
        let app = loaded(&fake).await;
        assert_eq!(fake.status_requests().len(), 1);

        drop(app);
        tokio::time::sleep(INTERVAL * 3).await;

        assert_eq!(fake.status_requests().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn in_flight_result_for_unmounted_view_is_discarded() {
        let fake = Arc::new(FakeApi::with_routines(&["bbc"]));
        let mut app = loaded(&fake).await;

        app.handle_update(Update::Status {
            view: ViewId(99),
            seq: 1,
            response: status("running", &[]),
        });

        assert_eq!(app.state.routines[0].state().status, "");
    }

    #[tokio::test(start_paused = true)]
    async fn start_dispatch_sends_command_without_touching_status() {
        let fake = Arc::new(FakeApi::with_routines(&["walla"]));
        fake.push_status(Duration::ZERO, status("ready", &[]));

        let mut app = loaded(&fake).await;
        app.drain_updates();

        app.update(Message::NavigateDown);
        app.update(Message::Dispatch {
            command: Command::Start,
        });
        settle().await;

        assert_eq!(
            fake.commands(),
            [CommandRequest {
                routine_name: RoutineName::from("walla"),
                command: Command::Start,
            }]
        );
        assert_eq!(app.state.routines[0].state().status, "ready");
    }

    #[tokio::test(start_paused = true)]
    async fn dispatch_without_selection_does_nothing() {
        let fake = Arc::new(FakeApi::with_routines(&["walla"]));
        let mut app = loaded(&fake).await;

        app.update(Message::Dispatch {
            command: Command::Cancel,
        });
        settle().await;

        assert!(fake.commands().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn quit_message_sets_should_quit() {
        let fake = Arc::new(FakeApi::with_routines(&[]));
        let mut app = app_with(&fake);

        assert!(!app.should_quit());
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[tokio::test(start_paused = true)]
    async fn help_dismisses_on_any_key() {
        let fake = Arc::new(FakeApi::with_routines(&["bbc"]));
        let mut app = loaded(&fake).await;

        app.update(Message::ToggleHelp);
        assert!(app.state.help_visible);

        app.update(Message::NavigateDown);
        assert!(!app.state.help_visible);
        // The key only dismissed help
        assert_eq!(app.state.selected, None);
    }

    #[tokio::test(start_paused = true)]
    async fn help_blocks_dispatch() {
        let fake = Arc::new(FakeApi::with_routines(&["bbc"]));
        let mut app = loaded(&fake).await;
        app.update(Message::NavigateDown);
        app.update(Message::ToggleHelp);

        app.update(Message::Dispatch {
            command: Command::Start,
        });
        settle().await;

        assert!(!app.state.help_visible);
        assert!(fake.commands().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn quit_works_with_help_visible() {
        let fake = Arc::new(FakeApi::with_routines(&[]));
        let mut app = app_with(&fake);
        app.update(Message::ToggleHelp);

        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[tokio::test(start_paused = true)]
    async fn escape_clears_selection() {
        let fake = Arc::new(FakeApi::with_routines(&["bbc", "cnn"]));
        let mut app = loaded(&fake).await;

        app.update(Message::NavigateDown);
        assert_eq!(app.state.selected, Some(0));
        app.update(Message::Escape);
        assert_eq!(app.state.selected, None);
    }

    #[tokio::test(start_paused = true)]
    async fn view_shows_header_and_routines() {
        let fake = Arc::new(FakeApi::with_routines(&["stocks_daily"]));
        fake.push_status(Duration::ZERO, status("running", &[("AAPL", "running")]));
        let mut app = loaded(&fake).await;
        app.drain_updates();

        let content = render(&app, 80, 12);

        assert!(content.contains("rdash - 1 routine on http://localhost:5050"));
        assert!(content.contains("stocks_daily"));
        assert!(content.contains("[R] AAPL"));
        assert!(content.contains("running"));
    }

    #[tokio::test(start_paused = true)]
    async fn view_shows_placeholder_before_list_loads() {
        let fake = Arc::new(FakeApi::with_routines(&["bbc"]));
        let app = app_with(&fake);

        assert!(render(&app, 60, 12).contains("No routines"));
    }

    #[tokio::test(start_paused = true)]
    async fn view_hides_header_in_compact_mode() {
        let fake = Arc::new(FakeApi::with_routines(&["bbc"]));
        let app = loaded(&fake).await;

        let content = render(&app, 60, MIN_HEIGHT);

        assert!(!content.contains("Press ? for help"));
        assert!(content.contains("bbc"));
    }

    #[tokio::test(start_paused = true)]
    async fn view_shows_too_small_message() {
        let fake = Arc::new(FakeApi::with_routines(&[]));
        let app = app_with(&fake);

        let content = render(&app, MIN_WIDTH - 1, 20);
        assert!(content.contains("Terminal too small"));

        let content = render(&app, 60, MIN_HEIGHT - 1);
        assert!(content.contains("Terminal too small"));
    }

    #[tokio::test(start_paused = true)]
    async fn view_renders_help_overlay() {
        let fake = Arc::new(FakeApi::with_routines(&[]));
        let mut app = app_with(&fake);
        app.update(Message::ToggleHelp);

        let content = render(&app, 80, 24);
        assert!(content.contains("Help"));
        assert!(content.contains("Start routine"));
    }
}
