//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::controller::RefreshTrigger;
use crate::display::SharedBoard;
use crate::environment::Environment;
use crate::events::Event as DashboardEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub refresh_interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, refresh_interval: Duration) -> Self {
        Self {
            with_background_color,
            refresh_interval,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying counters and updates.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from the controller.
    event_receiver: mpsc::Receiver<DashboardEvent>,

    /// Slots written by the controller.
    board: SharedBoard,

    /// Manual refresh control.
    refresh_trigger: RefreshTrigger,

    /// Stops the controller; cancelled by quitting, observed to exit.
    shutdown: CancellationToken,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<DashboardEvent>,
        board: SharedBoard,
        refresh_trigger: RefreshTrigger,
        shutdown: CancellationToken,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            board,
            refresh_trigger,
            shutdown,
            ui_config,
        }
    }

    /// Leaves the splash screen for the dashboard.
    fn show_dashboard(&mut self) {
        let state = DashboardState::new(self.environment.clone(), self.start_time, &self.ui_config);
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        if app.shutdown.is_cancelled() {
            return Ok(());
        }

        // Events stay queued in the channel until the dashboard is up
        if let Screen::Dashboard(state) = &mut app.current_screen {
            while let Ok(event) = app.event_receiver.try_recv() {
                state.add_event(event);
            }
            state.update(app.board.snapshot());
        }
        let location = app.environment.location();
        terminal.draw(|f| render(f, &app.current_screen, &location))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.show_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    app.shutdown.cancel();
                    return Ok(());
                }

                match app.current_screen {
                    Screen::Splash => {
                        // Any key press skips the splash screen
                        app.show_dashboard();
                    }
                    Screen::Dashboard(ref state) => {
                        // The control is disabled while a refresh is showing
                        if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
                            && !state.board.is_refreshing()
                        {
                            app.refresh_trigger.activate();
                        }
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen, location: &str) {
    match screen {
        Screen::Splash => render_splash(f, location),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
