//! Session setup and initialization

use crate::controller::{ControllerConfig, ControllerHandle};
use crate::display::{ConsoleSurface, DisplaySurface, SharedBoard};
use crate::environment::Environment;
use crate::events::Event;
use crate::runtime::start_dashboard;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Resolved options for a dashboard session
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Where the resources are read from
    pub environment: Environment,
    /// Automatic refresh interval
    pub refresh_interval: Duration,
    /// Print every slot write to stdout (headless mode)
    pub echo_writes: bool,
}

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Diagnostic events from the controller
    pub event_receiver: mpsc::Receiver<Event>,
    /// Handle on the running controller
    pub controller: ControllerHandle,
    /// Slot values written by the controller
    pub board: SharedBoard,
    /// Where the resources are read from
    pub environment: Environment,
    /// Automatic refresh interval, for the countdown display
    pub refresh_interval: Duration,
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Builds the data source for the environment
/// 2. Creates the board and the display surface over it
/// 3. Starts the controller (initial load, refresh trigger, periodic timer)
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The data source could not be created
pub fn setup_session(settings: SessionSettings) -> Result<SessionData, Box<dyn Error>> {
    let source = settings.environment.data_source()?;

    let board = SharedBoard::new();
    let surface: Arc<dyn DisplaySurface> = if settings.echo_writes {
        Arc::new(ConsoleSurface::new(board.clone()))
    } else {
        Arc::new(board.clone())
    };

    let config = ControllerConfig {
        refresh_interval: settings.refresh_interval,
        ..ControllerConfig::default()
    };
    let (event_receiver, controller) = start_dashboard(source, surface, config);

    Ok(SessionData {
        event_receiver,
        controller,
        board,
        environment: settings.environment,
        refresh_interval: settings.refresh_interval,
    })
}
