//! Wiring for a running dashboard controller

use crate::consts::dashboard_consts::EVENT_QUEUE_SIZE;
use crate::controller::{ControllerConfig, ControllerHandle, DashboardController};
use crate::display::DisplaySurface;
use crate::events::{Event, EventSender};
use crate::source::DataSource;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Builds the controller over the given collaborators.
pub fn build_controller(
    source: Arc<dyn DataSource>,
    surface: Arc<dyn DisplaySurface>,
    config: ControllerConfig,
) -> (Arc<DashboardController>, mpsc::Receiver<Event>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let controller =
        DashboardController::new(source, surface, EventSender::new(event_sender), config);
    (controller, event_receiver)
}

/// Builds and initializes the controller: first load, refresh trigger and periodic timer.
pub fn start_dashboard(
    source: Arc<dyn DataSource>,
    surface: Arc<dyn DisplaySurface>,
    config: ControllerConfig,
) -> (mpsc::Receiver<Event>, ControllerHandle) {
    let (controller, event_receiver) = build_controller(source, surface, config);
    let handle = controller.initialize();
    (event_receiver, handle)
}
