//! One-shot load cycle printed as plain text

use crate::controller::ControllerConfig;
use crate::display::SharedBoard;
use crate::environment::Environment;
use crate::runtime::build_controller;
use std::error::Error;
use std::sync::Arc;

/// Runs a single load cycle and prints the resulting board to stdout.
///
/// Diagnostic events go to stderr so the board can be piped.
pub async fn run_snapshot(environment: Environment) -> Result<(), Box<dyn Error>> {
    let source = environment.data_source()?;
    eprintln!("Loading dashboard data from {}", source.describe());
    let board = SharedBoard::new();
    let (controller, mut events) =
        build_controller(source, Arc::new(board.clone()), ControllerConfig::default());

    let printer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            if event.should_display() {
                eprintln!("{}", event);
            }
        }
    });

    controller.update_last_updated();
    let outcome = controller.load_all().await;

    // Dropping the controller closes the event channel and ends the printer.
    drop(controller);
    let _ = printer.await;

    print!("{}", board.snapshot());
    outcome.map_err(Into::into)
}
