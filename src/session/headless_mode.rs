//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging (slot writes are echoed by the session's surface)
/// 2. A manual refresh for every line read from stdin
/// 3. Ctrl+C shutdown handling
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment.location());
    println!("Press Enter to refresh, Ctrl+C to quit.");

    let trigger = session.controller.refresh_trigger();
    let mut stdin_lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
            }
            line = stdin_lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(_)) => {
                        if !trigger.activate() {
                            println!("Refresh already queued");
                        }
                    }
                    // stdin closed: keep running on the timer alone
                    Ok(None) | Err(_) => stdin_open = false,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    print_session_shutdown();
    session.controller.shutdown().await;
    print_session_exit_success();

    Ok(())
}
