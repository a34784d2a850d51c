//! Session start and stop lines

use crate::cli_messages::{MessageKind, print_message};

/// Print session startup message
pub fn print_session_starting(mode: &str, location: &str) {
    print_message(
        MessageKind::Info,
        &format!("Starting {} mode", mode),
        &format!("data from {}", location),
    );
}

/// Print session shutdown message
pub fn print_session_shutdown() {
    print_message(MessageKind::Info, "Shutting down...", "");
}

/// Print session exit message
pub fn print_session_exit_success() {
    print_message(MessageKind::Success, "Team dashboard exited successfully", "");
}
