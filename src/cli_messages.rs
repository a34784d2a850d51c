//! Console messages for the one-shot commands and for startup problems
//!
//! Info and success lines go to stdout. Warnings and errors go to stderr so a
//! piped `snapshot` stays clean.

/// Kind of console message, which picks its tag and color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warn,
    Error,
    Success,
}

impl MessageKind {
    fn tag(self) -> &'static str {
        match self {
            MessageKind::Info => "\x1b[1;36m[INFO]\x1b[0m",
            MessageKind::Warn => "\x1b[1;93m[WARN]\x1b[0m",
            MessageKind::Error => "\x1b[1;31m[ERROR]\x1b[0m",
            MessageKind::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }
}

/// Formats a message line; details follow the title after a tab.
pub fn format_message(kind: MessageKind, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", kind.tag(), title)
    } else {
        format!("{} {}\t {}", kind.tag(), title, details)
    }
}

/// Prints a message to the stream its kind belongs on.
pub fn print_message(kind: MessageKind, title: &str, details: &str) {
    let line = format_message(kind, title, details);
    match kind {
        MessageKind::Info | MessageKind::Success => println!("{}", line),
        MessageKind::Warn | MessageKind::Error => eprintln!("{}", line),
    }
}

macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Info, $title, &format!($($details)*))
    };
}

macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Warn, $title, &format!($($details)*))
    };
}

macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::MessageKind::Error, $title, "")
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::MessageKind::Error, $title, $details)
    };
}

macro_rules! print_cmd_success {
    ($title:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::MessageKind::Success, $title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Success, $title, &format!($($details)*))
    };
}

pub(crate) use print_cmd_error;
pub(crate) use print_cmd_info;
pub(crate) use print_cmd_success;
pub(crate) use print_cmd_warn;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_follow_a_tab() {
        assert_eq!(
            format_message(MessageKind::Success, "Saved.", "/tmp/x"),
            "\x1b[1;32m[SUCCESS]\x1b[0m Saved.\t /tmp/x"
        );
        assert_eq!(
            format_message(MessageKind::Warn, "Careful.", ""),
            "\x1b[1;93m[WARN]\x1b[0m Careful."
        );
    }
}
