//! Splash screen rendering module.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
  ████████╗ ███████╗  █████╗  ███╗   ███╗
  ╚══██╔══╝ ██╔════╝ ██╔══██╗ ████╗ ████║
     ██║    █████╗   ███████║ ██╔████╔██║
     ██║    ██╔══╝   ██╔══██║ ██║╚██╔╝██║
     ██║    ███████╗ ██║  ██║ ██║ ╚═╝ ██║
     ╚═╝    ╚══════╝ ╚═╝  ╚═╝ ╚═╝     ╚═╝
"#;

/// Draws the logo, version and data source centered on screen.
pub fn render_splash(f: &mut Frame, location: &str) {
    let logo_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|row| Line::from(Span::styled(row.to_string(), logo_style)))
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("Dashboard {}", env!("CARGO_PKG_VERSION")),
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(Span::styled(
        format!("Reading from {}", location),
        Style::default().fg(Color::DarkGray),
    )));

    let [centered_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(f.area());

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_area,
    );
}
