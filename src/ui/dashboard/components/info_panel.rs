//! Dashboard info panel component
//!
//! Renders where the data comes from and how the session is running

use super::super::state::{DashboardState, DataOrigin};
use super::super::utils::format_countdown;
use crate::environment::Environment;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn origin_line(label: &str, origin: DataOrigin) -> Line<'static> {
    let (text, color) = match origin {
        DataOrigin::Pending => ("loading", Color::DarkGray),
        DataOrigin::Live => ("live", Color::LightGreen),
        DataOrigin::Sample => ("sample", Color::LightYellow),
    };
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(text, Style::default().fg(color)),
    ])
}

/// Render the info panel.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
        Environment::Directory { .. } => Color::LightMagenta,
    };

    let uptime = state.start_time.elapsed().as_secs();
    let uptime_string = if uptime >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime / 3600,
            (uptime % 3600) / 60,
            uptime % 60
        )
    } else {
        format!("Uptime: {}m {}s", uptime / 60, uptime % 60)
    };

    let info_lines = vec![
        Line::from(Span::styled(
            format!("Env: {}", state.environment),
            Style::default().fg(env_color),
        )),
        Line::from(Span::styled(
            format!("Source: {}", state.environment.location()),
            Style::default().fg(Color::LightBlue),
        )),
        Line::from(Span::styled(
            format!("Version: {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            uptime_string,
            Style::default().fg(Color::LightGreen),
        )),
        Line::from(Span::styled(
            format!(
                "Auto refresh: every {}",
                format_countdown(state.refresh_interval)
            ),
            Style::default().fg(Color::LightYellow),
        )),
        Line::default(),
        origin_line("Counters", state.metrics_origin()),
        origin_line("Updates", state.updates_origin()),
    ];

    let info_block = Block::default()
        .title("INFO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(info_lines)
            .block(info_block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
