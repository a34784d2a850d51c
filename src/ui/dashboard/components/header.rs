//! Dashboard header component
//!
//! Renders the title and refresh gauge

use super::super::state::DashboardState;
use super::super::utils::format_countdown;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and refresh progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new(format!("TEAM DASHBOARD v{}", env!("CARGO_PKG_VERSION")))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Refreshing animates; otherwise the gauge fills toward the next automatic load
    let (progress_text, gauge_color, progress_percent) = if state.board.is_refreshing() {
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        (
            "REFRESHING - Loading dashboard data".to_string(),
            Color::LightGreen,
            progress,
        )
    } else {
        let period = state.refresh_interval.as_secs().max(1);
        let remaining = state.time_until_auto_refresh();
        let progress = ((period - remaining.as_secs().min(period)) as f64 / period as f64
            * 100.0) as u16;
        let last_updated = state.board.last_updated().unwrap_or("never");
        (
            format!(
                "Last updated: {} | next refresh in {}",
                last_updated,
                format_countdown(remaining)
            ),
            Color::LightBlue,
            progress.min(100),
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
