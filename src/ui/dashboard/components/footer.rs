//! Dashboard footer component
//!
//! Renders key hints, or the load failure notice when one is showing

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let refresh_hint = if state.board.is_refreshing() {
        "[R] Refreshing..."
    } else {
        "[R] Refresh"
    };

    let (footer_text, footer_color) = match state.board.notice() {
        Some(notice) => (
            format!("{} | [Q] Quit | {}", refresh_hint, notice),
            Color::LightRed,
        ),
        None => (
            format!("{} | [Q] Quit | Team Dashboard", refresh_hint),
            Color::Cyan,
        ),
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(footer_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
