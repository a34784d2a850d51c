//! Dashboard counters component
//!
//! Renders one tile per production counter

use super::super::state::{DashboardState, DataOrigin};
use crate::model::Counter;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the row of counter tiles.
pub fn render_counters_section(f: &mut Frame, area: Rect, state: &DashboardState) {
    let title = match state.metrics_origin() {
        DataOrigin::Sample => "COUNTERS (sample data)",
        DataOrigin::Live | DataOrigin::Pending => "COUNTERS",
    };
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let tile_count = Counter::ALL.len();
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, tile_count as u32); tile_count])
        .split(inner);

    for (counter, tile) in Counter::ALL.iter().zip(tiles.iter()) {
        render_counter_tile(f, *tile, *counter, state.board.counter(*counter));
    }
}

fn render_counter_tile(f: &mut Frame, area: Rect, counter: Counter, value: Option<&str>) {
    let value_color = match counter {
        Counter::ErrorsRework => Color::LightRed,
        _ => Color::LightGreen,
    };
    let lines = vec![
        Line::from(Span::styled(
            value.unwrap_or("-").to_string(),
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            counter.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let tile = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(tile, area);
}
