//! Dashboard updates component
//!
//! Renders the company and site update panels side by side

use super::super::state::{DashboardState, DataOrigin};
use crate::consts::dashboard_consts::NO_UPDATES_PLACEHOLDER;
use crate::display::UpdateList;
use crate::model::FeedKind;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render both update panels.
pub fn render_updates_section(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_update_panel(f, chunks[0], state, FeedKind::Company);
    render_update_panel(f, chunks[1], state, FeedKind::Site);
}

fn render_update_panel(f: &mut Frame, area: Rect, state: &DashboardState, kind: FeedKind) {
    let lines = update_lines(state.board.updates(kind));

    let mut title = format!("{} UPDATES", kind.to_string().to_uppercase());
    if state.updates_origin() == DataOrigin::Sample {
        title.push_str(" (sample data)");
    }
    let border_color = match kind {
        FeedKind::Company => Color::LightBlue,
        FeedKind::Site => Color::LightYellow,
    };

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

fn update_lines(list: Option<&UpdateList>) -> Vec<Line<'static>> {
    match list {
        None => vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(UpdateList::Placeholder) => vec![Line::from(Span::styled(
            NO_UPDATES_PLACEHOLDER,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ))],
        Some(UpdateList::Cards(cards)) => {
            let mut lines = Vec::with_capacity(cards.len() * 4);
            for card in cards {
                lines.push(Line::from(Span::styled(
                    card.date.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
                lines.push(Line::from(Span::styled(
                    card.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    card.content.clone(),
                    Style::default().fg(Color::Gray),
                )));
                lines.push(Line::default());
            }
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::UpdateCard;

    #[test]
    fn cards_become_date_title_content_lines() {
        let list = UpdateList::Cards(vec![UpdateCard {
            date: "Jan 6, 2026".to_string(),
            title: "Shift change".to_string(),
            content: "Nights start at 6".to_string(),
        }]);
        let lines = update_lines(Some(&list));
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].spans[0].content, "Jan 6, 2026");
        assert_eq!(lines[1].spans[0].content, "Shift change");
        assert_eq!(lines[2].spans[0].content, "Nights start at 6");
    }

    #[test]
    fn placeholder_and_pending_lists() {
        let lines = update_lines(Some(&UpdateList::Placeholder));
        assert_eq!(lines[0].spans[0].content, "No updates available");
        assert_eq!(update_lines(None)[0].spans[0].content, "Loading...");
    }
}
