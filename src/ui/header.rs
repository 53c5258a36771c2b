use crate::api::HttpClient;
use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Title on the left, "new plate" trigger on the right.
pub fn render<C: HttpClient>(app: &App<C>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(20)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " GoRestaurant",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   [{} plates on the menu]", app.dashboard.foods().len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Left);
    frame.render_widget(title, halves[0]);

    // Highlighted while the add modal is open
    let trigger_style = if matches!(app.dashboard.modal(), crate::dashboard::Modal::Add(_)) {
        Style::default().bg(Color::Yellow).fg(Color::Black)
    } else {
        Style::default().bg(Color::Green).fg(Color::Black)
    };
    let trigger = Paragraph::new(Line::from(vec![
        Span::styled(" n ", trigger_style.add_modifier(Modifier::BOLD)),
        Span::styled(" New plate ", trigger_style),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(trigger, halves[1]);
}
