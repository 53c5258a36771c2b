use super::centered_rect;
use crate::form::{Field, FoodForm};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Draw the add/edit form as an overlay.
pub fn render(frame: &mut Frame, title: &str, form: &FoodForm) {
    let area = centered_rect(70, 80, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    for (i, field) in Field::ALL.into_iter().enumerate() {
        let focused = form.focus() == field;
        let style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(form.value(field).to_string())
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title(format!(" {} ", field.label())),
            );
        frame.render_widget(input, chunks[i]);

        if focused {
            let value_width = unicode_width::UnicodeWidthStr::width(form.value(field)) as u16;
            let max_x = chunks[i].x + chunks[i].width.saturating_sub(2);
            let cursor_x = (chunks[i].x + 1 + value_width).min(max_x);
            frame.set_cursor_position((cursor_x, chunks[i].y + 1));
        }
    }

    // Error message if present
    if let Some(error) = form.error() {
        let error_widget = Paragraph::new(error.to_string())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(error_widget, chunks[4]);
    }

    let help = Paragraph::new("Tab: Next field | Enter: Save | Esc: Cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}
