use crate::api::HttpClient;
use crate::app::App;
use crate::food::{Food, format_price};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render<C: HttpClient>(app: &App<C>, frame: &mut Frame, area: Rect) {
    let foods = app.dashboard.foods();

    // ── List ──
    let items: Vec<ListItem> = foods
        .iter()
        .map(|food| food_row(food, area.width as usize))
        .collect();

    let position = if foods.is_empty() {
        " 0 of 0 ".to_string()
    } else {
        format!(" {} of {} ", app.list_selected + 1, foods.len())
    };

    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" Plates ({}) ", foods.len()))
                .title_bottom(Line::from(position).alignment(Alignment::Right)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    if !foods.is_empty() {
        list_state.select(Some(app.list_selected));
    }
    frame.render_stateful_widget(list_widget, area, &mut list_state);
}

/// One list item: id, availability, name, description, price.
fn food_row(food: &Food, width: usize) -> ListItem<'static> {
    let (marker, marker_color) = if food.available {
        ("●", Color::Green)
    } else {
        ("○", Color::Red)
    };
    let price = format_price(&food.price);
    let name = truncate_str(&food.name, 24);
    // id(6) + marker(2) + name + gaps + price + borders/highlight
    let used = 6 + 2 + name.width() + 3 + price.width() + 6;
    let description = truncate_str(food.description.lines().next().unwrap_or(""), width.saturating_sub(used));

    ListItem::new(Line::from(vec![
        Span::styled(format!("{:>5} ", food.id), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{} ", marker), Style::default().fg(marker_color)),
        Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", description), Style::default().fg(Color::Gray)),
        Span::styled(format!("  {}", price), Style::default().fg(Color::Yellow)),
    ]))
}

pub fn render_status<C: HttpClient>(app: &App<C>, frame: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let status_style = if app.status.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let status_line = Line::from(vec![
        Span::styled(" ↑↓", key_style),
        Span::raw(" Navigate  "),
        Span::styled("n", key_style),
        Span::raw(" New  "),
        Span::styled("e", key_style),
        Span::raw(" Edit  "),
        Span::styled("d", key_style),
        Span::raw(" Delete  "),
        Span::styled("?", key_style),
        Span::raw(" Help  "),
        Span::styled("q", key_style),
        Span::raw(" Quit  "),
        Span::styled(app.status.text().to_string(), status_style),
    ]);
    frame.render_widget(Paragraph::new(status_line), area);
}

/// Truncate a string to `max_width` display columns, adding "…" if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        result.push(c);
    }
    result.push('…');
    result
}
