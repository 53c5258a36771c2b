mod header;
mod help;
mod list;
mod modal;

use crate::api::HttpClient;
use crate::app::App;
use crate::dashboard::Modal;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Top-level render: header, plate list, status bar, then overlays.
pub fn render<C: HttpClient>(app: &App<C>, frame: &mut Frame) {
    // Layout: header(3) + list(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(app, frame, chunks[0]);
    list::render(app, frame, chunks[1]);
    list::render_status(app, frame, chunks[2]);

    match app.dashboard.modal() {
        Modal::Closed => {}
        Modal::Add(form) => modal::render(frame, " New plate ", form),
        Modal::Edit { target, form } => {
            modal::render(frame, &format!(" Edit plate #{} ", target.id), form)
        }
    }

    // Render help overlay on top if active
    if app.show_help {
        help::render(frame);
    }
}

/// Create a centered rectangle using percentage of parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
