use super::centered_rect;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )])
}

fn binding(keys: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(keys, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ])
}

pub fn render(frame: &mut Frame) {
    let area = centered_rect(70, 70, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let help_text = vec![
        Line::from(""),
        section("  Global"),
        binding("    ?         ", "Toggle this help"),
        binding("    q         ", "Quit application"),
        binding("    Ctrl+C    ", "Quit from anywhere"),
        Line::from(""),
        section("  Menu"),
        binding("    ↑/k ↓/j   ", "Navigate up/down"),
        binding("    g/G       ", "Jump to first/last plate"),
        binding("    n         ", "New plate"),
        binding("    e/Enter   ", "Edit selected plate"),
        binding("    d/Del     ", "Delete selected plate"),
        binding("    r         ", "Reload from server"),
        Line::from(""),
        section("  Plate form"),
        binding("    Tab/↓     ", "Next field"),
        binding("    S-Tab/↑   ", "Previous field"),
        binding("    Enter     ", "Save"),
        binding("    Esc       ", "Cancel"),
        Line::from(""),
    ];

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help: Keybindings ")
                .title_bottom(Line::from(" Press any key to close ").style(Style::default().fg(Color::DarkGray))),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(help, area);
}
