//! Header Component
//!
//! Displays the collection endpoint and current page information.

use crate::app::{App, Page};
use crate::VERSION;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" aventura v{} ", VERSION),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    // Row 1: API endpoint and read-only flag
    let endpoint = Line::from(vec![
        Span::styled(" API: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.client.base_url(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        if app.readonly {
            Span::styled(
                "  [SOMENTE LEITURA]",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("")
        },
    ]);
    f.render_widget(Paragraph::new(endpoint), rows[0]);

    // Row 2: current page and record counts
    let page_info = match app.page {
        Page::Home => Line::from(vec![
            Span::styled(" Página: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "Catálogo",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Aventuras: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", app.cards.len()),
                Style::default().fg(Color::White),
            ),
            Span::styled("  Destaques: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", app.slides.len()),
                Style::default().fg(Color::White),
            ),
        ]),
        Page::Detail => Line::from(vec![
            Span::styled(" Página: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "Detalhes",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Page::Register => Line::from(vec![
            Span::styled(" Página: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "Cadastro",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    };
    f.render_widget(Paragraph::new(page_info), rows[1]);
}
