//! Detail Page
//!
//! Shows one record. When the record could not be loaded, only the title
//! region carries the not-found message and the body stays unpopulated.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_title(f, app, chunks[0]);
    render_body(f, app, chunks[1]);
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let title = app.detail_title.as_deref().unwrap_or("");
    let not_found = app.detail.is_none();

    let paragraph = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(if not_found { Color::Red } else { Color::Green })
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(paragraph, area);
}

fn render_body(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Detalhes ",
            Style::default().fg(Color::Cyan),
        ));

    let Some(detail) = &app.detail else {
        // Not-found or load failure: empty detail region
        f.render_widget(block, area);
        return;
    };

    let mut content = vec![
        Line::from(vec![
            Span::styled("Localização: ", Style::default().fg(Color::DarkGray)),
            Span::styled(detail.location.as_str(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Dificuldade: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                detail.difficulty.as_str(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            detail.body.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];

    if !detail.attractions.is_empty() {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            "Atrações:",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for attraction in &detail.attractions {
            content.push(Line::from(vec![
                Span::raw("  • "),
                Span::styled(attraction.as_str(), Style::default().fg(Color::White)),
            ]));
        }
    }

    let paragraph = Paragraph::new(content).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
