//! Home Page
//!
//! Featured-items carousel on top, full card grid below. Both render
//! from the pure projections built in [`crate::view`]; an empty catalog
//! simply draws empty containers.

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(1)])
        .split(area);

    render_carousel(f, app, chunks[0]);
    render_card_grid(f, app, chunks[1]);
}

/// Render the currently visible carousel slide.
fn render_carousel(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.slides.is_empty() {
        " Destaques ".to_string()
    } else {
        format!(" Destaques ({}/{}) ", app.carousel_index + 1, app.slides.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(slide) = app.slides.get(app.carousel_index) else {
        return;
    };

    let content = vec![
        Line::from(Span::styled(
            slide.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            slide.summary.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            slide.image.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled("Ver detalhes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("id {}", slide.detail_id),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled("  ←/→ para navegar", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    f.render_widget(Paragraph::new(content), inner);
}

/// Render the full catalog as a selectable table, one row per card.
fn render_card_grid(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" Aventuras [{}] ", app.cards.len()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("Nome"),
        Cell::from("Descrição"),
        Cell::from("Imagem"),
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .cards
        .iter()
        .map(|card| {
            Row::new(vec![
                Cell::from(card.detail_id.as_str()),
                Cell::from(card.title.as_str()),
                Cell::from(card.summary.as_str()),
                Cell::from(Span::styled(
                    card.image.as_str(),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut state = TableState::default();
    if !app.cards.is_empty() {
        state.select(Some(app.selected));
    }

    f.render_stateful_widget(table, area, &mut state);
}
