//! Creation Form
//!
//! Input form for new catalog records. The focused field shows a cursor;
//! values survive a failed submission so the user can retry.

use crate::app::{App, FORM_FIELDS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Span::styled(
            " Cadastrar Aventura ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let constraints: Vec<Constraint> = FORM_FIELDS
        .iter()
        .map(|_| Constraint::Length(2))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, label) in FORM_FIELDS.iter().enumerate() {
        render_field(f, app, index, label, rows[index]);
    }
}

fn render_field(f: &mut Frame, app: &App, index: usize, label: &str, area: Rect) {
    let focused = app.form.focused == index;
    let value = &app.form.values[index];

    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_display = if focused {
        format!("{}_", value)
    } else {
        value.clone()
    };

    let line = Line::from(vec![
        Span::styled(format!(" {:<22}", format!("{}:", label)), label_style),
        Span::styled(value_display, Style::default().fg(Color::White)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
