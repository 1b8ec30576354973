//! Terminal User Interface rendering module
//!
//! This module handles all UI rendering for aventura using the ratatui
//! framework. Each frame is rebuilt from scratch out of the view models in
//! [`crate::view`]: the renderer never mutates application state.
//!
//! # Architecture
//!
//! - `header` - Header bar with endpoint and page info
//! - `home` - Carousel of featured adventures plus the full card grid
//! - `detail` - Single-record detail page
//! - `form` - Creation form
//! - `dialog` - Confirmation and notice dialogs
//! - `help` - Help overlay showing keybindings

mod detail;
mod dialog;
mod form;
mod header;
mod help;
mod home;

use crate::app::{App, Mode, Page};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(1),    // Page content
            Constraint::Length(1), // Footer hint
        ])
        .split(f.area());

    header::render(f, app, chunks[0]);

    match app.page {
        Page::Home => home::render(f, app, chunks[1]),
        Page::Detail => detail::render(f, app, chunks[1]),
        Page::Register => form::render(f, app, chunks[1]),
    }

    render_footer(f, app, chunks[2]);

    // Overlays
    match app.mode {
        Mode::Help => help::render(f, app),
        Mode::Confirm | Mode::Notice => dialog::render(f, app),
        Mode::Normal => {}
    }
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let hint = match app.page {
        Page::Home => " Enter:detalhes  n:cadastrar  e:editar  x:excluir  R:atualizar  ?:ajuda  q:sair",
        Page::Detail => " Esc/Backspace:voltar  ?:ajuda  q:sair",
        Page::Register => " Tab:próximo campo  Enter:avançar/enviar  Ctrl+S:enviar  Esc:voltar",
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(footer, area);
}

/// Centered popup rect used by the overlay components.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
