//! Help Overlay
//!
//! Shows keyboard shortcuts and help information.

use crate::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, _app: &App) {
    let area = f.area();
    let popup_area = super::centered_rect(60, 70, area);

    f.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            "Atalhos de teclado",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Catálogo",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  j/k, ↑/↓    ", Style::default().fg(Color::Yellow)),
            Span::raw("Selecionar aventura"),
        ]),
        Line::from(vec![
            Span::styled("  h/l, ←/→    ", Style::default().fg(Color::Yellow)),
            Span::raw("Navegar destaques"),
        ]),
        Line::from(vec![
            Span::styled("  Enter       ", Style::default().fg(Color::Yellow)),
            Span::raw("Abrir detalhes"),
        ]),
        Line::from(vec![
            Span::styled("  R           ", Style::default().fg(Color::Yellow)),
            Span::raw("Atualizar lista"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Ações",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  n           ", Style::default().fg(Color::Yellow)),
            Span::raw("Cadastrar nova aventura"),
        ]),
        Line::from(vec![
            Span::styled("  e           ", Style::default().fg(Color::Yellow)),
            Span::raw("Editar (não implementado)"),
        ]),
        Line::from(vec![
            Span::styled("  x/Delete    ", Style::default().fg(Color::Red)),
            Span::raw("Excluir aventura (destrutivo)"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Formulário",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  Tab/↓       ", Style::default().fg(Color::Yellow)),
            Span::raw("Próximo campo"),
        ]),
        Line::from(vec![
            Span::styled("  Enter       ", Style::default().fg(Color::Yellow)),
            Span::raw("Avançar / enviar no último campo"),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+S      ", Style::default().fg(Color::Yellow)),
            Span::raw("Enviar formulário"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ?/Esc       ", Style::default().fg(Color::Yellow)),
            Span::raw("Fechar ajuda"),
        ]),
        Line::from(vec![
            Span::styled("  q           ", Style::default().fg(Color::Yellow)),
            Span::raw("Sair"),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Ajuda ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    f.render_widget(paragraph, popup_area);
}
