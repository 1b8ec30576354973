//! Event Handling
//!
//! Keyboard and event handling for aventura.

use crate::app::{App, Mode, Page};
use anyhow::Result;
use crossterm::event::{poll, read, Event, KeyCode, KeyModifiers};
use std::time::Duration;

/// Handle events, returns true if app should quit
pub async fn handle_events(app: &mut App) -> Result<bool> {
    if poll(Duration::from_millis(100))? {
        if let Event::Key(key) = read()? {
            return handle_key_event(app, key.code, key.modifiers).await;
        }
    }
    Ok(false)
}

async fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<bool> {
    // Global quit shortcut
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, code, modifiers).await,
        Mode::Confirm => handle_confirm_mode(app, code).await,
        Mode::Notice => handle_notice_mode(app, code),
        Mode::Help => handle_help_mode(app, code),
    }
}

async fn handle_normal_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<bool> {
    match app.page {
        Page::Home => handle_home_page(app, code).await,
        Page::Detail => handle_detail_page(app, code).await,
        Page::Register => handle_register_page(app, code, modifiers).await,
    }
}

async fn handle_home_page(app: &mut App, code: KeyCode) -> Result<bool> {
    match code {
        // Quit
        KeyCode::Char('q') => return Ok(true),

        // Card navigation - vim style + accessible alternatives
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.previous(),
        KeyCode::Home => app.selected = 0,
        KeyCode::End => app.selected = app.cards.len().saturating_sub(1),

        // Carousel navigation
        KeyCode::Char('h') | KeyCode::Left => app.carousel_prev(),
        KeyCode::Char('l') | KeyCode::Right => app.carousel_next(),

        // Detail page for the selected card
        KeyCode::Enter => {
            if let Some(card) = app.selected_card() {
                let id = card.detail_id.clone();
                app.open_detail(&id).await;
            }
        }

        // Card actions
        KeyCode::Char('e') => app.edit_stub(),
        KeyCode::Char('x') | KeyCode::Delete => app.request_delete(),

        // Creation form
        KeyCode::Char('n') => app.open_register(),

        // Refresh
        KeyCode::Char('R') => app.load_home().await,

        // Help
        KeyCode::Char('?') => app.enter_help_mode(),

        _ => {}
    }

    Ok(false)
}

async fn handle_detail_page(app: &mut App, code: KeyCode) -> Result<bool> {
    match code {
        KeyCode::Char('q') => return Ok(true),

        // Back to the listing page
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Left => {
            app.go_home().await;
        }

        KeyCode::Char('?') => app.enter_help_mode(),

        _ => {}
    }

    Ok(false)
}

async fn handle_register_page(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Result<bool> {
    match code {
        // Leave the form without submitting; values are kept
        KeyCode::Esc => {
            app.go_home().await;
        }

        // Field focus
        KeyCode::Tab | KeyCode::Down => app.form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form.prev_field(),

        // Enter advances until the last field, then submits
        KeyCode::Enter => {
            if app.form.is_last_field() {
                app.submit_form().await;
            } else {
                app.form.next_field();
            }
        }

        // Submit from any field
        KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.submit_form().await;
        }

        KeyCode::Backspace => {
            app.form.current_mut().pop();
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.current_mut().push(c);
        }

        _ => {}
    }

    Ok(false)
}

async fn handle_confirm_mode(app: &mut App, code: KeyCode) -> Result<bool> {
    match code {
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.exit_mode();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            if let Some(ref mut pending) = app.pending_delete {
                pending.selected_yes = true;
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if let Some(ref mut pending) = app.pending_delete {
                pending.selected_yes = false;
            }
        }
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
            let accepted = code != KeyCode::Enter
                || app
                    .pending_delete
                    .as_ref()
                    .map(|p| p.selected_yes)
                    .unwrap_or(false);

            if accepted {
                // confirm_delete ends in a notice dialog
                app.confirm_delete().await;
            } else {
                app.exit_mode();
            }
        }
        _ => {}
    }
    Ok(false)
}

fn handle_notice_mode(app: &mut App, code: KeyCode) -> Result<bool> {
    match code {
        KeyCode::Esc | KeyCode::Enter => {
            app.exit_mode();
        }
        _ => {}
    }
    Ok(false)
}

fn handle_help_mode(app: &mut App, code: KeyCode) -> Result<bool> {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.exit_mode();
        }
        _ => {}
    }
    Ok(false)
}
