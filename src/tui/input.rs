//! Input handling for the TUI application.
//!
//! Key events are mapped to application messages according to what has
//! focus: the feedback form consumes printable characters as review text,
//! while the dashboard binds single-letter commands.

use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// What currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The rating and review form.
    FeedbackForm,
    /// The submissions table and statistics.
    Dashboard,
    /// The submission detail overlay.
    DetailOverlay,
    /// The help overlay.
    Help,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for keys that mean nothing in that context.
#[must_use]
pub fn map_key_to_message(key: &KeyMsg, context: InputContext) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('c') => Some(AppMsg::Quit),
            _ => None,
        };
    }

    match context {
        InputContext::FeedbackForm => map_form_key(key.key),
        InputContext::Dashboard => map_dashboard_key(key.key),
        InputContext::DetailOverlay => map_detail_key(key.key),
        InputContext::Help => Some(AppMsg::ToggleHelp),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_form_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::SubmitReview),
        KeyCode::Backspace => Some(AppMsg::DeleteChar),
        KeyCode::Right | KeyCode::Up => Some(AppMsg::RatingUp),
        KeyCode::Left | KeyCode::Down => Some(AppMsg::RatingDown),
        KeyCode::Tab => Some(AppMsg::SwitchRoute),
        KeyCode::F(1) => Some(AppMsg::ToggleHelp),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        KeyCode::Char(character) => Some(AppMsg::InsertChar(character)),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_dashboard_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Enter => Some(AppMsg::OpenDetail),
        KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => Some(AppMsg::NextPage),
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => Some(AppMsg::PrevPage),
        KeyCode::Char('f') => Some(AppMsg::CycleFilter),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('?') | KeyCode::F(1) => Some(AppMsg::ToggleHelp),
        KeyCode::Tab => Some(AppMsg::SwitchRoute),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_detail_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(AppMsg::EscapePressed),
        _ => None,
    }
}
