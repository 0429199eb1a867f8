//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_frontend_core::Page;
use client_frontend_core::view_model::{FormEdit, FormField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    NextPage,
    PrevPage,
    FocusNext,
    FocusPrev,
    /// Edit the focused text field of the filter form.
    Edit(FormEdit),
    /// Step the event type selector; `true` moves forward.
    CycleType(bool),
    RunFilter,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into dashboard commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// `focus` is the focused form field and only matters on the browser page.
    pub fn handle_key(&self, key: KeyEvent, page: Page, focus: FormField) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => KeyAction::Quit,
                KeyCode::Char('u') if page == Page::Events => KeyAction::Edit(FormEdit::Clear),
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Tab => KeyAction::NextPage,
            KeyCode::BackTab => KeyAction::PrevPage,
            _ => match page {
                Page::Live => self.live_key(key),
                Page::Events => self.browser_key(key, focus),
            },
        }
    }

    fn live_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn browser_key(&self, key: KeyEvent, focus: FormField) -> KeyAction {
        match key.code {
            KeyCode::Up => KeyAction::FocusPrev,
            KeyCode::Down => KeyAction::FocusNext,
            KeyCode::Enter => KeyAction::RunFilter,
            KeyCode::Left if !focus.is_text() => KeyAction::CycleType(false),
            KeyCode::Right if !focus.is_text() => KeyAction::CycleType(true),
            KeyCode::Char(' ') if !focus.is_text() => KeyAction::CycleType(true),
            KeyCode::Char(ch) if focus.is_text() => KeyAction::Edit(FormEdit::Insert(ch)),
            KeyCode::Backspace if focus.is_text() => KeyAction::Edit(FormEdit::Backspace),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(ch))
        }
    }

    #[test]
    fn navigation_keys_work_on_every_page() {
        let handler = InputHandler::new();
        for page in [Page::Live, Page::Events] {
            assert_eq!(
                handler.handle_key(key(KeyCode::Tab), page, FormField::Camera),
                KeyAction::NextPage
            );
            assert_eq!(
                handler.handle_key(key(KeyCode::BackTab), page, FormField::Camera),
                KeyAction::PrevPage
            );
            assert_eq!(
                handler.handle_key(ctrl('c'), page, FormField::Camera),
                KeyAction::Quit
            );
        }
    }

    #[test]
    fn q_quits_live_page_but_types_in_browser() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), Page::Live, FormField::Camera),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), Page::Events, FormField::Camera),
            KeyAction::Edit(FormEdit::Insert('q'))
        );
    }

    #[test]
    fn type_selector_cycles_instead_of_typing() {
        let handler = InputHandler::new();
        let focus = FormField::EventType;
        assert_eq!(
            handler.handle_key(key(KeyCode::Right), Page::Events, focus),
            KeyAction::CycleType(true)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Left), Page::Events, focus),
            KeyAction::CycleType(false)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), Page::Events, focus),
            KeyAction::None
        );
    }

    #[test]
    fn browser_form_keys() {
        let handler = InputHandler::new();
        let focus = FormField::Limit;
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), Page::Events, focus),
            KeyAction::RunFilter
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down), Page::Events, focus),
            KeyAction::FocusNext
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace), Page::Events, focus),
            KeyAction::Edit(FormEdit::Backspace)
        );
        assert_eq!(
            handler.handle_key(ctrl('u'), Page::Events, focus),
            KeyAction::Edit(FormEdit::Clear)
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), Page::Live, FormField::Camera),
            KeyAction::None
        );
    }
}
