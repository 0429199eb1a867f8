//! Input handling (keyboard and page navigation).

use anyhow::Result;
use client_frontend_core::EventImpact;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::input::KeyAction;

impl EventLoop {
    /// Poll for keyboard input and handle UI interactions.
    ///
    /// Returns `true` when the user asked to quit.
    pub(in crate::event) fn handle_input_tick<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn handle_key_press<B: Backend>(
        &mut self,
        key: KeyEvent,
        terminal: &mut Terminal<B>,
    ) -> Result<bool> {
        let action = self.input.handle_key(
            key,
            self.view_model.page,
            self.view_model.browser.form.focus,
        );

        match self.apply_key_action(action) {
            None => Ok(true),
            Some(impact) => {
                if impact.requires_redraw {
                    self.render(terminal)?;
                }
                Ok(false)
            }
        }
    }

    /// Apply a decoded key. `None` means quit.
    pub(crate) fn apply_key_action(&mut self, action: KeyAction) -> Option<EventImpact> {
        let impact = match action {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                return None;
            }
            KeyAction::NextPage => self.navigate(self.view_model.page.next()),
            KeyAction::PrevPage => self.navigate(self.view_model.page.prev()),
            KeyAction::FocusNext => {
                self.view_model.browser.form.focus_next();
                EventImpact::redraw()
            }
            KeyAction::FocusPrev => {
                self.view_model.browser.form.focus_prev();
                EventImpact::redraw()
            }
            KeyAction::Edit(edit) => {
                if self.view_model.browser.form.edit(edit) {
                    EventImpact::redraw()
                } else {
                    EventImpact::none()
                }
            }
            KeyAction::CycleType(forward) => {
                self.view_model.browser.form.cycle_event_type(forward);
                EventImpact::redraw()
            }
            KeyAction::RunFilter => {
                let generation = self.view_model.browser.generation;
                if let Some(filter) = self.view_model.browser.submit() {
                    tracing::info!("Running event query: {:?}", filter);
                    self.poller.run_filter(filter, generation);
                }
                EventImpact::redraw()
            }
            KeyAction::None => EventImpact::none(),
        };

        Some(impact)
    }
}
