//! Event loop orchestrating background updates, user input, and rendering.
//!
//! This module coordinates three main concerns:
//! - Background results and ViewModel updates (via ViewModelUpdater)
//! - Keyboard input processing (navigation and the filter form)
//! - Starting and stopping live polling as pages change

use std::sync::Arc;

use anyhow::Result;
use camtel_api::EventSource;
use ratatui::{Terminal, backend::Backend};
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use crate::{config::CliConfig, input::InputHandler, state::AppState};
use client_frontend_core::{
    DashboardUpdate, EventImpact, FrontendConfig, Page, PollHandle, Poller, ViewModelUpdater,
    view_model::ViewModel,
};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop managing ViewModel state and coordinating UI updates.
///
/// Owns the ViewModel and the polling handles. Live polling runs only while
/// the live page is shown; backend health polling runs for the whole session.
pub struct EventLoop {
    pub(crate) source: Arc<dyn EventSource>,
    pub(crate) poller: Poller,
    pub(crate) updates: mpsc::Receiver<DashboardUpdate>,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    /// Owned ViewModel - incrementally updated via ViewModelUpdater
    pub(crate) view_model: ViewModel,
    pub(crate) frontend_config: FrontendConfig,
    pub(crate) cli_config: CliConfig,
    pub(crate) live_poll: Option<PollHandle>,
    pub(crate) backend_poll: Option<PollHandle>,
}

impl EventLoop {
    pub fn new(
        source: Arc<dyn EventSource>,
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        let (tx, updates) = mpsc::channel(frontend_config.channels.update_buffer);
        let poller = Poller::new(Arc::clone(&source), tx);

        Self {
            source,
            poller,
            updates,
            input: InputHandler::new(),
            app_state: AppState::new(),
            view_model: ViewModel::new(),
            frontend_config,
            cli_config,
            live_poll: None,
            backend_poll: None,
        }
    }

    pub async fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.start();
        self.render(terminal)?;

        loop {
            tokio::select! {
                update = self.updates.recv() => {
                    let Some(update) = update else {
                        tracing::warn!("Update channel closed");
                        break;
                    };
                    if self.handle_update(update).requires_redraw {
                        self.render(terminal)?;
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
            }
        }

        self.stop();
        Ok(())
    }

    /// Start session-wide polling and the polling of the landing page.
    pub(crate) fn start(&mut self) {
        self.backend_poll = Some(self.poller.start_backend(&self.frontend_config.polling));
        self.sync_polling();
    }

    pub(crate) fn stop(&mut self) {
        self.live_poll = None;
        self.backend_poll = None;
    }

    /// Apply one background result to the view model.
    pub(crate) fn handle_update(&mut self, update: DashboardUpdate) -> EventImpact {
        let footer = if self.app_state.observe(&update) {
            EventImpact::redraw()
        } else {
            EventImpact::none()
        };

        let impact = ViewModelUpdater::update(&mut self.view_model, update, self.source.as_ref());
        impact.combine(footer)
    }

    /// Switch pages, then start or stop live polling to match.
    pub(crate) fn navigate(&mut self, page: Page) -> EventImpact {
        if !self.view_model.navigate(page) {
            return EventImpact::none();
        }
        self.sync_polling();
        EventImpact::redraw()
    }

    fn sync_polling(&mut self) {
        match (self.view_model.page, self.live_poll.is_some()) {
            (Page::Live, false) => {
                self.live_poll = Some(self.poller.start_live(&self.frontend_config.polling));
            }
            (Page::Events, true) => {
                self.live_poll = None;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use camtel_api::{ApiConfig, EventClient};
    use client_frontend_core::view_model::FormEdit;

    fn event_loop() -> EventLoop {
        // Nothing listens on the discard port, so requests fail fast.
        let client = EventClient::new(&ApiConfig::new("http://127.0.0.1:9"));
        EventLoop::new(
            Arc::new(client),
            FrontendConfig::default(),
            CliConfig::default(),
        )
    }

    #[tokio::test]
    async fn live_polling_follows_the_page() {
        let mut el = event_loop();
        el.start();
        assert!(el.live_poll.is_some());
        assert!(el.backend_poll.is_some());

        assert!(el.navigate(Page::Events).requires_redraw);
        assert!(el.live_poll.is_none());
        assert!(el.backend_poll.is_some());

        el.navigate(Page::Live);
        assert!(el.live_poll.is_some());

        el.stop();
        assert!(el.live_poll.is_none());
    }

    #[tokio::test]
    async fn quit_key_action_stops_the_loop() {
        let mut el = event_loop();
        assert!(el.apply_key_action(KeyAction::Quit).is_none());
        assert!(el.apply_key_action(KeyAction::None).is_some());
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let mut el = event_loop();
        el.navigate(Page::Events);
        el.view_model.browser.form.focus_prev(); // wraps to Limit
        el.apply_key_action(KeyAction::Edit(FormEdit::Insert('x')));

        let impact = el.apply_key_action(KeyAction::RunFilter).unwrap();

        assert!(impact.requires_redraw);
        assert!(el.view_model.browser.form_error.is_some());
        assert_eq!(el.view_model.browser.pending, 0);
    }

    #[tokio::test]
    async fn failed_filter_request_reaches_the_footer() {
        let mut el = event_loop();
        el.navigate(Page::Events);
        el.apply_key_action(KeyAction::RunFilter);
        assert_eq!(el.view_model.browser.pending, 1);

        let update = el.updates.recv().await.expect("filter result");
        assert!(el.handle_update(update).requires_redraw);

        assert_eq!(el.view_model.browser.pending, 0);
        assert_eq!(el.app_state.failure.as_ref().map(|f| f.source), Some("filter"));
    }

    #[tokio::test]
    async fn query_answer_after_reopening_the_browser_is_ignored() {
        let mut el = event_loop();
        el.navigate(Page::Events);
        el.apply_key_action(KeyAction::RunFilter);

        el.navigate(Page::Live);
        el.navigate(Page::Events);

        let update = loop {
            let update = el.updates.recv().await.expect("filter result");
            if matches!(update, DashboardUpdate::Filtered { .. }) {
                break update;
            }
        };
        el.handle_update(update);

        // The refused request still shows in the footer; the reopened form does not count it.
        assert_eq!(el.view_model.browser.pending, 0);
        assert!(el.view_model.browser.results.is_none());
    }
}
