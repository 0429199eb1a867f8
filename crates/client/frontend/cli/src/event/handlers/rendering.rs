//! Rendering handlers.

use anyhow::Result;
use ratatui::{Terminal, backend::Backend};

use super::super::EventLoop;
use crate::presentation::ui;

impl EventLoop {
    /// Render current state using ViewModel.
    pub(in crate::event) fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let ctx = ui::RenderContext {
            view_model: &self.view_model,
            app_state: &self.app_state,
            card_min_width: self.cli_config.ui.card_min_width,
        };

        ui::render_with_view_model(terminal, &ctx)
    }
}
