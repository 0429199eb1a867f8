//! Main render entry point composing all widgets.
use anyhow::Result;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    presentation::{theme::RatatuiTheme, widgets},
    state::AppState,
};
use client_frontend_core::{Page, view_model::ViewModel};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub app_state: &'a AppState,
    pub card_min_width: u16,
}

/// Draw one frame to `terminal`.
pub fn render_with_view_model<B: Backend>(
    terminal: &mut Terminal<B>,
    ctx: &RenderContext,
) -> Result<()> {
    terminal.draw(|frame| render(frame, ctx))?;
    Ok(())
}

/// Header on top, the active page in the middle, key hints at the bottom.
pub fn render(frame: &mut Frame, ctx: &RenderContext) {
    let theme = RatatuiTheme::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Page
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.view_model, &theme);

    match ctx.view_model.page {
        Page::Live => widgets::live_feed::render(
            frame,
            chunks[1],
            &ctx.view_model.live,
            ctx.card_min_width,
            &theme,
        ),
        Page::Events => {
            widgets::event_browser::render(frame, chunks[1], &ctx.view_model.browser, &theme)
        }
    }

    widgets::footer::render(frame, chunks[2], ctx.view_model, ctx.app_state, &theme);
}
