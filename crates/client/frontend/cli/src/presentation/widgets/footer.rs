//! Footer widget: key hints and the latest refresh status.

use client_frontend_core::{Page, view_model::ViewModel};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{presentation::theme::RatatuiTheme, state::AppState};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    app_state: &AppState,
    theme: &RatatuiTheme,
) {
    let hints = match view_model.page {
        Page::Live => "Tab: next page | q/Esc: quit",
        Page::Events => {
            "Tab: next page | Up/Down: field | Left/Right: type | Enter: run | Ctrl-U: clear | Esc: quit"
        }
    };

    let status = if let Some(failure) = &app_state.failure {
        Line::from(Span::styled(failure.text(), theme.error()))
    } else if view_model.page == Page::Live {
        let live = &view_model.live;
        let stamp = |at: Option<chrono::DateTime<chrono::Local>>| {
            at.map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string())
        };
        Line::from(Span::styled(
            format!(
                "persons refreshed {} | vehicles refreshed {}",
                stamp(live.persons_refreshed_at),
                stamp(live.vehicles_refreshed_at)
            ),
            theme.muted(),
        ))
    } else {
        Line::default()
    };

    let lines = vec![Line::from(Span::styled(hints, theme.muted())), status];
    frame.render_widget(Paragraph::new(lines), area);
}
