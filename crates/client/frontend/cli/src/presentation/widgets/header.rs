//! Header widget: product title, page navigation and backend status.

use client_frontend_core::{Page, view_model::ViewModel};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::presentation::theme::RatatuiTheme;

pub const TITLE: &str = "CamTelligence";
pub const SUBTITLE: &str = "Person + Vehicle detection";

/// Render the header panel.
///
/// The left side holds the title and one tab per page; the right side shows
/// backend health and detection counters when known.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(48)])
        .split(inner);

    let mut tabs = Vec::new();
    for page in Page::iter() {
        tabs.push(Span::styled(
            format!(" {} ", page.title()),
            theme.tab(page == view_model.page),
        ));
        tabs.push(Span::raw(" "));
    }

    let left = vec![
        Line::from(vec![
            Span::styled(TITLE, theme.title()),
            Span::raw("  "),
            Span::styled(SUBTITLE, theme.muted()),
        ]),
        Line::from(tabs),
    ];
    frame.render_widget(Paragraph::new(left), columns[0]);

    let backend = &view_model.backend;
    let status = match backend.reachable {
        Some(true) => "backend ok",
        Some(false) => "backend unreachable",
        None => "checking backend",
    };
    let mut right = vec![Line::from(vec![
        Span::styled("● ", theme.backend(backend.reachable)),
        Span::raw(status),
    ])];
    if let Some(metrics) = backend.metrics {
        right.push(Line::from(Span::styled(
            format!(
                "{} persons · {} vehicles · {} notifications",
                metrics.persons, metrics.vehicles, metrics.notifications
            ),
            theme.muted(),
        )));
    }
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        columns[1],
    );
}
