//! Colors and text styles for the terminal UI.

use camtel_api::EventKind;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui styling rules shared by all widgets.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn link(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Color::LightRed)
    }

    pub fn event_kind(&self, kind: EventKind) -> Style {
        let color = match kind {
            EventKind::Person => Color::Cyan,
            EventKind::Vehicle => Color::Yellow,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Style of the header dot for the backend health state.
    pub fn backend(&self, reachable: Option<bool>) -> Style {
        let color = match reachable {
            Some(true) => Color::Green,
            Some(false) => Color::Red,
            None => Color::Gray,
        };
        Style::default().fg(color)
    }

    pub fn tab(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightCyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn emphasize_current(&self, base: Style) -> Style {
        base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }
}
