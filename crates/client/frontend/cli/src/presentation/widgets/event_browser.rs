//! Event browser widget: filter form on top, result pills below.

use client_frontend_core::view_model::{EventBrowser, FilterForm, FormField};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strum::IntoEnumIterator;

use crate::presentation::theme::RatatuiTheme;

pub const EMPTY_PROMPT: &str = "Run a query to see events.";
pub const NO_MATCHES: &str = "No events match these filters.";

pub fn render(frame: &mut Frame, area: Rect, browser: &EventBrowser, theme: &RatatuiTheme) {
    // One row per field, the status row and borders.
    let form_height = u16::try_from(FormField::iter().count())
        .unwrap_or(u16::MAX)
        .saturating_add(3);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(form_height), Constraint::Min(0)])
        .split(area);

    render_form(frame, chunks[0], browser, theme);
    render_results(frame, chunks[1], browser, theme);
}

fn render_form(frame: &mut Frame, area: Rect, browser: &EventBrowser, theme: &RatatuiTheme) {
    let form = &browser.form;
    let mut lines: Vec<Line> = FormField::iter()
        .map(|field| field_line(form, field, theme))
        .collect();

    let status = if let Some(err) = &browser.form_error {
        Line::from(Span::styled(err.to_string(), theme.error()))
    } else if browser.pending > 0 {
        Line::from(Span::styled("Running query...", theme.muted()))
    } else {
        Line::from(vec![
            Span::styled("[ Run ]", theme.title()),
            Span::styled("  Enter", theme.muted()),
        ])
    };
    lines.push(status);

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Filter "));
    frame.render_widget(paragraph, area);
}

fn field_line<'a>(form: &'a FilterForm, field: FormField, theme: &RatatuiTheme) -> Line<'a> {
    let focused = form.focus == field;
    let marker = if focused { "> " } else { "  " };
    let label_style = if focused {
        theme.emphasize_current(theme.title())
    } else {
        theme.muted()
    };

    let mut spans = vec![
        Span::raw(marker),
        Span::styled(format!("{:<6}", field.label()), label_style),
        Span::raw(" "),
    ];

    let value = form.value(field);
    if !field.is_text() {
        spans.push(Span::raw(format!("< {value} >")));
    } else if value.is_empty() {
        spans.push(Span::styled(field.placeholder(), theme.muted()));
    } else {
        spans.push(Span::raw(value));
    }
    if focused && field.is_text() {
        spans.push(Span::styled("_", theme.title()));
    }

    Line::from(spans)
}

fn render_results(frame: &mut Frame, area: Rect, browser: &EventBrowser, theme: &RatatuiTheme) {
    let Some(pills) = &browser.results else {
        let prompt = Paragraph::new(Span::styled(EMPTY_PROMPT, theme.muted()))
            .block(Block::default().borders(Borders::ALL).title(" Results "));
        frame.render_widget(prompt, area);
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Results ({}) ", pills.len()));

    if pills.is_empty() {
        let empty = Paragraph::new(Span::styled(NO_MATCHES, theme.muted())).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = pills
        .iter()
        .map(|pill| ListItem::new(Line::from(Span::styled(pill.text(), theme.event_kind(pill.kind)))))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::testing::buffer_text;
    use camtel_api::{FilteredEvents, VehicleEvent};
    use client_frontend_core::view_model::FormEdit;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(browser: &EventBrowser) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), browser, &RatatuiTheme::new()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn prompts_before_first_query() {
        let text = draw(&EventBrowser::default());
        assert!(text.contains(EMPTY_PROMPT));
        assert!(text.contains("Any type"));
        assert!(text.contains("[ Run ]"));
    }

    #[test]
    fn shows_typed_values_and_form_errors() {
        let mut browser = EventBrowser::default();
        for ch in "gate".chars() {
            browser.form.edit(FormEdit::Insert(ch));
        }
        browser.form.limit = "zero".to_string();
        assert!(browser.submit().is_none());

        let text = draw(&browser);
        assert!(text.contains("> Camera gate_"));
        assert!(text.contains("Limit 'zero' must be a positive whole number"));
    }

    #[test]
    fn lists_result_pills() {
        let mut browser = EventBrowser::default();
        browser.apply_results(&FilteredEvents {
            person_events: Vec::new(),
            vehicle_events: vec![VehicleEvent {
                id: "v-1".to_string(),
                camera: "driveway".to_string(),
                occurred_at: "not-a-time".to_string(),
                frame_asset: None,
                crop_asset: None,
                score: None,
                label: "car".to_string(),
                created_at: "not-a-time".to_string(),
            }],
        });

        let text = draw(&browser);
        assert!(text.contains("Results (1)"));
        assert!(text.contains("Vehicle • driveway • not-a-time"));
        assert!(!text.contains(EMPTY_PROMPT));
    }

    #[test]
    fn empty_result_differs_from_no_query() {
        let mut browser = EventBrowser::default();
        browser.apply_results(&FilteredEvents::default());
        assert!(draw(&browser).contains(NO_MATCHES));
    }
}
