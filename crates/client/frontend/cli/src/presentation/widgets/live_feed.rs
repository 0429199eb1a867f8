//! Live feed widget: a grid of detection cards, persons before vehicles.

use client_frontend_core::view_model::{EventCard, LiveFeed};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Headline, camera and timestamp rows inside a card.
const TEXT_ROWS: u16 = 3;

/// Rows of a card whose media line fits on one row, borders included.
const MIN_CARD_HEIGHT: u16 = TEXT_ROWS + 3;

pub const NO_CROP: &str = "No crop available";

/// Number of card columns that fit `width` without going below `min_width`.
pub fn columns_for(width: u16, min_width: u16) -> u16 {
    (width / min_width.max(1)).max(1)
}

/// Rows a card needs at `width` so its whole media URL is visible.
///
/// The URL sits on its own rows and is broken at the card edge, never at
/// word boundaries, so every character of `/media/{id}` stays on screen.
fn card_height(card: &EventCard, width: u16) -> u16 {
    let media_rows = card
        .crop_url
        .as_deref()
        .map_or(1, |url| media_lines(url, card_inner_width(width)).len());
    let media_rows = u16::try_from(media_rows).unwrap_or(u16::MAX).max(1);
    TEXT_ROWS.saturating_add(media_rows).saturating_add(2)
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    feed: &LiveFeed,
    card_min_width: u16,
    theme: &RatatuiTheme,
) {
    let outer = Block::default().borders(Borders::ALL);
    let inner = outer.inner(area);

    let cards: Vec<&EventCard> = feed.cards().collect();
    let placed = place_cards(&cards, inner, card_min_width);

    let title = if placed.len() < cards.len() {
        format!(" Live Events ({} of {}) ", placed.len(), cards.len())
    } else {
        " Live Events ".to_string()
    };
    frame.render_widget(outer.title(title), area);

    if !feed.has_loaded() {
        let waiting = Paragraph::new(Span::styled("Waiting for the first refresh...", theme.muted()));
        frame.render_widget(waiting, inner);
        return;
    }

    if feed.is_empty() {
        let empty = Paragraph::new(Span::styled("No recent detections.", theme.muted()));
        frame.render_widget(empty, inner);
        return;
    }

    for (card, cell) in placed {
        render_card(frame, cell, card, theme);
    }
}

/// Lay cards out row by row; a row is as tall as its tallest card and rows
/// that do not fit completely are left out.
fn place_cards<'a>(
    cards: &[&'a EventCard],
    inner: Rect,
    card_min_width: u16,
) -> Vec<(&'a EventCard, Rect)> {
    let columns = columns_for(inner.width, card_min_width);
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, u32::from(columns));
            usize::from(columns)
        ])
        .split(Rect { height: 1, ..inner });

    let mut placed = Vec::new();
    let mut y = inner.y;
    for row in cards.chunks(usize::from(columns)) {
        let height = row
            .iter()
            .zip(cells.iter())
            .map(|(card, cell)| card_height(card, cell.width))
            .max()
            .unwrap_or(MIN_CARD_HEIGHT);
        if y.saturating_add(height) > inner.bottom() {
            break;
        }

        for (card, cell) in row.iter().zip(cells.iter()) {
            placed.push((*card, Rect { y, height, ..*cell }));
        }
        y += height;
    }
    placed
}

fn card_inner_width(width: u16) -> usize {
    usize::from(width.saturating_sub(2).max(1))
}

fn media_lines(url: &str, width: usize) -> Vec<String> {
    url.chars()
        .collect::<Vec<_>>()
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

fn render_card(frame: &mut Frame, area: Rect, card: &EventCard, theme: &RatatuiTheme) {
    let mut camera = vec![
        Span::styled("Camera: ", theme.muted()),
        Span::raw(card.camera.as_str()),
    ];
    if let Some(score) = card.score {
        camera.push(Span::styled(format!("  score {score:.2}"), theme.muted()));
    }

    let mut lines = vec![
        Line::from(Span::styled(card.headline(), theme.event_kind(card.kind))),
        Line::from(camera),
        Line::from(Span::styled(card.occurred_at.as_str(), theme.muted())),
    ];

    match &card.crop_url {
        Some(url) => lines.extend(
            media_lines(url, card_inner_width(area.width))
                .into_iter()
                .map(|part| Line::from(Span::styled(part, theme.link()))),
        ),
        None => lines.push(Line::from(Span::styled(
            NO_CROP,
            theme.muted().add_modifier(Modifier::ITALIC),
        ))),
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
