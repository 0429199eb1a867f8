//! Ratatui rendering of the dashboard.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
