//! Widgets composing the dashboard screen.
pub mod event_browser;
pub mod footer;
pub mod header;
pub mod live_feed;
