//! Terminal dashboard for CamTelligence.
//!
//! `CliFrontend` implements [`client_frontend_core::Frontend`]. It renders the
//! live feed and the event browser with ratatui and reads the backend only
//! through the injected `EventSource`.

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
pub mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
