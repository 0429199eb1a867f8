//! Trait describing a runnable client front-end.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use camtel_api::EventSource;

/// Frontend abstraction for UI layers.
///
/// Frontends read events through the shared [`EventSource`] only; they never
/// construct their own backend client.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error (terminal
    /// setup, rendering). Backend failures are never fatal.
    async fn run(&mut self, source: Arc<dyn EventSource>) -> Result<()>;
}
