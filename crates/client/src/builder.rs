//! Client builder with dependency injection pattern.

use std::sync::Arc;

use anyhow::{Context, Result};
use camtel_api::EventSource;

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// Both the event source and the frontend are required; `build()` fails
/// fast when either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    source: Option<Arc<dyn EventSource>>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event source (required).
    ///
    /// Usually an `EventClient` pointed at the configured backend.
    pub fn source(mut self, source: impl EventSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the source or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let source = self
            .source
            .context("Event source is required. Use .source() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { source, frontend })
    }
}
