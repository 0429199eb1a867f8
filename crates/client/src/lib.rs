//! Top-level client wiring the event source to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ EventSource (Backend access, shared by every view)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The frontend never builds its own backend client; it receives the
//! source through [`Frontend::run`].

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use std::sync::Arc;

use anyhow::Result;
use camtel_api::EventSource;

/// Top-level client container.
pub struct Client {
    source: Arc<dyn EventSource>,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Hand control to the frontend until the user quits.
    pub async fn run(self) -> Result<()> {
        let Client {
            source,
            mut frontend,
        } = self;

        frontend.run(source).await
    }
}
