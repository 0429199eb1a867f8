//! Client for the CamTelligence detection backend.
//!
//! Fetches recent person/vehicle detections, runs filtered queries over
//! historical events and resolves media assets into URLs. The crate performs
//! no caching and no retries; every call maps to exactly one HTTP request.
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod source;

pub use client::{DEFAULT_RECENT_LIMIT, EventClient, media_url};
pub use config::ApiConfig;
pub use error::{ClientError, Result};
pub use model::{
    BackendHealth, BackendMetrics, EventFilter, EventKind, FilteredEvents, MediaAsset,
    PersonEvent, VehicleEvent,
};
pub use source::EventSource;

// Status codes appear in `ClientError::Http`.
pub use reqwest::StatusCode;
