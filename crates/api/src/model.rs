//! Wire types returned by the detection backend.
//!
//! All event types are read-only projections of server state. Timestamps are
//! kept exactly as the server sent them and only parsed for display.
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Stored image (full frame or crop) referenced by an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub id: String,
    pub media_type: String,
    /// Server-relative storage path. Not used to build URLs.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, serde_json::Value>>,
    pub created_at: String,
}

/// A person detected on a camera.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonEvent {
    pub id: String,
    pub camera: String,
    pub occurred_at: String,
    #[serde(default)]
    pub frame_asset: Option<MediaAsset>,
    #[serde(default)]
    pub crop_asset: Option<MediaAsset>,
    #[serde(default)]
    pub score: Option<f64>,
    pub created_at: String,
}

/// A vehicle detected on a camera, tagged with its class label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleEvent {
    pub id: String,
    pub camera: String,
    pub occurred_at: String,
    #[serde(default)]
    pub frame_asset: Option<MediaAsset>,
    #[serde(default)]
    pub crop_asset: Option<MediaAsset>,
    #[serde(default)]
    pub score: Option<f64>,
    pub label: String,
    pub created_at: String,
}

/// Detection kind accepted by the filter endpoint.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    Person,
    Vehicle,
}

impl EventKind {
    /// Human-facing name used in badges and result pills.
    pub fn title(self) -> &'static str {
        match self {
            EventKind::Person => "Person",
            EventKind::Vehicle => "Vehicle",
        }
    }
}

/// Body of `POST /events/filter`.
///
/// Every field is optional; absent fields are omitted from the JSON body
/// rather than sent as `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EventFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    /// `None` selects both kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn camera(mut self, camera: impl Into<String>) -> Self {
        self.camera = Some(camera.into());
        self
    }

    pub fn event_type(mut self, kind: EventKind) -> Self {
        self.event_type = Some(kind);
        self
    }

    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Response of `POST /events/filter`. Both sequences are always present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredEvents {
    #[serde(default)]
    pub person_events: Vec<PersonEvent>,
    #[serde(default)]
    pub vehicle_events: Vec<VehicleEvent>,
}

impl FilteredEvents {
    pub fn len(&self) -> usize {
        self.person_events.len() + self.vehicle_events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Response of `GET /admin/health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendHealth {
    pub status: String,
}

impl BackendHealth {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Response of `GET /admin/metrics`: row counts per table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendMetrics {
    pub persons: u64,
    pub vehicles: u64,
    pub notifications: u64,
}
