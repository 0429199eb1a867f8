//! Live feed of the most recent detections.
use camtel_api::{EventKind, MediaAsset, PersonEvent, VehicleEvent};
use chrono::{DateTime, Local};

use crate::format::local_timestamp;

/// Presentation-ready snapshot of one detection.
#[derive(Clone, Debug, PartialEq)]
pub struct EventCard {
    pub id: String,
    pub kind: EventKind,
    pub camera: String,
    /// Occurrence time in the local zone.
    pub occurred_at: String,
    /// URL of the crop image. `None` means a placeholder is shown instead.
    pub crop_url: Option<String>,
    /// Vehicle class; always `None` for persons.
    pub label: Option<String>,
    pub score: Option<f64>,
}

impl EventCard {
    pub fn from_person<R>(event: &PersonEvent, resolve: R) -> Self
    where
        R: Fn(Option<&MediaAsset>) -> Option<String>,
    {
        Self {
            id: event.id.clone(),
            kind: EventKind::Person,
            camera: event.camera.clone(),
            occurred_at: local_timestamp(&event.occurred_at),
            crop_url: resolve(event.crop_asset.as_ref()),
            label: None,
            score: event.score,
        }
    }

    pub fn from_vehicle<R>(event: &VehicleEvent, resolve: R) -> Self
    where
        R: Fn(Option<&MediaAsset>) -> Option<String>,
    {
        Self {
            id: event.id.clone(),
            kind: EventKind::Vehicle,
            camera: event.camera.clone(),
            occurred_at: local_timestamp(&event.occurred_at),
            crop_url: resolve(event.crop_asset.as_ref()),
            label: Some(event.label.clone()).filter(|label| !label.is_empty()),
            score: event.score,
        }
    }

    /// "Person detected" / "Vehicle detected", plus the class when known.
    pub fn headline(&self) -> String {
        match &self.label {
            Some(label) => format!("{} detected ({})", self.kind.title(), label),
            None => format!("{} detected", self.kind.title()),
        }
    }
}

/// Latest poll results for both feeds.
///
/// Each successful poll replaces its feed wholesale; a failed poll leaves the
/// previous cards in place.
#[derive(Clone, Debug, Default)]
pub struct LiveFeed {
    pub persons: Vec<EventCard>,
    pub vehicles: Vec<EventCard>,
    pub persons_refreshed_at: Option<DateTime<Local>>,
    pub vehicles_refreshed_at: Option<DateTime<Local>>,
}

impl LiveFeed {
    pub fn replace_persons(&mut self, cards: Vec<EventCard>) {
        self.persons = cards;
        self.persons_refreshed_at = Some(Local::now());
    }

    pub fn replace_vehicles(&mut self, cards: Vec<EventCard>) {
        self.vehicles = cards;
        self.vehicles_refreshed_at = Some(Local::now());
    }

    /// Persons first, then vehicles, each in server order.
    pub fn cards(&self) -> impl Iterator<Item = &EventCard> {
        self.persons.iter().chain(self.vehicles.iter())
    }

    pub fn len(&self) -> usize {
        self.persons.len() + self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether at least one poll has completed.
    pub fn has_loaded(&self) -> bool {
        self.persons_refreshed_at.is_some() || self.vehicles_refreshed_at.is_some()
    }
}
