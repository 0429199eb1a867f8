//! Scripted [`EventSource`] for unit tests.
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use camtel_api::{
    BackendHealth, BackendMetrics, ClientError, EventFilter, EventSource, FilteredEvents,
    MediaAsset, PersonEvent, Result, StatusCode, VehicleEvent, media_url,
};

type DelayFn = Box<dyn Fn(usize) -> Duration + Send + Sync>;

/// Answers every call from memory. Person ids encode the call number
/// (`p-0`, `p-1`, ...) so tests can tell responses apart.
pub(crate) struct ScriptedSource {
    base_url: String,
    person_calls: AtomicUsize,
    vehicle_calls: AtomicUsize,
    filter_calls: AtomicUsize,
    person_delay: DelayFn,
    failing_vehicle_calls: HashSet<usize>,
}

impl ScriptedSource {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            person_calls: AtomicUsize::new(0),
            vehicle_calls: AtomicUsize::new(0),
            filter_calls: AtomicUsize::new(0),
            person_delay: Box::new(|_| Duration::ZERO),
            failing_vehicle_calls: HashSet::new(),
        }
    }

    pub(crate) fn with_person_delay<F>(mut self, delay: F) -> Self
    where
        F: Fn(usize) -> Duration + Send + Sync + 'static,
    {
        self.person_delay = Box::new(delay);
        self
    }

    pub(crate) fn failing_vehicles(mut self, calls: &[usize]) -> Self {
        self.failing_vehicle_calls = calls.iter().copied().collect();
        self
    }

    pub(crate) fn person_calls(&self) -> usize {
        self.person_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn filter_calls(&self) -> usize {
        self.filter_calls.load(Ordering::SeqCst)
    }
}

fn event_person(id: String) -> PersonEvent {
    PersonEvent {
        id,
        camera: "porch".to_string(),
        occurred_at: "2024-05-01T08:00:00Z".to_string(),
        frame_asset: None,
        crop_asset: None,
        score: None,
        created_at: "2024-05-01T08:00:00Z".to_string(),
    }
}

#[async_trait]
impl EventSource for ScriptedSource {
    async fn recent_persons(&self, _limit: u32) -> Result<Vec<PersonEvent>> {
        let call = self.person_calls.fetch_add(1, Ordering::SeqCst);
        let delay = (self.person_delay)(call);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(vec![event_person(format!("p-{call}"))])
    }

    async fn recent_vehicles(&self, _limit: u32) -> Result<Vec<VehicleEvent>> {
        let call = self.vehicle_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_vehicle_calls.contains(&call) {
            return Err(ClientError::Http {
                url: format!("{}/vehicles/recent", self.base_url),
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: "scripted failure".to_string(),
            });
        }
        Ok(Vec::new())
    }

    async fn filter_events(&self, _filter: &EventFilter) -> Result<FilteredEvents> {
        self.filter_calls.fetch_add(1, Ordering::SeqCst);
        Ok(FilteredEvents::default())
    }

    async fn health(&self) -> Result<BackendHealth> {
        Ok(BackendHealth {
            status: "ok".to_string(),
        })
    }

    async fn metrics(&self) -> Result<BackendMetrics> {
        Ok(BackendMetrics::default())
    }

    fn media_url(&self, asset: Option<&MediaAsset>) -> Option<String> {
        media_url(&self.base_url, asset)
    }
}
