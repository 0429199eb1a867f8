//! Abstraction over wherever events come from.
use async_trait::async_trait;

use crate::error::Result;
use crate::model::{
    BackendHealth, BackendMetrics, EventFilter, FilteredEvents, MediaAsset, PersonEvent,
    VehicleEvent,
};

/// Read-only access to detection events.
///
/// [`EventClient`](crate::EventClient) is the HTTP implementation. Views and
/// pollers only see this trait, so tests can drive them with a scripted
/// source.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn recent_persons(&self, limit: u32) -> Result<Vec<PersonEvent>>;

    async fn recent_vehicles(&self, limit: u32) -> Result<Vec<VehicleEvent>>;

    async fn filter_events(&self, filter: &EventFilter) -> Result<FilteredEvents>;

    async fn health(&self) -> Result<BackendHealth>;

    async fn metrics(&self) -> Result<BackendMetrics>;

    /// Resolve an asset into a fetchable URL. Pure; performs no I/O.
    fn media_url(&self, asset: Option<&MediaAsset>) -> Option<String>;
}
