//! Results delivered to the UI by background requests.
use camtel_api::{
    BackendHealth, BackendMetrics, ClientError, FilteredEvents, PersonEvent, VehicleEvent,
};

/// Outcome of one background request, posted to the UI event loop.
///
/// Failures travel alongside successes so the view can decide what to keep;
/// a failed update never stops the loop that produced it.
#[derive(Debug)]
pub enum DashboardUpdate {
    Persons(Result<Vec<PersonEvent>, ClientError>),
    Vehicles(Result<Vec<VehicleEvent>, ClientError>),
    /// A browser query, tagged with the browser generation it was sent from.
    Filtered {
        generation: u64,
        result: Result<FilteredEvents, ClientError>,
    },
    Health(Result<BackendHealth, ClientError>),
    Metrics(Result<BackendMetrics, ClientError>),
}

impl DashboardUpdate {
    /// Short name used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            DashboardUpdate::Persons(_) => "persons",
            DashboardUpdate::Vehicles(_) => "vehicles",
            DashboardUpdate::Filtered { .. } => "filter",
            DashboardUpdate::Health(_) => "health",
            DashboardUpdate::Metrics(_) => "metrics",
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            DashboardUpdate::Persons(Err(e))
            | DashboardUpdate::Vehicles(Err(e))
            | DashboardUpdate::Filtered { result: Err(e), .. }
            | DashboardUpdate::Health(Err(e))
            | DashboardUpdate::Metrics(Err(e)) => Some(e),
            _ => None,
        }
    }
}

/// Whether applying an update changed anything on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}
