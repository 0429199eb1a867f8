//! Terminal-local state that is not part of the shared view model.
use chrono::{DateTime, Local};
use client_frontend_core::DashboardUpdate;

/// Most recent background failure, shown in the footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureNotice {
    pub source: &'static str,
    pub message: String,
    pub at: DateTime<Local>,
}

impl FailureNotice {
    pub fn text(&self) -> String {
        format!(
            "{} refresh failed at {}: {}",
            self.source,
            self.at.format("%H:%M:%S"),
            self.message
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub failure: Option<FailureNotice>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the outcome of a background request. Returns `true` if the
    /// footer changed.
    ///
    /// A failure is remembered until the same kind of request succeeds.
    pub fn observe(&mut self, update: &DashboardUpdate) -> bool {
        let source = update.label();

        if let Some(err) = update.error() {
            self.failure = Some(FailureNotice {
                source,
                message: err.to_string(),
                at: Local::now(),
            });
            return true;
        }

        match &self.failure {
            Some(notice) if notice.source == source => {
                self.failure = None;
                true
            }
            _ => false,
        }
    }
}
