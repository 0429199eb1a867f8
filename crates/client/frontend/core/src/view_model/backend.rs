//! Backend reachability shown in the header.
use camtel_api::{BackendHealth, BackendMetrics};
use chrono::{DateTime, Local};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackendStatus {
    /// `None` until the first health check answers.
    pub reachable: Option<bool>,
    pub metrics: Option<BackendMetrics>,
    pub checked_at: Option<DateTime<Local>>,
}

impl BackendStatus {
    /// Record a health check. Returns `true` if reachability changed.
    pub fn record_health(&mut self, health: Option<&BackendHealth>) -> bool {
        let reachable = health.is_some_and(BackendHealth::is_ok);
        self.checked_at = Some(Local::now());
        let changed = self.reachable != Some(reachable);
        self.reachable = Some(reachable);
        changed
    }

    /// Record fresh table counts. Returns `true` if they changed.
    pub fn record_metrics(&mut self, metrics: BackendMetrics) -> bool {
        let changed = self.metrics != Some(metrics);
        self.metrics = Some(metrics);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_check_marks_backend_unreachable() {
        let mut status = BackendStatus::default();
        assert!(status.record_health(None));
        assert_eq!(status.reachable, Some(false));
        assert!(!status.record_health(None));
    }

    #[test]
    fn non_ok_status_is_unreachable() {
        let mut status = BackendStatus::default();
        status.record_health(Some(&BackendHealth {
            status: "degraded".to_string(),
        }));
        assert_eq!(status.reachable, Some(false));
    }

    #[test]
    fn metrics_change_detection() {
        let mut status = BackendStatus::default();
        let metrics = BackendMetrics {
            persons: 3,
            vehicles: 1,
            notifications: 0,
        };
        assert!(status.record_metrics(metrics));
        assert!(!status.record_metrics(metrics));
    }
}
