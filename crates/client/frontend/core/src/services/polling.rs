//! Background refresh loops and one-shot queries.
//!
//! Every loop ticks on its own fixed interval. Each tick spawns its request
//! as a separate task, so a slow response never delays the next tick and a
//! later response may land before an earlier one. Nothing is cancelled when
//! superseded. Results are posted to the UI over an `mpsc` channel.
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use camtel_api::{EventFilter, EventSource};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::config::PollingConfig;
use crate::event::DashboardUpdate;

/// Spawns refresh loops against a shared event source.
#[derive(Clone)]
pub struct Poller {
    source: Arc<dyn EventSource>,
    tx: mpsc::Sender<DashboardUpdate>,
}

impl Poller {
    pub fn new(source: Arc<dyn EventSource>, tx: mpsc::Sender<DashboardUpdate>) -> Self {
        Self { source, tx }
    }

    /// Start the person and vehicle feeds used by the live page.
    pub fn start_live(&self, config: &PollingConfig) -> PollHandle {
        let limit = config.live_limit;
        tracing::info!(
            "Starting live feeds (persons every {:?}, vehicles every {:?}, limit {})",
            config.persons_interval,
            config.vehicles_interval,
            limit
        );

        let persons = {
            let source = Arc::clone(&self.source);
            spawn_loop(config.persons_interval, self.tx.clone(), move || {
                let source = Arc::clone(&source);
                async move { DashboardUpdate::Persons(source.recent_persons(limit).await) }
            })
        };

        let vehicles = {
            let source = Arc::clone(&self.source);
            spawn_loop(config.vehicles_interval, self.tx.clone(), move || {
                let source = Arc::clone(&source);
                async move { DashboardUpdate::Vehicles(source.recent_vehicles(limit).await) }
            })
        };

        PollHandle::new("live", vec![persons, vehicles])
    }

    /// Start the slow health/metrics refresh shown in the header.
    pub fn start_backend(&self, config: &PollingConfig) -> PollHandle {
        let health = {
            let source = Arc::clone(&self.source);
            spawn_loop(config.health_interval, self.tx.clone(), move || {
                let source = Arc::clone(&source);
                async move { DashboardUpdate::Health(source.health().await) }
            })
        };

        let metrics = {
            let source = Arc::clone(&self.source);
            spawn_loop(config.health_interval, self.tx.clone(), move || {
                let source = Arc::clone(&source);
                async move { DashboardUpdate::Metrics(source.metrics().await) }
            })
        };

        PollHandle::new("backend", vec![health, metrics])
    }

    /// Run one filter query in the background.
    ///
    /// Calls are independent: repeated calls produce overlapping requests and
    /// whichever finishes last is what the browser ends up showing. The
    /// result is tagged with `generation` so a reopened browser can ignore it.
    pub fn run_filter(&self, filter: EventFilter, generation: u64) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.filter_events(&filter).await;
            let update = DashboardUpdate::Filtered { generation, result };
            deliver(&tx, update).await;
        });
    }
}

/// Owns running loops; dropping it stops them.
///
/// Requests already in flight still complete and deliver their result.
#[must_use = "dropping a PollHandle stops its loops"]
pub struct PollHandle {
    name: &'static str,
    tasks: Vec<JoinHandle<()>>,
}

impl PollHandle {
    fn new(name: &'static str, tasks: Vec<JoinHandle<()>>) -> Self {
        Self { name, tasks }
    }

    pub fn stop(self) {
        drop(self);
    }

    pub fn is_running(&self) -> bool {
        self.tasks.iter().any(|task| !task.is_finished())
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        tracing::debug!("Stopping {} polling", self.name);
        for task in &self.tasks {
            task.abort();
        }
    }
}

fn spawn_loop<F, Fut>(period: Duration, tx: mpsc::Sender<DashboardUpdate>, fetch: F) -> JoinHandle<()>
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = DashboardUpdate> + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if tx.is_closed() {
                break;
            }

            let request = fetch();
            let tx = tx.clone();
            tokio::spawn(async move {
                deliver(&tx, request.await).await;
            });
        }
    })
}

async fn deliver(tx: &mpsc::Sender<DashboardUpdate>, update: DashboardUpdate) {
    if let Some(err) = update.error() {
        tracing::warn!("{} request failed: {}", update.label(), err);
    }

    if tx.send(update).await.is_err() {
        tracing::debug!("UI gone, dropping update");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::ScriptedSource;
    use tokio::time::Instant;

    fn channel() -> (
        mpsc::Sender<DashboardUpdate>,
        mpsc::Receiver<DashboardUpdate>,
    ) {
        mpsc::channel(32)
    }

    #[tokio::test(start_paused = true)]
    async fn failed_vehicle_poll_does_not_stop_the_loop() {
        let source = Arc::new(ScriptedSource::new("http://backend").failing_vehicles(&[0]));
        let (tx, mut rx) = channel();
        let poller = Poller::new(source, tx);
        let _handle = poller.start_live(&PollingConfig::default());
        let started = Instant::now();

        let mut vehicle_updates = Vec::new();
        while vehicle_updates.len() < 2 {
            let update = rx.recv().await.expect("poller should stay alive");
            if let DashboardUpdate::Vehicles(result) = update {
                vehicle_updates.push((result.is_ok(), started.elapsed()));
            }
        }

        assert!(!vehicle_updates[0].0, "first tick is scripted to fail");
        assert!(vehicle_updates[1].0, "next tick still fires and succeeds");
        assert!(vehicle_updates[1].1 >= Duration::from_millis(5000));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_response_is_overtaken_by_later_tick() {
        let source = Arc::new(ScriptedSource::new("http://backend").with_person_delay(|call| {
            if call == 0 {
                Duration::from_secs(10)
            } else {
                Duration::ZERO
            }
        }));
        let (tx, mut rx) = channel();
        let poller = Poller::new(source, tx);
        let _handle = poller.start_live(&PollingConfig::default());

        let mut order = Vec::new();
        while order.len() < 3 {
            if let DashboardUpdate::Persons(Ok(events)) = rx.recv().await.unwrap() {
                order.push(events[0].id.clone());
            }
        }

        // Ticks at 0s, 4s and 8s; the 0s request takes 10s to answer.
        assert_eq!(order, ["p-1", "p-2", "p-0"]);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_stops_ticking() {
        let source = Arc::new(ScriptedSource::new("http://backend"));
        let (tx, mut rx) = channel();
        let poller = Poller::new(source.clone(), tx);
        let handle = poller.start_live(&PollingConfig::default());

        rx.recv().await.expect("first tick");
        assert!(handle.is_running());
        handle.stop();
        drop(poller);

        let mut late = 0;
        while rx.recv().await.is_some() {
            late += 1;
        }

        assert!(late <= 1, "only the other first-tick request may land");
        assert_eq!(source.person_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_filters_are_not_deduplicated() {
        let source = Arc::new(ScriptedSource::new("http://backend"));
        let (tx, mut rx) = channel();
        let poller = Poller::new(source.clone(), tx);

        poller.run_filter(EventFilter::new().camera("porch"), 3);
        poller.run_filter(EventFilter::new().camera("porch"), 3);

        for _ in 0..2 {
            let update = rx.recv().await.unwrap();
            assert!(matches!(
                update,
                DashboardUpdate::Filtered {
                    generation: 3,
                    result: Ok(_)
                }
            ));
        }
        assert_eq!(source.filter_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn backend_poll_reports_health_and_metrics() {
        let source = Arc::new(ScriptedSource::new("http://backend"));
        let (tx, mut rx) = channel();
        let poller = Poller::new(source, tx);
        let _handle = poller.start_backend(&PollingConfig::default());

        let mut labels = vec![rx.recv().await.unwrap().label(), rx.recv().await.unwrap().label()];
        labels.sort_unstable();
        assert_eq!(labels, ["health", "metrics"]);
    }
}
