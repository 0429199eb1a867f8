//! Frontend configuration structures and loaders.
//!
//! This module contains UI-side configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub polling: PollingConfig,
    pub channels: ChannelConfig,
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LIVE_PERSONS_INTERVAL_MS` - Person feed refresh period (default: 4000)
    /// - `LIVE_VEHICLES_INTERVAL_MS` - Vehicle feed refresh period (default: 5000)
    /// - `LIVE_EVENT_LIMIT` - Events fetched per feed refresh (default: 8)
    /// - `HEALTH_INTERVAL_MS` - Backend health refresh period (default: 15000)
    /// - `UPDATE_CHANNEL_BUFFER` - Pending update queue size (default: 64)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ms) = read_var::<u64, _>(&lookup, "LIVE_PERSONS_INTERVAL_MS") {
            config.polling.persons_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = read_var::<u64, _>(&lookup, "LIVE_VEHICLES_INTERVAL_MS") {
            config.polling.vehicles_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(limit) = read_var::<u32, _>(&lookup, "LIVE_EVENT_LIMIT") {
            config.polling.live_limit = limit.max(1);
        }
        if let Some(ms) = read_var::<u64, _>(&lookup, "HEALTH_INTERVAL_MS") {
            config.polling.health_interval = Duration::from_millis(ms.max(1));
        }

        if let Some(capacity) = read_var::<usize, _>(&lookup, "UPDATE_CHANNEL_BUFFER") {
            config.channels.update_buffer = capacity.max(1);
        }

        config
    }
}

/// Refresh cadences for the polled views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollingConfig {
    pub persons_interval: Duration,
    pub vehicles_interval: Duration,
    pub live_limit: u32,
    pub health_interval: Duration,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            persons_interval: Duration::from_millis(4000),
            vehicles_interval: Duration::from_millis(5000),
            live_limit: 8,
            health_interval: Duration::from_millis(15000),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub update_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self { update_buffer: 64 }
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}
