//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_CARD_MIN_WIDTH` - Minimum live card width in columns (default: 44)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(width) = read_var::<u16, _>(&lookup, "CLI_CARD_MIN_WIDTH") {
            config.ui.card_min_width = width.max(MIN_CARD_WIDTH);
        }

        config
    }
}

const MIN_CARD_WIDTH: u16 = 20;

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Narrowest a live event card may get before the grid drops a column.
    pub card_min_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { card_min_width: 44 }
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}
