use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

/// Process configuration. Everything has a default; the only required
/// environment variable is the API key, which the provider reads itself.
#[derive(Debug, Clone)]
pub struct Config {
    /// Quiet period after a cart change before the assistant re-queries.
    pub debounce_ms: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            debounce_ms: try_load("SMARTCAFE_DEBOUNCE_MS", "1500"),
        }
    }

    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { debounce_ms: 1500 }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| ())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
