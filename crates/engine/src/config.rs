//! Runtime configuration from environment variables.
//!
//! Board geometry is fixed at compile time; only timing, seeding and logging
//! can be tuned per run.

use std::time::Duration;

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Keep-alive period: one synthetic soft drop per idle period
    pub tick: Duration,
    /// Fixed RNG seed, or `None` to seed from the clock
    pub seed: Option<u32>,
    /// Log file; logging is disabled without one
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS),
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from `BLOCKFALL_TICK_MS`, `BLOCKFALL_SEED` and `BLOCKFALL_LOG_PATH`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = lookup("BLOCKFALL_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(TICK_MS);

        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            tick: Duration::from_millis(tick_ms),
            seed,
            log_path,
        }
    }
}
