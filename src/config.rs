//! Host configuration from environment variables.
//!
//! - `TOUR_BLOCKS_DROP_MS`: drop interval in milliseconds (default 1000)
//! - `TOUR_BLOCKS_SEED`: replay a fixed piece sequence (default: random)
//! - `TOUR_BLOCKS_LOG_PATH`: write logs to this file (default: logging off)
//! - `TOUR_BLOCKS_LOG`: log filter, env_logger syntax (default "info")

use crate::core::EngineConfig;
use crate::types::DROP_INTERVAL_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    pub engine: EngineConfig,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl TourConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let drop_interval_ms = lookup("TOUR_BLOCKS_DROP_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(DROP_INTERVAL_MS);

        let seed = lookup("TOUR_BLOCKS_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TOUR_BLOCKS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let log_filter = lookup("TOUR_BLOCKS_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self {
            engine: EngineConfig {
                drop_interval_ms,
                seed,
            },
            log_path,
            log_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> TourConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TourConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config(&[]), TourConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let c = config(&[
            ("TOUR_BLOCKS_DROP_MS", "250"),
            ("TOUR_BLOCKS_SEED", "99"),
            ("TOUR_BLOCKS_LOG_PATH", " /tmp/tour.log "),
            ("TOUR_BLOCKS_LOG", "debug"),
        ]);
        assert_eq!(c.engine.drop_interval_ms, 250);
        assert_eq!(c.engine.seed, Some(99));
        assert_eq!(c.log_path.as_deref(), Some("/tmp/tour.log"));
        assert_eq!(c.log_filter, "debug");
    }

    #[test]
    fn bad_values_fall_back() {
        let c = config(&[
            ("TOUR_BLOCKS_DROP_MS", "0"),
            ("TOUR_BLOCKS_SEED", "abc"),
            ("TOUR_BLOCKS_LOG_PATH", "  "),
        ]);
        assert_eq!(c.engine.drop_interval_ms, DROP_INTERVAL_MS);
        assert_eq!(c.engine.seed, None);
        assert_eq!(c.log_path, None);
    }
}
