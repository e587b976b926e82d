use chrono::NaiveTime;
use serde::Deserialize;
use std::env;
use tripline_domain::SearchLimits;

/// Planner tunables. Every field has a default, so `load` succeeds in a
/// bare environment; files and environment variables only override.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub search: SearchLimits,
    pub defaults: TripDefaults,
}

/// Prefill values used when a page builds a booking draft without an
/// explicit search.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TripDefaults {
    /// Round-trip return date offset from departure, in days.
    pub return_offset_days: u32,
    /// Hotel check-out offset from check-in, in days.
    pub checkout_offset_days: u32,
    /// Cab pickup time when none was chosen.
    pub pickup_time: NaiveTime,
}

impl Default for TripDefaults {
    fn default() -> Self {
        Self {
            return_offset_days: 7,
            checkout_offset_days: 3,
            pickup_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Optional file layers; the planner has no required external state
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `TRIPLINE_DEFAULTS__RETURN_OFFSET_DAYS=10`
            .add_source(config::Environment::with_prefix("TRIPLINE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.defaults.return_offset_days, 7);
        assert_eq!(config.defaults.checkout_offset_days, 3);
        assert_eq!(
            config.defaults.pickup_time,
            NaiveTime::from_hms_opt(12, 0, 0).unwrap()
        );
        assert_eq!(config.search.max_flight_adults, 9);
    }

    #[test]
    fn test_deserializes_with_partial_overrides() {
        let config: Config = serde_json::from_str(
            r#"{ "defaults": { "checkout_offset_days": 5 } }"#,
        )
        .unwrap();
        assert_eq!(config.defaults.checkout_offset_days, 5);
        // Untouched fields keep their defaults.
        assert_eq!(config.defaults.return_offset_days, 7);
        assert_eq!(config.search.max_hotel_adults, 10);
    }
}
