//! Process settings read from the environment.
//!
//! | Variable               | Meaning                                  | Default          |
//! |------------------------|------------------------------------------|------------------|
//! | `RAPIDAPI_KEY`         | RapidAPI key for NAVITIME                | none             |
//! | `NAVITIME_MOCK_DIR`    | Serve fixture data instead of NAVITIME   | none             |
//! | `STOPOVER_LISTEN_ADDR` | HTTP listen address                      | `127.0.0.1:3000` |
//! | `MAX_TRAVEL_TIME`      | Daily travel limit in minutes            | 360              |
//! | `LATEST_STOP_TIME`     | Latest arrival hour (0-23)               | 19               |
//! | `MAX_TRIP_DAYS`        | Upper bound on days in one plan          | 30               |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::planner::{ConfigError, PlanConfig};

/// Default HTTP listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Settings shared by the server and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// RapidAPI key. Unused when `mock_dir` is set.
    pub api_key: Option<String>,

    /// Directory of fixture data for the mock provider.
    pub mock_dir: Option<PathBuf>,

    pub listen_addr: SocketAddr,

    pub plan: PlanConfig,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its
    /// value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let defaults = PlanConfig::default();
        let plan = PlanConfig {
            max_travel_time_mins: parse_or(&get, "MAX_TRAVEL_TIME", defaults.max_travel_time_mins)?,
            latest_stop_hour: parse_or(&get, "LATEST_STOP_TIME", defaults.latest_stop_hour)?,
            max_days: parse_or(&get, "MAX_TRIP_DAYS", defaults.max_days)?,
        };
        plan.validate()?;

        let listen_addr = match get("STOPOVER_LISTEN_ADDR") {
            Some(addr) => parse_value("STOPOVER_LISTEN_ADDR", &addr)?,
            None => parse_value("STOPOVER_LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?,
        };

        Ok(Self {
            api_key: get("RAPIDAPI_KEY"),
            mock_dir: get("NAVITIME_MOCK_DIR").map(PathBuf::from),
            listen_addr,
            plan,
        })
    }
}

fn parse_or<T, F>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => parse_value(key, &value),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]).unwrap();

        assert_eq!(s.api_key, None);
        assert_eq!(s.mock_dir, None);
        assert_eq!(s.listen_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(s.plan, PlanConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let s = settings(&[
            ("RAPIDAPI_KEY", "secret"),
            ("NAVITIME_MOCK_DIR", "data/mock"),
            ("STOPOVER_LISTEN_ADDR", "0.0.0.0:8080"),
            ("MAX_TRAVEL_TIME", "240"),
            ("LATEST_STOP_TIME", " 18 "),
            ("MAX_TRIP_DAYS", "7"),
        ])
        .unwrap();

        assert_eq!(s.api_key.as_deref(), Some("secret"));
        assert_eq!(s.mock_dir, Some(PathBuf::from("data/mock")));
        assert_eq!(s.listen_addr.port(), 8080);
        assert_eq!(s.plan, PlanConfig::new(240, 18).with_max_days(7));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let s = settings(&[("RAPIDAPI_KEY", ""), ("MAX_TRAVEL_TIME", "  ")]).unwrap();

        assert_eq!(s.api_key, None);
        assert_eq!(s.plan.max_travel_time_mins, 360);
    }

    #[test]
    fn rejects_unparseable_values() {
        assert_eq!(
            settings(&[("MAX_TRAVEL_TIME", "six hours")]),
            Err(ConfigError::InvalidValue {
                key: "MAX_TRAVEL_TIME",
                value: "six hours".to_string()
            })
        );
        assert!(matches!(
            settings(&[("STOPOVER_LISTEN_ADDR", "localhost")]),
            Err(ConfigError::InvalidValue { key: "STOPOVER_LISTEN_ADDR", .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_plan() {
        assert_eq!(
            settings(&[("LATEST_STOP_TIME", "25")]),
            Err(ConfigError::LatestStopHour(25))
        );
    }
}
