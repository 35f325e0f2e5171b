//! Runtime configuration parsed from environment variables.
//!
//! Every knob has a typed default; a missing or unparseable variable falls
//! back to that default instead of failing startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::autoscroll::AutoScrollConfig;
use crate::consts::{
    DEFAULT_API_CONNECT_TIMEOUT_SECS, DEFAULT_API_TIMEOUT_SECS, DEFAULT_API_URL, EDGE_MARGIN_PX, SCROLL_STEP_PX,
    SCROLL_TICK_MS,
};
use crate::store::http::ApiTimeouts;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the board REST store, without a trailing slash.
    pub api_url: String,
    pub api_timeouts: ApiTimeouts,
    pub autoscroll: AutoScrollConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            api_timeouts: ApiTimeouts {
                request_secs: DEFAULT_API_TIMEOUT_SECS,
                connect_secs: DEFAULT_API_CONNECT_TIMEOUT_SECS,
            },
            autoscroll: AutoScrollConfig::default(),
        }
    }
}

impl Config {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `BOARD_API_URL`: default `http://localhost:4000`
    /// - `BOARD_API_TIMEOUT_SECS`: default 30
    /// - `BOARD_API_CONNECT_TIMEOUT_SECS`: default 10
    /// - `AUTOSCROLL_EDGE_MARGIN`: default 50
    /// - `AUTOSCROLL_STEP_PX`: default 10
    /// - `AUTOSCROLL_TICK_MS`: default 10, minimum 1
    #[must_use]
    pub fn from_env() -> Self {
        let api_url = std::env::var("BOARD_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let api_timeouts = ApiTimeouts {
            request_secs: env_parse("BOARD_API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS),
            connect_secs: env_parse("BOARD_API_CONNECT_TIMEOUT_SECS", DEFAULT_API_CONNECT_TIMEOUT_SECS),
        };
        let autoscroll = AutoScrollConfig {
            edge_margin: env_parse("AUTOSCROLL_EDGE_MARGIN", EDGE_MARGIN_PX),
            step_px: env_parse("AUTOSCROLL_STEP_PX", SCROLL_STEP_PX),
            tick: Duration::from_millis(env_parse("AUTOSCROLL_TICK_MS", SCROLL_TICK_MS).max(1)),
        };

        Self { api_url, api_timeouts, autoscroll }
    }
}

/// Parse `key` from the environment, falling back to `default`.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key).map_or(default, |v| v.trim().parse::<T>().unwrap_or(default))
}
