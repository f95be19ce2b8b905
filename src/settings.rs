//! Simulation settings
//!
//! Defaults mirror `consts`. On the web they can be overridden with a
//! `?settings=<url-encoded JSON>` query parameter; natively with a JSON file
//! named by the `DEMON_CIRCLE_SETTINGS` environment variable.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Balls spawned at startup
    pub ball_count: usize,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub demon_radius: f32,
    pub demon_speed: f32,
    /// Fixed RNG seed; None picks one from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_count: BALL_COUNT,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            demon_radius: DEMON_RADIUS,
            demon_speed: DEMON_SPEED,
            seed: None,
        }
    }
}

impl Settings {
    /// Environment variable holding a settings file path (native only)
    pub const PATH_ENV: &'static str = "DEMON_CIRCLE_SETTINGS";

    /// Parse settings; omitted fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    fn parse_or_default(json: &str, source: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", source);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings from {}: {}", source, e);
                Self::default()
            }
        }
    }

    /// Load settings from the page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();

        let raw = search
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.strip_prefix("settings="));

        if let Some(raw) = raw {
            match js_sys::decode_uri_component(raw) {
                Ok(json) => return Self::parse_or_default(&String::from(json), "URL"),
                Err(e) => log::warn!("Bad settings parameter: {:?}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `DEMON_CIRCLE_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::PATH_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => Self::parse_or_default(&json, &path),
            Err(e) => {
                log::warn!("Cannot read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
