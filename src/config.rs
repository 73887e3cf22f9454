use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::progress::ProgressMode,
    decor::theme::Theme,
    foundation::{
        core::Surface,
        error::{ProtovizError, ProtovizResult},
    },
    sequencer::{BASE_INTERVAL_MS, Speed},
};

/// Runtime configuration. Every section and field is optional in JSON.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub render: RenderConfig,
    pub theme: Theme,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Time between steps at 1x speed.
    pub base_interval_ms: u64,
    pub default_speed: Speed,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            base_interval_ms: BASE_INTERVAL_MS,
            default_speed: Speed::NORMAL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: f64,
    pub height: f64,
    pub progress: ProgressMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            progress: ProgressMode::Snapshot,
        }
    }
}

impl RenderConfig {
    pub fn surface(&self) -> Surface {
        Surface::new(self.width, self.height)
    }
}

impl Config {
    pub fn from_json_str(s: &str) -> ProtovizResult<Self> {
        let cfg: Config = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: &Path) -> ProtovizResult<Self> {
        let f = File::open(path).map_err(|e| {
            ProtovizError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        let cfg: Config = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            ProtovizError::serde(format!("parse config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ProtovizResult<()> {
        if self.playback.base_interval_ms == 0 {
            return Err(ProtovizError::validation(
                "playback.base_interval_ms must be > 0",
            ));
        }
        if !self.render.surface().is_drawable() {
            return Err(ProtovizError::validation(format!(
                "render size {}x{} has no area",
                self.render.width, self.render.height
            )));
        }
        if let ProgressMode::Elapsed { duration_ms: 0, .. } = self.render.progress {
            return Err(ProtovizError::validation(
                "render.progress.duration_ms must be > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
