//! Game tunables.
//!
//! Defaults reproduce the arcade feel at ~60 FPS on an 800x600 logical
//! playfield. Any subset of fields can be overridden from a JSON file named
//! by `BULLET_HELL_CONFIG`.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

pub const CONFIG_ENV: &str = "BULLET_HELL_CONFIG";
const SCORE_FILE: &str = "highscores.json";
const LOG_FILE: &str = "bullet_hell.log";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSize {
    pub w: f32,
    pub h: f32,
}

impl SpriteSize {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// Where the active config came from.
#[derive(Debug)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
    /// The named file could not be used; defaults are active.
    Fallback(StoreError),
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::Defaults => log::info!("Using default game config"),
            ConfigSource::File(path) => log::info!("Loaded game config from {}", path.display()),
            ConfigSource::Fallback(e) => log::warn!("Ignoring game config: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Playfield
    pub width: f32,
    pub height: f32,
    pub frame_ms: u64,

    // Spawning
    pub single_shot_ms: u64,
    pub burst_ms: u64,
    pub burst_count: usize,
    pub powerup_ms: u64,
    pub powerup_margin: f32,

    // Speeds, in logical pixels per frame
    pub ball_speed: f32,
    pub fireball_speed: f32,
    pub player_speed: f32,
    pub enemy_step: f32,
    pub powerup_fall_speed: f32,

    // Player
    pub max_health: u32,
    pub damage: u32,
    pub fire_cooldown_ms: u64,
    pub invincible_ms: u64,

    // Shields
    pub shield_cycle_ms: u64,
    pub shield_max_hits: u32,
    pub shield_size: SpriteSize,

    pub score_interval_ms: u64,

    // Sprite extents used for overlap testing
    pub player_size: SpriteSize,
    pub enemy_size: SpriteSize,
    pub ball_size: SpriteSize,
    pub powerup_size: SpriteSize,

    /// Score file location; defaults to `highscores.json` next to the executable.
    pub scores_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let fps = 60.0;
        let height = 600.0;
        Self {
            width: 800.0,
            height,
            frame_ms: 16,

            single_shot_ms: 1000,
            burst_ms: 3000,
            burst_count: 20,
            powerup_ms: 10_000,
            powerup_margin: 50.0,

            ball_speed: 5.0,
            fireball_speed: 8.0,
            player_speed: 5.0,
            enemy_step: 3.0,
            // Crosses the screen in three seconds
            powerup_fall_speed: height / (fps * 3.0),

            max_health: 100,
            damage: 10,
            fire_cooldown_ms: 1000,
            invincible_ms: 3000,

            shield_cycle_ms: 10_000,
            shield_max_hits: 10,
            shield_size: SpriteSize::new(300.0, 750.0),

            score_interval_ms: 1000,

            player_size: SpriteSize::new(48.0, 48.0),
            enemy_size: SpriteSize::new(96.0, 96.0),
            ball_size: SpriteSize::new(24.0, 24.0),
            powerup_size: SpriteSize::new(24.0, 24.0),

            scores_path: None,
        }
    }
}

impl GameConfig {
    /// Reads the config named by `BULLET_HELL_CONFIG`, falling back to the
    /// defaults when the variable is unset or the file is unusable. Nothing is
    /// logged here since the logger is configured from the result.
    pub fn load() -> (Self, ConfigSource) {
        Self::load_env(std::env::var_os(CONFIG_ENV))
    }

    fn load_env(var: Option<OsString>) -> (Self, ConfigSource) {
        let Some(path) = var.map(PathBuf::from) else {
            return (Self::default(), ConfigSource::Defaults);
        };
        match Self::load_from(&path) {
            Ok(config) => (config, ConfigSource::File(path)),
            Err(e) => (Self::default(), ConfigSource::Fallback(e)),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| StoreError::json(path, e))
    }

    pub fn scores_path(&self) -> PathBuf {
        self.scores_path
            .clone()
            .unwrap_or_else(|| data_dir().join(SCORE_FILE))
    }

    pub fn log_path(&self) -> PathBuf {
        match self.scores_path().parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(LOG_FILE),
            _ => PathBuf::from(LOG_FILE),
        }
    }
}

// Store next to the executable
fn data_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.to_path_buf();
        }
    }
    PathBuf::from(".")
}
