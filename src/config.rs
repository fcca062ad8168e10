//! User configuration, stored as JSON in the platform config directory.

use crate::ai::{Difficulty, GameTuning};
use crate::controller::GameConfig;
use crate::error::ConfigError;
use crate::games::{ConnectFour, Rules, TicTacToe};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const CONFIG_FILENAME: &str = "config.json";
const LOG_FILENAME: &str = "arcade.log";

/// Upper bound for the AI thinking delay
pub const MAX_THINK_TICKS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub tic_tac_toe: GameTuning,
    pub connect_four: GameTuning,
    /// Ticks the AI pauses before its move shows up
    pub ai_think_ticks: u32,
    /// Milliseconds per UI tick
    pub tick_rate_ms: u64,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            tic_tac_toe: GameTuning::tic_tac_toe(),
            connect_four: GameTuning::connect_four(),
            ai_think_ticks: 5,
            tick_rate_ms: 100,
        }
    }
}

impl ArcadeConfig {
    /// Read and validate the config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ArcadeConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, writing the defaults there on first run. Anything
    /// unreadable or invalid falls back to the defaults with a warning.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            match config.save(path) {
                Ok(()) => info!(path = %path.display(), "no config file, wrote defaults"),
                Err(err) => warn!(path = %path.display(), %err, "could not write default config"),
            }
            return config;
        }
        match Self::load(path) {
            Ok(config) => {
                info!(path = %path.display(), "config loaded");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "bad config, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::FileWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(write_err)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tic_tac_toe
            .validate("tic_tac_toe", TicTacToe::BOUNDED_SEARCH)?;
        self.connect_four
            .validate("connect_four", ConnectFour::BOUNDED_SEARCH)?;
        if self.ai_think_ticks > MAX_THINK_TICKS {
            return Err(ConfigError::Validation(format!(
                "ai_think_ticks must be <= {}",
                MAX_THINK_TICKS
            )));
        }
        if !(10..=1000).contains(&self.tick_rate_ms) {
            return Err(ConfigError::Validation(
                "tick_rate_ms must be in 10..=1000".to_string(),
            ));
        }
        Ok(())
    }

    /// Settings for a new game of `G`.
    pub fn game_config<G: Rules>(&self, difficulty: Difficulty) -> GameConfig {
        GameConfig {
            difficulty,
            tuning: G::tuning(self),
            think_ticks: self.ai_think_ticks,
        }
    }

    /// `config.json` in the platform config directory, falling back to the
    /// working directory.
    pub fn default_path() -> PathBuf {
        match project_dirs() {
            Some(dirs) => dirs.config_dir().join(CONFIG_FILENAME),
            None => PathBuf::from(CONFIG_FILENAME),
        }
    }
}

/// Where the binary writes its log.
pub fn log_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_dir().join(LOG_FILENAME),
        None => PathBuf::from(LOG_FILENAME),
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "arcade")
}
