//! Simulation settings.
//!
//! Settings come from `hoops.toml` (or the file named by `HOOPS_CONFIG`), fall
//! back to built-in defaults, and finally take `HOOPS_*` environment overrides.

use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_TRIALS, LEADERBOARD_SIZE, MAX_OVERTIME_PERIODS, MAX_PACE_SWEEPS, PACE, SEASON_GAMES,
    WINS_TO_ADVANCE,
};
use crate::error::Result;

/// Locations searched for a config file, in order
pub const CONFIG_SEARCH_PATHS: &[&str] = &["hoops.toml", "../hoops.toml"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Team field goal attempts that end regulation sweeps
    pub pace: u32,

    /// Games per regular season, used as the league leader denominator
    pub season_games: u32,

    /// Wins needed to take a playoff series
    pub wins_to_advance: u32,

    /// Monte Carlo trials per odds query
    pub trial_count: usize,

    pub max_overtime_periods: u32,
    pub max_pace_sweeps: u32,
    pub leaderboard_size: usize,

    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            pace: PACE,
            season_games: SEASON_GAMES,
            wins_to_advance: WINS_TO_ADVANCE,
            trial_count: DEFAULT_TRIALS,
            max_overtime_periods: MAX_OVERTIME_PERIODS,
            max_pace_sweeps: MAX_PACE_SWEEPS,
            leaderboard_size: LEADERBOARD_SIZE,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a config file and apply environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?.with_env_overrides())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// RNG for one simulation session.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Apply `HOOPS_SEED`, `HOOPS_TRIALS` and `HOOPS_PACE`.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("HOOPS_SEED").and_then(|v| v.parse().ok()) {
            self.seed = Some(seed);
        }
        if let Some(trials) = lookup("HOOPS_TRIALS").and_then(|v| v.parse().ok()) {
            self.trial_count = trials;
        }
        if let Some(pace) = lookup("HOOPS_PACE").and_then(|v| v.parse().ok()) {
            self.pace = pace;
        }
        self
    }
}

/// Find and load the config.
///
/// Order: `HOOPS_CONFIG`, then [`CONFIG_SEARCH_PATHS`], then defaults. A file
/// that fails to read or parse is reported and replaced by defaults.
pub fn load_config() -> SimConfig {
    if let Ok(path) = std::env::var("HOOPS_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from HOOPS_CONFIG: {}", path.display());
            return load_or_default(&path);
        }
        warn!("HOOPS_CONFIG={} not found, searching defaults", path.display());
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = PathBuf::from(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_or_default(&path);
        }
    }

    debug!("No hoops.toml found, using built-in defaults");
    SimConfig::default().with_env_overrides()
}

fn load_or_default(path: &Path) -> SimConfig {
    match SimConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load {}: {}, using defaults", path.display(), e);
            SimConfig::default().with_env_overrides()
        }
    }
}
