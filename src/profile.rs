//! Per-player statistical profiles.
//!
//! A profile holds distribution parameters only. Count-like stats (attempts,
//! assists, rebounds, ...) are normal distributions per game; shooting rates
//! are beta distributions described by make/miss pseudo-counts.

use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use statrs::distribution::{Beta, Normal};

use crate::constants::{MAX_PROFILE_VALUE, MINUTES_DAMPEN_THRESHOLD};
use crate::error::{LeagueError, Result};

/// Mean and standard deviation of a per-game count.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalParams {
    pub mean: f64,
    pub std: f64,
}

impl NormalParams {
    /// Prior used when a count could not be estimated.
    pub const UNINFORMATIVE: NormalParams = NormalParams { mean: 0.0, std: 1.0 };

    pub const fn new(mean: f64, std: f64) -> Self {
        NormalParams { mean, std }
    }

    /// Draw one value. A zero (or unusable) spread always returns the mean.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if !self.std.is_finite() || self.std <= 0.0 {
            return self.mean;
        }
        match Normal::new(self.mean, self.std) {
            Ok(normal) => normal.sample(rng),
            Err(_) => self.mean,
        }
    }

    fn check(&self, player: &str, stat: &str) -> Result<()> {
        let in_range = |v: f64| v.is_finite() && v.abs() <= MAX_PROFILE_VALUE;
        if !in_range(self.mean) || !in_range(self.std) || self.std < 0.0 {
            return Err(LeagueError::InvalidProfile {
                player: player.to_string(),
                reason: format!("{} has mean {} and std {}", stat, self.mean, self.std),
            });
        }
        Ok(())
    }
}

impl Default for NormalParams {
    fn default() -> Self {
        NormalParams::UNINFORMATIVE
    }
}

/// Make/miss pseudo-counts of a shooting percentage, each at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateParams {
    pub success: f64,
    pub failure: f64,
}

impl RateParams {
    /// Flat prior: every make rate equally likely.
    pub const UNINFORMATIVE: RateParams = RateParams { success: 1.0, failure: 1.0 };
    pub const FREE_THROW_PRIOR: RateParams = RateParams { success: 4.0, failure: 2.0 };
    pub const TWO_POINT_PRIOR: RateParams = RateParams { success: 4.0, failure: 5.0 };
    pub const THREE_POINT_PRIOR: RateParams = RateParams { success: 3.0, failure: 6.0 };

    pub const fn new(success: f64, failure: f64) -> Self {
        RateParams { success, failure }
    }

    /// Expected make rate.
    pub fn mean(&self) -> f64 {
        self.success / (self.success + self.failure)
    }

    /// Draw a make probability in [0, 1].
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match Beta::new(self.success, self.failure) {
            Ok(beta) => beta.sample(rng),
            Err(_) => self.mean().clamp(0.0, 1.0),
        }
    }

    fn check(&self, player: &str, stat: &str) -> Result<()> {
        let valid = |v: f64| v.is_finite() && v >= 1.0;
        if !valid(self.success) || !valid(self.failure) {
            return Err(LeagueError::InvalidProfile {
                player: player.to_string(),
                reason: format!(
                    "{} pseudo-counts ({}, {}) must both be at least 1",
                    stat, self.success, self.failure
                ),
            });
        }
        Ok(())
    }
}

fn two_point_prior() -> RateParams {
    RateParams::TWO_POINT_PRIOR
}

fn three_point_prior() -> RateParams {
    RateParams::THREE_POINT_PRIOR
}

fn free_throw_prior() -> RateParams {
    RateParams::FREE_THROW_PRIOR
}

/// Statistical description of one player, fixed for a simulation session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    #[serde(default)]
    pub two_pt_attempts: NormalParams,
    #[serde(default)]
    pub three_pt_attempts: NormalParams,
    #[serde(default)]
    pub free_throw_attempts: NormalParams,

    #[serde(default = "two_point_prior")]
    pub two_pt_make: RateParams,
    #[serde(default = "three_point_prior")]
    pub three_pt_make: RateParams,
    #[serde(default = "free_throw_prior")]
    pub free_throw_make: RateParams,

    #[serde(default)]
    pub assists: NormalParams,
    #[serde(default)]
    pub rebounds: NormalParams,
    #[serde(default)]
    pub steals: NormalParams,
    #[serde(default)]
    pub blocks: NormalParams,

    /// Expected minutes this season
    #[serde(default)]
    pub current_minutes: f64,

    /// Minutes per game in the season the distributions were estimated from
    #[serde(default)]
    pub previous_minutes: f64,
}

impl Default for PlayerProfile {
    /// Every distribution at its prior, with no minutes.
    fn default() -> Self {
        PlayerProfile {
            two_pt_attempts: NormalParams::UNINFORMATIVE,
            three_pt_attempts: NormalParams::UNINFORMATIVE,
            free_throw_attempts: NormalParams::UNINFORMATIVE,
            two_pt_make: RateParams::TWO_POINT_PRIOR,
            three_pt_make: RateParams::THREE_POINT_PRIOR,
            free_throw_make: RateParams::FREE_THROW_PRIOR,
            assists: NormalParams::UNINFORMATIVE,
            rebounds: NormalParams::UNINFORMATIVE,
            steals: NormalParams::UNINFORMATIVE,
            blocks: NormalParams::UNINFORMATIVE,
            current_minutes: 0.0,
            previous_minutes: 0.0,
        }
    }
}

impl PlayerProfile {
    /// Multiplier applied to points and secondary stats.
    ///
    /// `current / previous` minutes, 0 without a previous season, and the
    /// natural log of the ratio once it exceeds 1.5 so a bench player moving
    /// into the starting lineup does not scale linearly.
    pub fn minutes_scale(&self) -> f64 {
        let scale = if self.previous_minutes > 0.0 {
            self.current_minutes / self.previous_minutes
        } else {
            0.0
        };
        if scale > MINUTES_DAMPEN_THRESHOLD {
            scale.ln()
        } else {
            scale
        }
    }

    /// Reject parameters the sampler cannot use.
    pub fn validate(&self, player: &str) -> Result<()> {
        self.two_pt_attempts.check(player, "two_pt_attempts")?;
        self.three_pt_attempts.check(player, "three_pt_attempts")?;
        self.free_throw_attempts.check(player, "free_throw_attempts")?;
        self.assists.check(player, "assists")?;
        self.rebounds.check(player, "rebounds")?;
        self.steals.check(player, "steals")?;
        self.blocks.check(player, "blocks")?;
        self.two_pt_make.check(player, "two_pt_make")?;
        self.three_pt_make.check(player, "three_pt_make")?;
        self.free_throw_make.check(player, "free_throw_make")?;

        for (name, minutes) in [
            ("current_minutes", self.current_minutes),
            ("previous_minutes", self.previous_minutes),
        ] {
            if !minutes.is_finite() || minutes < 0.0 {
                return Err(LeagueError::InvalidProfile {
                    player: player.to_string(),
                    reason: format!("{} is {}", name, minutes),
                });
            }
        }
        Ok(())
    }
}
