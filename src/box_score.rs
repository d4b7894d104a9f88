//! Box-score sampling.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::SHORT_PERIOD_FRACTION;
use crate::profile::PlayerProfile;

/// Length of the stretch a box score covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    /// A whole 48 minute game
    Full,
    /// A 5 minute overtime or pace-completion stretch
    Short,
}

/// Categories tracked by the league leaders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatCategory {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
}

impl StatCategory {
    pub const ALL: [StatCategory; 5] = [
        StatCategory::Points,
        StatCategory::Rebounds,
        StatCategory::Assists,
        StatCategory::Steals,
        StatCategory::Blocks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatCategory::Points => "pts",
            StatCategory::Rebounds => "reb",
            StatCategory::Assists => "ast",
            StatCategory::Steals => "stl",
            StatCategory::Blocks => "blk",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_uppercase())
    }
}

/// One simulated stat line.
///
/// Shooting percentages are derived from the make and attempt counts and are
/// 0 when there were no attempts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxScore {
    pub minutes: f64,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub two_pt_made: u32,
    pub two_pt_attempts: u32,
    pub three_pt_made: u32,
    pub three_pt_attempts: u32,
    pub free_throws_made: u32,
    pub free_throw_attempts: u32,
}

fn ratio(made: u32, attempts: u32) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        made as f64 / attempts as f64
    }
}

/// Round half to even and clamp negatives (and NaN) to zero.
fn to_count(value: f64) -> u32 {
    let rounded = value.round_ties_even();
    if rounded > 0.0 {
        rounded as u32
    } else {
        0
    }
}

fn truncate_scaled(value: u32, factor: f64) -> u32 {
    (value as f64 * factor) as u32
}

impl BoxScore {
    pub fn field_goals_made(&self) -> u32 {
        self.two_pt_made.saturating_add(self.three_pt_made)
    }

    pub fn field_goal_attempts(&self) -> u32 {
        self.two_pt_attempts.saturating_add(self.three_pt_attempts)
    }

    pub fn field_goal_pct(&self) -> f64 {
        ratio(self.field_goals_made(), self.field_goal_attempts())
    }

    pub fn three_pt_pct(&self) -> f64 {
        ratio(self.three_pt_made, self.three_pt_attempts)
    }

    pub fn free_throw_pct(&self) -> f64 {
        ratio(self.free_throws_made, self.free_throw_attempts)
    }

    pub fn stat(&self, category: StatCategory) -> u32 {
        match category {
            StatCategory::Points => self.points,
            StatCategory::Rebounds => self.rebounds,
            StatCategory::Assists => self.assists,
            StatCategory::Steals => self.steals,
            StatCategory::Blocks => self.blocks,
        }
    }

    /// Scale every field by `factor`, truncating toward zero.
    pub fn rescaled(&self, factor: f64) -> BoxScore {
        BoxScore {
            minutes: (self.minutes * factor).trunc(),
            points: truncate_scaled(self.points, factor),
            rebounds: truncate_scaled(self.rebounds, factor),
            assists: truncate_scaled(self.assists, factor),
            steals: truncate_scaled(self.steals, factor),
            blocks: truncate_scaled(self.blocks, factor),
            two_pt_made: truncate_scaled(self.two_pt_made, factor),
            two_pt_attempts: truncate_scaled(self.two_pt_attempts, factor),
            three_pt_made: truncate_scaled(self.three_pt_made, factor),
            three_pt_attempts: truncate_scaled(self.three_pt_attempts, factor),
            free_throws_made: truncate_scaled(self.free_throws_made, factor),
            free_throw_attempts: truncate_scaled(self.free_throw_attempts, factor),
        }
    }

    /// Add another stretch of play into this line. Counts saturate.
    pub fn accumulate(&mut self, other: &BoxScore) {
        self.minutes += other.minutes;
        for (total, extra) in [
            (&mut self.points, other.points),
            (&mut self.rebounds, other.rebounds),
            (&mut self.assists, other.assists),
            (&mut self.steals, other.steals),
            (&mut self.blocks, other.blocks),
            (&mut self.two_pt_made, other.two_pt_made),
            (&mut self.two_pt_attempts, other.two_pt_attempts),
            (&mut self.three_pt_made, other.three_pt_made),
            (&mut self.three_pt_attempts, other.three_pt_attempts),
            (&mut self.free_throws_made, other.free_throws_made),
            (&mut self.free_throw_attempts, other.free_throw_attempts),
        ] {
            *total = total.saturating_add(extra);
        }
    }
}

impl fmt::Display for BoxScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} min, {} pts, {} reb, {} ast, {} stl, {} blk, {} fga, {:.3} fg%, {:.3} 3pt%, {:.3} ft%",
            self.minutes,
            self.points,
            self.rebounds,
            self.assists,
            self.steals,
            self.blocks,
            self.field_goal_attempts(),
            self.field_goal_pct(),
            self.three_pt_pct(),
            self.free_throw_pct()
        )
    }
}

/// Draw one stat line for a player.
///
/// Attempts come from the profile's normal distributions, makes from a drawn
/// make rate times attempts. Points and secondary stats are multiplied by the
/// profile's minutes scale. A short period is the full-game line cut to 5/48.
pub fn sample_box_score<R: Rng + ?Sized>(
    profile: &PlayerProfile,
    period: Period,
    rng: &mut R,
) -> BoxScore {
    let two_pt_attempts = to_count(profile.two_pt_attempts.sample(rng));
    let two_pt_made = to_count(two_pt_attempts as f64 * profile.two_pt_make.sample(rng));
    let three_pt_attempts = to_count(profile.three_pt_attempts.sample(rng));
    let three_pt_made = to_count(three_pt_attempts as f64 * profile.three_pt_make.sample(rng));
    let free_throw_attempts = to_count(profile.free_throw_attempts.sample(rng));
    let free_throws_made =
        to_count(free_throw_attempts as f64 * profile.free_throw_make.sample(rng));

    let scale = profile.minutes_scale();
    let raw_points = free_throws_made
        .saturating_add(two_pt_made.saturating_mul(2))
        .saturating_add(three_pt_made.saturating_mul(3));

    let line = BoxScore {
        minutes: profile.current_minutes,
        points: to_count(scale * raw_points as f64),
        assists: to_count(scale * profile.assists.sample(rng)),
        rebounds: to_count(scale * profile.rebounds.sample(rng)),
        steals: to_count(scale * profile.steals.sample(rng)),
        blocks: to_count(scale * profile.blocks.sample(rng)),
        two_pt_made,
        two_pt_attempts,
        three_pt_made,
        three_pt_attempts,
        free_throws_made,
        free_throw_attempts,
    };

    match period {
        Period::Full => line,
        Period::Short => line.rescaled(SHORT_PERIOD_FRACTION),
    }
}
