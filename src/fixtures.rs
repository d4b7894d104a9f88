//! Shared test rosters.

use crate::config::SimConfig;
use crate::constants::TEAMS;
use crate::league::League;
use crate::profile::{NormalParams, PlayerProfile, RateParams};
use crate::team::Roster;

/// A rotation player whose volume is set by `usage` (1.0 ~ a starter).
pub fn rotation_player(usage: f64) -> PlayerProfile {
    PlayerProfile {
        two_pt_attempts: NormalParams::new(10.0 * usage, 3.0 * usage),
        three_pt_attempts: NormalParams::new(5.0 * usage, 2.0 * usage),
        free_throw_attempts: NormalParams::new(4.0 * usage, 2.0 * usage),
        two_pt_make: RateParams::new(11.0, 10.0),
        three_pt_make: RateParams::new(8.0, 13.0),
        free_throw_make: RateParams::new(16.0, 5.0),
        assists: NormalParams::new(4.0 * usage, 2.0),
        rebounds: NormalParams::new(6.0 * usage, 2.5),
        steals: NormalParams::new(1.0 * usage, 0.8),
        blocks: NormalParams::new(0.7 * usage, 0.7),
        current_minutes: 34.0 * usage,
        previous_minutes: 33.0 * usage,
    }
}

/// Five starters and four bench players, optionally stronger than average.
pub fn roster(code: &str, strength: f64) -> Roster {
    let usages = [1.2, 1.1, 1.0, 0.9, 0.9, 0.6, 0.5, 0.4, 0.3];
    usages
        .iter()
        .enumerate()
        .fold(Roster::new(code), |roster, (i, usage)| {
            roster.with_player(&format!("{} {}", code, i + 1), rotation_player(usage * strength))
        })
}

pub fn two_team_league() -> League {
    two_team_league_with(SimConfig::default())
}

pub fn two_team_league_with(config: SimConfig) -> League {
    League::new(vec![roster("PHI", 1.0), roster("BOS", 1.0)], config).unwrap()
}

/// All 30 teams, strength spread evenly from weakest to strongest.
pub fn full_league(config: SimConfig) -> League {
    let rosters = TEAMS
        .iter()
        .enumerate()
        .map(|(i, code)| roster(code, 0.85 + 0.01 * i as f64))
        .collect();
    League::new(rosters, config).unwrap()
}

/// A player who can never score: no previous season to scale from.
pub fn scoreless_player() -> PlayerProfile {
    PlayerProfile {
        two_pt_attempts: NormalParams::new(15.0, 0.0),
        current_minutes: 30.0,
        previous_minutes: 0.0,
        ..PlayerProfile::default()
    }
}
