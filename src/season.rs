//! Regular season driver and repeated-season title odds.

use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::box_score::StatCategory;
use crate::error::Result;
use crate::game::{simulate_game, GameKind};
use crate::league::League;
use crate::playoffs::{simulate_playoffs, PlayoffResult};
use crate::schedule::Schedule;
use crate::standings::Seed;
use crate::state::LeagueState;
use crate::team::Conference;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub category: StatCategory,
    /// Best first
    pub entries: Vec<(String, f64)>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub east: Vec<Seed>,
    pub west: Vec<Seed>,
    pub leaderboards: Vec<Leaderboard>,
    pub playoffs: PlayoffResult,
}

impl SeasonSummary {
    pub fn champion(&self) -> &str {
        &self.playoffs.champion
    }
}

/// Play every scheduled game, then seed and run the playoffs.
pub fn simulate_season<R: Rng + ?Sized>(
    league: &League,
    state: &mut LeagueState,
    schedule: &Schedule,
    rng: &mut R,
) -> Result<SeasonSummary> {
    info!("Simulating {} regular season games", schedule.len());
    for game in schedule.games() {
        simulate_game(
            league,
            state,
            rng,
            &game.date,
            &game.away,
            &game.home,
            GameKind::RegularSeason,
        )?;
    }

    let east = state.standings.seeds(Conference::East);
    let west = state.standings.seeds(Conference::West);
    let size = league.config().leaderboard_size;
    let leaderboards = StatCategory::ALL
        .iter()
        .map(|&category| Leaderboard {
            category,
            entries: state
                .leaders
                .top(category, size)
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        })
        .collect();

    info!("Simulating playoffs");
    let playoffs = simulate_playoffs(league, state, rng, &east, &west)?;

    Ok(SeasonSummary {
        east,
        west,
        leaderboards,
        playoffs,
    })
}

/// Share of `seasons` independent full seasons won by each team.
///
/// Every season gets a fresh [`LeagueState`] and its own RNG seeded from a
/// master ChaCha8 stream, so a fixed `seed` reproduces the same table no
/// matter how rayon schedules the work.
pub fn championship_odds(
    league: &League,
    schedule: &Schedule,
    seasons: usize,
    seed: Option<u64>,
) -> Result<HashMap<String, f64>> {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    let season_seeds: Vec<u64> = (0..seasons).map(|_| rng.gen::<u64>()).collect();

    let champions: Vec<String> = season_seeds
        .par_iter()
        .map(|&season_seed| {
            let mut season_rng = ChaCha8Rng::seed_from_u64(season_seed);
            let mut state = LeagueState::new(league);
            simulate_season(league, &mut state, schedule, &mut season_rng)
                .map(|summary| summary.playoffs.champion)
        })
        .collect::<Result<_>>()?;

    let mut odds: HashMap<String, f64> = HashMap::new();
    for champion in champions {
        *odds.entry(champion).or_insert(0.0) += 1.0 / seasons as f64;
    }
    Ok(odds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::constants::{EAST_CONF, TEAMS, WEST_CONF};
    use crate::fixtures;
    use crate::schedule::ScheduledGame;

    /// Every team plays its conference neighbours home and away.
    fn short_schedule() -> Schedule {
        let mut games = Vec::new();
        for (day, conference) in [EAST_CONF, WEST_CONF].iter().enumerate() {
            for i in 0..conference.len() {
                let away = conference[i];
                let home = conference[(i + 1) % conference.len()];
                for (offset, (a, h)) in [(away, home), (home, away)].iter().enumerate() {
                    games.push(ScheduledGame {
                        date: format!("2022-10-{:02}", 18 + day * 2 + offset),
                        away: a.to_string(),
                        home: h.to_string(),
                    });
                }
            }
        }
        Schedule::new(games).unwrap()
    }

    #[test]
    fn test_season_records_every_game() {
        let league = fixtures::full_league(SimConfig::default());
        let schedule = short_schedule();
        let mut state = LeagueState::new(&league);
        let mut rng = ChaCha8Rng::seed_from_u64(82);

        let summary = simulate_season(&league, &mut state, &schedule, &mut rng).unwrap();

        assert_eq!(state.standings.total_games() as usize, schedule.len());
        let losses: u32 = summary
            .east
            .iter()
            .chain(summary.west.iter())
            .map(|s| s.record.losses)
            .sum();
        assert_eq!(losses as usize, schedule.len());
        assert!(summary.east.windows(2).all(|w| w[0].record.wins >= w[1].record.wins));
        assert!(TEAMS.contains(&summary.champion()));

        assert_eq!(summary.leaderboards.len(), 5);
        for board in &summary.leaderboards {
            assert_eq!(board.entries.len(), 10);
            assert!(board.entries.windows(2).all(|w| w[0].1 >= w[1].1));
        }

        // Regular season logs by date plus one log per playoff game
        let playoff_games: u32 = summary.playoffs.series.iter().map(|s| s.games_played()).sum();
        assert_eq!(state.game_logs.len(), schedule.len() + playoff_games as usize);
    }

    #[test]
    fn test_same_seed_same_champion() {
        let league = fixtures::full_league(SimConfig::default());
        let schedule = short_schedule();
        let run = |seed| {
            let mut state = LeagueState::new(&league);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            simulate_season(&league, &mut state, &schedule, &mut rng).unwrap()
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn test_championship_odds_sum_to_one() {
        let league = fixtures::full_league(SimConfig::default());
        let schedule = short_schedule();
        let odds = championship_odds(&league, &schedule, 4, Some(11)).unwrap();
        let total: f64 = odds.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(odds, championship_odds(&league, &schedule, 4, Some(11)).unwrap());
    }
}
