//! Monte Carlo matchup odds.
//!
//! One matchup is replayed many times as non-standings games in a fresh
//! [`LeagueState`]. The trial logs stay in the report so they can be queried
//! for conditional win probabilities afterwards.

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::error::Result;
use crate::game::{simulate_game, GameKind};
use crate::game_log::{matchup_label, GameLogs};
use crate::leaders::StatAverages;
use crate::league::League;
use crate::state::LeagueState;

/// Label trial `i` of a query is logged under.
pub fn trial_label(date: &str, trial: usize) -> String {
    format!("{} {}", date, trial)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerAverages {
    pub team: String,
    pub player: String,
    pub averages: StatAverages,
}

/// Trials in which a player reached a point threshold, and how many of those
/// the chosen team won.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConditionalOdds {
    pub qualifying: usize,
    pub wins: usize,
}

impl ConditionalOdds {
    /// `None` when no trial qualified.
    pub fn probability(&self) -> Option<f64> {
        if self.qualifying == 0 {
            None
        } else {
            Some(self.wins as f64 / self.qualifying as f64)
        }
    }
}

#[derive(Clone, Debug)]
pub struct OddsReport {
    pub date: String,
    pub away: String,
    pub home: String,
    pub trials: usize,
    pub away_wins: usize,
    pub home_wins: usize,
    /// Home roster first, then away, in rotation order
    pub player_averages: Vec<PlayerAverages>,
    state: LeagueState,
}

impl OddsReport {
    fn share(&self, wins: usize) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            wins as f64 / self.trials as f64
        }
    }

    pub fn away_win_probability(&self) -> f64 {
        self.share(self.away_wins)
    }

    pub fn home_win_probability(&self) -> f64 {
        self.share(self.home_wins)
    }

    pub fn averages(&self, player: &str) -> Option<&StatAverages> {
        self.player_averages
            .iter()
            .find(|p| p.player == player)
            .map(|p| &p.averages)
    }

    pub fn game_logs(&self) -> &GameLogs {
        &self.state.game_logs
    }

    /// How often `team` won among trials where `player` scored at least
    /// `threshold` points.
    ///
    /// A team outside the matchup or a player who never appeared for `team`
    /// yields zero qualifying trials.
    pub fn conditional(&self, team: &str, player: &str, threshold: u32) -> ConditionalOdds {
        let matchup = matchup_label(&self.away, &self.home);
        let mut odds = ConditionalOdds::default();
        for trial in 0..self.trials {
            let Some(log) = self.state.game_logs.get(&trial_label(&self.date, trial), &matchup)
            else {
                continue;
            };
            let Some(line) = log.team(team).and_then(|tb| tb.player(player)) else {
                continue;
            };
            if line.points >= threshold {
                odds.qualifying += 1;
                if log.winner() == team {
                    odds.wins += 1;
                }
            }
        }
        odds
    }
}

/// Replay `away` at `home` for `trials` independent games.
///
/// Leader averages accumulate over the season denominator during the trials
/// and are then rescaled by `season_games / trials` into per-trial averages.
pub fn estimate_odds<R: Rng + ?Sized>(
    league: &League,
    date: &str,
    away: &str,
    home: &str,
    trials: usize,
    rng: &mut R,
) -> Result<OddsReport> {
    let mut state = LeagueState::new(league);
    let mut away_wins = 0;
    let mut home_wins = 0;

    for trial in 0..trials {
        let label = trial_label(date, trial);
        let outcome =
            simulate_game(league, &mut state, rng, &label, away, home, GameKind::Playoff)?;
        if outcome.away_won() {
            away_wins += 1;
        } else {
            home_wins += 1;
        }
        if trial % 100 == 0 {
            debug!("{} games remaining...", trials - trial);
        }
    }

    if trials > 0 {
        state
            .leaders
            .rescale(league.config().season_games as f64 / trials as f64);
    }

    let mut player_averages = Vec::new();
    for team in [home, away] {
        for name in league.roster(team)?.player_names() {
            player_averages.push(PlayerAverages {
                team: team.to_string(),
                player: name.to_string(),
                averages: state.leaders.get(name).copied().unwrap_or_default(),
            });
        }
    }

    let report = OddsReport {
        date: date.to_string(),
        away: away.to_string(),
        home: home.to_string(),
        trials,
        away_wins,
        home_wins,
        player_averages,
        state,
    };
    info!(
        "{}: {:.1}%, {}: {:.1}% over {} trials",
        away,
        report.away_win_probability() * 100.0,
        home,
        report.home_win_probability() * 100.0,
        trials
    );
    Ok(report)
}

/// [`estimate_odds`] with the league's configured trial count and seed.
pub fn estimate_odds_with_config(
    league: &League,
    date: &str,
    away: &str,
    home: &str,
) -> Result<OddsReport> {
    let config = league.config();
    let mut rng = config.rng();
    estimate_odds(league, date, away, home, config.trial_count, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::fixtures;
    use crate::team::Roster;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn report(trials: usize, seed: u64) -> OddsReport {
        let league = fixtures::two_team_league();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        estimate_odds(&league, "2023-01-15", "PHI", "BOS", trials, &mut rng).unwrap()
    }

    #[test]
    fn test_win_probabilities_sum_to_one() {
        let report = report(300, 1);
        assert_eq!(report.away_wins + report.home_wins, 300);
        let total = report.away_win_probability() + report.home_win_probability();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(report.game_logs().len(), 300);
        assert!(report.game_logs().get("2023-01-15 299", "PHI v. BOS").is_some());
    }

    #[test]
    fn test_player_averages_are_per_trial() {
        let report = report(400, 2);
        assert_eq!(report.player_averages.len(), 18);
        assert_eq!(report.player_averages[0].team, "BOS");

        // Recompute the lead scorer's average straight from the logs
        let star = "PHI 1";
        let total: u32 = report
            .game_logs()
            .iter()
            .filter_map(|(_, log)| log.away.player(star).map(|l| l.points))
            .sum();
        let expected = total as f64 / 400.0;
        let averages = report.averages(star).unwrap();
        assert!((averages.points - expected).abs() < 1e-9);
        assert!(averages.points > 10.0);
    }

    #[test]
    fn test_unreachable_threshold_is_undefined() {
        let report = report(1000, 3);
        let odds = report.conditional("PHI", "PHI 1", 500);
        assert_eq!(odds.qualifying, 0);
        assert_eq!(odds.probability(), None);
    }

    #[test]
    fn test_zero_threshold_matches_win_rate() {
        // The first player in the rotation appears in every trial
        let report = report(500, 4);
        let odds = report.conditional("BOS", "BOS 1", 0);
        assert_eq!(odds.qualifying, 500);
        assert_eq!(odds.wins, report.home_wins);
        assert_eq!(odds.probability(), Some(report.home_win_probability()));
    }

    #[test]
    fn test_unknown_team_or_player_has_no_trials() {
        let report = report(50, 5);
        assert_eq!(report.conditional("LAL", "PHI 1", 0).qualifying, 0);
        assert_eq!(report.conditional("PHI", "Nobody", 0).qualifying, 0);
        assert_eq!(report.conditional("PHI", "BOS 1", 0).qualifying, 0);
    }

    #[test]
    fn test_stronger_team_favored() {
        let rosters = vec![fixtures::roster("GSW", 1.3), fixtures::roster("DET", 0.8)];
        let league = League::new(rosters, SimConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let report = estimate_odds(&league, "2023-02-01", "DET", "GSW", 400, &mut rng).unwrap();
        assert!(report.home_win_probability() > 0.6);
    }

    #[test]
    fn test_zero_trials() {
        let report = report(0, 7);
        assert_eq!(report.away_win_probability(), 0.0);
        assert_eq!(report.home_win_probability(), 0.0);
        assert_eq!(report.conditional("PHI", "PHI 1", 0).probability(), None);
    }

    #[test]
    fn test_configured_seed_reproduces_report() {
        let config = SimConfig {
            trial_count: 100,
            ..SimConfig::default()
        }
        .with_seed(99);
        let league = fixtures::two_team_league_with(config);
        let first = estimate_odds_with_config(&league, "2023-03-01", "BOS", "PHI").unwrap();
        let second = estimate_odds_with_config(&league, "2023-03-01", "BOS", "PHI").unwrap();
        assert_eq!(first.trials, 100);
        assert_eq!(first.away_wins, second.away_wins);
        assert_eq!(first.player_averages, second.player_averages);
    }

    #[test]
    fn test_missing_roster_is_an_error() {
        let league = League::new(vec![Roster::new("PHI")], SimConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        assert!(estimate_odds(&league, "2023-01-01", "PHI", "BOS", 10, &mut rng).is_err());
    }
}
