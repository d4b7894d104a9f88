//! Single game simulation.
//!
//! Regulation is played per team by sweeping the roster until the team has
//! taken `pace` field goal attempts. Each player's first appearance is a full
//! game line; later sweeps add short-period lines on top. Ties go to overtime
//! periods where every rostered player adds a short-period line.

use log::{debug, warn};
use rand::Rng;

use crate::box_score::{sample_box_score, Period};
use crate::config::SimConfig;
use crate::error::{LeagueError, Result};
use crate::game_log::{GameLog, TeamBox};
use crate::league::League;
use crate::state::LeagueState;
use crate::team::Roster;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKind {
    /// Counts toward the standings
    RegularSeason,
    /// Playoff games and Monte Carlo trials; standings untouched
    Playoff,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub away_score: u32,
    pub home_score: u32,
    pub overtime_periods: u32,
}

impl GameOutcome {
    pub fn away_won(&self) -> bool {
        self.away_score > self.home_score
    }
}

/// Sweep the roster until the team reaches the pace target.
fn play_regulation<R: Rng + ?Sized>(roster: &Roster, config: &SimConfig, rng: &mut R) -> TeamBox {
    let mut team_box = TeamBox::new(&roster.code);
    if roster.is_empty() {
        warn!("{} has an empty roster", roster.code);
        return team_box;
    }

    let mut attempts: u32 = 0;
    let mut sweeps = 0;
    'pace: while attempts < config.pace {
        if sweeps == config.max_pace_sweeps {
            warn!(
                "{} stopped at {} attempts after {} sweeps",
                roster.code, attempts, sweeps
            );
            break;
        }
        sweeps += 1;

        for entry in &roster.players {
            let period = if team_box.player(&entry.name).is_some() {
                Period::Short
            } else {
                Period::Full
            };
            let line = sample_box_score(&entry.profile, period, rng);
            attempts = attempts.saturating_add(line.field_goal_attempts());
            team_box.add(&entry.name, line);
            if attempts >= config.pace {
                break 'pace;
            }
        }
    }
    team_box
}

/// One overtime period: every rostered player plays a short stretch.
fn play_overtime<R: Rng + ?Sized>(roster: &Roster, team_box: &mut TeamBox, rng: &mut R) {
    for entry in &roster.players {
        let line = sample_box_score(&entry.profile, Period::Short, rng);
        team_box.add(&entry.name, line);
    }
}

/// Simulate `away` at `home` and record the game under `label`.
///
/// Leader averages are credited for every player who appeared, with the
/// season length as denominator; regular season games also update the
/// standings. A game still tied after `max_overtime_periods` returns
/// [`LeagueError::OvertimeLimitExceeded`] and leaves `state` untouched.
pub fn simulate_game<R: Rng + ?Sized>(
    league: &League,
    state: &mut LeagueState,
    rng: &mut R,
    label: &str,
    away: &str,
    home: &str,
    kind: GameKind,
) -> Result<GameOutcome> {
    if away == home {
        return Err(LeagueError::SameTeam(away.to_string()));
    }
    let config = league.config();
    let away_roster = league.roster(away)?;
    let home_roster = league.roster(home)?;

    let home_box = play_regulation(home_roster, config, rng);
    let away_box = play_regulation(away_roster, config, rng);
    let (away_box, home_box, overtime_periods) =
        play_overtimes(label, away_roster, home_roster, away_box, home_box, config, rng)?;

    let log = GameLog::new(away_box, home_box, overtime_periods);
    let outcome = GameOutcome {
        away_score: log.away_score(),
        home_score: log.home_score(),
        overtime_periods,
    };

    let denominator = config.season_games as f64;
    for team_box in [&log.away, &log.home] {
        for (player, line) in &team_box.players {
            state.leaders.accumulate(player, line, denominator);
        }
    }

    if kind == GameKind::RegularSeason {
        let (winner, loser) = if outcome.away_won() {
            (away, home)
        } else {
            (home, away)
        };
        state.standings.record_result(winner, loser)?;
    }

    debug!("{}: {}", label, log.result);
    state.game_logs.insert(label, log);
    Ok(outcome)
}

fn play_overtimes<R: Rng + ?Sized>(
    label: &str,
    away_roster: &Roster,
    home_roster: &Roster,
    mut away_box: TeamBox,
    mut home_box: TeamBox,
    config: &SimConfig,
    rng: &mut R,
) -> Result<(TeamBox, TeamBox, u32)> {
    let mut periods = 0;
    while away_box.points() == home_box.points() {
        if periods == config.max_overtime_periods {
            warn!("{} still tied after {} overtime periods", label, periods);
            return Err(LeagueError::OvertimeLimitExceeded {
                label: label.to_string(),
                periods,
            });
        }
        play_overtime(home_roster, &mut home_box, rng);
        play_overtime(away_roster, &mut away_box, rng);
        periods += 1;
    }
    Ok((away_box, home_box, periods))
}
