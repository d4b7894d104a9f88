//! Hoops Core - stochastic basketball season simulation.
//!
//! Players are statistical profiles; games are built by sampling box scores
//! until each team reaches its pace, seasons feed a fixed 16-team playoff
//! bracket, and a Monte Carlo engine estimates matchup odds with
//! conditional queries over the trial logs. Python bindings via PyO3 are
//! available behind the `python` feature.

pub mod box_score;
pub mod config;
pub mod constants;
pub mod error;
pub mod fit;
pub mod game;
pub mod game_log;
pub mod leaders;
pub mod league;
pub mod odds;
pub mod playoffs;
pub mod profile;
pub mod schedule;
pub mod season;
pub mod standings;
pub mod state;
pub mod team;

#[cfg(test)]
mod fixtures;
#[cfg(feature = "python")]
mod python;

pub use box_score::{sample_box_score, BoxScore, Period, StatCategory};
pub use config::{load_config, SimConfig};
pub use error::{LeagueError, Result};
pub use fit::{fit_normal, fit_profile, fit_rate, GameLine};
pub use game::{simulate_game, GameKind, GameOutcome};
pub use game_log::{GameLog, GameLogs, TeamBox};
pub use leaders::{LeagueLeaders, StatAverages};
pub use league::League;
pub use odds::{estimate_odds, ConditionalOdds, OddsReport, PlayerAverages};
pub use playoffs::{simulate_playoffs, simulate_series, PlayoffResult, SeriesResult};
pub use profile::{NormalParams, PlayerProfile, RateParams};
pub use schedule::{Schedule, ScheduledGame};
pub use season::{championship_odds, simulate_season, Leaderboard, SeasonSummary};
pub use standings::{Record, Seed, Standings};
pub use state::LeagueState;
pub use team::{Conference, Roster, RosterEntry};
