//! Playoff series and the fixed 16-team bracket.

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::PLAYOFF_SEEDS;
use crate::error::{LeagueError, Result};
use crate::game::{simulate_game, GameKind};
use crate::league::League;
use crate::standings::Seed;
use crate::state::LeagueState;
use crate::team::Conference;

/// Round label of the league finals
pub const FINALS: &str = "FINALS";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub round: String,
    /// Lower seed; away team in every game
    pub low: String,
    pub high: String,
    pub low_wins: u32,
    pub high_wins: u32,
}

impl SeriesResult {
    pub fn winner(&self) -> &str {
        if self.low_wins > self.high_wins {
            &self.low
        } else {
            &self.high
        }
    }

    pub fn games_played(&self) -> u32 {
        self.low_wins + self.high_wins
    }
}

/// Label a series game is logged under, e.g. `"ECR1 MIA v. MIL G3"`.
pub fn series_game_label(round: &str, low: &str, high: &str, game: u32) -> String {
    format!("{} {} v. {} G{}", round, low, high, game)
}

/// Play games until one side has `wins_needed` wins.
///
/// `play_game` receives the game's label and returns whether `low` won.
pub fn play_series<F>(
    low: &str,
    high: &str,
    round: &str,
    wins_needed: u32,
    mut play_game: F,
) -> Result<SeriesResult>
where
    F: FnMut(&str) -> Result<bool>,
{
    let mut series = SeriesResult {
        round: round.to_string(),
        low: low.to_string(),
        high: high.to_string(),
        low_wins: 0,
        high_wins: 0,
    };

    while series.low_wins < wins_needed && series.high_wins < wins_needed {
        let label = series_game_label(round, low, high, series.games_played() + 1);
        if play_game(&label)? {
            series.low_wins += 1;
        } else {
            series.high_wins += 1;
        }
    }

    info!(
        "{}: {} {} - {} {}",
        round, low, series.low_wins, high, series.high_wins
    );
    Ok(series)
}

/// Simulate a best-of-seven between `low` (away) and `high` (home).
pub fn simulate_series<R: Rng + ?Sized>(
    league: &League,
    state: &mut LeagueState,
    rng: &mut R,
    low: &str,
    high: &str,
    round: &str,
) -> Result<SeriesResult> {
    let wins_needed = league.config().wins_to_advance;
    play_series(low, high, round, wins_needed, |label| {
        simulate_game(league, &mut *state, &mut *rng, label, low, high, GameKind::Playoff)
            .map(|outcome| outcome.away_won())
    })
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoffResult {
    /// Every series in the order played
    pub series: Vec<SeriesResult>,
    pub champion: String,
}

struct Bracket<'a, R: Rng + ?Sized> {
    league: &'a League,
    state: &'a mut LeagueState,
    rng: &'a mut R,
    series: Vec<SeriesResult>,
}

impl<R: Rng + ?Sized> Bracket<'_, R> {
    fn play(&mut self, low: &str, high: &str, round: &str) -> Result<String> {
        let result =
            simulate_series(self.league, &mut *self.state, &mut *self.rng, low, high, round)?;
        let winner = result.winner().to_string();
        self.series.push(result);
        Ok(winner)
    }

    /// First round 1v8, 4v5, 3v6, 2v7; the 1/8 and 4/5 winners meet in one
    /// semifinal, the 3/6 and 2/7 winners in the other.
    fn conference(&mut self, conference: Conference, seeds: &[Seed]) -> Result<String> {
        if seeds.len() < PLAYOFF_SEEDS {
            return Err(LeagueError::InsufficientSeeds {
                conference: conference.to_string(),
                found: seeds.len(),
            });
        }
        let seed = |n: usize| seeds[n - 1].team.as_str();
        let prefix = conference.round_prefix();
        let first_round = format!("{}R1", prefix);
        let semifinal = format!("{}SF", prefix);
        let final_round = format!("{}F", prefix);

        let one_eight = self.play(seed(8), seed(1), &first_round)?;
        let four_five = self.play(seed(5), seed(4), &first_round)?;
        let top_half = self.play(&four_five, &one_eight, &semifinal)?;

        let three_six = self.play(seed(6), seed(3), &first_round)?;
        let two_seven = self.play(seed(7), seed(2), &first_round)?;
        let bottom_half = self.play(&three_six, &two_seven, &semifinal)?;

        self.play(&bottom_half, &top_half, &final_round)
    }
}

/// Run both conference brackets and the finals.
///
/// `east` and `west` are seedings, best first; the top eight of each qualify.
pub fn simulate_playoffs<R: Rng + ?Sized>(
    league: &League,
    state: &mut LeagueState,
    rng: &mut R,
    east: &[Seed],
    west: &[Seed],
) -> Result<PlayoffResult> {
    let mut bracket = Bracket {
        league,
        state,
        rng,
        series: Vec::new(),
    };
    let east_champion = bracket.conference(Conference::East, east)?;
    let west_champion = bracket.conference(Conference::West, west)?;
    let champion = bracket.play(&east_champion, &west_champion, FINALS)?;

    info!("{} has won the finals", champion);
    Ok(PlayoffResult {
        series: bracket.series,
        champion,
    })
}
