//! Python bindings.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

use crate::box_score::StatCategory;
use crate::config::load_config;
use crate::error::LeagueError;
use crate::league::League;
use crate::odds::{self, OddsReport};
use crate::schedule::Schedule;
use crate::season;
use crate::state::LeagueState;

impl From<LeagueError> for PyErr {
    fn from(err: LeagueError) -> PyErr {
        match err {
            LeagueError::Io(e) => PyIOError::new_err(e.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// An explicit seed wins over the configured one.
fn session_rng(league: &League, seed: Option<u64>) -> ChaCha8Rng {
    seed.map(ChaCha8Rng::seed_from_u64)
        .unwrap_or_else(|| league.config().rng())
}

/// Simulate a full season and its playoffs.
///
/// Returns the season summary (seeds, leaderboards, every playoff series and
/// the champion) as a JSON string.
#[pyfunction]
#[pyo3(signature = (league_json, schedule, seed = None))]
fn simulate_season(league_json: &str, schedule: &str, seed: Option<u64>) -> PyResult<String> {
    let league = League::from_json(league_json, load_config())?;
    let schedule = Schedule::parse(schedule)?;
    let mut state = LeagueState::new(&league);
    let mut rng = session_rng(&league, seed);
    let summary = season::simulate_season(&league, &mut state, &schedule, &mut rng)?;
    serde_json::to_string(&summary).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Result of a Monte Carlo matchup query.
#[pyclass(name = "OddsReport")]
pub struct PyOddsReport {
    report: OddsReport,
}

#[pymethods]
impl PyOddsReport {
    #[getter]
    fn away(&self) -> &str {
        &self.report.away
    }

    #[getter]
    fn home(&self) -> &str {
        &self.report.home
    }

    #[getter]
    fn trials(&self) -> usize {
        self.report.trials
    }

    #[getter]
    fn away_win_probability(&self) -> f64 {
        self.report.away_win_probability()
    }

    #[getter]
    fn home_win_probability(&self) -> f64 {
        self.report.home_win_probability()
    }

    /// Per-trial averages for one player, keyed by stat name.
    fn averages(&self, player: &str) -> Option<HashMap<&'static str, f64>> {
        self.report.averages(player).map(|averages| {
            StatCategory::ALL
                .iter()
                .map(|&category| (category.label(), averages.get(category)))
                .collect()
        })
    }

    /// `(qualifying, wins, probability)` for `team` given `player` scored at
    /// least `threshold`. Probability is `None` when nothing qualified.
    fn conditional(&self, team: &str, player: &str, threshold: u32) -> (usize, usize, Option<f64>) {
        let odds = self.report.conditional(team, player, threshold);
        (odds.qualifying, odds.wins, odds.probability())
    }

    fn __repr__(&self) -> String {
        format!(
            "OddsReport({} {:.3}, {} {:.3}, {} trials)",
            self.report.away,
            self.report.away_win_probability(),
            self.report.home,
            self.report.home_win_probability(),
            self.report.trials
        )
    }
}

/// Replay one matchup `trials` times.
#[pyfunction]
#[pyo3(signature = (league_json, date, away, home, trials = None, seed = None))]
fn estimate_odds(
    league_json: &str,
    date: &str,
    away: &str,
    home: &str,
    trials: Option<usize>,
    seed: Option<u64>,
) -> PyResult<PyOddsReport> {
    let league = League::from_json(league_json, load_config())?;
    let trials = trials.unwrap_or(league.config().trial_count);
    let mut rng = session_rng(&league, seed);
    let report = odds::estimate_odds(&league, date, away, home, trials, &mut rng)?;
    Ok(PyOddsReport { report })
}

#[pymodule]
fn hoops_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyOddsReport>()?;
    m.add_function(wrap_pyfunction!(simulate_season, m)?)?;
    m.add_function(wrap_pyfunction!(estimate_odds, m)?)?;
    Ok(())
}
