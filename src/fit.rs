//! Reduce per-game lines to profile parameters.

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::box_score::BoxScore;
use crate::constants::MAX_RATE_DENOMINATOR;
use crate::profile::{NormalParams, PlayerProfile, RateParams};

/// One game from a player's history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameLine {
    pub minutes: f64,
    pub two_pt_made: u32,
    pub two_pt_attempts: u32,
    pub three_pt_made: u32,
    pub three_pt_attempts: u32,
    pub free_throws_made: u32,
    pub free_throw_attempts: u32,
    pub assists: u32,
    pub rebounds: u32,
    pub steals: u32,
    pub blocks: u32,
}

impl From<&BoxScore> for GameLine {
    fn from(line: &BoxScore) -> Self {
        GameLine {
            minutes: line.minutes,
            two_pt_made: line.two_pt_made,
            two_pt_attempts: line.two_pt_attempts,
            three_pt_made: line.three_pt_made,
            three_pt_attempts: line.three_pt_attempts,
            free_throws_made: line.free_throws_made,
            free_throw_attempts: line.free_throw_attempts,
            assists: line.assists,
            rebounds: line.rebounds,
            steals: line.steals,
            blocks: line.blocks,
        }
    }
}

/// Mean and population standard deviation of `samples`.
///
/// No samples, or a zero mean, gives [`NormalParams::UNINFORMATIVE`].
pub fn fit_normal(samples: &[f64]) -> NormalParams {
    if samples.is_empty() {
        return NormalParams::UNINFORMATIVE;
    }
    let mean = samples.iter().mean();
    if mean == 0.0 {
        return NormalParams::UNINFORMATIVE;
    }
    NormalParams::new(mean, samples.iter().population_std_dev())
}

/// Pseudo-counts for a make rate.
///
/// `made / attempts` is reduced to the closest fraction `n / d` with
/// `d <= 30`, giving `(1 + n, 1 + d - n)`. Without attempts the prior is
/// returned unchanged. Makes beyond `attempts` are clamped.
pub fn fit_rate(made: u64, attempts: u64, prior: RateParams) -> RateParams {
    if attempts == 0 {
        return prior;
    }
    let (n, d) = limit_denominator(made.min(attempts), attempts, MAX_RATE_DENOMINATOR);
    RateParams::new(1.0 + n as f64, 1.0 + (d - n) as f64)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Best rational approximation of `num / den` with denominator at most
/// `max_den`, via continued fraction convergents and semiconvergents.
/// Ties go to the convergent.
fn limit_denominator(num: u64, den: u64, max_den: u64) -> (u64, u64) {
    let g = gcd(num, den);
    let (num, den) = (num / g, den / g);
    if den <= max_den {
        return (num, den);
    }

    let (mut p0, mut q0, mut p1, mut q1) = (0u64, 1u64, 1u64, 0u64);
    let (mut n, mut d) = (num, den);
    loop {
        let a = n / d;
        let q2 = q0 + a * q1;
        if q2 > max_den {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
        (n, d) = (d, n - a * d);
    }

    let k = (max_den - q0) / q1;
    let (bound_p, bound_q) = (p0 + k * p1, q0 + k * q1);
    let error = |p: u64, q: u64| (p as i128 * den as i128 - num as i128 * q as i128).abs();
    if error(p1, q1) * bound_q as i128 <= error(bound_p, bound_q) * q1 as i128 {
        (p1, q1)
    } else {
        (bound_p, bound_q)
    }
}

/// Build a profile from a player's game history.
///
/// Current minutes are the mean minutes played; `previous_minutes` defaults
/// to the same value, giving a minutes scale of 1.
pub fn fit_profile(lines: &[GameLine], previous_minutes: Option<f64>) -> PlayerProfile {
    let column = |f: fn(&GameLine) -> f64| -> Vec<f64> { lines.iter().map(f).collect() };
    let total = |f: fn(&GameLine) -> u32| -> u64 { lines.iter().map(|l| f(l) as u64).sum() };

    let minutes = column(|l| l.minutes);
    let current_minutes = if minutes.is_empty() {
        0.0
    } else {
        minutes.iter().mean()
    };

    PlayerProfile {
        two_pt_attempts: fit_normal(&column(|l| l.two_pt_attempts as f64)),
        three_pt_attempts: fit_normal(&column(|l| l.three_pt_attempts as f64)),
        free_throw_attempts: fit_normal(&column(|l| l.free_throw_attempts as f64)),
        two_pt_make: fit_rate(
            total(|l| l.two_pt_made),
            total(|l| l.two_pt_attempts),
            RateParams::TWO_POINT_PRIOR,
        ),
        three_pt_make: fit_rate(
            total(|l| l.three_pt_made),
            total(|l| l.three_pt_attempts),
            RateParams::THREE_POINT_PRIOR,
        ),
        free_throw_make: fit_rate(
            total(|l| l.free_throws_made),
            total(|l| l.free_throw_attempts),
            RateParams::FREE_THROW_PRIOR,
        ),
        assists: fit_normal(&column(|l| l.assists as f64)),
        rebounds: fit_normal(&column(|l| l.rebounds as f64)),
        steals: fit_normal(&column(|l| l.steals as f64)),
        blocks: fit_normal(&column(|l| l.blocks as f64)),
        current_minutes,
        previous_minutes: previous_minutes.unwrap_or(current_minutes),
    }
}
