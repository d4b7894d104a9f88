use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::box_score::{BoxScore, StatCategory};

/// Running per-game averages for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatAverages {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
}

impl StatAverages {
    pub fn get(&self, category: StatCategory) -> f64 {
        match category {
            StatCategory::Points => self.points,
            StatCategory::Rebounds => self.rebounds,
            StatCategory::Assists => self.assists,
            StatCategory::Steals => self.steals,
            StatCategory::Blocks => self.blocks,
        }
    }

    fn get_mut(&mut self, category: StatCategory) -> &mut f64 {
        match category {
            StatCategory::Points => &mut self.points,
            StatCategory::Rebounds => &mut self.rebounds,
            StatCategory::Assists => &mut self.assists,
            StatCategory::Steals => &mut self.steals,
            StatCategory::Blocks => &mut self.blocks,
        }
    }

    /// Add `value / denominator` to one category.
    pub fn accumulate(&mut self, category: StatCategory, value: f64, denominator: f64) {
        *self.get_mut(category) += value / denominator;
    }

    pub fn scaled(&self, factor: f64) -> StatAverages {
        StatAverages {
            points: self.points * factor,
            rebounds: self.rebounds * factor,
            assists: self.assists * factor,
            steals: self.steals * factor,
            blocks: self.blocks * factor,
        }
    }
}

/// League leader accumulator.
///
/// Each game adds `stat / denominator` per player, so after exactly
/// `denominator` games the value is the per-game average. A caller that ran a
/// different number of games converts with [`LeagueLeaders::rescale`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueLeaders {
    /// Registration order
    players: Vec<(String, StatAverages)>,
    index: HashMap<String, usize>,
}

impl LeagueLeaders {
    pub fn new() -> Self {
        LeagueLeaders::default()
    }

    fn entry_mut(&mut self, player: &str) -> &mut StatAverages {
        let i = match self.index.get(player) {
            Some(&i) => i,
            None => {
                let i = self.players.len();
                self.players.push((player.to_string(), StatAverages::default()));
                self.index.insert(player.to_string(), i);
                i
            }
        };
        &mut self.players[i].1
    }

    /// Start tracking a player at zero.
    pub fn register(&mut self, player: &str) {
        self.entry_mut(player);
    }

    pub fn accumulate(&mut self, player: &str, line: &BoxScore, denominator: f64) {
        let averages = self.entry_mut(player);
        for category in StatCategory::ALL {
            averages.accumulate(category, line.stat(category) as f64, denominator);
        }
    }

    /// Multiply every tracked value by `factor`.
    pub fn rescale(&mut self, factor: f64) {
        for (_, averages) in self.players.iter_mut() {
            *averages = averages.scaled(factor);
        }
    }

    pub fn get(&self, player: &str) -> Option<&StatAverages> {
        self.index.get(player).map(|&i| &self.players[i].1)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All players, best first in `category`. Ties keep registration order.
    pub fn ranked(&self, category: StatCategory) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .players
            .iter()
            .map(|(name, averages)| (name.as_str(), averages.get(category)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    pub fn top(&self, category: StatCategory, n: usize) -> Vec<(&str, f64)> {
        let mut ranked = self.ranked(category);
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: u32, rebounds: u32) -> BoxScore {
        BoxScore {
            points,
            rebounds,
            ..BoxScore::default()
        }
    }

    #[test]
    fn test_constant_season_averages_to_constant() {
        let mut leaders = LeagueLeaders::new();
        for _ in 0..82 {
            leaders.accumulate("Scorer", &line(27, 8), 82.0);
        }
        let averages = leaders.get("Scorer").unwrap();
        assert!((averages.points - 27.0).abs() < 1e-9);
        assert!((averages.rebounds - 8.0).abs() < 1e-9);
        assert_eq!(averages.assists, 0.0);
    }

    #[test]
    fn test_trial_rescale_recovers_average() {
        let trials = 1000;
        let mut leaders = LeagueLeaders::new();
        for _ in 0..trials {
            leaders.accumulate("Scorer", &line(31, 0), 82.0);
        }
        leaders.rescale(82.0 / trials as f64);
        assert!((leaders.get("Scorer").unwrap().points - 31.0).abs() < 1e-9);
    }

    #[test]
    fn test_ranked_descending_with_stable_ties() {
        let mut leaders = LeagueLeaders::new();
        leaders.register("Bench");
        leaders.accumulate("Guard", &line(20, 2), 1.0);
        leaders.accumulate("Center", &line(20, 12), 1.0);
        leaders.accumulate("Wing", &line(25, 5), 1.0);

        let points = leaders.ranked(StatCategory::Points);
        let names: Vec<&str> = points.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Wing", "Guard", "Center", "Bench"]);

        let top = leaders.top(StatCategory::Rebounds, 1);
        assert_eq!(top, vec![("Center", 12.0)]);
    }

    #[test]
    fn test_ties_keep_registration_order() {
        let mut leaders = LeagueLeaders::new();
        for name in ["Zed", "Abe", "Moe"] {
            leaders.register(name);
        }
        leaders.accumulate("Abe", &line(0, 4), 82.0);

        let names: Vec<&str> = leaders
            .ranked(StatCategory::Points)
            .iter()
            .map(|(n, _)| *n)
            .collect();
        assert_eq!(names, vec!["Zed", "Abe", "Moe"]);

        let rebounds: Vec<&str> = leaders
            .ranked(StatCategory::Rebounds)
            .iter()
            .map(|(n, _)| *n)
            .collect();
        assert_eq!(rebounds, vec!["Abe", "Zed", "Moe"]);
        assert_eq!(leaders.len(), 3);
    }
}
