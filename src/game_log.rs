use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::box_score::BoxScore;

/// Label of a matchup inside one date's logs, e.g. `"PHI v. BOS"`.
pub fn matchup_label(away: &str, home: &str) -> String {
    format!("{} v. {}", away, home)
}

/// Every player line one team recorded in a game, in order of appearance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamBox {
    pub team: String,
    pub players: Vec<(String, BoxScore)>,
}

impl TeamBox {
    pub fn new(team: &str) -> Self {
        TeamBox {
            team: team.to_string(),
            players: Vec::new(),
        }
    }

    pub fn player(&self, name: &str) -> Option<&BoxScore> {
        self.players.iter().find(|(n, _)| n == name).map(|(_, line)| line)
    }

    pub fn player_mut(&mut self, name: &str) -> Option<&mut BoxScore> {
        self.players
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, line)| line)
    }

    /// Add a stretch of play: a first appearance is recorded as-is, later
    /// ones accumulate into the existing line.
    pub fn add(&mut self, name: &str, line: BoxScore) {
        match self.player_mut(name) {
            Some(existing) => existing.accumulate(&line),
            None => self.players.push((name.to_string(), line)),
        }
    }

    pub fn points(&self) -> u32 {
        self.players.iter().map(|(_, line)| line.points).sum()
    }
}

/// One finished game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameLog {
    pub away: TeamBox,
    pub home: TeamBox,
    pub overtime_periods: u32,
    /// Summary such as `"PHI 112 - BOS 108 OT1"`
    pub result: String,
}

impl GameLog {
    pub fn new(away: TeamBox, home: TeamBox, overtime_periods: u32) -> Self {
        let overtime = if overtime_periods > 0 {
            format!(" OT{}", overtime_periods)
        } else {
            String::new()
        };
        let result = format!(
            "{} {} - {} {}{}",
            away.team,
            away.points(),
            home.team,
            home.points(),
            overtime
        );
        GameLog {
            away,
            home,
            overtime_periods,
            result,
        }
    }

    pub fn matchup(&self) -> String {
        matchup_label(&self.away.team, &self.home.team)
    }

    pub fn away_score(&self) -> u32 {
        self.away.points()
    }

    pub fn home_score(&self) -> u32 {
        self.home.points()
    }

    pub fn team(&self, team: &str) -> Option<&TeamBox> {
        if self.away.team == team {
            Some(&self.away)
        } else if self.home.team == team {
            Some(&self.home)
        } else {
            None
        }
    }

    pub fn winner(&self) -> &str {
        if self.away_score() > self.home_score() {
            &self.away.team
        } else {
            &self.home.team
        }
    }
}

/// Game logs of one simulation session, keyed by date (or trial/series
/// label) and then by matchup label.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameLogs {
    games: BTreeMap<String, BTreeMap<String, GameLog>>,
}

impl GameLogs {
    pub fn new() -> Self {
        GameLogs::default()
    }

    /// Store a game, replacing any earlier game with the same label and matchup.
    pub fn insert(&mut self, label: &str, log: GameLog) {
        self.games
            .entry(label.to_string())
            .or_default()
            .insert(log.matchup(), log);
    }

    pub fn get(&self, label: &str, matchup: &str) -> Option<&GameLog> {
        self.games.get(label)?.get(matchup)
    }

    /// All games under one label, by matchup.
    pub fn on(&self, label: &str) -> impl Iterator<Item = &GameLog> {
        self.games.get(label).into_iter().flat_map(|day| day.values())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.games.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GameLog)> {
        self.games
            .iter()
            .flat_map(|(label, day)| day.values().map(move |log| (label.as_str(), log)))
    }

    pub fn len(&self) -> usize {
        self.games.values().map(|day| day.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }
}
