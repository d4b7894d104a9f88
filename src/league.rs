use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::config::SimConfig;
use crate::error::{LeagueError, Result};
use crate::team::{check_team, Roster};

/// On-disk shape of a league file.
#[derive(Serialize, Deserialize)]
struct LeagueFile {
    teams: Vec<Roster>,
}

/// Known team codes, one roster per team, unique player names and usable
/// profiles.
fn validate_rosters(rosters: &[Roster]) -> Result<()> {
    let mut teams = HashSet::new();
    let mut players = HashSet::new();
    for roster in rosters {
        check_team(&roster.code)?;
        if !teams.insert(roster.code.as_str()) {
            return Err(LeagueError::DuplicateRoster(roster.code.clone()));
        }
        for entry in &roster.players {
            if !players.insert(entry.name.as_str()) {
                return Err(LeagueError::DuplicatePlayer(entry.name.clone()));
            }
            entry.profile.validate(&entry.name)?;
        }
    }
    Ok(())
}

/// Rosters and settings shared by every simulation session.
///
/// Read-only once built; session results live in a separate
/// [`LeagueState`](crate::state::LeagueState).
#[derive(Clone, Debug)]
pub struct League {
    rosters: Vec<Roster>,
    config: SimConfig,
}

impl League {
    /// Fails fast on rosters the simulator cannot use.
    pub fn new(rosters: Vec<Roster>, config: SimConfig) -> Result<Self> {
        validate_rosters(&rosters)?;
        Ok(League { rosters, config })
    }

    pub fn from_json(json: &str, config: SimConfig) -> Result<Self> {
        let file: LeagueFile = serde_json::from_str(json)?;
        League::new(file.teams, config)
    }

    pub fn load_json(path: &Path, config: SimConfig) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let league = League::from_json(&json, config)?;
        info!(
            "Loaded {} rosters ({} players) from {}",
            league.rosters.len(),
            league.player_count(),
            path.display()
        );
        Ok(league)
    }

    pub fn to_json(&self) -> Result<String> {
        let file = LeagueFile {
            teams: self.rosters.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn rosters(&self) -> impl Iterator<Item = &Roster> {
        self.rosters.iter()
    }

    pub fn roster(&self, team: &str) -> Result<&Roster> {
        check_team(team)?;
        self.rosters
            .iter()
            .find(|r| r.code == team)
            .ok_or_else(|| LeagueError::MissingRoster(team.to_string()))
    }

    pub fn player_count(&self) -> usize {
        self.rosters.iter().map(|r| r.len()).sum()
    }
}
