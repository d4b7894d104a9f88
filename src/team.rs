use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{EAST_CONF, TEAMS, WEST_CONF};
use crate::error::{LeagueError, Result};
use crate::profile::PlayerProfile;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Conference {
    East,
    West,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::East, Conference::West];

    /// Conference of a team code, or `None` for codes outside the league.
    pub fn of(team: &str) -> Option<Conference> {
        if EAST_CONF.contains(&team) {
            Some(Conference::East)
        } else if WEST_CONF.contains(&team) {
            Some(Conference::West)
        } else {
            None
        }
    }

    /// Member codes in their pre-season order.
    pub fn teams(self) -> &'static [&'static str] {
        match self {
            Conference::East => &EAST_CONF,
            Conference::West => &WEST_CONF,
        }
    }

    /// Prefix of this conference's playoff round labels.
    pub fn round_prefix(self) -> &'static str {
        match self {
            Conference::East => "EC",
            Conference::West => "WC",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conference::East => write!(f, "EAST"),
            Conference::West => write!(f, "WEST"),
        }
    }
}

/// Fail unless `team` is one of the 30 league codes.
pub fn check_team(team: &str) -> Result<()> {
    if TEAMS.contains(&team) {
        Ok(())
    } else {
        Err(LeagueError::UnknownTeam(team.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub profile: PlayerProfile,
}

/// One team's players, in rotation order.
///
/// Rotation order is the order players are swept when simulating a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub code: String,
    pub players: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(code: &str) -> Self {
        Roster {
            code: code.to_string(),
            players: Vec::new(),
        }
    }

    /// Builder-style helper for appending a player.
    pub fn with_player(mut self, name: &str, profile: PlayerProfile) -> Self {
        self.players.push(RosterEntry {
            name: name.to_string(),
            profile,
        });
        self
    }

    pub fn player(&self, name: &str) -> Option<&PlayerProfile> {
        self.players.iter().find(|p| p.name == name).map(|p| &p.profile)
    }

    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
