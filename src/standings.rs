use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LeagueError, Result};
use crate::team::Conference;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

/// A team's place in the playoff seeding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub team: String,
    pub record: Record,
}

/// Regular season win/loss records per conference.
///
/// Teams stay in pre-season order; [`Standings::seeds`] produces the sorted view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    east: Vec<(String, Record)>,
    west: Vec<(String, Record)>,
}

impl Default for Standings {
    fn default() -> Self {
        Standings::new()
    }
}

impl Standings {
    /// Every league team at 0-0.
    pub fn new() -> Self {
        let blank = |conference: Conference| {
            conference
                .teams()
                .iter()
                .map(|t| (t.to_string(), Record::default()))
                .collect()
        };
        Standings {
            east: blank(Conference::East),
            west: blank(Conference::West),
        }
    }

    pub fn conference(&self, conference: Conference) -> &[(String, Record)] {
        match conference {
            Conference::East => &self.east,
            Conference::West => &self.west,
        }
    }

    fn entry_mut(&mut self, team: &str) -> Result<&mut Record> {
        let conference =
            Conference::of(team).ok_or_else(|| LeagueError::UnknownTeam(team.to_string()))?;
        let table = match conference {
            Conference::East => &mut self.east,
            Conference::West => &mut self.west,
        };
        table
            .iter_mut()
            .find(|(t, _)| t == team)
            .map(|(_, record)| record)
            .ok_or_else(|| LeagueError::UnknownTeam(team.to_string()))
    }

    /// Credit a regular season result.
    pub fn record_result(&mut self, winner: &str, loser: &str) -> Result<()> {
        self.entry_mut(winner)?.wins += 1;
        self.entry_mut(loser)?.losses += 1;
        Ok(())
    }

    pub fn record(&self, team: &str) -> Option<Record> {
        let conference = Conference::of(team)?;
        self.conference(conference)
            .iter()
            .find(|(t, _)| t == team)
            .map(|(_, record)| *record)
    }

    /// Conference teams by wins, most first. Equal records keep pre-season order.
    pub fn seeds(&self, conference: Conference) -> Vec<Seed> {
        let mut seeds: Vec<Seed> = self
            .conference(conference)
            .iter()
            .map(|(team, record)| Seed {
                team: team.clone(),
                record: *record,
            })
            .collect();
        seeds.sort_by(|a, b| b.record.wins.cmp(&a.record.wins));
        seeds
    }

    pub fn total_games(&self) -> u32 {
        self.east.iter().chain(self.west.iter()).map(|(_, r)| r.wins).sum()
    }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for conference in Conference::ALL {
            writeln!(f, "{}", conference)?;
            for (i, seed) in self.seeds(conference).iter().enumerate() {
                writeln!(
                    f,
                    "{}. {} ({} - {})",
                    i + 1,
                    seed.team,
                    seed.record.wins,
                    seed.record.losses
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_update_both_conferences() {
        let mut standings = Standings::new();
        standings.record_result("BOS", "LAL").unwrap();
        standings.record_result("BOS", "MIA").unwrap();
        assert_eq!(standings.record("BOS"), Some(Record { wins: 2, losses: 0 }));
        assert_eq!(standings.record("LAL"), Some(Record { wins: 0, losses: 1 }));
        assert_eq!(standings.record("MIA"), Some(Record { wins: 0, losses: 1 }));
        assert_eq!(standings.total_games(), 2);
    }

    #[test]
    fn test_unknown_team_rejected() {
        let mut standings = Standings::new();
        assert!(standings.record_result("BOS", "SEA").is_err());
        assert_eq!(standings.record("SEA"), None);
    }

    #[test]
    fn test_seeds_sorted_stably() {
        let mut standings = Standings::new();
        standings.record_result("TOR", "ATL").unwrap();
        standings.record_result("CHI", "ATL").unwrap();
        standings.record_result("CHI", "WAS").unwrap();

        let seeds = standings.seeds(Conference::East);
        assert_eq!(seeds.len(), 15);
        assert_eq!(seeds[0].team, "CHI");
        // TOR and every 0-win team keep pre-season order behind the leader
        assert_eq!(seeds[1].team, "TOR");
        assert_eq!(seeds[2].team, "ATL");
        assert_eq!(seeds[3].team, "BOS");
    }

    #[test]
    fn test_display_rows() {
        let mut standings = Standings::new();
        standings.record_result("DEN", "UTA").unwrap();
        let text = standings.to_string();
        assert!(text.contains("WEST\n1. DEN (1 - 0)"));
    }
}
