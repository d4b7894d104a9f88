use serde::{Deserialize, Serialize};

use crate::game_log::GameLogs;
use crate::leaders::LeagueLeaders;
use crate::league::League;
use crate::standings::Standings;

/// Mutable results of one simulation session.
///
/// A full season and an odds query each get their own instance so their
/// standings, leader averages and logs never mix.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueState {
    pub standings: Standings,
    pub leaders: LeagueLeaders,
    pub game_logs: GameLogs,
}

impl LeagueState {
    /// Blank standings and a zeroed leader entry for every rostered player.
    pub fn new(league: &League) -> Self {
        let mut leaders = LeagueLeaders::new();
        for roster in league.rosters() {
            for name in roster.player_names() {
                leaders.register(name);
            }
        }
        LeagueState {
            standings: Standings::new(),
            leaders,
            game_logs: GameLogs::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_new_state_tracks_every_player() {
        let league = fixtures::two_team_league();
        let state = LeagueState::new(&league);
        let players: usize = league.rosters().map(|r| r.len()).sum();
        assert_eq!(state.leaders.len(), players);
        assert_eq!(state.standings.total_games(), 0);
        assert!(state.game_logs.is_empty());
    }
}
