use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LeagueError, Result};
use crate::game_log::matchup_label;
use crate::team::check_team;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledGame {
    pub date: String,
    pub away: String,
    pub home: String,
}

impl ScheduledGame {
    pub fn matchup(&self) -> String {
        matchup_label(&self.away, &self.home)
    }
}

/// Regular season matchups in playing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    games: Vec<ScheduledGame>,
}

impl Schedule {
    pub fn new(games: Vec<ScheduledGame>) -> Result<Self> {
        for game in &games {
            check_team(&game.away)?;
            check_team(&game.home)?;
        }
        Ok(Schedule { games })
    }

    /// Parse one game per line: `2022-10-18: PHI @ BOS`.
    ///
    /// The token between the team codes is ignored. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut games = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if let Some(game) = parse_line(i + 1, line)? {
                games.push(game);
            }
        }
        Ok(Schedule { games })
    }

    pub fn read_from_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let mut games = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            if let Some(game) = parse_line(i + 1, &line?)? {
                games.push(game);
            }
        }
        Ok(Schedule { games })
    }

    pub fn games(&self) -> &[ScheduledGame] {
        &self.games
    }

    /// Matchups on one date, in schedule order.
    pub fn games_on(&self, date: &str) -> Vec<&ScheduledGame> {
        self.games.iter().filter(|g| g.date == date).collect()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

fn parse_line(number: usize, line: &str) -> Result<Option<ScheduledGame>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let malformed = || LeagueError::MalformedSchedule {
        line: number,
        content: line.to_string(),
    };
    let (date, matchup) = line.split_once(':').ok_or_else(malformed)?;
    let teams: Vec<&str> = matchup.split_whitespace().collect();
    let (away, home) = match teams.as_slice() {
        [away, _, home] | [away, home] => (*away, *home),
        _ => return Err(malformed()),
    };
    let date = date.trim();
    if date.is_empty() {
        return Err(malformed());
    }

    check_team(away)?;
    check_team(home)?;
    Ok(Some(ScheduledGame {
        date: date.to_string(),
        away: away.to_string(),
        home: home.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "2022-10-18: PHI @ BOS\n2022-10-18: LAL @ GSW\n\n2022-10-19: ORL @ DET\n";

    #[test]
    fn test_parse_schedule() {
        let schedule = Schedule::parse(SAMPLE).unwrap();
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.games()[0].away, "PHI");
        assert_eq!(schedule.games()[0].home, "BOS");
        assert_eq!(schedule.games()[2].date, "2022-10-19");

        let opening_night = schedule.games_on("2022-10-18");
        let matchups: Vec<String> = opening_night.iter().map(|g| g.matchup()).collect();
        assert_eq!(matchups, vec!["PHI v. BOS", "LAL v. GSW"]);
    }

    #[test]
    fn test_unknown_team_fails_fast() {
        let result = Schedule::parse("2022-10-18: PHI @ SEA");
        assert!(matches!(result, Err(LeagueError::UnknownTeam(code)) if code == "SEA"));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let result = Schedule::parse("2022-10-18: PHI @ BOS\nPHI at BOS tonight\n");
        assert!(matches!(result, Err(LeagueError::MalformedSchedule { line: 2, .. })));
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let schedule = Schedule::read_from_file(file.path()).unwrap();
        assert_eq!(schedule, Schedule::parse(SAMPLE).unwrap());
    }

    #[test]
    fn test_new_validates_codes() {
        let game = ScheduledGame {
            date: "2023-01-01".to_string(),
            away: "BOS".to_string(),
            home: "XXX".to_string(),
        };
        assert!(Schedule::new(vec![game]).is_err());
    }
}
