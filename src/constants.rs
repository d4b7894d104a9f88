/// All 30 franchise codes, in league order
pub const TEAMS: [&str; 30] = [
    "ATL", "BOS", "BRK", "CHI", "CHO", "CLE", "DAL", "DEN", "DET", "GSW", "HOU", "IND", "LAC",
    "LAL", "MEM", "MIA", "MIL", "MIN", "NOP", "NYK", "OKC", "ORL", "PHI", "PHO", "POR", "SAC",
    "SAS", "TOR", "UTA", "WAS",
];

/// Eastern conference, in standings order before any games are played
pub const EAST_CONF: [&str; 15] = [
    "ATL", "BOS", "BRK", "CHI", "CHO", "CLE", "DET", "IND", "MIA", "MIL", "NYK", "ORL", "PHI",
    "TOR", "WAS",
];

/// Western conference, in standings order before any games are played
pub const WEST_CONF: [&str; 15] = [
    "DAL", "DEN", "GSW", "HOU", "LAC", "LAL", "MEM", "MIN", "NOP", "OKC", "PHO", "POR", "SAC",
    "SAS", "UTA",
];

/// League-average field goal attempts per team per 48 minutes
pub const PACE: u32 = 84;

/// Regular season length; league leader averages divide by this
pub const SEASON_GAMES: u32 = 82;

/// Minutes in a regulation game
pub const REGULATION_MINUTES: f64 = 48.0;

/// Minutes in an overtime (short) period
pub const SHORT_PERIOD_MINUTES: f64 = 5.0;

/// Fraction of a full game covered by one short period
pub const SHORT_PERIOD_FRACTION: f64 = SHORT_PERIOD_MINUTES / REGULATION_MINUTES;

/// Minute scales above this are replaced by their natural log
pub const MINUTES_DAMPEN_THRESHOLD: f64 = 1.5;

/// Wins needed to take a best-of-seven series
pub const WINS_TO_ADVANCE: u32 = 4;

/// Playoff teams per conference
pub const PLAYOFF_SEEDS: usize = 8;

/// Default number of Monte Carlo trials per odds query
pub const DEFAULT_TRIALS: usize = 1000;

/// Largest mean or spread a profile distribution may have
pub const MAX_PROFILE_VALUE: f64 = 1e6;

/// Overtime periods allowed before a game is declared broken
pub const MAX_OVERTIME_PERIODS: u32 = 100;

/// Roster sweeps allowed while chasing the pace target
pub const MAX_PACE_SWEEPS: u32 = 500;

/// Players listed per league leader category
pub const LEADERBOARD_SIZE: usize = 10;

/// Largest denominator kept when reducing a shooting percentage to pseudo-counts
pub const MAX_RATE_DENOMINATOR: u64 = 30;
