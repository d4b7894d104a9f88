use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Unknown team code: {0}")]
    UnknownTeam(String),

    #[error("No roster loaded for team {0}")]
    MissingRoster(String),

    #[error("Duplicate roster for team {0}")]
    DuplicateRoster(String),

    #[error("Player {0} appears on more than one roster")]
    DuplicatePlayer(String),

    #[error("Invalid profile for {player}: {reason}")]
    InvalidProfile { player: String, reason: String },

    #[error("Malformed schedule line {line}: {content}")]
    MalformedSchedule { line: usize, content: String },

    #[error("Team {0} cannot play itself")]
    SameTeam(String),

    #[error("Conference {conference} has {found} seeds, the bracket needs 8")]
    InsufficientSeeds { conference: String, found: usize },

    #[error("Game {label} still tied after {periods} overtime periods")]
    OvertimeLimitExceeded { label: String, periods: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LeagueError>;
