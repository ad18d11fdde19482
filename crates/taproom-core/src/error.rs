use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Insufficient funds: need ${needed}, have ${available}")]
    InsufficientFunds { needed: u64, available: u64 },

    #[error("{name} is already at max level ({max})")]
    MaxLevelReached { name: String, max: u32 },

    #[error("Beer already unlocked: {0}")]
    AlreadyUnlocked(String),

    #[error("Unknown upgrade: {0}")]
    InvalidUpgradeReference(String),

    #[error("Unknown beer: {0}")]
    InvalidBeerReference(String),

    #[error("Beer is locked: {0}")]
    BeerLocked(String),

    #[error("Invalid thresholds: perfect {perfect} < good {good} < bad {bad} does not hold")]
    InvalidThresholds { bad: f64, good: f64, perfect: f64 },

    #[error("Invalid pour distance: {0}")]
    InvalidDistance(f64),

    #[error("No run in progress")]
    NoActiveRun,

    #[error("Run is over")]
    RunOver,

    #[error("Shop is open")]
    ShopOpen,

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.message().to_string())
    }
}
