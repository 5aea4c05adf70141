use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::{RankingConfig, ScanConfig};
use crate::error::{ConfigError, Result};

/// Default TOML written by `vigorish config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# vigorish configuration

[scan]
# Stake each candidate wager is evaluated at.
stake = 100.0
# Points off the board mean for a price to count as a sharp outlier.
sharp_threshold = 15.0

[ranking]
boosted_books = ["DraftKings", "FanDuel"]
book_bonus = 2.0

[feed]
# Sport key for live scans, see the-odds-api.com sport list.
sport = "americanfootball_nfl"
# API key; falls back to the ODDS_API_KEY environment variable.
# api_key = ""

[logging]
level = "info"
format = "pretty"
"#;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub ranking: RankingConfig,
    pub feed: FeedConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Sport key used for live scans.
    pub sport: String,
    /// Odds-feed API key; the `ODDS_API_KEY` environment variable is the
    /// fallback.
    pub api_key: Option<String>,
}

impl FeedConfig {
    /// The configured API key, falling back to `ODDS_API_KEY`.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("ODDS_API_KEY").ok())
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            sport: "americanfootball_nfl".into(),
            api_key: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    /// Load and validate a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.scan.stake.is_finite() || self.scan.stake <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "scan.stake",
                reason: format!("must be positive, got {}", self.scan.stake),
            }
            .into());
        }
        if !self.scan.sharp_threshold.is_finite() || self.scan.sharp_threshold <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "scan.sharp_threshold",
                reason: format!("must be positive, got {}", self.scan.sharp_threshold),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }
        if self.feed.sport.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "feed.sport",
                reason: "cannot be empty".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber with the configured settings.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
