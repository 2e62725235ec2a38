//! Layered session configuration: defaults, then a TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables. Command-line flags
//! are applied on top by the individual commands.

use std::fmt;
use std::fs;

use holdem_ai::AiKind;
use holdem_engine::engine::{MAX_SEATS, TableConfig};
use holdem_engine::player::STARTING_STACK;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub players: usize,
    pub seed: Option<u64>,
    /// Policy for AI seats
    pub ai: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            small_blind: 10,
            big_blind: 20,
            players: 2,
            seed: None,
            ai: "baseline".into(),
        }
    }
}

impl Config {
    /// Table for a session: seat 0 is "You" (human unless `all_ai`), the
    /// rest are AI seats.
    pub fn table(&self, players: usize, seed: u64, all_ai: bool) -> TableConfig {
        let mut table = TableConfig::with_players(players, self.starting_stack)
            .with_blinds(self.small_blind, self.big_blind)
            .with_seed(seed);
        if all_ai && let Some(seat) = table.seats.first_mut() {
            seat.name = "AI-0".into();
            seat.is_human = false;
        }
        table
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub players: ValueSource,
    pub seed: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            players: ValueSource::Default,
            seed: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
}

/// Resolves the layers with `env` standing in for the process environment.
fn resolve(env: impl Fn(&str) -> Option<String>) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env("HOLDEM_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(seed) = env("HOLDEM_SEED") {
        cfg.seed = Some(parse_env("HOLDEM_SEED", &seed)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(stack) = env("HOLDEM_STACK") {
        cfg.starting_stack = parse_env("HOLDEM_STACK", &stack)?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(players) = env("HOLDEM_PLAYERS") {
        cfg.players = parse_env("HOLDEM_PLAYERS", &players)?;
        sources.players = ValueSource::Env;
    }
    if let Some(ai) = env("HOLDEM_AI") {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{} has an invalid value '{}'", key, value)))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid("starting_stack must be > 0".into()));
    }
    if cfg.small_blind == 0 || cfg.big_blind < cfg.small_blind {
        return Err(ConfigError::Invalid(format!(
            "blinds must satisfy 0 < small_blind ({}) <= big_blind ({})",
            cfg.small_blind, cfg.big_blind
        )));
    }
    if !(2..=MAX_SEATS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "players must be between 2 and {}",
            MAX_SEATS
        )));
    }
    cfg.ai
        .parse::<AiKind>()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(())
}
