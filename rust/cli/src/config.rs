//! Layered configuration: defaults, then the TOML file named by
//! `HEADSUP_CONFIG`, then `HEADSUP_*` environment overrides. Command-line
//! flags are applied on top by the commands themselves.

use std::fs;

use headsup_engine::player::{BIG_BLIND, STARTING_STACK};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const CONFIG_ENV: &str = "HEADSUP_CONFIG";
pub const SEED_ENV: &str = "HEADSUP_SEED";
pub const STACK_ENV: &str = "HEADSUP_STACK";
pub const NAME_ENV: &str = "HEADSUP_NAME";
pub const EXCLUDE_BOARD_ENV: &str = "HEADSUP_EXCLUDE_BOARD";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub seed: Option<u64>,
    pub player_name: String,
    /// Strength enumeration leaves the board cards out of the candidate hands
    pub exclude_board: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            seed: None,
            player_name: "Player".into(),
            exclude_board: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub seed: ValueSource,
    pub player_name: ValueSource,
    pub exclude_board: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            seed: ValueSource::Default,
            player_name: ValueSource::Default,
            exclude_board: ValueSource::Default,
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

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        debug!(path, "reading config file");
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.player_name {
            cfg.player_name = v;
            sources.player_name = ValueSource::File;
        }
        if let Some(v) = f.exclude_board {
            cfg.exclude_board = v;
            sources.exclude_board = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var(STACK_ENV)
        && !stack.is_empty()
    {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid starting stack '{}'", stack)))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(name) = std::env::var(NAME_ENV)
        && !name.is_empty()
    {
        cfg.player_name = name;
        sources.player_name = ValueSource::Env;
    }
    if let Ok(flag) = std::env::var(EXCLUDE_BOARD_ENV)
        && !flag.is_empty()
    {
        cfg.exclude_board = parse_bool(&flag)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid exclude_board '{}'", flag)))?;
        sources.exclude_board = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    player_name: Option<String>,
    #[serde(default)]
    exclude_board: Option<bool>,
}

/// Checks values from any layer, including command-line overrides.
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack < BIG_BLIND {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_stack must be at least the big blind ({})",
            BIG_BLIND
        )));
    }
    if cfg.player_name.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player_name must not be empty".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
