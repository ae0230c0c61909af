use serde::{Deserialize, Serialize};
use std::fs;

use tongits_ai::AI_TYPES;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub player_name: String,
    pub ai: String,
    pub bot_delay_ms: u64,
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
    pub seed: ValueSource,
    pub player_name: ValueSource,
    pub ai: ValueSource,
    pub bot_delay_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            player_name: ValueSource::Default,
            ai: ValueSource::Default,
            bot_delay_ms: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            player_name: "You".into(),
            ai: "baseline".into(),
            bot_delay_ms: 0,
        }
    }
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

    if let Ok(path) = std::env::var("TONGITS_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.player_name {
            cfg.player_name = v;
            sources.player_name = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
        if let Some(v) = f.bot_delay_ms {
            cfg.bot_delay_ms = v;
            sources.bot_delay_ms = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("TONGITS_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(name) = std::env::var("TONGITS_PLAYER_NAME")
        && !name.is_empty()
    {
        cfg.player_name = name;
        sources.player_name = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var("TONGITS_AI")
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }
    if let Ok(delay) = std::env::var("TONGITS_BOT_DELAY_MS")
        && !delay.is_empty()
    {
        cfg.bot_delay_ms = delay
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bot delay".into()))?;
        sources.bot_delay_ms = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    player_name: Option<String>,
    #[serde(default)]
    ai: Option<String>,
    #[serde(default)]
    bot_delay_ms: Option<u64>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.player_name.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player_name must not be empty".into(),
        ));
    }
    if !AI_TYPES.contains(&cfg.ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of: {})",
            cfg.ai,
            AI_TYPES.join(", ")
        )));
    }
    Ok(())
}
