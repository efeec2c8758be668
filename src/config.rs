use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub output: OutputMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub lexicon_path: String,
    /// Fixed seed for reproducible boards; `None` draws from the OS
    pub seed: Option<u64>,
    pub shuffle_on_start: bool,
    pub shuffle_on_reset: bool,
}

/// How the terminal surface talks to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable board, `ROW COL` input
    Text,
    /// One JSON object per line in both directions
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let game = GameConfig {
            lexicon_path: var("BOGGLE_LEXICON_PATH")
                .unwrap_or_else(|| "./bogwords.txt".to_string()),
            seed: var("BOGGLE_SEED")
                .map(|seed| seed.trim().parse())
                .transpose()
                .context("BOGGLE_SEED must be a non-negative number")?,
            shuffle_on_start: parse_flag(var("BOGGLE_SHUFFLE_ON_START"), true)
                .context("BOGGLE_SHUFFLE_ON_START must be true or false")?,
            shuffle_on_reset: parse_flag(var("BOGGLE_SHUFFLE_ON_RESET"), true)
                .context("BOGGLE_SHUFFLE_ON_RESET must be true or false")?,
        };

        let output = match var("BOGGLE_OUTPUT").as_deref().map(str::trim) {
            None | Some("text") => OutputMode::Text,
            Some("json") => OutputMode::Json,
            Some(other) => bail!("BOGGLE_OUTPUT must be text or json, got {:?}", other),
        };

        Ok(Config { game, output })
    }
}

fn parse_flag(value: Option<String>, default: bool) -> Result<bool> {
    match value {
        None => Ok(default),
        Some(value) => match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => bail!("invalid flag value {:?}", other),
        },
    }
}
