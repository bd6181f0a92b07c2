use std::path::{Path, PathBuf};

use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    games::hangman::{options, GameOptions, GameOptionsBuilder, Scoring},
    utils::UserId,
};

const DEFAULT_PATH: &str = "./hangbot.toml";
const ENV_PATH: &str = "HANGBOT_TOML";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("couldn't load config: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("couldn't write config as toml: {0}")]
    Toml(#[from] toml::ser::Error),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub logs: LogsConfig,
    pub names: Vec<NameConfig>,
}

impl Config {
    /// Reads `path`, else `$HANGBOT_TOML`, else `./hangbot.toml`, then applies
    /// `HANGBOT_*` environment overrides like `HANGBOT_GAME__SCORE_PER_WORD=20`.
    ///
    /// A missing file just means every setting keeps its default.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(ENV_PATH).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));

        let file = ::config::File::new(&path.to_string_lossy(), ::config::FileFormat::Toml)
            .required(false);

        Self::from_builder(::config::Config::builder().add_source(file))
    }

    fn from_builder(
        builder: ::config::ConfigBuilder<::config::builder::DefaultState>,
    ) -> Result<Self, Error> {
        let environment = ::config::Environment::with_prefix("HANGBOT")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);

        let config = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Defaults for new games. `/start 2 50` can still override the scoring per game.
#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct GameConfig {
    pub score_per_letter: u32,
    pub score_per_word: u32,
    pub min_word_length: usize,
    pub history_limit: usize,
}

impl GameConfig {
    pub fn options(&self) -> GameOptions {
        if self.min_word_length == 0 {
            warn!("game.min_word_length is 0, empty words will be accepted");
        }

        GameOptionsBuilder::default()
            .scoring(Scoring::new(self.score_per_letter, self.score_per_word))
            .min_word_length(self.min_word_length)
            .history_limit(self.history_limit)
            .build()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_per_letter: options::DEFAULT_SCORE_PER_LETTER,
            score_per_word: options::DEFAULT_SCORE_PER_WORD,
            min_word_length: options::DEFAULT_MIN_WORD_LENGTH,
            history_limit: options::DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LogsConfig {
    filter: Option<String>,
    flavor_texts: Vec<String>,
}

impl LogsConfig {
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn flavor_text(&self) -> Option<&str> {
        let flavor_text = self
            .flavor_texts
            .iter()
            .choose(&mut rand::thread_rng())
            .map(String::as_str);

        if flavor_text.is_none() {
            warn!("no flavor texts provided in config :(");
        }

        flavor_text
    }
}

/// Display name to use for a user when nothing better is available.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NameConfig {
    pub id: UserId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::games::hangman::Scoring;
    use pretty_assertions::assert_eq;

    fn parse(toml: &str) -> Config {
        let builder = ::config::Config::builder()
            .add_source(::config::File::from_str(toml, ::config::FileFormat::Toml));

        Config::from_builder(builder).expect("test config should load")
    }

    #[test]
    fn empty_is_default() {
        let config = parse("");
        let options = config.game.options();

        assert_eq!(options.scoring, Scoring::new(1, 10));
        assert_eq!(options.min_word_length, 5);
        assert_eq!(options.history_limit, 20);
        assert!(config.names.is_empty());
    }

    #[test]
    fn full_file() {
        let config = parse(
            r#"
            [game]
            score_per_letter = 2
            score_per_word = 50

            [logs]
            filter = "hangbot=trace"
            flavor_texts = ["hang in there"]

            [[names]]
            id = "U1a2B3"
            name = "Alice"
            "#,
        );

        assert_eq!(config.game.options().scoring, Scoring::new(2, 50));
        assert_eq!(config.game.min_word_length, 5);
        assert_eq!(config.logs.filter(), Some("hangbot=trace"));
        assert_eq!(config.logs.flavor_text(), Some("hang in there"));
        assert_eq!(config.names[0].id.as_str(), "U1a2B3");
        assert_eq!(config.names[0].name, "Alice");
    }

    #[test]
    fn round_trips_through_toml() {
        let config = parse("[game]\nhistory_limit = 5");
        let toml = config.to_toml().expect("config should serialize");

        assert!(toml.contains("history_limit = 5"));
        assert_eq!(parse(&toml).game.history_limit, 5);
    }
}
