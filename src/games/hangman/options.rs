use std::num::ParseIntError;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_SCORE_PER_LETTER: u32 = 1;
pub const DEFAULT_SCORE_PER_WORD: u32 = 10;
pub const DEFAULT_MIN_WORD_LENGTH: usize = 5;
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("expected a score per letter and a score per word")]
    Missing,
    #[error("invalid score `{0}`: {1}")]
    Invalid(String, ParseIntError),
}

/// Points awarded for guesses. Fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    pub per_letter: u32,
    pub per_word: u32,
}

impl Scoring {
    pub const fn new(per_letter: u32, per_word: u32) -> Self {
        Self {
            per_letter,
            per_word,
        }
    }

    /// Reads `"<per letter> <per word>"`. Anything after the second number is ignored.
    pub fn parse(args: &str) -> Result<Self, ScoringError> {
        let mut numbers = args.split_whitespace().map(|arg| {
            arg.parse::<u32>()
                .map_err(|err| ScoringError::Invalid(arg.to_owned(), err))
        });

        match (numbers.next(), numbers.next()) {
            (Some(per_letter), Some(per_word)) => Ok(Self::new(per_letter?, per_word?)),
            _ => Err(ScoringError::Missing),
        }
    }

    /// Like [`Scoring::parse`], but anything unusable means `default`.
    pub fn parse_or(args: &str, default: Self) -> Self {
        if args.trim().is_empty() {
            return default;
        }

        Self::parse(args).unwrap_or_else(|err| {
            debug!(args, %err, "custom scoring rejected, using defaults");
            default
        })
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_PER_LETTER, DEFAULT_SCORE_PER_WORD)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameOptions {
    pub scoring: Scoring,
    pub min_word_length: usize,
    pub history_limit: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            scoring: Scoring::default(),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct GameOptionsBuilder {
    scoring: Option<Scoring>,
    min_word_length: Option<usize>,
    history_limit: Option<usize>,
}

impl GameOptionsBuilder {
    pub fn scoring(mut self, scoring: impl Into<Option<Scoring>>) -> Self {
        self.scoring = scoring.into();
        self
    }

    pub fn min_word_length(mut self, length: impl Into<Option<usize>>) -> Self {
        self.min_word_length = length.into();
        self
    }

    pub fn history_limit(mut self, limit: impl Into<Option<usize>>) -> Self {
        self.history_limit = limit.into();
        self
    }

    pub fn build(self) -> GameOptions {
        let default = GameOptions::default();

        GameOptions {
            scoring: self.scoring.unwrap_or(default.scoring),
            min_word_length: self.min_word_length.unwrap_or(default.min_word_length),
            history_limit: self.history_limit.unwrap_or(default.history_limit),
        }
    }
}

impl From<GameOptions> for GameOptionsBuilder {
    fn from(options: GameOptions) -> Self {
        Self {
            scoring: Some(options.scoring),
            min_word_length: Some(options.min_word_length),
            history_limit: Some(options.history_limit),
        }
    }
}
