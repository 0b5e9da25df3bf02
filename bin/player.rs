use derive_more::{Display, Error, From};
use lib::bot::{Heuristic, Random};
use lib::checkers::Policy;
use ron::extensions::Extensions;
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// The reason why parsing player configuration failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse player configuration")]
pub struct ParsePlayerConfigError(ron::de::SpannedError);

/// Runtime configuration for a bot [`Policy`].
///
/// Bots without a seed are seeded by system entropy.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum PlayerConfig {
    Heuristic {
        #[serde(default)]
        seed: Option<u64>,
    },

    Random {
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig::Heuristic { seed: None }
    }
}

impl fmt::Display for PlayerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, seed) = match self {
            PlayerConfig::Heuristic { seed } => ("heuristic", seed),
            PlayerConfig::Random { seed } => ("random", seed),
        };

        match seed {
            None => write!(f, "{}()", name),
            Some(s) => write!(f, "{}(seed: {})", name, s),
        }
    }
}

impl FromStr for PlayerConfig {
    type Err = ParsePlayerConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(s)?)
    }
}

impl From<PlayerConfig> for Policy {
    fn from(config: PlayerConfig) -> Self {
        match config {
            PlayerConfig::Heuristic { seed: None } => Heuristic::default().into(),
            PlayerConfig::Heuristic { seed: Some(s) } => Heuristic::seeded(s).into(),
            PlayerConfig::Random { seed: None } => Random::default().into(),
            PlayerConfig::Random { seed: Some(s) } => Random::seeded(s).into(),
        }
    }
}
