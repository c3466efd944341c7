use serde::{Deserialize, Serialize};

use crate::*;

/// Session-wide settings, one section per game.
///
/// ```toml
/// seed = 42
///
/// [minesweeper]
/// rows = 16
/// cols = 30
/// mines = 99
///
/// [crazy_eights]
/// players = 3
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// Makes every game deterministic when set.
    pub seed: Option<u64>,
    pub mastermind: MastermindConfig,
    pub minesweeper: MinesweeperConfig,
    pub crazy_eights: CrazyEightsConfig,
}

impl ArcadeConfig {
    pub fn from_toml(source: &str) -> core::result::Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.mastermind.validate()?;
        self.minesweeper.validate()?;
        self.crazy_eights.validate()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ArcadeConfig::from_toml("").unwrap(), ArcadeConfig::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = ArcadeConfig::from_toml(
            "seed = 5\n[minesweeper]\nmines = 20\n[crazy_eights]\nplayers = 3\n",
        )
        .unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.minesweeper.mines, 20);
        assert_eq!(config.minesweeper.rows, 9);
        assert_eq!(config.crazy_eights.players, 3);
        assert!(config.crazy_eights.auto_opponents);
        assert_eq!(config.mastermind, MastermindConfig::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            ArcadeConfig::from_toml("[minesweeper]\nrows = 2\ncols = 2\nmines = 4\n"),
            Err(ConfigError::Game(GameError::TooManyMines))
        ));
        assert!(matches!(
            ArcadeConfig::from_toml("[mastermind]\nmax_range = 10\n"),
            Err(ConfigError::Game(GameError::InvalidConfig(_)))
        ));
        assert!(matches!(
            ArcadeConfig::from_toml("seed = \"abc\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
