//! Engine configuration.
//!
//! Every field has a default, so a JSON file only needs the keys it changes.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::{ChessError, ChessResult};
use crate::search::alpha_beta::SearchConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub depth: u8,
    pub pruning: bool,
    pub order_moves: bool,
    /// Probability of a uniformly random move while exploring.
    pub epsilon: f64,
    /// Games after which epsilon has halved.
    pub epsilon_decay_games: u32,
    pub max_plies: u32,
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            pruning: true,
            order_moves: false,
            epsilon: 0.75,
            epsilon_decay_games: 200,
            max_plies: 300,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> ChessResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ChessError::Config(format!("invalid JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> ChessResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ChessError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Missing file falls back to defaults; a present but invalid file is
    /// still an error.
    pub fn load_or_default(path: Option<&Path>) -> ChessResult<Self> {
        match path {
            Some(path) if path.exists() => Self::from_json_file(path),
            Some(path) => {
                warn!("config {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> ChessResult<()> {
        if self.depth == 0 {
            return Err(ChessError::Config("depth must be at least 1".to_owned()));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ChessError::Config(format!(
                "epsilon must be in [0, 1], got {}",
                self.epsilon
            )));
        }
        if self.epsilon_decay_games == 0 {
            return Err(ChessError::Config(
                "epsilon_decay_games must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.depth,
            pruning: self.pruning,
            order_moves: self.order_moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::EngineConfig;
    use crate::errors::ChessError;
    use crate::search::alpha_beta::SearchConfig;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "depth": 2, "seed": 7 }"#).expect("config should parse");
        assert_eq!(
            config,
            EngineConfig {
                depth: 2,
                seed: Some(7),
                ..EngineConfig::default()
            }
        );
        assert_eq!(
            config.search_config(),
            SearchConfig {
                depth: 2,
                pruning: true,
                order_moves: false,
            }
        );
    }

    #[test]
    fn invalid_values_are_config_errors() {
        for json in [r#"{ "depth": 0 }"#, r#"{ "epsilon": 1.5 }"#, r#"{ "epsilon_decay_games": 0 }"#, "not json"] {
            assert!(
                matches!(EngineConfig::from_json_str(json), Err(ChessError::Config(_))),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::path::Path::new("/nonexistent/deep_carlsen.json");
        assert_eq!(
            EngineConfig::load_or_default(Some(path)).expect("defaults"),
            EngineConfig::default()
        );
        assert!(matches!(
            EngineConfig::from_json_file(path),
            Err(ChessError::Config(_))
        ));
    }
}
