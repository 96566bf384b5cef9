use color_eyre::eyre::{eyre, Result, WrapErr};
use scout_core::board::BoardPersonality;
use scout_core::scout::CareerTier;
use serde::{Deserialize, Serialize};
use std::{env, fs};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub seed: u64,
    pub seasons: u32,
    pub clubs: u32,
    pub squad_size: u32,
    pub reports_per_week: u32,
    pub board: String,
    pub scout_name: String,
    pub starting_tier: CareerTier,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            seed: 2024,
            seasons: 3,
            clubs: 10,
            squad_size: 18,
            reports_per_week: 2,
            board: BoardPersonality::Patient.name().to_string(),
            scout_name: "Alex Morgan".to_string(),
            starting_tier: CareerTier::HeadOfRecruitment,
        }
    }
}

impl SimulationConfig {
    /// Defaults, overlaid by the JSON file named in `SCOUT_CONFIG`, overlaid by
    /// `SCOUT_SEED`, `SCOUT_SEASONS` and `SCOUT_BOARD`.
    pub fn load() -> Result<Self> {
        let mut config = match env::var("SCOUT_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => SimulationConfig::default(),
        };

        if let Ok(seed) = env::var("SCOUT_SEED") {
            config.seed = seed.parse().wrap_err("SCOUT_SEED must be an unsigned integer")?;
        }

        if let Ok(seasons) = env::var("SCOUT_SEASONS") {
            config.seasons = seasons.parse().wrap_err("SCOUT_SEASONS must be an unsigned integer")?;
        }

        if let Ok(board) = env::var("SCOUT_BOARD") {
            config.board = board;
        }

        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(path).wrap_err_with(|| format!("cannot read config file {path}"))?;
        Self::from_json(&raw).wrap_err_with(|| format!("invalid config file {path}"))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(raw)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.clubs < 2 {
            return Err(eyre!("need at least two clubs for transfers, got {}", self.clubs));
        }
        if self.squad_size == 0 {
            return Err(eyre!("squad_size must be positive"));
        }
        self.board_personality()?;
        Ok(())
    }

    pub fn board_personality(&self) -> Result<BoardPersonality> {
        let wanted = self.board.trim().to_lowercase();
        BoardPersonality::ALL
            .into_iter()
            .find(|p| p.name() == wanted || p.name().replace('-', "_") == wanted)
            .ok_or_else(|| eyre!("unknown board personality '{}'", self.board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimulationConfig::from_json(r#"{ "seed": 7, "board": "penny_pinching" }"#).expect("config");

        assert_eq!(config.seed, 7);
        assert_eq!(config.seasons, 3);
        assert_eq!(config.board_personality().expect("board"), BoardPersonality::PennyPinching);
    }

    #[test]
    fn test_unknown_board_is_rejected() {
        let config = SimulationConfig {
            board: "benevolent".to_string(),
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_single_club_is_rejected() {
        let config = SimulationConfig {
            clubs: 1,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
