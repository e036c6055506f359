use serde::{Deserialize, Serialize};

use crate::config::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    HumanVsComputer,
    HumanVsHuman,
    ComputerVsComputer,
}

/// Who plays X, and therefore moves first, in a human vs computer match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Computer,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSettings {
    pub match_mode: MatchMode,
    pub first_player: FirstPlayerMode,
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        match (self.match_mode, self.first_player) {
            (MatchMode::HumanVsHuman, FirstPlayerMode::Computer) => {
                Err("first_player cannot be computer in a human vs human match".to_string())
            }
            (MatchMode::ComputerVsComputer, FirstPlayerMode::Human) => {
                Err("first_player cannot be human in a computer vs computer match".to_string())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_first_player_must_exist_in_match() {
        let settings = GameSettings {
            match_mode: MatchMode::HumanVsHuman,
            first_player: FirstPlayerMode::Computer,
        };
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            match_mode: MatchMode::ComputerVsComputer,
            first_player: FirstPlayerMode::Human,
        };
        assert!(settings.validate().is_err());

        let settings = GameSettings {
            match_mode: MatchMode::ComputerVsComputer,
            first_player: FirstPlayerMode::Random,
        };
        assert!(settings.validate().is_ok());
    }
}
