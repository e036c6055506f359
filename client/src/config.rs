use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::GameSettings;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer>;

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path: &Path) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    #[serde(default)]
    pub game: GameSettings,
    #[serde(default)]
    pub show_scores: bool,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be blank".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};
    use tictactoe_common::games::tictactoe::{FirstPlayerMode, MatchMode};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = ClientConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: ClientConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let config = ClientConfig {
            game: GameSettings {
                match_mode: MatchMode::HumanVsComputer,
                first_player: FirstPlayerMode::Random,
            },
            show_scores: true,
            log_prefix: Some("Client".to_string()),
        };
        let file_path = get_temp_file_path();

        let manager = get_config_manager(&file_path);
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(&file_path);
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_hand_written_yaml_is_accepted() {
        let content = "game:\n  match_mode: computer_vs_computer\n  first_player: random\n";
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(&file_path)
            .set_config_content(content)
            .unwrap();

        let config = get_config_manager(&file_path).get_config().unwrap();
        assert_eq!(config.game.match_mode, MatchMode::ComputerVsComputer);
        assert!(!config.show_scores);
        assert_eq!(config.log_prefix, None);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let content = "game:\n  match_mode: human_vs_human\n  first_player: computer\n";
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(&file_path)
            .set_config_content(content)
            .unwrap();

        assert!(get_config_manager(&file_path).get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_config_file_returns_default() {
        let manager = get_config_manager(&get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), ClientConfig::default());
    }
}
