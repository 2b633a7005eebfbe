use std::path::{Path, PathBuf};

use grid_snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use grid_snake_common::defaults::DEFAULT_TICK_INTERVAL;
use grid_snake_common::games::snake::SnakeSessionSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "grid_snake_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub autopilot: bool,
    #[serde(default)]
    pub use_log_prefix: bool,
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

fn default_clear_screen() -> bool {
    true
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            autopilot: false,
            use_log_prefix: false,
            clear_screen: default_clear_screen(),
        }
    }
}

impl GameConfig {
    /// The board always ticks at [`DEFAULT_TICK_INTERVAL`].
    pub fn session_settings(&self) -> SnakeSessionSettings {
        SnakeSessionSettings {
            tick_interval: DEFAULT_TICK_INTERVAL,
            seed: self.seed,
        }
    }
}
