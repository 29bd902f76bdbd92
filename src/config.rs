use crate::player::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "marubatsu_config.json";
pub const CONFIG_PATH_ENV: &str = "MARUBATSU_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub version: String,
    /// 起動時に選択されている難易度
    pub difficulty: Difficulty,
    /// コンピュータが指すまでの演出用ウェイト (ミリ秒)
    pub think_delay_ms: u64,
    /// minimax が先手のとき初手をランダムにするか
    pub random_opening: bool,
}

impl GameConfig {
    pub fn path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Self::path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            version: "1.0".to_string(),
            difficulty: Difficulty::Minimax,
            think_delay_ms: 400,
            random_opening: true,
        }
    }
}
